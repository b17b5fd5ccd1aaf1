//! # HeapQueue
//! An array-backed max-heap priority queue with explicit capacity management.
//!
//! ## Internal Representation
//! A [`PQueue`] owns a single contiguous buffer of [`Entry`] values (a
//! `(value, priority)` pair). The buffer is addressed as an implicit complete
//! binary tree: for index `i`, the parent lives at `(i - 1) / 2` and the
//! children at `2i + 1` and `2i + 2`. Every parent's priority is at least as
//! large as its children's, so the maximum-priority entry is always at index
//! `0`.
//!
//! ```text
//! indices:    0   1   2   3   4   5
//! priorities [ 9 | 7 | 8 | 3 | 5 | 8 ]
//!
//!             9
//!            / \
//!           7   8
//!          / \ /
//!         3  5 8
//! ```
//!
//! ## Capacity Policy
//! Unlike [`std::collections::BinaryHeap`], a `PQueue` tracks a *logical*
//! capacity and manages it explicitly:
//!
//! * Pushing into a full queue doubles the capacity.
//! * Popping down to below one third of capacity halves it, never dropping
//!   below the number of live entries nor below
//!   [`DEFAULT_CAPACITY`](PQueue::DEFAULT_CAPACITY).
//!
//! Capacity changes are atomic: either the whole buffer is carried over into
//! the resized allocation, or (for [`PQueue::try_push`]) the queue is left
//! untouched and the allocation error is returned.
//!
//! ## Empty-Queue Policy
//! [`front`](PQueue::front) and [`pop`](PQueue::pop) on an empty queue return
//! [`None`]. There is no panicking variant and no silent default value; the
//! same policy applies uniformly across the API.
//!
//! ## Example
//! ```
//! # use heap_queue::PQueue;
//! # use assert2::assert;
//! let mut q = PQueue::new();
//! q.push("compile", 3);
//! q.push("lint", 1);
//! q.push("ship", 5);
//!
//! assert!(q.front() == Some(&"ship"));
//! let top = q.pop().unwrap();
//! assert!(top.into_parts() == ("ship", 5));
//! assert!(q.front() == Some(&"compile"));
//! ```

mod heap;

pub use crate::heap::*;

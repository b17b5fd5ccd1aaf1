use std::collections::TryReserveError;

use tracing::trace;

mod dump;
mod trait_impls;

#[cfg(test)]
mod tests;

pub use trait_impls::IntoIter;

/// A `(value, priority)` pair stored in a [`PQueue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T, P> {
    value: T,
    priority: P,
}

impl<T, P> Entry<T, P> {
    pub fn new(value: T, priority: P) -> Self {
        Self { value, priority }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn priority(&self) -> &P {
        &self.priority
    }

    /// Consumes the entry, returning its value and priority.
    pub fn into_parts(self) -> (T, P) {
        (self.value, self.priority)
    }
}

/// An array-backed max-heap priority queue.
///
/// Entries are `(value, priority)` pairs; [`pop`](PQueue::pop) always removes
/// an entry whose priority is greatest among those currently stored. Ties
/// between equal priorities are broken arbitrarily (the heap is not stable).
///
/// See the [crate docs](crate) for the internal representation and the
/// capacity and empty-queue policies.
///
/// # Example
///
/// ```
/// # use heap_queue::PQueue;
/// # use assert2::assert;
/// let mut triage = PQueue::with_capacity(16);
/// triage.push("sprained ankle", 2);
/// triage.push("cardiac arrest", 9);
/// triage.push("paper cut", 1);
///
/// assert!(triage.front() == Some(&"cardiac arrest"));
/// ```
pub struct PQueue<T, P: Ord> {
    /// Live entries in heap order. `buf.len()` is the number of live entries;
    /// the buffer's allocation is kept at least `cap` slots large.
    buf: Vec<Entry<T, P>>,
    /// Logical capacity. Invariant: `buf.len() <= cap` and
    /// `cap >= Self::DEFAULT_CAPACITY`.
    cap: usize,
}

impl<T, P: Ord> PQueue<T, P> {
    /// The minimum logical capacity. Construction, growth, and shrinkage all
    /// clamp to this floor.
    pub const DEFAULT_CAPACITY: usize = 8;

    /// Creates an empty `PQueue` with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
    /// slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty `PQueue` with at least `capacity` slots.
    ///
    /// A `capacity` below [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
    /// (including zero) is rounded up to the default.
    ///
    /// ```
    /// # use heap_queue::PQueue;
    /// # use assert2::assert;
    /// let q: PQueue<String, u32> = PQueue::with_capacity(100);
    /// assert!(q.capacity() == 100);
    ///
    /// let q: PQueue<String, u32> = PQueue::with_capacity(0);
    /// assert!(q.capacity() == PQueue::<String, u32>::DEFAULT_CAPACITY);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = capacity.max(Self::DEFAULT_CAPACITY);
        Self {
            buf: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the logical capacity: the number of slots the queue will fill
    /// before growing its buffer.
    ///
    /// The underlying allocation is always at least this large, though the
    /// allocator may round it up further.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns a reference to the value of the maximum-priority entry, or
    /// [`None`] if the queue is empty.
    ///
    /// ```
    /// # use heap_queue::PQueue;
    /// # use assert2::assert;
    /// let mut q = PQueue::new();
    /// assert!(q.front() == None);
    ///
    /// q.push('a', 3);
    /// q.push('b', 7);
    /// assert!(q.front() == Some(&'b'));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.buf.first().map(Entry::value)
    }

    /// Like [`front`](Self::front), but exposes the priority as well.
    pub fn front_entry(&self) -> Option<&Entry<T, P>> {
        self.buf.first()
    }

    /// Visits all live entries in buffer (heap) order. No ordering is
    /// guaranteed beyond the heap arrangement itself.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T, P>> {
        self.buf.iter()
    }

    /// Inserts `value` with the given `priority`, growing the buffer first if
    /// the queue is full.
    ///
    /// An entry whose priority *equals* its parent's does not displace the
    /// parent, so among equal priorities the earlier entry stays closer to
    /// the root (but no total ordering among ties is promised).
    ///
    /// ```
    /// # use heap_queue::PQueue;
    /// # use assert2::assert;
    /// let mut q = PQueue::new();
    /// q.push("low", 1);
    /// q.push("high", 10);
    /// assert!(q.len() == 2);
    /// assert!(q.front() == Some(&"high"));
    /// ```
    pub fn push(&mut self, value: T, priority: P) {
        if self.buf.len() == self.cap {
            self.grow();
        }
        self.buf.push(Entry::new(value, priority));
        self.sift_up(self.buf.len() - 1);
    }

    /// Fallible version of [`push`](Self::push): if growing the buffer fails,
    /// the allocation error is returned and the queue is left exactly as it
    /// was, entry not inserted.
    pub fn try_push(&mut self, value: T, priority: P) -> Result<(), TryReserveError> {
        if self.buf.len() == self.cap {
            self.try_grow()?;
        }
        self.buf.push(Entry::new(value, priority));
        self.sift_up(self.buf.len() - 1);
        Ok(())
    }

    /// Removes and returns the maximum-priority entry, or [`None`] if the
    /// queue is empty.
    ///
    /// If removal leaves fewer than a third of the capacity occupied, the
    /// buffer shrinks to half its capacity (clamped as described in the
    /// [crate docs](crate)).
    ///
    /// ```
    /// # use heap_queue::PQueue;
    /// # use assert2::assert;
    /// let mut q = PQueue::new();
    /// q.push("walk dog", 4);
    /// q.push("file taxes", 8);
    ///
    /// let top = q.pop().unwrap();
    /// assert!(top.value() == &"file taxes");
    /// assert!(top.priority() == &8);
    ///
    /// q.pop().unwrap();
    /// assert!(q.pop() == None);
    /// ```
    pub fn pop(&mut self) -> Option<Entry<T, P>> {
        let last = self.buf.len().checked_sub(1)?;
        self.buf.swap(0, last);
        let entry = self
            .buf
            .pop()
            .expect("non-empty: checked_sub guard above succeeded");
        if !self.buf.is_empty() {
            self.sift_down(0);
        }
        self.maybe_shrink();
        Some(entry)
    }

    /// Removes all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Drains the queue into a `Vec` ordered by non-increasing priority.
    ///
    /// ```
    /// # use heap_queue::PQueue;
    /// # use assert2::assert;
    /// let q = PQueue::from_iter([('x', 1), ('y', 3), ('z', 2)]);
    /// let prios: Vec<u32> = q
    ///     .into_sorted_vec()
    ///     .into_iter()
    ///     .map(|e| *e.priority())
    ///     .collect();
    /// assert!(prios == [3, 2, 1]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<Entry<T, P>> {
        let mut sorted = Vec::with_capacity(self.buf.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    /// Restores the heap property after appending at `i` by swapping the
    /// entry toward the root while its priority strictly exceeds its
    /// parent's.
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.buf[i].priority > self.buf[parent].priority {
                self.buf.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Restores the heap property from `i` downward by swapping the entry
    /// with its bigger child while that child's priority strictly exceeds
    /// it. On a left/right priority tie the left child is taken.
    fn sift_down(&mut self, mut i: usize) {
        debug_assert!(i < self.buf.len());
        let used = self.buf.len();
        loop {
            let left = 2 * i + 1;
            if left >= used {
                break;
            }
            let right = left + 1;
            let big = if right < used && self.buf[right].priority > self.buf[left].priority {
                right
            } else {
                left
            };
            if self.buf[big].priority > self.buf[i].priority {
                self.buf.swap(i, big);
                i = big;
            } else {
                break;
            }
        }
    }

    /// Doubles the logical capacity. Aborts the process on allocation
    /// failure, per std's convention.
    fn grow(&mut self) {
        let new_cap = self.cap * 2;
        self.buf.reserve_exact(new_cap - self.buf.len());
        trace!(old = self.cap, new = new_cap, "grew heap buffer");
        self.cap = new_cap;
    }

    /// Doubles the logical capacity, reporting allocation failure instead of
    /// aborting. On error the buffer and capacity are untouched.
    fn try_grow(&mut self) -> Result<(), TryReserveError> {
        let new_cap = self.cap * 2;
        self.buf.try_reserve_exact(new_cap - self.buf.len())?;
        trace!(old = self.cap, new = new_cap, "grew heap buffer");
        self.cap = new_cap;
        Ok(())
    }

    /// Halves the logical capacity once occupancy drops below one third,
    /// clamped to no less than the live entry count and no less than
    /// [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY).
    fn maybe_shrink(&mut self) {
        let used = self.buf.len();
        if 3 * used >= self.cap {
            return;
        }
        let new_cap = (self.cap / 2).max(used).max(Self::DEFAULT_CAPACITY);
        if new_cap < self.cap {
            self.buf.shrink_to(new_cap);
            trace!(old = self.cap, new = new_cap, "shrank heap buffer");
            self.cap = new_cap;
        }
    }
}

use super::*;
use assert2::{assert, check, let_assert};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn heap_property_holds<T, P: Ord>(q: &PQueue<T, P>) -> bool {
    (1..q.buf.len()).all(|i| q.buf[(i - 1) / 2].priority >= q.buf[i].priority)
}

fn priorities<T, P: Ord + Copy>(q: &PQueue<T, P>) -> Vec<P> {
    q.iter().map(|e| *e.priority()).collect()
}

#[test]
fn new_queue_is_empty() {
    let q: PQueue<i32, i32> = PQueue::new();
    assert!(q.len() == 0);
    assert!(q.is_empty());
    assert!(q.capacity() == PQueue::<i32, i32>::DEFAULT_CAPACITY);
    assert!(q.front() == None);
}

#[test]
fn pop_on_empty_is_none() {
    let mut q: PQueue<i32, i32> = PQueue::new();
    assert!(q.pop() == None);
    // Still usable afterwards.
    q.push(1, 1);
    assert!(q.len() == 1);
}

#[test]
fn with_capacity_clamps_to_default() {
    let q: PQueue<i32, i32> = PQueue::with_capacity(3);
    assert!(q.capacity() == PQueue::<i32, i32>::DEFAULT_CAPACITY);

    let q: PQueue<i32, i32> = PQueue::with_capacity(100);
    assert!(q.capacity() == 100);
}

#[test]
fn max_extraction_order() {
    let mut q = PQueue::new();
    q.push("A", 3);
    q.push("B", 1);
    q.push("C", 5);
    q.push("D", 2);

    assert!(q.front() == Some(&"C"));
    let_assert!(Some(c) = q.pop());
    assert!(c.into_parts() == ("C", 5));

    assert!(q.front() == Some(&"A"));
    let_assert!(Some(a) = q.pop());
    assert!(a.into_parts() == ("A", 3));

    assert!(q.front() == Some(&"D"));
    let_assert!(Some(d) = q.pop());
    assert!(d.into_parts() == ("D", 2));

    assert!(q.front() == Some(&"B"));
    let_assert!(Some(b) = q.pop());
    assert!(b.into_parts() == ("B", 1));

    assert!(q.pop() == None);
}

#[test]
fn equal_priority_does_not_displace_parent() {
    let mut q = PQueue::new();
    q.push("first", 5);
    q.push("second", 5);

    // Strict sift-up: the tie stays below its parent.
    assert!(q.front() == Some(&"first"));
    assert!(heap_property_holds(&q));
}

#[test]
fn size_accounting() {
    let mut q = PQueue::new();
    for i in 0..50 {
        q.push(i, i % 7);
        assert!(q.len() == i as usize + 1);
    }
    for i in (0..50usize).rev() {
        let _ = q.pop();
        assert!(q.len() == i);
    }
}

#[test]
fn grows_by_doubling_when_full() {
    let mut q = PQueue::new();
    let initial = q.capacity();
    for i in 0..initial as i32 {
        q.push(i, i);
    }
    assert!(q.capacity() == initial);

    q.push(99, 99);
    assert!(q.capacity() == initial * 2);
    assert!(q.len() == initial + 1);
    assert!(heap_property_holds(&q));
}

#[test]
fn shrinks_when_sparse_but_never_below_floor() {
    let mut q = PQueue::with_capacity(64);
    for i in 0..10 {
        q.push(i, i);
    }

    // used = 9, 27 < 64: halve.
    let _ = q.pop();
    assert!(q.capacity() == 32);

    // used = 8, 24 < 32: halve again.
    let _ = q.pop();
    assert!(q.capacity() == 16);

    while q.pop().is_some() {}
    check!(q.is_empty());
    assert!(q.capacity() == PQueue::<i32, i32>::DEFAULT_CAPACITY);
}

#[test]
fn capacity_never_below_used() {
    let mut q = PQueue::with_capacity(64);
    for i in 0..40 {
        q.push(i, i);
    }
    while q.pop().is_some() {
        check!(q.capacity() >= q.len());
        check!(q.capacity() >= PQueue::<i32, i32>::DEFAULT_CAPACITY);
    }
}

#[test]
fn growth_preserves_extraction_order() {
    let mut q = PQueue::new();
    let n = 1000;
    for i in 0..n {
        // Deliberately adversarial insert order.
        q.push(i, (i * 7919) % n);
    }

    let mut last = n;
    let mut popped = 0;
    while let Some(entry) = q.pop() {
        let (_, prio) = entry.into_parts();
        check!(prio <= last, "priorities must come out non-increasing");
        last = prio;
        popped += 1;
    }
    assert!(popped == n);
}

#[test]
fn clone_is_independent() {
    let mut q1 = PQueue::new();
    q1.push("a", 1);
    q1.push("b", 2);

    let mut q2 = q1.clone();
    q2.push("c", 3);
    let _ = q2.pop();
    let _ = q2.pop();

    assert!(q1.len() == 2);
    assert!(q1.front() == Some(&"b"));
    assert!(q2.len() == 1);

    let _ = q1.pop();
    assert!(q2.len() == 1);
    assert!(q2.front() == Some(&"a"));
}

#[test]
fn clone_preserves_capacity() {
    let q1: PQueue<i32, i32> = PQueue::with_capacity(100);
    let q2 = q1.clone();
    assert!(q2.capacity() == 100);
}

#[test]
fn clone_from_adopts_source() {
    let mut dst = PQueue::with_capacity(100);
    dst.push("stale", 9);

    let mut src = PQueue::new();
    src.push("x", 1);
    src.push("y", 4);

    dst.clone_from(&src);
    assert!(dst.len() == 2);
    assert!(dst.capacity() == src.capacity());
    assert!(dst.front() == Some(&"y"));

    // Independence survives assignment too.
    let _ = dst.pop();
    assert!(src.len() == 2);
}

#[test]
fn try_push_ok_matches_push() {
    let mut q = PQueue::new();
    for i in 0..20 {
        let_assert!(Ok(()) = q.try_push(i, i));
    }
    assert!(q.len() == 20);
    assert!(q.front() == Some(&19));
    assert!(heap_property_holds(&q));
}

#[test]
fn clear_keeps_capacity() {
    let mut q = PQueue::new();
    for i in 0..20 {
        q.push(i, i);
    }
    let cap = q.capacity();
    q.clear();
    assert!(q.is_empty());
    assert!(q.capacity() == cap);
    assert!(q.front() == None);
}

#[test]
fn into_sorted_vec_is_non_increasing() {
    let q = PQueue::from_iter([(10, 2), (20, 8), (30, 5), (40, 8)]);
    let prios: Vec<i32> = q
        .into_sorted_vec()
        .into_iter()
        .map(|e| *e.priority())
        .collect();
    assert!(prios == [8, 8, 5, 2]);
}

#[test]
fn draining_iterator_is_exact_size() {
    let q = PQueue::from_iter([('a', 1), ('b', 2), ('c', 3)]);
    let mut it = q.into_iter();
    assert!(it.len() == 3);
    let _ = it.next();
    assert!(it.len() == 2);
    assert!(it.next().is_some());
    assert!(it.next().is_some());
    assert!(it.next() == None);
    assert!(it.next() == None);
}

#[test]
fn tree_dump_renders_sideways() {
    let mut q = PQueue::new();
    q.push("A", 3);
    q.push("B", 1);
    q.push("C", 5);
    q.push("D", 2);
    // Heap layout: [C(5), D(2), A(3), B(1)]
    assert!(priorities(&q) == [5, 2, 3, 1]);

    let expected = "\
the tree:
   A(3)
C(5)
   D(2)
      B(1)
";
    assert!(q.tree_dump("the tree:", 0) == expected);

    // Subtree dump keeps absolute indentation.
    assert!(q.tree_dump("", 1) == "   D(2)\n      B(1)\n");

    // Out-of-range root.
    assert!(q.tree_dump("", 4) == "(EMPTY)\n");
}

#[test]
fn array_dump_renders_buffer_order() {
    let mut q: PQueue<char, u32> = PQueue::new();
    assert!(q.array_dump("") == "(EMPTY)\n");
    assert!(q.array_dump("note:") == "note:\n(EMPTY)\n");

    q.push('a', 3);
    q.push('c', 5);
    assert!(q.array_dump("") == "c(5) a(3)\n");
}

#[test_log::test]
fn randomized_push_pop_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut q: PQueue<u32, u32> = PQueue::new();
    let mut model: Vec<u32> = Vec::new();

    for step in 0..2000u32 {
        if model.is_empty() || rng.gen_bool(0.6) {
            let prio = rng.gen_range(0..1000);
            q.push(step, prio);
            model.push(prio);
        } else {
            let_assert!(Some(entry) = q.pop());
            let (_, prio) = entry.into_parts();
            let max = *model.iter().max().expect("model is non-empty here");
            check!(prio == max, "pop must return a maximum-priority entry");
            let pos = model
                .iter()
                .position(|&p| p == prio)
                .expect("popped priority must be in the model");
            model.swap_remove(pos);
        }

        check!(q.len() == model.len());
        check!(heap_property_holds(&q), "heap property broken at step {step}");
        check!(q.capacity() >= q.len());
        check!(q.capacity() >= PQueue::<u32, u32>::DEFAULT_CAPACITY);
    }
}

use std::{fmt, iter::FusedIterator};

use super::{Entry, PQueue};

impl<T, P> Clone for PQueue<T, P>
where
    T: Clone,
    P: Ord + Clone,
{
    /// Deep copy: the clone gets its own buffer, sized to the source's
    /// capacity. Neither queue can observe mutations of the other.
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.cap);
        buf.extend(self.buf.iter().cloned());
        Self { buf, cap: self.cap }
    }

    /// Assignment form: reuses `self`'s allocation where possible and adopts
    /// `source`'s capacity. Entries already in `self` are dropped.
    fn clone_from(&mut self, source: &Self) {
        self.buf.clone_from(&source.buf);
        if self.buf.capacity() < source.cap {
            self.buf.reserve_exact(source.cap - self.buf.len());
        }
        self.cap = source.cap;
    }
}

impl<T, P: Ord> Default for PQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> fmt::Debug for PQueue<T, P>
where
    T: fmt::Debug,
    P: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T, P: Ord> Extend<(T, P)> for PQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.push(value, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PQueue<T, P> {
    /// ```
    /// # use heap_queue::PQueue;
    /// # use assert2::assert;
    /// let q: PQueue<&str, i32> = [("b", 1), ("a", 2)].into_iter().collect();
    /// assert!(q.front() == Some(&"a"));
    /// ```
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Draining iterator returned by [`PQueue::into_iter`], yielding entries in
/// non-increasing priority order.
pub struct IntoIter<T, P: Ord> {
    queue: PQueue<T, P>,
}

impl<T, P: Ord> Iterator for IntoIter<T, P> {
    type Item = Entry<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, P: Ord> ExactSizeIterator for IntoIter<T, P> {}

impl<T, P: Ord> FusedIterator for IntoIter<T, P> {}

impl<T, P: Ord> IntoIterator for PQueue<T, P> {
    type Item = Entry<T, P>;
    type IntoIter = IntoIter<T, P>;

    /// ```
    /// # use heap_queue::PQueue;
    /// # use assert2::assert;
    /// let q = PQueue::from_iter([('m', 2), ('n', 9), ('o', 4)]);
    /// let order: String = q.into_iter().map(|e| *e.value()).collect();
    /// assert!(order == "nom");
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T, P: Ord> IntoIterator for &'a PQueue<T, P> {
    type Item = &'a Entry<T, P>;
    type IntoIter = std::slice::Iter<'a, Entry<T, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

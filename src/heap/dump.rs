use std::fmt::{self, Write};

use super::PQueue;

/// Non-mutating debug renderings of the heap. Purely observational; nothing
/// here touches queue state.
impl<T, P> PQueue<T, P>
where
    T: fmt::Display,
    P: Ord + fmt::Display,
{
    /// Renders the subtree rooted at index `root` sideways: the right subtree
    /// appears above its parent and the left below, each node indented three
    /// columns per level of depth and written as `value(priority)`. Rotate
    /// the output a quarter turn clockwise to read it as a tree.
    ///
    /// A non-empty `label` becomes the first line. A `root` at or past the
    /// live entries renders as `(EMPTY)`. Pass `root = 0` for the whole tree.
    ///
    /// ```
    /// # use heap_queue::PQueue;
    /// # use assert2::assert;
    /// let mut q = PQueue::new();
    /// q.push('a', 3);
    /// q.push('c', 5);
    /// let dump = q.tree_dump("the tree:", 0);
    /// assert!(dump == "the tree:\nc(5)\n   a(3)\n");
    /// ```
    pub fn tree_dump(&self, label: &str, root: usize) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, label, root)
            .expect("infallible: writing to a String");
        out
    }

    /// Renders the live entries in buffer order on one line, space-separated
    /// `value(priority)` tokens. A non-empty `label` becomes the first line;
    /// an empty queue renders as `(EMPTY)`.
    pub fn array_dump(&self, label: &str) -> String {
        let mut out = String::new();
        self.write_array(&mut out, label)
            .expect("infallible: writing to a String");
        out
    }

    fn write_tree(&self, out: &mut String, label: &str, root: usize) -> fmt::Result {
        if !label.is_empty() {
            writeln!(out, "{label}")?;
        }
        if root >= self.buf.len() {
            writeln!(out, "(EMPTY)")?;
            return Ok(());
        }
        self.write_subtree(out, root)
    }

    fn write_subtree(&self, out: &mut String, i: usize) -> fmt::Result {
        // Depth is measured from the true root even when dumping a subtree,
        // so the indentation of a node is stable across calls.
        let depth = (i + 1).ilog2() as usize;
        let left = 2 * i + 1;
        let right = 2 * i + 2;

        if right < self.buf.len() {
            self.write_subtree(out, right)?;
        }
        let entry = &self.buf[i];
        writeln!(
            out,
            "{:indent$}{}({})",
            "",
            entry.value,
            entry.priority,
            indent = depth * 3
        )?;
        if left < self.buf.len() {
            self.write_subtree(out, left)?;
        }
        Ok(())
    }

    fn write_array(&self, out: &mut String, label: &str) -> fmt::Result {
        if !label.is_empty() {
            writeln!(out, "{label}")?;
        }
        if self.buf.is_empty() {
            writeln!(out, "(EMPTY)")?;
            return Ok(());
        }
        for (i, entry) in self.buf.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            write!(out, "{}({})", entry.value, entry.priority)?;
        }
        out.push('\n');
        Ok(())
    }
}

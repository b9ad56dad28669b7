//! A last-in, first-out stack of pending items. The iterator keeps the nodes it has yet to visit
//! here, and the tree uses it for its non-recursive walks.

use std::fmt;

/// A growable LIFO stack. `push` and `pop` are amortized `O(1)`.
pub(crate) struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter().rev()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the most recently pushed item, or `None` if the stack is empty.
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Looks at the most recently pushed item without removing it.
    pub(crate) fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

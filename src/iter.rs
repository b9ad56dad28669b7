//! In-order traversal over a [`Tree`] that produces one node per call without recursion.
//!
//! The iterator keeps the nodes it still owes the caller on a stack: the left spine below
//! whichever node it most recently produced, deepest on top. Popping the top yields the next
//! smallest node; the left spine of that node's right child then goes on the stack in its place.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::{Error, Tree};
//!
//! let tree: Tree<_, _> = [(2, "b"), (1, "a")].into_iter().collect();
//! let mut iter = tree.iter();
//!
//! assert!(iter.has_next());
//! assert_eq!(iter.try_next(), Ok((&1, &"a")));
//! assert_eq!(iter.try_next(), Ok((&2, &"b")));
//!
//! assert!(!iter.has_next());
//! assert_eq!(iter.try_next(), Err(Error::Exhausted));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::Error;
use crate::stack::Stack;
use crate::tree::{Node, Tree};

/// An iterator over the keys and values of a [`Tree`] in non-decreasing key order. Created by
/// [`Tree::iter`].
///
/// It borrows the tree, so the tree can't be changed or dropped while the iterator is alive.
pub struct Iter<'a, K, V> {
    pending: Stack<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Creates an iterator positioned before the smallest key of `tree`. An empty tree gives an
    /// iterator that is already exhausted.
    pub fn new(tree: &'a Tree<K, V>) -> Self {
        let mut iter = Self {
            pending: Stack::new(),
        };

        // Descend down the left side of the tree.
        iter.push_left_spine(tree.root());

        iter
    }

    /// Returns `true` if there is at least one more node to visit.
    pub fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Returns the key and value of the next node in order and advances past it.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] if every node has already been visited.
    pub fn try_next(&mut self) -> Result<(&'a K, &'a V), Error> {
        let node = self.pending.pop().ok_or(Error::Exhausted)?;

        // Everything left of `node` has been produced. What comes next is the smallest node of
        // its right subtree, if it has one.
        self.push_left_spine(node.right());

        Ok((node.key(), node.value()))
    }

    fn push_left_spine(&mut self, subtree_root: Option<&'a Node<K, V>>) {
        let mut current = subtree_root;
        while let Some(node) = current {
            self.pending.push(node);
            current = node.left();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every pending node is still to come but their right subtrees are unknown.
        (self.pending.len(), None)
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("next_key", &self.pending.peek().map(|n| n.key()))
            .field("pending", &self.pending.len())
            .finish()
    }
}

//! An unbalanced BST. Each `Node` owns its children outright so there are no parent pointers and
//! no sharing; removing a node re-links its subtree into the slot its parent held for it.
//!
//! Keys equal to a node's key are placed in its left subtree. Lookups and removals stop at the
//! first node whose key matches, which is the matching node closest to the root.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! tree.insert(1, "a");
//! assert_eq!(tree.get(&1), Some(&"a"));
//!
//! // Inserting the same key again adds a second node. The first one is still found first.
//! tree.insert(1, "b");
//! assert_eq!(tree.get(&1), Some(&"a"));
//! assert_eq!(tree.size(), 2);
//!
//! // Removing a key hands back the value of the node that was removed.
//! assert_eq!(tree.remove(&1), Some("a"));
//! assert_eq!(tree.get(&1), Some(&"b"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;

use crate::iter::Iter;
use crate::stack::Stack;

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree mapping keys to values. This can be used for inserting, finding, and
/// removing keys and values, and for visiting them in key order.
///
/// No balancing is done. Inserting keys in sorted order builds a tree that is as tall as it has
/// nodes.
pub struct Tree<K, V> {
    root: Link<K, V>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    /// Releases nodes in post-order with an explicit stack so a degenerate tree can't overflow the
    /// call stack. Each node is released only once both of its children have been.
    fn drop(&mut self) {
        let mut pending = Stack::new();
        pending.extend(self.root.take());

        let mut released = 0usize;
        while let Some(mut node) = pending.pop() {
            let (left, right) = (node.left.take(), node.right.take());
            if left.is_none() && right.is_none() {
                drop(node);
                released += 1;
                continue;
            }

            pending.push(node);
            pending.extend(right);
            pending.extend(left);
        }

        if released > 0 {
            trace!("released {} nodes", released);
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Releases every node of the tree. This is what dropping the tree does; it's spelled out
    /// for callers that want to make the end of a tree's life explicit.
    pub fn free(self) {
        drop(self);
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. There is no cached count so this visits every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.size(), 0);
    ///
    /// tree.insert(5, ());
    /// tree.insert(5, ());
    /// tree.insert(3, ());
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        let mut pending = Stack::new();
        pending.extend(self.root());

        let mut size = 0;
        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(node.left());
            pending.extend(node.right());
        }
        size
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a tree with only a
    /// root has a height of 1.
    pub fn height(&self) -> usize {
        let mut pending = Stack::new();
        if let Some(root) = self.root() {
            pending.push((root, 1));
        }

        let mut height = 0;
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            if let Some(left) = node.left() {
                pending.push((left, depth + 1));
            }
            if let Some(right) = node.right() {
                pending.push((right, depth + 1));
            }
        }
        height
    }

    /// The key stored at the root of the tree, if there is one.
    pub fn root_key(&self) -> Option<&K> {
        self.root().map(Node::key)
    }

    /// Returns an iterator visiting every key and value in non-decreasing key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::Tree;
    ///
    /// let tree: Tree<_, _> = [(5, 'a'), (3, 'b'), (8, 'c')].into_iter().collect();
    ///
    /// let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [3, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned. When several nodes share the key, the value of the
    /// one closest to the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.get(&1), Some(&2));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Inserts the given value into the tree at the given key. The new node always becomes a
    /// leaf: starting at the root it goes left of any node whose key is greater than or equal to
    /// its own and right otherwise. An existing key is never overwritten; the new node lands in
    /// the left subtree of the equal node.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// tree.insert(1, 3);
    ///
    /// assert_eq!(tree.get(&1), Some(&2));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let new_node = Box::new(Node::new(key, value));
        if self.root.is_none() {
            trace!("inserting root node");
        }

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            if cfg!(debug_assertions) {
                node.assert_children_ordered();
            }
            slot = if new_node.key <= node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(new_node);
    }

    /// Removes the node containing the given key from the tree and returns its value. If several
    /// nodes share the key, the one closest to the root is removed. If the tree does not contain a
    /// node with the key, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&42), None);
    /// assert_eq!(tree.remove(&1), Some(2));
    /// assert_eq!(tree.get(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let Some(slot) = Self::slot_of(&mut self.root, key) else {
            trace!("remove missed: key not in tree");
            return None;
        };

        let (replacement, removed) = slot.take()?.remove_self();
        *slot = replacement;

        if cfg!(debug_assertions) {
            if let Some(node) = slot.as_deref() {
                node.assert_children_ordered();
            }
        }
        Some(removed)
    }

    /// Walks down from `slot` to the slot holding the first node whose key equals `key`. Returns
    /// `None` if the walk falls off the bottom of the tree.
    fn slot_of<'a>(mut slot: &'a mut Link<K, V>, key: &K) -> Option<&'a mut Link<K, V>>
    where
        K: Ord,
    {
        loop {
            let ordering = key.cmp(&slot.as_ref()?.key);
            match ordering {
                Ordering::Less => slot = &mut slot.as_mut()?.left,
                Ordering::Equal => return Some(slot),
                Ordering::Greater => slot = &mut slot.as_mut()?.right,
            }
        }
    }

    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` has a key that is used for searching/sorting and a value that is associated with
/// that key. Its children, when present, are owned by it.
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Asserts this node's children sit on the correct side of it. A promoted successor may have
    /// an equal key to its right, so that side only needs to be greater than or equal.
    fn assert_children_ordered(&self)
    where
        K: Ord,
    {
        if let Some(left) = self.left() {
            assert!(left.key <= self.key, "left child key is greater than its parent");
        }
        if let Some(right) = self.right() {
            assert!(right.key >= self.key, "right child key is less than its parent");
        }
    }

    /// Removes this node from its subtree. Returns whatever should take its place in the parent's
    /// slot along with the removed value.
    fn remove_self(mut self: Box<Self>) -> (Link<K, V>, V) {
        match (self.left.take(), self.right.take()) {
            (None, None) => {
                trace!("removing leaf node");
                let Node { value, .. } = *self;
                (None, value)
            }
            (None, Some(child)) => {
                trace!("removing node with one child");
                let Node { value, .. } = *self;
                (Some(child), value)
            }
            (Some(left), mut right) => match Self::take_min(&mut right) {
                None => {
                    trace!("removing node with one child");
                    let Node { value, .. } = *self;
                    (Some(left), value)
                }

                // With two children we promote this node's in-order successor, the smallest node
                // in its right subtree.
                Some(successor) => {
                    trace!("removing node with two children, promoting successor");
                    let Node {
                        key: successor_key,
                        value: successor_value,
                        ..
                    } = *successor;

                    self.key = successor_key;
                    let removed = mem::replace(&mut self.value, successor_value);
                    self.left = Some(left);
                    self.right = right;
                    (Some(self), removed)
                }
            },
        }
    }

    /// Detaches the leftmost node of the subtree in `slot`, leaving its right child in its place.
    /// The detached node has no children. Returns `None` if the subtree is empty.
    fn take_min(mut slot: &mut Link<K, V>) -> Option<Box<Self>> {
        while slot.as_ref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }

        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min)
    }
}

//! This crate exposes an ordered, in-memory map built on an unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored records. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a key and the value inserted with it and will sometimes have child `Node`s. The
//! invariants this tree keeps are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less than or equal to its
//!    own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because equal keys are allowed, the same key may be stored more than once. Lookups and
//! removals act on whichever copy is closest to the root.
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a leaf
//! `Node`. This tree does no rebalancing so inserting keys in sorted order makes the height equal
//! to the number of nodes. BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree, which is what [`Iter`] does.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [10, 5, 15, 3, 7, 12, 20] {
//!     tree.insert(key, key.to_string());
//! }
//!
//! // 10 has two children so the smallest key to its right takes its place.
//! assert_eq!(tree.remove(&10), Some("10".to_string()));
//! assert_eq!(tree.root_key(), Some(&12));
//!
//! let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, [3, 5, 7, 12, 15, 20]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod stack;
mod tree;

pub use error::Error;
pub use iter::Iter;
pub use tree::Tree;

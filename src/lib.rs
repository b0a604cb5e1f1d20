//! This crate answers one question about a Binary Search Tree (BST): is a
//! given integer stored in it?
//!
//! ## Binary Search Tree
//!
//! A BST is defined recursively using the notion of a [`Node`]. A `Node`
//! stores a value and may have a left and a right child. The invariants that
//! make searching fast are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Because of this, [`search`] only ever has to look at one child per level,
//! so it takes `O(height)` comparisons. Nothing here balances the tree, so a
//! tree built from sorted input degenerates into a linked list and `height`
//! becomes the number of nodes. The default [`search`] walks the tree with a
//! loop so that such trees can't blow the call stack. The textbook recursive
//! form lives in [`recursive`].
//!
//! Building trees is up to the caller. [`verify::check_ordering`] can be used
//! to make sure a hand-built tree actually upholds the invariants above.
//!
//! # Examples
//!
//! ```
//! use bst_search::{search, Node};
//!
//! //     8
//! //    / \
//! //   3   10
//! let tree = Node::new(8, Some(Node::boxed(3)), Some(Node::boxed(10)));
//!
//! assert!(search(Some(&tree), 3));
//! assert!(!search(Some(&tree), 9));
//!
//! // An empty tree contains nothing.
//! assert!(!search(None, 8));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod recursive;
pub mod search;
pub mod tree;
pub mod verify;

pub use error::{OrderingError, Result};
pub use search::search;
pub use tree::Node;

//! The textbook recursive form of [`search`][crate::search::search].
//!
//! It gives the same answers but uses one stack frame per level it descends,
//! so very tall trees can overflow the stack. Prefer [`crate::search`].

use std::cmp::Ordering;

use crate::tree::Node;

/// Returns `true` if some node in `tree` holds `target`, recursing into the
/// left or right subtree as the BST ordering dictates.
///
/// # Examples
///
/// ```
/// use bst_search::{recursive, Node};
///
/// let tree = Node::new(10, Some(Node::boxed(5)), Some(Node::boxed(15)));
///
/// assert!(recursive::search(Some(&tree), 5));
/// assert!(!recursive::search(Some(&tree), 7));
/// assert!(!recursive::search(None, 7));
/// ```
pub fn search(tree: Option<&Node>, target: i32) -> bool {
    match tree {
        None => false,
        Some(node) => match target.cmp(&node.value) {
            Ordering::Less => search(node.left.as_deref(), target),
            Ordering::Equal => true,
            Ordering::Greater => search(node.right.as_deref(), target),
        },
    }
}

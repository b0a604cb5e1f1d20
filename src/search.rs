//! Looking up a value in a BST without recursion.
//!
//! # Examples
//!
//! ```
//! use bst_search::{search, Node};
//!
//! //       8
//! //      / \
//! //     3   10
//! //    / \    \
//! //   1   6    14
//! let tree = Node::new(
//!     8,
//!     Some(Box::new(Node::new(3, Some(Node::boxed(1)), Some(Node::boxed(6))))),
//!     Some(Box::new(Node::new(10, None, Some(Node::boxed(14))))),
//! );
//!
//! assert!(search(Some(&tree), 6));
//! assert!(search(Some(&tree), 14));
//! assert!(!search(Some(&tree), 2));
//! ```

use std::cmp::Ordering;

use tracing::trace;

use crate::tree::Node;

/// Returns `true` if some node in `tree` holds `target`. An empty tree (`None`)
/// holds nothing.
///
/// The tree is only borrowed. At each node we compare `target` with the node's
/// value and move the cursor to the left or right child until we either find
/// it or fall off the bottom of the tree. This takes `O(height)` comparisons
/// and constant extra space, so degenerate (linked-list shaped) trees are fine.
///
/// `tree` is assumed to uphold the BST ordering. If it doesn't, values stored
/// on the "wrong" side of a node may not be found.
///
/// # Examples
///
/// ```
/// use bst_search::{search, Node};
///
/// let tree = Node::leaf(10);
///
/// assert!(search(Some(&tree), 10));
/// assert!(!search(Some(&tree), 3));
/// assert!(!search(None, 5));
/// ```
pub fn search(tree: Option<&Node>, target: i32) -> bool {
    let mut cursor = tree;
    let mut depth = 0usize;

    while let Some(node) = cursor {
        cursor = match target.cmp(&node.value) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => {
                trace!(value = target, depth, "found");
                return true;
            }
        };
        depth += 1;
    }

    trace!(value = target, depth, "not found");
    false
}

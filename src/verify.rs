//! Checking that a hand-built tree really is a BST.
//!
//! [`search`][crate::search] trusts the ordering of whatever it's handed. Code
//! that builds trees can use [`check_ordering`] (in tests, or once after
//! building) to make sure that trust is deserved.

use tracing::debug;

use crate::error::{OrderingError, Result};
use crate::tree::Node;

/// Checks that every key in `tree` is strictly greater than everything in its
/// left subtree and strictly less than everything in its right subtree. This
/// also rules out duplicate keys. An empty tree is trivially ordered.
///
/// Returns the first violation found, walking the tree depth first with an
/// explicit stack.
///
/// # Examples
///
/// ```
/// use bst_search::verify::check_ordering;
/// use bst_search::{Node, OrderingError};
///
/// let good = Node::new(10, Some(Node::boxed(5)), Some(Node::boxed(15)));
/// assert_eq!(check_ordering(Some(&good)), Ok(()));
///
/// // 12 is in 10's left subtree.
/// let bad = Node::new(10, Some(Box::new(Node::new(5, None, Some(Node::boxed(12))))), None);
/// assert_eq!(
///     check_ordering(Some(&bad)),
///     Err(OrderingError::LeftNotLess { key: 12, bound: 10 }),
/// );
/// ```
pub fn check_ordering(tree: Option<&Node>) -> Result<()> {
    // Each entry carries the closest ancestors it must be greater / less than.
    let mut pending: Vec<(&Node, Option<i32>, Option<i32>)> =
        tree.map(|n| (n, None, None)).into_iter().collect();

    while let Some((node, greater_than, less_than)) = pending.pop() {
        let key = node.value;

        if let Some(bound) = greater_than.filter(|&bound| key <= bound) {
            debug!(key, bound, "key not greater than ancestor");
            return Err(OrderingError::RightNotGreater { key, bound });
        }
        if let Some(bound) = less_than.filter(|&bound| key >= bound) {
            debug!(key, bound, "key not less than ancestor");
            return Err(OrderingError::LeftNotLess { key, bound });
        }

        if let Some(right) = node.right.as_deref() {
            pending.push((right, Some(key), less_than));
        }
        if let Some(left) = node.left.as_deref() {
            pending.push((left, greater_than, Some(key)));
        }
    }

    Ok(())
}

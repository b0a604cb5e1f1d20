//! Errors reported when a tree breaks the BST ordering.

use thiserror::Error;

/// Result type alias for ordering checks.
pub type Result<T> = std::result::Result<T, OrderingError>;

/// The first place [`check_ordering`][crate::verify::check_ordering] found a
/// node on the wrong side of one of its ancestors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingError {
    /// A node in some ancestor's left subtree isn't smaller than that ancestor.
    #[error("key {key} is in the left subtree of {bound} but is not less than it")]
    LeftNotLess {
        /// The misplaced key.
        key: i32,
        /// The ancestor key it should be less than.
        bound: i32,
    },

    /// A node in some ancestor's right subtree isn't larger than that ancestor.
    #[error("key {key} is in the right subtree of {bound} but is not greater than it")]
    RightNotGreater {
        /// The misplaced key.
        key: i32,
        /// The ancestor key it should be greater than.
        bound: i32,
    },
}

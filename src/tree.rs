//! The node type trees are made of.
//!
//! A tree is just an `Option<Box<Node>>` owned by whoever built it. `None` is
//! the empty tree (and the empty subtree below every leaf), so "no node" is
//! always spelled out in the type rather than with a sentinel value.

/// One element of a Binary Search Tree. All values in `left` are expected to
/// be less than `value` and all values in `right` greater than it. Nothing in
/// this type enforces that; see [`check_ordering`][crate::verify::check_ordering].
#[derive(Debug)]
pub struct Node {
    /// The key stored in this node.
    pub value: i32,
    /// The subtree holding smaller keys, if any.
    pub left: Option<Box<Node>>,
    /// The subtree holding larger keys, if any.
    pub right: Option<Box<Node>>,
}

impl Node {
    /// Creates a `Node` with the given children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::Node;
    ///
    /// let tree = Node::new(10, Some(Node::boxed(5)), None);
    ///
    /// assert_eq!(tree.left.as_ref().map(|n| n.value), Some(5));
    /// assert!(tree.right.is_none());
    /// ```
    pub fn new(value: i32, left: Option<Box<Node>>, right: Option<Box<Node>>) -> Self {
        Self { value, left, right }
    }

    /// Creates a `Node` with no children.
    pub fn leaf(value: i32) -> Self {
        Self::new(value, None, None)
    }

    /// Creates a boxed leaf, ready to be linked in as a child.
    pub fn boxed(value: i32) -> Box<Self> {
        Box::new(Self::leaf(value))
    }

    /// Returns whether `target` is stored in the subtree rooted at this node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::Node;
    ///
    /// let tree = Node::new(10, Some(Node::boxed(5)), Some(Node::boxed(15)));
    ///
    /// assert!(tree.contains(15));
    /// assert!(!tree.contains(7));
    /// ```
    pub fn contains(&self, target: i32) -> bool {
        crate::search(Some(self), target)
    }
}

impl Drop for Node {
    // The derived drop recurses once per level, which overflows the stack on long chains.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.left.take().into_iter().collect();
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            // `node` is childless now so dropping it here doesn't recurse.
        }
    }
}

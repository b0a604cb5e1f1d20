mod search;

use bst_search::Node;

use std::cmp;

/// Inserts every value of `xs` into an unbalanced tree, skipping duplicates,
/// the way a plain BST builder would.
pub(crate) fn build(xs: &[i32]) -> Option<Box<Node>> {
    xs.iter().fold(None, |tree, &x| insert(tree, x))
}

fn insert(tree: Option<Box<Node>>, x: i32) -> Option<Box<Node>> {
    match tree {
        None => Some(Node::boxed(x)),
        Some(mut node) => {
            match x.cmp(&node.value) {
                cmp::Ordering::Less => node.left = insert(node.left.take(), x),
                cmp::Ordering::Equal => {}
                cmp::Ordering::Greater => node.right = insert(node.right.take(), x),
            }
            Some(node)
        }
    }
}

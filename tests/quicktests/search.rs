use bst_search::{recursive, search, verify::check_ordering, Node};

use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::build;

#[quickcheck]
fn built_trees_are_ordered(xs: Vec<i32>) -> bool {
    let tree = build(&xs);

    check_ordering(tree.as_deref()).is_ok()
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|&x| search(tree.as_deref(), x))
}

#[quickcheck]
fn contains_not(xs: Vec<i32>, nots: Vec<i32>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| !search(tree.as_deref(), x))
}

#[quickcheck]
fn empty_contains_nothing(x: i32) -> bool {
    !search(None, x) && !recursive::search(None, x)
}

#[quickcheck]
fn repeated_searches_agree(xs: Vec<i32>, probes: Vec<i32>) -> bool {
    let tree = build(&xs);

    probes.iter().all(|&x| {
        let first = search(tree.as_deref(), x);
        (0..3).all(|_| search(tree.as_deref(), x) == first)
    })
}

#[quickcheck]
fn recursive_agrees(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    // `i8` keys keep hits and misses both common.
    let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
    let tree = build(&xs);

    probes
        .into_iter()
        .map(i32::from)
        .all(|x| search(tree.as_deref(), x) == recursive::search(tree.as_deref(), x))
}

#[quickcheck]
fn tall_trees_are_searchable(len: u16) -> bool {
    // A right-only chain, as tall as it is long.
    let len = i32::from(len);
    let tree = (0..len)
        .rev()
        .fold(None, |tree, x| Some(Box::new(Node::new(x, None, tree))));

    (len == 0 || search(tree.as_deref(), len - 1)) && !search(tree.as_deref(), len)
}

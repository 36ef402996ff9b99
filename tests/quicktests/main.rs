//! Property tests against the public API, comparing trees with a sorted `Vec` model.

mod bounded;
mod ordered;

use bounded_rbtree::{Balance, Tree};

/// Builds one tree per balancing policy from the same values.
fn both_trees(xs: &[i8]) -> [Tree<i8>; 2] {
    [Balance::Plain, Balance::RedBlack].map(|balance| {
        let mut tree = Tree::with_balance(balance);
        tree.extend(xs.iter().copied());
        tree
    })
}

/// The values the model says a `[min, max]` iterator should produce.
fn model(xs: &[i8], min: Option<i8>, max: Option<i8>) -> Vec<i8> {
    let mut expected: Vec<i8> = xs
        .iter()
        .copied()
        .filter(|x| min.map_or(true, |min| min <= *x))
        .filter(|x| max.map_or(true, |max| *x <= max))
        .collect();
    expected.sort();
    expected
}

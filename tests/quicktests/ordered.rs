use std::collections::HashSet;

use bounded_rbtree::{Error, Tree};

use crate::{both_trees, model};

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        both_trees(&xs)
            .iter()
            .all(|tree| xs.iter().all(|x| tree.contains(x)))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let added: HashSet<_> = xs.iter().copied().collect();
        let nots: HashSet<_> = nots.into_iter().collect();

        both_trees(&xs)
            .iter()
            .all(|tree| nots.difference(&added).all(|x| !tree.contains(x)))
    }
}

quickcheck::quickcheck! {
    fn unbounded_iteration_is_the_sorted_multiset(xs: Vec<i8>) -> bool {
        let expected = model(&xs, None, None);
        both_trees(&xs)
            .iter()
            .all(|tree| tree.iter().copied().collect::<Vec<_>>() == expected)
    }
}

quickcheck::quickcheck! {
    fn size_matches_iteration_and_contains(xs: Vec<i8>, lookups: Vec<i8>) -> bool {
        both_trees(&xs).iter().all(|tree| {
            let drained: Vec<i8> = tree.iter().copied().collect();
            tree.size() == drained.len()
                && tree.is_empty() == drained.is_empty()
                && lookups.iter().all(|p| tree.contains(p) == drained.contains(p))
        })
    }
}

#[test]
fn scenario_insert_size_contains() {
    let mut tree = Tree::new();
    for value in [10, 5, 15, 3, 7, 12, 17] {
        tree.insert(value);
    }

    assert_eq!(tree.size(), 7);
    assert!(tree.contains(&7));
    assert!(!tree.contains(&99));
}

#[test]
fn scenario_duplicate_structure() {
    let mut tree = Tree::plain();
    for value in [20, 10, 30, 10, 5] {
        tree.insert(value);
    }

    let node = |id| tree.get(id).unwrap();
    let root = node(tree.root().unwrap());
    let left = node(root.left().unwrap());
    let left_left = node(left.left().unwrap());
    let left_left_left = node(left_left.left().unwrap());
    let right = node(root.right().unwrap());

    assert_eq!(*root.value(), 20);
    assert_eq!(*left.value(), 10);
    assert_eq!(*left_left.value(), 10);
    assert_eq!(*left_left_left.value(), 5);
    assert_eq!(*right.value(), 30);
}

#[test]
fn scenario_right_rotation_at_root() {
    let mut tree = Tree::plain();
    let parent = tree.insert(10);
    let child = tree.insert(5);

    tree.rotate(child, parent).unwrap();

    assert_eq!(tree.root(), Some(child));
    assert_eq!(tree.get(child).unwrap().right(), Some(parent));
    assert_eq!(tree.get(parent).unwrap().parent(), Some(child));
}

#[test]
fn rotating_a_node_onto_itself_is_rejected() {
    let mut tree = Tree::plain();
    let only = tree.insert(1);

    assert_eq!(
        tree.rotate(only, only),
        Err(Error::NotAChild {
            child: only,
            parent: only
        })
    );
}

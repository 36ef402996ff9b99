use bounded_rbtree::{Error, Tree};

use crate::{both_trees, model};

quickcheck::quickcheck! {
    fn standing_bounds_filter(xs: Vec<i8>, min: Option<i8>, max: Option<i8>) -> bool {
        let expected = model(&xs, min, max);
        both_trees(&xs).into_iter().all(|mut tree| {
            tree.set_iterator_min(min);
            tree.set_iterator_max(max);
            tree.iter().copied().collect::<Vec<_>>() == expected
        })
    }
}

quickcheck::quickcheck! {
    fn explicit_bounds_filter(xs: Vec<i8>, min: Option<i8>, max: Option<i8>) -> bool {
        let expected = model(&xs, min, max);
        both_trees(&xs).iter().all(|tree| {
            tree.iter_between(min.as_ref(), max.as_ref())
                .copied()
                .collect::<Vec<_>>()
                == expected
        })
    }
}

quickcheck::quickcheck! {
    fn has_next_agrees_with_try_next(xs: Vec<i8>, min: Option<i8>) -> bool {
        let tree: Tree<i8> = xs.into_iter().collect();
        let mut iter = tree.iter_between(min.as_ref(), None);
        while iter.has_next() {
            if iter.try_next().is_err() {
                return false;
            }
        }
        iter.try_next() == Err(Error::Exhausted) && iter.next().is_none()
    }
}

#[test]
fn scenario_closed_range() {
    let mut tree = Tree::new();
    for value in [1, 5, 10, 15, 20] {
        tree.insert(value);
    }
    tree.set_iterator_min(Some(5));
    tree.set_iterator_max(Some(15));

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 10, 15]);
}

#[test]
fn later_iterators_see_new_bounds() {
    let mut tree: Tree<i32> = (0..100).collect();

    tree.set_iterator_min(Some(90));
    let high: Vec<i32> = tree.iter().copied().collect();

    tree.set_iterator_min(None);
    tree.set_iterator_max(Some(2));
    let low: Vec<i32> = tree.iter().copied().collect();

    assert_eq!(high, (90..100).collect::<Vec<_>>());
    assert_eq!(low, vec![0, 1, 2]);
}

#[test]
fn strings_in_range() {
    let mut tree = Tree::new();
    tree.extend(["grape", "apple", "orange", "banana", "kiwi"]);
    tree.set_iterator_min(Some("b"));
    tree.set_iterator_max(Some("l"));

    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        vec!["banana", "grape", "kiwi"]
    );
}

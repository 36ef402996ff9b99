//! Ascending iteration, optionally restricted to an inclusive range.
//!
//! A tree carries standing iterator bounds which every iterator created afterwards picks up:
//!
//! ```
//! use bounded_rbtree::Tree;
//!
//! let mut tree: Tree<i32> = [1, 5, 10, 15, 20].into_iter().collect();
//!
//! tree.set_iterator_min(Some(5));
//! tree.set_iterator_max(Some(15));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 10, 15]);
//!
//! tree.set_iterator_max(None);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 10, 15, 20]);
//! ```
//!
//! An iterator borrows the tree, so the bounds it started with can't be changed underneath it:
//!
//! ```compile_fail
//! use bounded_rbtree::Tree;
//!
//! let mut tree: Tree<i32> = (0..10).collect();
//! let mut iter = tree.iter();
//! tree.set_iterator_min(Some(5));
//! iter.next();
//! ```

use std::iter::FusedIterator;

use log::debug;

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::tree::Tree;

/// The standing bounds of a tree. `None` means unbounded on that side.
#[derive(Clone, Debug)]
pub(crate) struct Bounds<T> {
    pub(crate) min: Option<T>,
    pub(crate) max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T> Tree<T> {
    /// Sets the smallest value (inclusive) that iterators created from now on will yield. `None`
    /// removes the lower bound.
    pub fn set_iterator_min(&mut self, min: Option<T>) {
        self.bounds.min = min;
    }

    /// Sets the largest value (inclusive) that iterators created from now on will yield. `None`
    /// removes the upper bound.
    pub fn set_iterator_max(&mut self, max: Option<T>) {
        self.bounds.max = max;
    }

    /// The standing lower bound.
    pub fn iterator_min(&self) -> Option<&T> {
        self.bounds.min.as_ref()
    }

    /// The standing upper bound.
    pub fn iterator_max(&self) -> Option<&T> {
        self.bounds.max.as_ref()
    }

    /// Iterates over the values in ascending order, restricted to the standing bounds set with
    /// [`Tree::set_iterator_min`] and [`Tree::set_iterator_max`].
    pub fn iter(&self) -> Iter<'_, T>
    where
        T: Ord,
    {
        self.iter_between(self.bounds.min.as_ref(), self.bounds.max.as_ref())
    }

    /// Iterates over the values `v` with `min <= v <= max` in ascending order, ignoring the
    /// standing bounds. A `None` bound leaves that side open. If `min > max` nothing is yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_rbtree::Tree;
    ///
    /// let tree: Tree<i32> = (1..=10).collect();
    ///
    /// let evens: Vec<_> = tree.iter_between(Some(&4), None).filter(|v| *v % 2 == 0).collect();
    /// assert_eq!(evens, vec![&4, &6, &8, &10]);
    /// ```
    pub fn iter_between<'a>(&'a self, min: Option<&'a T>, max: Option<&'a T>) -> Iter<'a, T>
    where
        T: Ord,
    {
        let mut iter = Iter {
            tree: self,
            min,
            max,
            stack: Vec::new(),
        };
        iter.descend_and_stack(self.root);
        debug!(
            "iterator created with {} pending nodes (min set: {}, max set: {})",
            iter.stack.len(),
            min.is_some(),
            max.is_some()
        );
        iter
    }
}

/// An ascending iterator over (a range of) a [`Tree`]. See [`Tree::iter`].
///
/// Construction costs `O(lg N)` for a red-black tree. Each node is pushed and popped at most once
/// over the whole iteration, so `next` is amortized `O(1)`, and nodes outside the range are never
/// visited beyond the search path to its edges.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    min: Option<&'a T>,
    max: Option<&'a T>,
    /// The top is always the next value to yield.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T>
where
    T: Ord,
{
    /// Whether another value remains.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Yields the next value.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] once every value in range has been yielded.
    pub fn try_next(&mut self) -> Result<&'a T> {
        let node = self.stack.pop().ok_or(Error::Exhausted)?;
        self.descend_and_stack(node.right);

        let value = node.value();
        debug_assert!(
            self.max.map_or(true, |max| value <= max),
            "pruning let a value above the upper bound through"
        );
        Ok(value)
    }

    /// Pushes the in-range spine of the subtree at `link`: every node that is in range and reached
    /// by going left, skipping subtrees that lie wholly outside the bounds.
    fn descend_and_stack(&mut self, mut link: Link) {
        let tree = self.tree;
        while let Some(id) = link {
            let node = tree.node(id);
            let value = node.value();
            if self.min.map_or(false, |min| min > value) {
                // Everything on the left is `<= value < min`.
                link = node.right;
            } else if self.max.map_or(false, |max| max < value) {
                // Everything on the right is `>= value > max`.
                link = node.left;
            } else {
                self.stack.push(node);
                link = node.left;
            }
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<T> FusedIterator for Iter<'_, T> where T: Ord {}

impl<'a, T> IntoIterator for &'a Tree<T>
where
    T: Ord,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! This crate provides an insertion-only ordered tree with optional red-black balancing and
//! restartable, range-bounded in-order iteration.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a
//!    value less than or equal to its own value. Duplicates always go left.
//! 2. For every `Node`, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Left alone ([`Balance::Plain`]) the height depends
//! on insertion order and can reach `N`. A red-black tree ([`Balance::RedBlack`], the default)
//! recolors and [rotates][Tree::rotate] nodes after every insertion to keep the height within
//! `2 * lg(N + 1)`. Rotations keep the in-order sequence but may move a duplicate to the right of
//! an equal node, so a red-black tree only promises `left <= node <= right`.
//!
//! ## Iteration
//!
//! BSTs naturally support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree. [`Tree::iter`] does this with an explicit stack, restricted to the
//! standing bounds set through [`Tree::set_iterator_min`] and [`Tree::set_iterator_max`].
//! Subtrees that lie wholly outside the bounds are never entered.
//!
//! # Examples
//!
//! ```
//! use bounded_rbtree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [1, 5, 10, 15, 20] {
//!     tree.insert(value);
//! }
//!
//! tree.set_iterator_min(Some(5));
//! tree.set_iterator_max(Some(15));
//!
//! let in_range: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(in_range, vec![5, 10, 15]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod red_black;
mod rotate;
mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use iter::Iter;
pub use node::{Color, Node, NodeId};
pub use tree::{Balance, Tree};

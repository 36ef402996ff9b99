//! The ordered tree itself: storage, insertion, and lookup.
//!
//! # Examples
//!
//! ```
//! use bounded_rbtree::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! for value in [10, 5, 15, 3, 7, 12, 17] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.size(), 7);
//! assert!(tree.contains(&7));
//! assert!(!tree.contains(&99));
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::iter::Bounds;
use crate::node::{Color, Link, Node, NodeId, Side};

/// Source of arena identities. Every tree, and every tree after a `clear`, draws a fresh one so
/// that handles never resolve anywhere but where they were issued.
static NEXT_ARENA: AtomicU64 = AtomicU64::new(0);

fn next_arena() -> u64 {
    NEXT_ARENA.fetch_add(1, Ordering::Relaxed)
}

/// How a [`Tree`] keeps itself balanced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Balance {
    /// No rebalancing. The shape of the tree depends entirely on insertion order, and nodes carry
    /// no color.
    Plain,
    /// Red-black rebalancing after every insertion, bounding the height at `O(lg N)`.
    #[default]
    RedBlack,
}

/// An insertion-only ordered tree permitting duplicate values.
///
/// Values equal to an existing node are placed in that node's left subtree. In a
/// [`Balance::Plain`] tree that means every node's right subtree is strictly greater than it. In a
/// [`Balance::RedBlack`] tree rotations may carry an equal value across to the right, so only the
/// in-order sequence (`left <= node <= right`) is guaranteed.
#[derive(Clone)]
pub struct Tree<T> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) root: Link,
    /// Stamped into every handle this tree issues. Replaced on `clear`.
    arena: u64,
    balance: Balance,
    pub(crate) bounds: Bounds<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty red-black `Tree`.
    pub fn new() -> Self {
        Self::with_balance(Balance::RedBlack)
    }

    /// Generate a new, empty `Tree` that never rebalances.
    pub fn plain() -> Self {
        Self::with_balance(Balance::Plain)
    }

    /// Generate a new, empty `Tree` using the given balancing policy.
    pub fn with_balance(balance: Balance) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            arena: next_arena(),
            balance,
            bounds: Bounds::default(),
        }
    }

    /// The balancing policy this tree was created with.
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Inserts `value` into the tree and returns a handle to the node holding it. Duplicates are
    /// kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_rbtree::Tree;
    ///
    /// let mut tree = Tree::plain();
    /// for value in [20, 10, 30, 10, 5] {
    ///     tree.insert(value);
    /// }
    ///
    /// // The second 10 goes to the left of the first one.
    /// let root = tree.get(tree.root().unwrap()).unwrap();
    /// let ten = tree.get(root.left().unwrap()).unwrap();
    /// let dup = tree.get(ten.left().unwrap()).unwrap();
    /// assert_eq!((root.value(), ten.value(), dup.value()), (&20, &10, &10));
    /// ```
    pub fn insert(&mut self, value: T) -> NodeId
    where
        T: Ord,
    {
        let color = match self.balance {
            Balance::Plain => None,
            Balance::RedBlack => Some(Color::Red),
        };
        let id = NodeId::new(self.nodes.len(), self.arena);
        self.nodes.push(Node::new(value, color));

        match self.root {
            None => self.root = Some(id),
            Some(root) => {
                let (parent, side) = self.insertion_point(root, id);
                *self.node_mut(parent).child_mut(side) = Some(id);
                self.node_mut(id).parent = Some(parent);
            }
        }

        if self.balance == Balance::RedBlack {
            self.fix_red_property(id);
            self.paint_root_black();
        }

        if cfg!(debug_assertions) {
            if let Some(parent) = self.node(id).parent {
                assert!(self.node(parent).side_of(id).is_some());
            }
            let root = self.root.map(|root| self.node(root));
            assert!(root.map_or(false, |root| root.parent.is_none()));
            if self.balance == Balance::RedBlack {
                assert!(root.map_or(false, Node::is_black));
            }
        }

        id
    }

    /// Walks down from `root` to the empty slot where `new` belongs. Ties go left.
    fn insertion_point(&self, root: NodeId, new: NodeId) -> (NodeId, Side)
    where
        T: Ord,
    {
        let value = self.node(new).value();
        let mut current = root;
        loop {
            let node = self.node(current);
            let side = if value <= node.value() {
                Side::Left
            } else {
                Side::Right
            };
            match node.child(side) {
                Some(next) => current = next,
                None => return (current, side),
            }
        }
    }

    /// Whether a value equal to `value` is stored in the tree. Uses only `Ord`, so equal values are
    /// found even if they are distinct objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_rbtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("apple");
    ///
    /// assert!(tree.contains(&"apple"));
    /// assert!(!tree.contains(&"grape"));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match value.cmp(node.value()) {
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }
        false
    }

    /// The number of values stored, duplicates included. This walks the whole tree.
    pub fn size(&self) -> usize {
        let count = self.level_order().count();
        debug_assert_eq!(count, self.nodes.len());
        count
    }

    pub(crate) fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            tree: self,
            queue: self.root.into_iter().collect(),
        }
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value. Handles issued before this call stop resolving. The standing iterator
    /// bounds are kept.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.nodes.len());
        self.root = None;
        self.nodes.clear();
        self.arena = next_arena();
    }

    /// A handle to the root node, if the tree isn't empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Looks up the node behind a handle. Returns `None` if the handle is stale or was issued by a
    /// different tree.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        if id.arena() != self.arena {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Resolves a handle the tree itself produced. Those are always live.
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Breadth-first walk over a tree's nodes, driven by a queue rather than recursion so that
/// degenerate plain trees can be walked at any height.
pub(crate) struct LevelOrder<'a, T> {
    tree: &'a Tree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = tree.node(self.queue.pop_front()?);
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(node)
    }
}

/// Prints nodes in level order with their links as handles.
struct Levels<'a, T>(&'a Tree<T>);

impl<T> fmt::Debug for Levels<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.level_order()).finish()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("balance", &self.balance)
            .field("root", &self.root)
            .field("nodes", &Levels(self))
            .finish()
    }
}

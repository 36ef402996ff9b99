//! The storage cell of a [`Tree`][crate::Tree].

use std::fmt;

/// A handle to a node stored in a [`Tree`][crate::Tree]. Handles are returned by
/// [`Tree::insert`][crate::Tree::insert] and [`Tree::root`][crate::Tree::root] and stay valid
/// until the tree is cleared. A handle only resolves in the tree that issued it (and in clones
/// of that tree taken before the next `clear`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    arena: u64,
}

impl NodeId {
    pub(crate) fn new(index: usize, arena: u64) -> Self {
        Self { index, arena }
    }

    pub(crate) fn index(self) -> usize {
        self.index
    }

    pub(crate) fn arena(self) -> u64 {
        self.arena
    }
}

/// An edge to a child or parent. `None` is the conceptual empty leaf (or, for `parent`, the
/// absence of one at the root).
pub(crate) type Link = Option<NodeId>;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The color tag carried by nodes of a red-black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Red nodes never have red children.
    Red,
    /// Every path from the root to an empty leaf crosses the same number of black nodes.
    Black,
}

/// A single value plus its structural links. Nodes are owned by the tree's arena; `left` and
/// `right` are ownership edges of the logical tree while `parent` is only a back-reference used to
/// walk upwards.
#[derive(Clone)]
pub struct Node<T> {
    value: T,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) parent: Link,
    pub(crate) color: Option<Color>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, color: Option<Color>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
            color,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// This node's parent. `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// This node's color, or `None` if the node belongs to a [`Balance::Plain`][crate::Balance]
    /// tree.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Whether this node is tagged red.
    pub fn is_red(&self) -> bool {
        self.color == Some(Color::Red)
    }

    /// Whether this node is black. Uncolored nodes count as black, as do empty leaves.
    pub fn is_black(&self) -> bool {
        !self.is_red()
    }

    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Which side of this node `child` hangs on, judged by identity rather than by value.
    pub(crate) fn side_of(&self, child: NodeId) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("color", &self.color)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("parent", &self.parent)
            .finish()
    }
}

/// Prints the value followed by `.b` or `.r` for colored nodes.
impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(Color::Black) => write!(f, "{}.b", self.value),
            Some(Color::Red) => write!(f, "{}.r", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

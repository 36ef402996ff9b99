//! Single-step rotations between a node and one of its children.

use log::trace;

use crate::error::{Error, Result};
use crate::node::{NodeId, Side};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Rotates `child` above `parent`, preserving the in-order sequence of the tree. If `child` is
    /// the left child of `parent` this is a right rotation, otherwise a left rotation. No node is
    /// allocated and no subtree is walked.
    ///
    /// On a [`Balance::RedBlack`][crate::Balance] tree colors are left untouched, so a manual
    /// rotation may leave the red-black invariants broken for later insertions to build on.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingNode`] if either handle doesn't resolve in this tree.
    /// - [`Error::NotAChild`] if `child` is not a direct child of `parent`.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      Option<grandparent>       Option<grandparent>
    ///        /                         /
    ///     parent                    child
    ///     /    \                    /   \
    ///  child    z     rotate ->    x   parent
    ///  /   \                           /   \
    /// x     y                         y     z
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_rbtree::Tree;
    ///
    /// let mut tree = Tree::plain();
    /// let ten = tree.insert(10);
    /// let five = tree.insert(5);
    ///
    /// tree.rotate(five, ten).unwrap();
    ///
    /// assert_eq!(tree.root(), Some(five));
    /// assert_eq!(tree.get(five).unwrap().right(), Some(ten));
    /// assert_eq!(tree.get(ten).unwrap().parent(), Some(five));
    /// ```
    pub fn rotate(&mut self, child: NodeId, parent: NodeId) -> Result<()> {
        for id in [child, parent] {
            if self.get(id).is_none() {
                return Err(Error::MissingNode(id));
            }
        }
        let side = self
            .node(parent)
            .side_of(child)
            .ok_or(Error::NotAChild { child, parent })?;

        self.pivot(child, parent, side);
        Ok(())
    }

    /// Rotation for callers that already know `child` hangs on `side` of `parent`.
    pub(crate) fn pivot(&mut self, child: NodeId, parent: NodeId, side: Side) {
        trace!("rotating {:?} above {:?} ({:?} child)", child, parent, side);
        let inner = side.other();
        let grandparent = self.node(parent).parent;

        // The child's inner subtree sits between child and parent in order, so it moves across.
        let moved = self.node(child).child(inner);
        *self.node_mut(parent).child_mut(side) = moved;
        if let Some(moved) = moved {
            self.node_mut(moved).parent = Some(parent);
        }
        *self.node_mut(child).child_mut(inner) = Some(parent);

        self.node_mut(child).parent = grandparent;
        self.node_mut(parent).parent = Some(child);

        match grandparent {
            None => self.root = Some(child),
            Some(grandparent) => {
                let grandparent = self.node_mut(grandparent);
                if grandparent.left == Some(parent) {
                    grandparent.left = Some(child);
                } else {
                    grandparent.right = Some(child);
                }
            }
        }

        if cfg!(debug_assertions) {
            assert_eq!(self.node(child).child(inner), Some(parent));
            assert_eq!(self.node(parent).parent, Some(child));
        }
    }
}

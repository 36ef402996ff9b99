//! Red-black repair after insertion.
//!
//! A newly inserted node is red. The only invariant that can break is "no red node has a red
//! child", and [`Tree::fix_red_property`] walks upwards from the new node restoring it:
//!
//! 1. Parent is black (or the node is the root): done.
//! 2. Uncle is red: push the red up by recoloring parent and uncle black and the grandparent red,
//!    then continue from the grandparent.
//! 3. Uncle is black or absent: one rotation (or two when the node is an inner grandchild) and a
//!    recolor settle it for good.
//!
//! See <https://en.wikipedia.org/wiki/Red%E2%80%93black_tree#Insertion> for terminology.

use log::trace;

use crate::node::{Color, Link, NodeId};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Restores the red-black invariants after `inserted` (a red node) has been linked in. Only the
    /// root color may still be wrong afterwards; see [`Tree::paint_root_black`].
    pub(crate) fn fix_red_property(&mut self, inserted: NodeId) {
        let mut current = inserted;

        while let Some(mut parent) = self.node(current).parent {
            if self.node(parent).is_black() {
                break;
            }
            // A red parent is never the root, so there is a grandparent.
            let Some(grandparent) = self.node(parent).parent else {
                break;
            };
            let Some(parent_side) = self.node(grandparent).side_of(parent) else {
                unreachable!("parent link without matching child link");
            };
            let uncle = self.node(grandparent).child(parent_side.other());

            if self.is_red(uncle) {
                trace!("red uncle, recoloring at {:?}", grandparent);
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                current = grandparent;
                continue;
            }

            let Some(current_side) = self.node(parent).side_of(current) else {
                unreachable!("parent link without matching child link");
            };
            if current_side != parent_side {
                trace!("zig-zag below {:?}", grandparent);
                self.pivot(current, parent, current_side);
                // `current` now sits where `parent` was.
                parent = current;
            }
            trace!("straight line below {:?}", grandparent);
            self.pivot(parent, grandparent, parent_side);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            break;
        }
    }

    /// The root of a red-black tree is always black. Calling this when it already is does nothing.
    pub(crate) fn paint_root_black(&mut self) {
        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Empty leaves count as black.
    fn is_red(&self, link: Link) -> bool {
        link.map_or(false, |id| self.node(id).is_red())
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = Some(color);
    }
}

use thiserror::Error;

use crate::node::NodeId;

/// Errors produced by the fallible operations of a [`Tree`][crate::Tree] and its
/// [`Iter`][crate::Iter]ators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The handle does not name a live node of this tree. Either it was never issued by this tree
    /// or the tree has been cleared since.
    #[error("{0:?} does not refer to a node in this tree")]
    MissingNode(NodeId),
    /// A rotation was requested for two nodes that are not in a direct parent/child relationship.
    #[error("{child:?} is not a direct child of {parent:?}")]
    NotAChild {
        /// The node that was supposed to be rotated up.
        child: NodeId,
        /// The node that was supposed to be rotated down.
        parent: NodeId,
    },
    /// [`Iter::try_next`][crate::Iter::try_next] was called after the last value was yielded.
    #[error("iterator has no more values")]
    Exhausted,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

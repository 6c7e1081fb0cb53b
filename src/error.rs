use thiserror::Error;

/// A broken structural invariant, as reported by [`LLRBTreeMap::validate`].
///
/// A tree maintained only through the public API never produces one of these; the type exists
/// so tests and debugging sessions can say *which* invariant failed.
///
/// [`LLRBTreeMap::validate`]: crate::LLRBTreeMap::validate
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum InvariantViolation {
    /// A key is not strictly between the bounds set by its ancestors.
    #[error("keys are not in strictly ascending in-order sequence")]
    OutOfOrder,
    /// A node's recorded subtree size disagrees with its children.
    #[error("subtree size mismatch: recorded {recorded}, actual {actual}")]
    SizeMismatch {
        /// The size stored in the node.
        recorded: usize,
        /// The size recomputed from the node's children.
        actual: usize,
    },
    /// A right link is red.
    #[error("red link leans right")]
    RedRightLink,
    /// A red node below the root has a red left child.
    #[error("two consecutive red links")]
    ConsecutiveRedLinks,
    /// Two root-to-leaf paths cross different numbers of black links.
    #[error("black link count differs between root-to-leaf paths")]
    BlackImbalance,
}

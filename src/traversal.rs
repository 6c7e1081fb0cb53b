/// Depth-first visiting order used by [`LLRBTreeMap::traverse`] and
/// [`LLRBTreeSet::traverse`].
///
/// [`LLRBTreeMap::traverse`]: crate::LLRBTreeMap::traverse
/// [`LLRBTreeSet::traverse`]: crate::LLRBTreeSet::traverse
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Traversal {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Visits keys in ascending order.
    #[default]
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

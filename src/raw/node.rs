use super::handle::Handle;
use super::size::Size;

/// Color of the link from a node's parent down to the node.
///
/// A red link glues the node to its parent, forming a 3-node of the 2-3 tree the LLRB encodes.
/// Absent links count as black.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub(crate) const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    #[inline]
    pub(crate) const fn flipped(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A tree node. Children are arena handles owned exclusively by this node.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    // The number of nodes in the subtree rooted here, including this one.
    pub(crate) size: Size,
    pub(crate) color: Color,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf. New nodes always start red.
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            size: Size::ONE,
            color: Color::Red,
        }
    }

    #[inline]
    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_red_leaf_of_size_one() {
        let node = Node::new(7, "seven");
        assert!(node.color.is_red());
        assert!(node.left.is_none() && node.right.is_none());
        assert_eq!(node.size.to_usize(), 1);
        assert_eq!(node.into_entry(), (7, "seven"));
    }

    #[test]
    fn flipping_twice_is_identity() {
        assert_eq!(Color::Red.flipped(), Color::Black);
        assert_eq!(Color::Black.flipped().flipped(), Color::Black);
        assert!(!Color::Black.is_red());
    }
}

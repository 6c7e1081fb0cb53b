//! Structural self-checks. None of these run on the mutation path.

use super::handle::Handle;
use super::raw_llrb_map::RawLLRBMap;
use crate::error::InvariantViolation;

impl<K: Ord, V> RawLLRBMap<K, V> {
    /// Every key lies strictly between the bounds set by its ancestors.
    pub(crate) fn is_bst(&self) -> bool {
        self.is_bst_within(self.root(), None, None)
    }

    fn is_bst_within(&self, link: Option<Handle>, low: Option<&K>, high: Option<&K>) -> bool {
        let Some(h) = link else {
            return true;
        };
        let node = self.node(h);
        if low.is_some_and(|low| node.key <= *low) || high.is_some_and(|high| node.key >= *high) {
            return false;
        }
        self.is_bst_within(node.left, low, Some(&node.key)) && self.is_bst_within(node.right, Some(&node.key), high)
    }
}

impl<K, V> RawLLRBMap<K, V> {
    /// Every stored subtree size equals the recomputed count.
    pub(crate) fn is_size_consistent(&self) -> bool {
        self.first_size_mismatch(self.root()).is_none()
    }

    /// Returns `(recorded, actual)` for the first node whose size is stale.
    fn first_size_mismatch(&self, link: Option<Handle>) -> Option<(usize, usize)> {
        let h = link?;
        let node = self.node(h);
        let recorded = node.size.to_usize();
        let actual = self.size_of(node.left) + self.size_of(node.right) + 1;
        if recorded != actual {
            return Some((recorded, actual));
        }
        self.first_size_mismatch(node.left).or_else(|| self.first_size_mismatch(node.right))
    }

    /// No red right links, and no red node below the root with a red left child.
    pub(crate) fn is_23(&self) -> bool {
        self.first_23_violation(self.root()).is_none()
    }

    fn first_23_violation(&self, link: Option<Handle>) -> Option<InvariantViolation> {
        let h = link?;
        let node = self.node(h);
        if self.is_red(node.right) {
            return Some(InvariantViolation::RedRightLink);
        }
        if Some(h) != self.root() && node.color.is_red() && self.is_red(node.left) {
            return Some(InvariantViolation::ConsecutiveRedLinks);
        }
        self.first_23_violation(node.left).or_else(|| self.first_23_violation(node.right))
    }

    /// Every root-to-leaf path crosses the same number of black links.
    pub(crate) fn is_balanced(&self) -> bool {
        let mut black = 0usize;
        let mut current = self.root();
        while let Some(h) = current {
            if !self.is_red(Some(h)) {
                black += 1;
            }
            current = self.node(h).left;
        }
        self.is_balanced_below(self.root(), black)
    }

    fn is_balanced_below(&self, link: Option<Handle>, black: usize) -> bool {
        let Some(h) = link else {
            return black == 0;
        };
        let black = if self.is_red(Some(h)) {
            black
        } else if let Some(remaining) = black.checked_sub(1) {
            remaining
        } else {
            return false;
        };
        let node = self.node(h);
        self.is_balanced_below(node.left, black) && self.is_balanced_below(node.right, black)
    }
}

impl<K: Ord, V> RawLLRBMap<K, V> {
    /// Runs every check and reports the first violated invariant.
    pub(crate) fn validate(&self) -> Result<(), InvariantViolation> {
        let outcome = if !self.is_bst() {
            Err(InvariantViolation::OutOfOrder)
        } else if let Some((recorded, actual)) = self.first_size_mismatch(self.root()) {
            Err(InvariantViolation::SizeMismatch { recorded, actual })
        } else if let Some(violation) = self.first_23_violation(self.root()) {
            Err(violation)
        } else if !self.is_balanced() {
            Err(InvariantViolation::BlackImbalance)
        } else {
            Ok(())
        };

        if let Err(violation) = &outcome {
            log::debug!("validate: {violation}");
        }
        outcome
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::node::{Color, Node};
    use crate::raw::size::Size;

    /// `2` over `1` and `3`, colored as given.
    fn three(left: Color, right: Color) -> RawLLRBMap<i32, ()> {
        let mut tree = RawLLRBMap::with_capacity(3);
        tree.insert(2, ());
        tree.insert(1, ());
        tree.insert(3, ());
        let root = tree.root().unwrap();
        let (l, r) = (tree.node(root).left.unwrap(), tree.node(root).right.unwrap());
        tree.node_mut(l).color = left;
        tree.node_mut(r).color = right;
        tree
    }

    #[test]
    fn empty_tree_passes_every_check() {
        let tree: RawLLRBMap<i32, ()> = RawLLRBMap::new();
        assert!(tree.is_bst());
        assert!(tree.is_size_consistent());
        assert!(tree.is_23());
        assert!(tree.is_balanced());
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn perfect_three_node_tree_is_valid() {
        let tree = three(Color::Black, Color::Black);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn swapped_keys_break_order() {
        let mut tree = three(Color::Black, Color::Black);
        let root = tree.root().unwrap();
        let left = tree.node(root).left.unwrap();
        tree.node_mut(left).key = 5;
        assert!(!tree.is_bst());
        assert_eq!(tree.validate(), Err(InvariantViolation::OutOfOrder));
    }

    #[test]
    fn stale_size_is_reported() {
        let mut tree = three(Color::Black, Color::Black);
        let root = tree.root().unwrap();
        tree.node_mut(root).size = Size::from_usize(7);
        assert!(!tree.is_size_consistent());
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::SizeMismatch {
                recorded: 7,
                actual: 3
            })
        );
    }

    #[test]
    fn red_right_link_breaks_23_shape() {
        let tree = three(Color::Black, Color::Red);
        assert!(!tree.is_23());
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRightLink));
    }

    /// `3` over a red `2` over a red `1`.
    fn left_chain(top: Color) -> RawLLRBMap<i32, ()> {
        let mut tree = RawLLRBMap::new();
        let a = tree.attach(Node::new(1, ()), Color::Red);
        let b = tree.attach(Node::new(2, ()), Color::Red);
        let c = tree.attach(Node::new(3, ()), top);
        tree.node_mut(b).left = Some(a);
        tree.update_size(b);
        tree.node_mut(c).left = Some(b);
        tree.update_size(c);
        tree.set_root(Some(c));
        tree
    }

    #[test]
    fn consecutive_red_left_links_break_23_shape() {
        let tree = left_chain(Color::Black);
        assert!(!tree.is_23());
        assert_eq!(tree.validate(), Err(InvariantViolation::ConsecutiveRedLinks));
    }

    #[test]
    fn red_root_with_red_left_child_is_exempt() {
        let mut tree = RawLLRBMap::new();
        let a = tree.attach(Node::new(1, ()), Color::Red);
        let b = tree.attach(Node::new(2, ()), Color::Red);
        tree.node_mut(b).left = Some(a);
        tree.update_size(b);
        tree.set_root(Some(b));
        assert!(tree.is_23());
    }

    #[test]
    fn uneven_black_paths_are_unbalanced() {
        let tree = three(Color::Red, Color::Black);
        assert!(tree.is_23());
        assert!(!tree.is_balanced());
        assert_eq!(tree.validate(), Err(InvariantViolation::BlackImbalance));
    }
}

//! Local rotations and recolorings shared by insertion and deletion.
//!
//! Every primitive takes ownership of a subtree root and returns the (possibly different)
//! root of the rebuilt subtree. A primitive applied outside its precondition returns its
//! input untouched.

use super::handle::Handle;
use super::node::Color;
use super::raw_llrb_map::RawLLRBMap;

impl<K, V> RawLLRBMap<K, V> {
    /// Absent links are black.
    #[inline]
    pub(crate) fn is_red(&self, link: Option<Handle>) -> bool {
        link.is_some_and(|h| self.node(h).color.is_red())
    }

    /// Promotes a red right child into `h`'s position.
    pub(crate) fn rotate_left(&mut self, h: Handle) -> Handle {
        let Some(x) = self.node(h).right.filter(|&r| self.is_red(Some(r))) else {
            return h;
        };

        let x_left = self.node(x).left;
        let (size, color) = {
            let node = self.node_mut(h);
            node.right = x_left;
            (node.size, node.color)
        };
        self.node_mut(h).color = Color::Red;
        self.update_size(h);

        let top = self.node_mut(x);
        top.left = Some(h);
        top.size = size;
        top.color = color;
        x
    }

    /// Promotes a red left child into `h`'s position.
    pub(crate) fn rotate_right(&mut self, h: Handle) -> Handle {
        let Some(x) = self.node(h).left.filter(|&l| self.is_red(Some(l))) else {
            return h;
        };

        let x_right = self.node(x).right;
        let (size, color) = {
            let node = self.node_mut(h);
            node.left = x_right;
            (node.size, node.color)
        };
        self.node_mut(h).color = Color::Red;
        self.update_size(h);

        let top = self.node_mut(x);
        top.right = Some(h);
        top.size = size;
        top.color = color;
        x
    }

    /// Splits (black parent, red children) or merges (red parent, black children) a 4-node.
    pub(crate) fn flip_colors(&mut self, h: Handle) {
        let node = self.node(h);
        let (Some(left), Some(right)) = (node.left, node.right) else {
            return;
        };

        let parent_red = node.color.is_red();
        let left_red = self.is_red(Some(left));
        let right_red = self.is_red(Some(right));
        let splits = !parent_red && left_red && right_red;
        let merges = parent_red && !left_red && !right_red;
        if !(splits || merges) {
            return;
        }

        for handle in [h, left, right] {
            let node = self.node_mut(handle);
            node.color = node.color.flipped();
        }
    }

    /// Restores the local LLRB shape on the way back up from a mutation.
    ///
    /// The checks run in order; each may create the condition the next one tests.
    pub(crate) fn balance(&mut self, h: Handle) -> Handle {
        let mut h = h;
        if self.is_red(self.node(h).right) {
            h = self.rotate_left(h);
        }
        let left = self.node(h).left;
        if self.is_red(left) && self.is_red(left.and_then(|l| self.node(l).left)) {
            h = self.rotate_right(h);
        }
        if self.is_red(self.node(h).left) && self.is_red(self.node(h).right) {
            self.flip_colors(h);
        }
        self.update_size(h);
        h
    }

    /// Makes `h.left` or one of its children red before descending left.
    ///
    /// Requires `h` red with a black left child whose own left child is black; borrows from
    /// the right sibling when that sibling is a 3-node.
    pub(crate) fn move_red_left(&mut self, h: Handle) -> Handle {
        let node = self.node(h);
        let Some(left) = node.left else {
            return h;
        };
        let deficient = node.color.is_red() && !self.is_red(Some(left)) && !self.is_red(self.node(left).left);
        if !deficient {
            return h;
        }

        self.flip_colors(h);
        let Some(right) = self.node(h).right else {
            return h;
        };
        if !self.is_red(self.node(right).left) {
            return h;
        }

        let right = self.rotate_right(right);
        self.node_mut(h).right = Some(right);
        let h = self.rotate_left(h);
        self.flip_colors(h);
        h
    }

    /// Mirror of [`move_red_left`](Self::move_red_left), borrowing from the left sibling.
    pub(crate) fn move_red_right(&mut self, h: Handle) -> Handle {
        let node = self.node(h);
        let Some(right) = node.right else {
            return h;
        };
        let deficient = node.color.is_red() && !self.is_red(Some(right)) && !self.is_red(self.node(right).left);
        if !deficient {
            return h;
        }

        self.flip_colors(h);
        let Some(left) = self.node(h).left else {
            return h;
        };
        if !self.is_red(self.node(left).left) {
            return h;
        }

        let h = self.rotate_right(h);
        self.flip_colors(h);
        h
    }
}

use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::{LLRBTreeMap, Stack};
use crate::Traversal;
use crate::raw::{Handle, RawLLRBMap};

impl<K, V> LLRBTreeMap<K, V> {
    /// Calls `visit` on every entry, depth-first, in the given order.
    ///
    /// [`Traversal::InOrder`] visits keys in ascending order. The pre- and post-order walks
    /// expose the shape of the tree and depend on its balancing history.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{LLRBTreeMap, Traversal};
    ///
    /// let map = LLRBTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    ///
    /// let mut keys = Vec::new();
    /// map.traverse(Traversal::PreOrder, |k, _| keys.push(*k));
    /// assert_eq!(keys, [2, 1, 3]);
    ///
    /// keys.clear();
    /// map.traverse(Traversal::PostOrder, |k, _| keys.push(*k));
    /// assert_eq!(keys, [1, 3, 2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn traverse<F>(&self, order: Traversal, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        walk(&self.raw, self.raw.root(), order, &mut visit);
    }

    /// Gets an iterator that yields each node before its left and then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map: LLRBTreeMap<i32, ()> = (1..=3).map(|k| (k, ())).collect();
    /// let keys: Vec<i32> = map.pre_order().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        let mut pending = Stack::new();
        pending.extend(self.raw.root());
        PreOrder {
            tree: &self.raw,
            pending,
        }
    }

    /// Gets an iterator that yields each node after both of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map: LLRBTreeMap<i32, ()> = (1..=3).map(|k| (k, ())).collect();
    /// let keys: Vec<i32> = map.post_order().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 3, 2]);
    /// ```
    pub fn post_order(&self) -> PostOrder<'_, K, V> {
        let mut pending = SmallVec::new();
        pending.extend(self.raw.root().map(|h| (h, false)));
        PostOrder {
            tree: &self.raw,
            pending,
        }
    }
}

fn walk<K, V, F>(tree: &RawLLRBMap<K, V>, link: Option<Handle>, order: Traversal, visit: &mut F)
where
    F: FnMut(&K, &V),
{
    let Some(h) = link else {
        return;
    };
    let node = tree.node(h);
    if order == Traversal::PreOrder {
        visit(&node.key, &node.value);
    }
    walk(tree, node.left, order, visit);
    if order == Traversal::InOrder {
        visit(&node.key, &node.value);
    }
    walk(tree, node.right, order, visit);
    if order == Traversal::PostOrder {
        visit(&node.key, &node.value);
    }
}

/// A pre-order iterator over the entries of a `LLRBTreeMap`.
///
/// This `struct` is created by the [`pre_order`] method on [`LLRBTreeMap`].
///
/// [`pre_order`]: LLRBTreeMap::pre_order
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PreOrder<'a, K, V> {
    tree: &'a RawLLRBMap<K, V>,
    pending: Stack,
}

impl<'a, K: 'a, V: 'a> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let h = self.pending.pop()?;
        let node = self.tree.node(h);
        // Right goes first so the left subtree pops first.
        self.pending.extend(node.right);
        self.pending.extend(node.left);
        Some((&node.key, &node.value))
    }
}

impl<K, V> FusedIterator for PreOrder<'_, K, V> {}

impl<K, V> Clone for PreOrder<'_, K, V> {
    fn clone(&self) -> Self {
        PreOrder {
            tree: self.tree,
            pending: self.pending.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PreOrder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A post-order iterator over the entries of a `LLRBTreeMap`.
///
/// This `struct` is created by the [`post_order`] method on [`LLRBTreeMap`].
///
/// [`post_order`]: LLRBTreeMap::post_order
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PostOrder<'a, K, V> {
    tree: &'a RawLLRBMap<K, V>,
    // A node is yielded once its flag says both children were pushed.
    pending: SmallVec<[(Handle, bool); 32]>,
}

impl<'a, K: 'a, V: 'a> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (h, expanded) = self.pending.pop()?;
            let node = self.tree.node(h);
            if expanded {
                return Some((&node.key, &node.value));
            }
            self.pending.push((h, true));
            self.pending.extend(node.right.map(|r| (r, false)));
            self.pending.extend(node.left.map(|l| (l, false)));
        }
    }
}

impl<K, V> FusedIterator for PostOrder<'_, K, V> {}

impl<K, V> Clone for PostOrder<'_, K, V> {
    fn clone(&self) -> Self {
        PostOrder {
            tree: self.tree,
            pending: self.pending.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PostOrder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

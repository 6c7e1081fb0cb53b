use core::borrow::Borrow;
use core::cmp::Ordering::{self, Equal, Greater, Less};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node};
use super::size::Size;

/// The core left-leaning red-black tree backing `LLRBTreeMap`.
///
/// Every mutation recurses from the root to the affected position and rebuilds the path on
/// the way back: each frame takes a subtree root and returns the new root of that subtree.
pub(crate) struct RawLLRBMap<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<K, V> RawLLRBMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    pub(crate) fn entry(&self, h: Handle) -> (&K, &V) {
        let node = self.node(h);
        (&node.key, &node.value)
    }

    /// Subtree size behind a link; absent links hold nothing.
    #[inline]
    pub(crate) fn size_of(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |h| self.node(h).size.to_usize())
    }

    /// Recomputes `h.size` from its children.
    #[inline]
    pub(crate) fn update_size(&mut self, h: Handle) {
        let node = self.node(h);
        let size = Size::of_parent(self.size_of(node.left), self.size_of(node.right));
        self.node_mut(h).size = size;
    }

    /// Number of links on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |h| {
            let node = self.node(h);
            1 + self.height_of(node.left).max(self.height_of(node.right))
        })
    }

    /// Drains every entry in ascending key order, freeing nodes as it goes.
    pub(crate) fn drain_to_vec(&mut self) -> alloc::vec::Vec<(K, V)> {
        let mut entries = alloc::vec::Vec::with_capacity(self.len());
        let mut stack: smallvec::SmallVec<[Handle; 32]> = smallvec::SmallVec::new();
        let mut current = self.root.take();

        loop {
            while let Some(h) = current {
                stack.push(h);
                current = self.node(h).left;
            }
            let Some(h) = stack.pop() else { break };
            let node = self.nodes.take(h);
            current = node.right;
            entries.push(node.into_entry());
        }

        self.nodes.clear();
        entries
    }

    /// Returns the node at 1-indexed in-order `position`.
    pub(crate) fn select(&self, position: usize) -> Option<Handle> {
        let mut remaining = position;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.node(h);
            let here = self.size_of(node.left) + 1;
            match here.cmp(&remaining) {
                Greater => current = node.left,
                Less => {
                    remaining -= here;
                    current = node.right;
                }
                Equal => return Some(h),
            }
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn attach(&mut self, node: Node<K, V>, color: Color) -> Handle {
        let h = self.nodes.alloc(node);
        self.node_mut(h).color = color;
        h
    }

    #[cfg(test)]
    pub(crate) fn set_root(&mut self, root: Option<Handle>) {
        self.root = root;
    }

    #[cfg(test)]
    pub(crate) fn live_nodes(&self) -> usize {
        self.nodes.len()
    }
}

impl<K: Ord, V> RawLLRBMap<K, V> {
    #[inline]
    fn compare<Q>(&self, key: &Q, h: Handle) -> Ordering
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        key.cmp(self.node(h).key.borrow())
    }

    /// Searches for a key and returns its node.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.node(h);
            current = match key.cmp(node.key.borrow()) {
                Less => node.left,
                Greater => node.right,
                Equal => return Some(h),
            };
        }
        None
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|h| self.entry(h))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let h = self.search(key)?;
        Some(&mut self.node_mut(h).value)
    }

    /// Returns the node holding the smallest key.
    pub(crate) fn min(&self) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        Some(current)
    }

    /// Returns the node holding the largest key.
    pub(crate) fn max(&self) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        Some(current)
    }

    /// Returns the node holding the greatest key `<= key`.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.node(h);
            current = match key.cmp(node.key.borrow()) {
                Less => node.left,
                Equal => return Some(h),
                Greater => {
                    best = Some(h);
                    node.right
                }
            };
        }
        best
    }

    /// Returns the node holding the smallest key `>= key`.
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.node(h);
            current = match key.cmp(node.key.borrow()) {
                Greater => node.right,
                Equal => return Some(h),
                Less => {
                    best = Some(h);
                    node.left
                }
            };
        }
        best
    }

    /// Counts the keys strictly less than `key`, whether or not `key` is present.
    pub(crate) fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.locate_rank(key) {
            Ok(rank) | Err(rank) => rank,
        }
    }

    /// Returns the zero-based rank of `key`, or `None` if it is not present.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.locate_rank(key).ok()
    }

    /// One descent: `Ok(rank)` when `key` is stored, `Err(rank)` with the count of smaller
    /// keys when the descent falls off a leaf.
    fn locate_rank<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.node(h);
            match key.cmp(node.key.borrow()) {
                Less => current = node.left,
                Greater => {
                    rank += self.size_of(node.left) + 1;
                    current = node.right;
                }
                Equal => return Ok(rank + self.size_of(node.left)),
            }
        }
        Err(rank)
    }

    /// Inserts a key-value pair, returning the old value if the key was already present.
    ///
    /// An equal key keeps its original key object and only the value is replaced.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, replaced) = self.put(self.root, key, value);
        self.node_mut(root).color = Color::Black;
        self.root = Some(root);
        replaced
    }

    fn put(&mut self, link: Option<Handle>, key: K, value: V) -> (Handle, Option<V>) {
        let Some(h) = link else {
            return (self.nodes.alloc(Node::new(key, value)), None);
        };

        let node = self.node(h);
        let replaced = match key.cmp(&node.key) {
            Less => {
                let left = node.left;
                let (left, replaced) = self.put(left, key, value);
                self.node_mut(h).left = Some(left);
                replaced
            }
            Greater => {
                let right = node.right;
                let (right, replaced) = self.put(right, key, value);
                self.node_mut(h).right = Some(right);
                replaced
            }
            Equal => Some(core::mem::replace(&mut self.node_mut(h).value, value)),
        };

        (self.balance(h), replaced)
    }

    /// Removes the smallest entry.
    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let root = self.prepare_root_for_delete()?;
        let (root, removed) = self.delete_min(root);
        self.finish_delete(root);
        Some(removed)
    }

    /// Removes the largest entry.
    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let root = self.prepare_root_for_delete()?;
        let (root, removed) = self.delete_max(root);
        self.finish_delete(root);
        Some(removed)
    }

    /// Removes `key`, returning the stored entry.
    ///
    /// A missing key leaves the tree untouched.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if self.search(key).is_none() {
            log::trace!("remove: key not present, tree left untouched");
            return None;
        }

        let root = self.prepare_root_for_delete()?;
        let (root, removed) = self.delete(root, key);
        self.finish_delete(root);
        removed
    }

    /// Colors the root red when both its children are black, so the first descent step is safe.
    fn prepare_root_for_delete(&mut self) -> Option<Handle> {
        let root = self.root?;
        let node = self.node(root);
        if !self.is_red(node.left) && !self.is_red(node.right) {
            self.node_mut(root).color = Color::Red;
        }
        Some(root)
    }

    fn finish_delete(&mut self, root: Option<Handle>) {
        self.root = root;
        if let Some(root) = root {
            if self.node(root).color.is_red() {
                log::trace!("delete: recoloring root black");
            }
            self.node_mut(root).color = Color::Black;
        }
    }

    /// Detaches `h`, handing its right subtree (if any) to the parent.
    fn unlink(&mut self, h: Handle) -> (Option<Handle>, (K, V)) {
        let node = self.nodes.take(h);
        debug_assert!(node.left.is_none(), "unlink: node still owns a left subtree");
        (node.right, node.into_entry())
    }

    fn delete_min(&mut self, h: Handle) -> (Option<Handle>, (K, V)) {
        let Some(left) = self.node(h).left else {
            return self.unlink(h);
        };

        let mut h = h;
        if !self.is_red(Some(left)) && !self.is_red(self.node(left).left) {
            h = self.move_red_left(h);
        }

        let left = self.node(h).left.expect("delete_min: left subtree vanished during descent");
        let (left, removed) = self.delete_min(left);
        self.node_mut(h).left = left;
        (Some(self.balance(h)), removed)
    }

    fn delete_max(&mut self, h: Handle) -> (Option<Handle>, (K, V)) {
        let mut h = h;
        if self.is_red(self.node(h).left) {
            h = self.rotate_right(h);
        }

        let Some(right) = self.node(h).right else {
            let node = self.nodes.take(h);
            debug_assert!(node.left.is_none(), "delete_max: node still owns a left subtree");
            return (node.left, node.into_entry());
        };

        if !self.is_red(Some(right)) && !self.is_red(self.node(right).left) {
            h = self.move_red_right(h);
        }

        let right = self.node(h).right.expect("delete_max: right subtree vanished during descent");
        let (right, removed) = self.delete_max(right);
        self.node_mut(h).right = right;
        (Some(self.balance(h)), removed)
    }

    fn delete<Q>(&mut self, h: Handle, key: &Q) -> (Option<Handle>, Option<(K, V)>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut h = h;
        let removed;

        if self.compare(key, h) == Less {
            let Some(left) = self.node(h).left else {
                return (Some(h), None);
            };
            if !self.is_red(Some(left)) && !self.is_red(self.node(left).left) {
                h = self.move_red_left(h);
            }
            let left = self.node(h).left.expect("delete: left subtree vanished during descent");
            let (left, found) = self.delete(left, key);
            self.node_mut(h).left = left;
            removed = found;
        } else {
            if self.is_red(self.node(h).left) {
                h = self.rotate_right(h);
            }
            if self.compare(key, h) == Equal && self.node(h).right.is_none() {
                let (rest, entry) = self.unlink(h);
                return (rest, Some(entry));
            }
            let Some(right) = self.node(h).right else {
                return (Some(self.balance(h)), None);
            };
            if !self.is_red(Some(right)) && !self.is_red(self.node(right).left) {
                h = self.move_red_right(h);
            }

            let right = self.node(h).right.expect("delete: right subtree vanished during descent");
            if self.compare(key, h) == Equal {
                // Replace this entry with its successor, then drop the successor's node.
                let (right, successor) = self.delete_min(right);
                let node = self.node_mut(h);
                node.right = right;
                let key = core::mem::replace(&mut node.key, successor.0);
                let value = core::mem::replace(&mut node.value, successor.1);
                removed = Some((key, value));
            } else {
                let (right, found) = self.delete(right, key);
                self.node_mut(h).right = right;
                removed = found;
            }
        }

        (Some(self.balance(h)), removed)
    }
}

impl<K: Clone, V: Clone> Clone for RawLLRBMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    impl<K: Ord, V> RawLLRBMap<K, V> {
        fn keys_in_order(&self) -> Vec<&K> {
            (1..=self.len()).map(|k| &self.node(self.select(k).unwrap()).key).collect()
        }

        fn assert_valid(&self) {
            if let Err(violation) = self.validate() {
                panic!("tree invariant violated: {violation}");
            }
            assert_eq!(self.live_nodes(), self.len(), "arena holds detached nodes");
        }
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
        PopFirst,
        PopLast,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0i32..400).prop_map(Op::Insert),
            3 => (0i32..400).prop_map(Op::Remove),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn invariants_hold_after_every_mutation(ops in prop::collection::vec(op_strategy(), 0..600)) {
            let mut tree: RawLLRBMap<i32, i32> = RawLLRBMap::new();
            let mut model: BTreeMap<i32, i32> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        prop_assert_eq!(tree.insert(key, key * 3), model.insert(key, key * 3));
                    }
                    Op::Remove(key) => {
                        prop_assert_eq!(tree.remove_entry(&key), model.remove_entry(&key));
                    }
                    Op::PopFirst => prop_assert_eq!(tree.pop_first(), model.pop_first()),
                    Op::PopLast => prop_assert_eq!(tree.pop_last(), model.pop_last()),
                }
                tree.assert_valid();
                prop_assert_eq!(tree.len(), model.len());
            }

            let expected: Vec<&i32> = model.keys().collect();
            prop_assert_eq!(tree.keys_in_order(), expected);
        }

        #[test]
        fn height_stays_logarithmic(keys in prop::collection::vec(any::<i32>(), 1..2000)) {
            let mut tree = RawLLRBMap::new();
            for key in keys {
                tree.insert(key, ());
            }
            let bound = 2.0 * ((tree.len() + 1) as f64).log2();
            prop_assert!(tree.height() as f64 <= bound, "height {} exceeds {}", tree.height(), bound);
        }

        #[test]
        fn rank_inverts_select(keys in prop::collection::vec(0i32..5000, 1..500)) {
            let mut tree = RawLLRBMap::new();
            for key in keys {
                tree.insert(key, ());
            }
            for position in 1..=tree.len() {
                let h = tree.select(position).unwrap();
                prop_assert_eq!(tree.rank(&tree.node(h).key), position - 1);
            }
            prop_assert!(tree.select(0).is_none());
            prop_assert!(tree.select(tree.len() + 1).is_none());
        }

        #[test]
        fn rank_of_agrees_with_search(keys in prop::collection::vec(0i32..500, 0..200), query in 0i32..500) {
            let mut tree = RawLLRBMap::new();
            for key in &keys {
                tree.insert(*key, ());
            }
            let below = tree.rank(&query);
            let expected = tree.search(&query).map(|_| below);
            prop_assert_eq!(tree.rank_of(&query), expected);
            prop_assert_eq!(below, keys.iter().collect::<alloc::collections::BTreeSet<_>>().range::<&i32, _>(..&query).count());
        }
    }

    /// A tree holding one key per arena slot, ascending.
    fn full_tree() -> RawLLRBMap<usize, ()> {
        let mut tree = RawLLRBMap::with_capacity(Size::MAX);
        for key in 0..Size::MAX {
            tree.insert(key, ());
        }
        tree
    }

    #[test]
    fn full_arena_root_size_is_max() {
        let mut tree = full_tree();
        assert_eq!(tree.len(), Size::MAX);
        assert_eq!(tree.rank(&Size::MAX), Size::MAX);
        assert_eq!(tree.select(Size::MAX).map(|h| tree.node(h).key), Some(Size::MAX - 1));

        // Replacing needs no new slot; removing frees one for the next insert.
        assert_eq!(tree.insert(0, ()), Some(()));
        assert_eq!(tree.remove_entry(&7), Some((7, ())));
        assert_eq!(tree.insert(Size::MAX, ()), None);
        assert_eq!(tree.len(), Size::MAX);
        tree.assert_valid();
    }

    #[test]
    #[should_panic(expected = "arena is at maximum capacity")]
    fn insert_into_full_arena_panics() {
        let mut tree = full_tree();
        tree.insert(Size::MAX, ());
    }

    #[test]
    fn rank_of_missing_key_is_none_but_rank_counts_smaller() {
        let mut tree = RawLLRBMap::new();
        for key in [10, 20, 30] {
            tree.insert(key, ());
        }
        assert_eq!(tree.rank_of(&25), None);
        assert_eq!(tree.rank(&25), 2);
        assert_eq!(tree.rank_of(&30), Some(2));
        assert_eq!(tree.rank_of(&5), None);
        assert_eq!(tree.rank(&5), 0);
        assert_eq!(tree.rank(&99), 3);
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let mut tree = RawLLRBMap::new();
        for key in 0..1024 {
            tree.insert(key, ());
            tree.assert_valid();
        }
        assert!(tree.height() <= 20);
        assert_eq!(tree.node(tree.root().unwrap()).color, Color::Black);
    }

    #[test]
    fn descending_deletes_stay_balanced() {
        let mut tree = RawLLRBMap::new();
        for key in 0..300 {
            tree.insert(key, key);
        }
        for key in (0..300).rev() {
            assert_eq!(tree.remove_entry(&key), Some((key, key)));
            tree.assert_valid();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.live_nodes(), 0);
    }

    #[test]
    fn missing_key_removal_leaves_structure_alone() {
        let mut tree = RawLLRBMap::new();
        for key in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(key, ());
        }
        let before: Vec<_> = (1..=tree.len()).map(|k| tree.select(k)).collect();
        let root = tree.root();

        assert!(tree.remove_entry(&45).is_none());
        tree.assert_valid();
        assert_eq!(tree.root(), root);
        let after: Vec<_> = (1..=tree.len()).map(|k| tree.select(k)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn delete_engine_tolerates_missing_keys() {
        let mut tree = RawLLRBMap::new();
        for key in (0..64).map(|k| k * 2) {
            tree.insert(key, ());
        }
        for missing in [-1, 7, 63, 200] {
            let root = tree.prepare_root_for_delete().unwrap();
            let (root, removed) = tree.delete(root, &missing);
            tree.finish_delete(root);
            assert!(removed.is_none());
            assert_eq!(tree.len(), 64);
            tree.assert_valid();
        }
    }

    #[test]
    fn pops_on_empty_tree_are_noops() {
        let mut tree: RawLLRBMap<i32, ()> = RawLLRBMap::new();
        assert!(tree.pop_first().is_none());
        assert!(tree.pop_last().is_none());
        assert!(tree.remove_entry(&1).is_none());
        assert_eq!(tree.height(), 0);
        assert!(tree.min().is_none());
        assert!(tree.max().is_none());
    }

    #[test]
    fn drain_yields_sorted_entries_and_empties_tree() {
        let mut tree = RawLLRBMap::new();
        for key in [5, 1, 4, 2, 3] {
            tree.insert(key, key * 10);
        }
        assert_eq!(tree.drain_to_vec(), [(1, 10), (2, 20), (3, 30), (4, 40), (5, 50)]);
        assert!(tree.is_empty());
        assert_eq!(tree.live_nodes(), 0);
    }
}

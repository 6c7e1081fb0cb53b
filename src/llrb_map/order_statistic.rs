use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::LLRBTreeMap;
use crate::Rank;

impl<K: Ord, V> LLRBTreeMap<K, V> {
    /// Returns the entry with the greatest key less than or equal to `key`.
    ///
    /// Returns `None` if every key in the map is greater than `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([(5, 'a'), (10, 'b'), (15, 'c')]);
    ///
    /// assert_eq!(map.floor(&12), Some((&10, &'b')));
    /// assert_eq!(map.floor(&10), Some((&10, &'b')));
    /// assert_eq!(map.floor(&4), None);
    /// ```
    #[must_use]
    pub fn floor<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(key).map(|h| self.raw.entry(h))
    }

    /// Returns the entry with the smallest key greater than or equal to `key`.
    ///
    /// Returns `None` if every key in the map is less than `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([(5, 'a'), (10, 'b'), (15, 'c')]);
    ///
    /// assert_eq!(map.ceiling(&12), Some((&15, &'c')));
    /// assert_eq!(map.ceiling(&15), Some((&15, &'c')));
    /// assert_eq!(map.ceiling(&16), None);
    /// ```
    #[must_use]
    pub fn ceiling<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(key).map(|h| self.raw.entry(h))
    }

    /// Returns the number of keys strictly less than `key`.
    ///
    /// `key` does not need to be present; for a present key this is its zero-based position.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([(5, ()), (10, ()), (15, ())]);
    ///
    /// assert_eq!(map.rank(&10), 1);
    /// assert_eq!(map.rank(&12), 2);
    /// assert_eq!(map.rank(&100), 3);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the zero-based rank of `key` in sorted order, or `None` if the
    /// key is not present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut map = LLRBTreeMap::new();
    /// map.insert(10, "a");
    /// map.insert(20, "b");
    ///
    /// assert_eq!(map.rank_of(&20), Some(1));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }
}

impl<K, V> LLRBTreeMap<K, V> {
    /// Returns the entry at 1-indexed `position` in sorted order.
    ///
    /// `select(1)` is the smallest entry and `select(len())` the largest. Returns `None` for
    /// position 0 or anything past `len()`. See [`get_by_rank`](Self::get_by_rank) for the
    /// zero-based variant.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([("a", 10), ("c", 30), ("b", 20)]);
    ///
    /// assert_eq!(map.select(1), Some((&"a", &10)));
    /// assert_eq!(map.select(3), Some((&"c", &30)));
    /// assert_eq!(map.select(0), None);
    /// assert_eq!(map.select(4), None);
    /// ```
    #[must_use]
    pub fn select(&self, position: usize) -> Option<(&K, &V)> {
        self.raw.select(position).map(|h| self.raw.entry(h))
    }

    /// Returns the key-value pair at zero-based `rank` in sorted order.
    ///
    /// Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut map = LLRBTreeMap::new();
    /// map.insert("a", 10);
    /// map.insert("c", 30);
    /// map.insert("b", 20);
    ///
    /// let (key, value) = map.get_by_rank(1).unwrap();
    /// assert_eq!((key, value), (&"b", &20));
    /// assert!(map.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.select(rank.checked_add(1)?)
    }

    /// Returns the key and a mutable reference to the value at zero-based `rank`.
    ///
    /// The key stays behind a shared reference since changing it could break the ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut map = LLRBTreeMap::from([(10, "a"), (5, "b")]);
    ///
    /// if let Some((key, value)) = map.get_by_rank_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    /// assert_eq!(map.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let h = self.raw.select(rank.checked_add(1)?)?;
        let node = self.raw.node_mut(h);
        Some((&node.key, &mut node.value))
    }
}

/// Indexes into the map by zero-based rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<K, V> Index<Rank> for LLRBTreeMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}

/// Mutably indexes into the map by zero-based rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use llrb_tree::{LLRBTreeMap, Rank};
///
/// let mut map = LLRBTreeMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
///
/// assert_eq!(map.get("b"), Some(&5));
/// ```
impl<K, V> IndexMut<Rank> for LLRBTreeMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}

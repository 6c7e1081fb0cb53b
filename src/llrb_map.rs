use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use smallvec::SmallVec;

use crate::InvariantViolation;
use crate::raw::{Handle, RawLLRBMap};

mod capacity;
mod order_statistic;
mod traversal;

pub use traversal::{PostOrder, PreOrder};

/// Pending nodes of a depth-first walk. The tree's height bounds its depth.
pub(crate) type Stack = SmallVec<[Handle; 32]>;

/// An ordered map stored as a [left-leaning red-black tree].
///
/// The tree encodes a 2-3 tree: a red node is glued to its parent to form a 3-node, and red
/// links only ever lean left. Every insert and delete recurses to the affected leaf and
/// repairs the encoding with rotations and color flips on the way back up, so no root-to-leaf
/// path is longer than `2 * log2(n + 1)` and every keyed operation is O(log n) worst case.
///
/// Each node also records the size of its subtree. That turns [`floor`], [`ceiling`],
/// [`rank`] and [`select`] into single root-to-leaf descents.
///
/// Keys are ordered by [`Ord`]. Changing a key's ordering while it is stored (through
/// [`Cell`], [`RefCell`] and the like) breaks the search invariant; [`validate`] will report
/// it as [`InvariantViolation::OutOfOrder`], and lookups may miss, but memory stays safe.
///
/// # Examples
///
/// ```
/// use llrb_tree::LLRBTreeMap;
///
/// let mut grades = LLRBTreeMap::new();
/// grades.insert(72, "Dana");
/// grades.insert(88, "Eli");
/// grades.insert(95, "Fay");
///
/// // Who scored at most 90, and how many scored below that?
/// assert_eq!(grades.floor(&90), Some((&88, &"Eli")));
/// assert_eq!(grades.rank(&90), 2);
///
/// grades.remove(&88);
/// assert_eq!(grades.floor(&90), Some((&72, &"Dana")));
/// assert!(grades.validate().is_ok());
/// ```
///
/// Building from an array inserts the pairs one by one:
///
/// ```
/// use llrb_tree::LLRBTreeMap;
///
/// let map = LLRBTreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
/// assert_eq!(map.root_key_value(), Some((&2, &'b')));
/// assert_eq!(map.height(), 2);
/// ```
///
/// [left-leaning red-black tree]: https://en.wikipedia.org/wiki/Left-leaning_red%E2%80%93black_tree
/// [`floor`]: LLRBTreeMap::floor
/// [`ceiling`]: LLRBTreeMap::ceiling
/// [`rank`]: LLRBTreeMap::rank
/// [`select`]: LLRBTreeMap::select
/// [`validate`]: LLRBTreeMap::validate
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct LLRBTreeMap<K, V> {
    raw: RawLLRBMap<K, V>,
}

/// In-order iterator over a `LLRBTreeMap`, created by [`LLRBTreeMap::iter`].
///
/// Both ends keep their own spine of pending ancestors, so a step costs amortized O(1) and the
/// stacks never hold more than `height()` handles.
///
/// ```
/// use llrb_tree::LLRBTreeMap;
///
/// let map = LLRBTreeMap::from([(10, 'x'), (20, 'y'), (30, 'z')]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next_back(), Some((&30, &'z')));
/// assert_eq!(iter.len(), 2);
/// assert_eq!(iter.next(), Some((&10, &'x')));
/// assert_eq!(iter.next_back(), Some((&20, &'y')));
/// assert_eq!(iter.next(), None);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    tree: &'a RawLLRBMap<K, V>,
    // Left spine of the unvisited front, and right spine of the unvisited back.
    front: Stack,
    back: Stack,
    remaining: usize,
}

/// Owning in-order iterator, created by `LLRBTreeMap::into_iter`.
///
/// The tree is dismantled up front; the iterator then walks the released entries.
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// Ascending keys of a `LLRBTreeMap`, created by [`LLRBTreeMap::keys`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// Values of a `LLRBTreeMap` in key order, created by [`LLRBTreeMap::values`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// Owned ascending keys, created by [`LLRBTreeMap::into_keys`].
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> LLRBTreeMap<K, V> {
    /// Creates an empty tree. No node storage is allocated until the first insert.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map: LLRBTreeMap<u64, String> = LLRBTreeMap::new();
    /// assert_eq!(map.height(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> LLRBTreeMap<K, V> {
        LLRBTreeMap { raw: RawLLRBMap::new() }
    }

    /// Drops every node and leaves an empty tree. The node arena keeps its capacity.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut map = LLRBTreeMap::from([(1, ()), (2, ())]);
    /// let capacity = map.capacity();
    /// map.clear();
    /// assert_eq!(map.root_key_value(), None);
    /// assert_eq!(map.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Number of stored entries.
    ///
    /// # Complexity
    ///
    /// O(1): it is the subtree size recorded at the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// `true` when the tree has no root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty map has height 0. The balancing scheme guarantees
    /// `height() <= 2 * log2(len() + 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map: LLRBTreeMap<u32, ()> = (0..1000).map(|k| (k, ())).collect();
    /// assert!(map.height() <= 19);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Returns the entry stored at the root of the tree.
    ///
    /// The root holds no particular position in key order; it is mainly useful for inspecting
    /// the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// assert_eq!(map.root_key_value(), Some((&2, &'b')));
    /// ```
    #[must_use]
    pub fn root_key_value(&self) -> Option<(&K, &V)> {
        self.raw.root().map(|h| self.raw.entry(h))
    }

    /// In-order iterator: entries come out in ascending key order, from either end.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map: LLRBTreeMap<i32, i32> = [5, 1, 4, 2, 3].into_iter().map(|k| (k, k * k)).collect();
    /// let squares: Vec<i32> = map.iter().map(|(_, v)| *v).collect();
    /// assert_eq!(squares, [1, 4, 9, 16, 25]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; amortized O(1) per step.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.raw)
    }

    /// Keys in ascending order.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([("pear", 3), ("apple", 7)]);
    /// assert!(map.keys().eq(["apple", "pear"].iter()));
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Values in ascending key order.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([("pear", 3), ("apple", 7)]);
    /// assert_eq!(map.values().sum::<i32>(), 10);
    /// assert_eq!(map.values().next(), Some(&7));
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Dismantles the tree and yields its keys in ascending order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys { inner: self.into_iter() }
    }

    /// Returns `true` if every subtree size matches the nodes actually below it.
    ///
    /// Diagnostic; always `true` for a map maintained through this API.
    #[must_use]
    pub fn is_size_consistent(&self) -> bool {
        self.raw.is_size_consistent()
    }

    /// Returns `true` if the tree is a faithful 2-3 tree encoding: no red link leans right and
    /// no red node below the root has a red left child.
    ///
    /// Diagnostic; always `true` for a map maintained through this API.
    #[must_use]
    pub fn is_23(&self) -> bool {
        self.raw.is_23()
    }

    /// Returns `true` if every path from the root to an empty link crosses the same number of
    /// black links.
    ///
    /// Diagnostic; always `true` for a map maintained through this API.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.raw.is_balanced()
    }
}

impl<K: Ord, V> LLRBTreeMap<K, V> {
    /// Looks up `key` with a single descent from the root.
    ///
    /// `key` may be any borrowed form of `K` whose ordering agrees with `K`'s.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([(String::from("red"), 1), (String::from("black"), 2)]);
    /// assert_eq!(map.get("black"), Some(&2));
    /// assert_eq!(map.get("green"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key).map(|(_, v)| v)
    }

    /// Like [`get`](Self::get), but also returns the key as stored in the tree.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Mutable access to the value under `key`. The tree shape is not touched.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut hits = LLRBTreeMap::from([("/index", 0)]);
    /// *hits.get_mut("/index").unwrap() += 1;
    /// assert_eq!(hits["/index"], 1);
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// `true` if `key` is stored.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// The entry with the smallest key: the end of the leftmost path.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([(9, 'i'), (4, 'd'), (7, 'g')]);
    /// assert_eq!(map.first_key_value(), Some((&4, &'d')));
    /// assert_eq!(LLRBTreeMap::<i32, char>::new().first_key_value(), None);
    /// ```
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.min().map(|h| self.raw.entry(h))
    }

    /// The entry with the largest key: the end of the rightmost path.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.max().map(|h| self.raw.entry(h))
    }

    /// Removes the entry with the smallest key and rebalances.
    ///
    /// Returns `None`, leaving the map untouched, when it is empty.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut queue: LLRBTreeMap<u32, &str> = LLRBTreeMap::from([(3, "low"), (1, "urgent"), (2, "normal")]);
    /// assert_eq!(queue.pop_first(), Some((1, "urgent")));
    /// assert_eq!(queue.len(), 2);
    /// assert!(queue.validate().is_ok());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes the entry with the largest key and rebalances.
    ///
    /// Returns `None`, leaving the map untouched, when it is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Stores `value` under `key`.
    ///
    /// A new key becomes a red leaf and the path back to the root is rebalanced; `None` is
    /// returned. An existing key keeps its node and its original key object, and only the
    /// value is swapped; the previous value is returned and the shape is unchanged.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut map = LLRBTreeMap::new();
    /// assert_eq!(map.insert(8, "eight"), None);
    /// assert_eq!(map.insert(8, "VIII"), Some("eight"));
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Deletes `key` and returns its value.
    ///
    /// A missing key returns `None` without recoloring or rotating anything.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut map: LLRBTreeMap<i32, ()> = [50, 30, 70, 20, 40].into_iter().map(|k| (k, ())).collect();
    /// assert_eq!(map.remove(&30), Some(()));
    /// assert_eq!(map.remove(&30), None);
    /// assert!(map.keys().eq([20, 40, 50, 70].iter()));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).map(|(_, v)| v)
    }

    /// Like [`remove`](Self::remove), but hands back the stored key as well.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Keeps only the entries for which `f` returns `true`, visiting them in ascending key order.
    ///
    /// The tree is dismantled and the survivors are inserted again, so the result is freshly
    /// balanced.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut stock = LLRBTreeMap::from([("bolts", 0), ("nuts", 12), ("screws", 0)]);
    /// stock.retain(|_, count| *count > 0);
    /// assert!(stock.keys().eq(["nuts"].iter()));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let entries = self.raw.drain_to_vec();
        for (key, mut value) in entries {
            if f(&key, &mut value) {
                self.raw.insert(key, value);
            }
        }
    }

    /// Returns `true` if every key lies strictly between the keys of the ancestors that
    /// bound it, i.e. an in-order walk is strictly ascending.
    ///
    /// Diagnostic; always `true` for a map maintained through this API.
    #[must_use]
    pub fn is_bst(&self) -> bool {
        self.raw.is_bst()
    }

    /// Checks every structural invariant of the tree and reports the first one that fails.
    ///
    /// The checks are, in order: key order, subtree sizes, the 2-3 shape, and black balance.
    ///
    /// # Errors
    ///
    /// Returns the violated [`InvariantViolation`]. A map maintained only through this API always
    /// returns `Ok(())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let mut map: LLRBTreeMap<i32, ()> = (0..100).map(|k| (k, ())).collect();
    /// map.remove(&42);
    /// assert_eq!(map.validate(), Ok(()));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.raw.validate()
    }
}

impl<K: Clone, V: Clone> Clone for LLRBTreeMap<K, V> {
    fn clone(&self) -> Self {
        LLRBTreeMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for LLRBTreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for LLRBTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for LLRBTreeMap<K, V> {}

impl<K: PartialOrd, V: PartialOrd> PartialOrd for LLRBTreeMap<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for LLRBTreeMap<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LLRBTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for LLRBTreeMap<K, V> {
    fn default() -> Self {
        LLRBTreeMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for LLRBTreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = LLRBTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for LLRBTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for LLRBTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LLRBTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for LLRBTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Releases every node in key order; the owned entries then iterate from either end.
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map = LLRBTreeMap::from([(2, "two"), (1, "one"), (3, "three")]);
    /// let names: Vec<&str> = map.into_iter().rev().map(|(_, name)| name).collect();
    /// assert_eq!(names, ["three", "two", "one"]);
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for LLRBTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `LLRBTreeMap`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for LLRBTreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(tree: &'a RawLLRBMap<K, V>) -> Self {
        let mut iter = Iter {
            tree,
            front: Stack::new(),
            back: Stack::new(),
            remaining: tree.len(),
        };
        iter.descend_left(tree.root());
        iter.descend_right(tree.root());
        iter
    }

    fn descend_left(&mut self, mut link: Option<Handle>) {
        while let Some(h) = link {
            self.front.push(h);
            link = self.tree.node(h).left;
        }
    }

    fn descend_right(&mut self, mut link: Option<Handle>) {
        while let Some(h) = link {
            self.back.push(h);
            link = self.tree.node(h).right;
        }
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let h = self.front.pop()?;
        self.descend_left(self.tree.node(h).right);
        self.remaining -= 1;
        Some(self.tree.entry(h))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // The shared countdown stops both ends before they cross.
        if self.remaining == 0 {
            return None;
        }
        let h = self.back.pop()?;
        self.descend_right(self.tree.node(h).left);
        self.remaining -= 1;
        Some(self.tree.entry(h))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::llrb_map::{IntoKeys, Keys, PostOrder as MapPostOrder, PreOrder as MapPreOrder};
use crate::{InvariantViolation, LLRBTreeMap, Traversal};

mod capacity;
mod order_statistic;

/// An ordered set based on a left-leaning red-black tree.
///
/// See [`LLRBTreeMap`]'s documentation for the performance guarantees and the order-statistic
/// extensions; every set operation forwards to a map with `()` values.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use llrb_tree::LLRBTreeSet;
///
/// let mut books = LLRBTreeSet::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
///
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// books.remove("The Odyssey");
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
pub struct LLRBTreeSet<T> {
    map: LLRBTreeMap<T, ()>,
}

/// An iterator over the items of a `LLRBTreeSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`LLRBTreeSet`].
///
/// # Examples
///
/// ```
/// use llrb_tree::LLRBTreeSet;
///
/// let set = LLRBTreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// ```
///
/// [`iter`]: LLRBTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: Keys<'a, T, ()>,
}

/// An owning iterator over the items of a `LLRBTreeSet`, in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`LLRBTreeSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<T> {
    inner: IntoKeys<T, ()>,
}

/// A pre-order iterator over the items of a `LLRBTreeSet`.
///
/// This `struct` is created by the [`pre_order`] method on [`LLRBTreeSet`].
///
/// [`pre_order`]: LLRBTreeSet::pre_order
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PreOrder<'a, T: 'a> {
    inner: MapPreOrder<'a, T, ()>,
}

/// A post-order iterator over the items of a `LLRBTreeSet`.
///
/// This `struct` is created by the [`post_order`] method on [`LLRBTreeSet`].
///
/// [`post_order`]: LLRBTreeSet::post_order
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PostOrder<'a, T: 'a> {
    inner: MapPostOrder<'a, T, ()>,
}

impl<T> LLRBTreeSet<T> {
    /// Makes a new, empty `LLRBTreeSet`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let mut set: LLRBTreeSet<i32> = LLRBTreeSet::new();
    /// ```
    #[must_use]
    pub const fn new() -> LLRBTreeSet<T> {
        LLRBTreeSet { map: LLRBTreeMap::new() }
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let mut v = LLRBTreeSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// See [`LLRBTreeMap::height`].
    #[must_use]
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Returns the item stored at the root of the tree.
    #[must_use]
    pub fn root(&self) -> Option<&T> {
        self.map.root_key_value().map(|(k, ())| k)
    }

    /// Gets an iterator that visits the elements in the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let set = LLRBTreeSet::from([3, 1, 2]);
    /// let items: Vec<_> = set.iter().collect();
    /// assert_eq!(items, [&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }

    /// Gets an iterator that yields each node before its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            inner: self.map.pre_order(),
        }
    }

    /// Gets an iterator that yields each node after its subtrees.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            inner: self.map.post_order(),
        }
    }

    /// Calls `visit` on every item, depth-first, in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{LLRBTreeSet, Traversal};
    ///
    /// let set = LLRBTreeSet::from([1, 2, 3]);
    /// let mut seen = Vec::new();
    /// set.traverse(Traversal::InOrder, |item| seen.push(*item));
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn traverse<F>(&self, order: Traversal, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.map.traverse(order, |item, ()| visit(item));
    }

    /// See [`LLRBTreeMap::is_size_consistent`].
    #[must_use]
    pub fn is_size_consistent(&self) -> bool {
        self.map.is_size_consistent()
    }

    /// See [`LLRBTreeMap::is_23`].
    #[must_use]
    pub fn is_23(&self) -> bool {
        self.map.is_23()
    }

    /// See [`LLRBTreeMap::is_balanced`].
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.map.is_balanced()
    }
}

impl<T: Ord> LLRBTreeSet<T> {
    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let set = LLRBTreeSet::from([1, 2, 3]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&4));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the element in the set, if any, that is equal to the value.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(value).map(|(k, ())| k)
    }

    /// Returns a reference to the first element in the set, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let mut set = LLRBTreeSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.map.first_key_value().map(|(k, ())| k)
    }

    /// Returns a reference to the last element in the set, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.map.last_key_value().map(|(k, ())| k)
    }

    /// Removes the first element from the set and returns it, if any.
    pub fn pop_first(&mut self) -> Option<T> {
        self.map.pop_first().map(|(k, ())| k)
    }

    /// Removes the last element from the set and returns it, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        self.map.pop_last().map(|(k, ())| k)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. An equal element already in the set is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let mut set = LLRBTreeSet::new();
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// Adds a value to the set, replacing the existing element, if any, that is equal to the
    /// value. Returns the replaced element.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let mut set = LLRBTreeSet::new();
    /// set.insert(Vec::<i32>::new());
    ///
    /// assert_eq!(set.get(&[][..]).unwrap().capacity(), 0);
    /// set.replace(Vec::with_capacity(10));
    /// assert_eq!(set.get(&[][..]).unwrap().capacity(), 10);
    /// ```
    pub fn replace(&mut self, value: T) -> Option<T> {
        let replaced = self.map.remove_entry(&value).map(|(k, ())| k);
        self.map.insert(value, ());
        replaced
    }

    /// If the set contains an element equal to the value, removes it from the set and drops it.
    /// Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let mut set = LLRBTreeSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove(value).is_some()
    }

    /// Removes and returns the element in the set, if any, that is equal to the value.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(value).map(|(k, ())| k)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let mut set = LLRBTreeSet::from([1, 2, 3, 4, 5, 6]);
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.iter().eq([2, 4, 6].iter()));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.map.retain(|k, ()| f(k));
    }

    /// See [`LLRBTreeMap::is_bst`].
    #[must_use]
    pub fn is_bst(&self) -> bool {
        self.map.is_bst()
    }

    /// Checks every structural invariant of the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found. See [`LLRBTreeMap::validate`].
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.map.validate()
    }
}

impl<T: Hash> Hash for LLRBTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<T: PartialEq> PartialEq for LLRBTreeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.map.eq(&other.map)
    }
}

impl<T: Eq> Eq for LLRBTreeSet<T> {}

impl<T: PartialOrd> PartialOrd for LLRBTreeSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.map.partial_cmp(&other.map)
    }
}

impl<T: Ord> Ord for LLRBTreeSet<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.map.cmp(&other.map)
    }
}

impl<T: Clone> Clone for LLRBTreeSet<T> {
    fn clone(&self) -> Self {
        LLRBTreeSet { map: self.map.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for LLRBTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for LLRBTreeSet<T> {
    fn default() -> Self {
        LLRBTreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for LLRBTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = LLRBTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for LLRBTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for LLRBTreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for LLRBTreeSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for LLRBTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.map.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a LLRBTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(k, ())| k)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

impl<T> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        PreOrder {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PreOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(k, ())| k)
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

impl<T> Clone for PostOrder<'_, T> {
    fn clone(&self) -> Self {
        PostOrder {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PostOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

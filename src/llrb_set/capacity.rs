use super::LLRBTreeSet;
use crate::LLRBTreeMap;

impl<T> LLRBTreeSet<T> {
    /// Creates an empty set with room for at least `capacity` elements before reallocating.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let set: LLRBTreeSet<i32> = LLRBTreeSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LLRBTreeSet {
            map: LLRBTreeMap::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}

use super::LLRBTreeMap;
use crate::raw::RawLLRBMap;

impl<K, V> LLRBTreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before reallocating.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeMap;
    ///
    /// let map: LLRBTreeMap<i32, i32> = LLRBTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LLRBTreeMap {
            raw: RawLLRBMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}

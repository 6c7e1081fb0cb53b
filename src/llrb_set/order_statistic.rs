use core::borrow::Borrow;
use core::ops::Index;

use super::LLRBTreeSet;
use crate::Rank;

impl<T: Ord> LLRBTreeSet<T> {
    /// Returns the greatest element less than or equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let set = LLRBTreeSet::from([5, 10, 15]);
    /// assert_eq!(set.floor(&12), Some(&10));
    /// assert_eq!(set.floor(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn floor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.floor(value).map(|(k, ())| k)
    }

    /// Returns the smallest element greater than or equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let set = LLRBTreeSet::from([5, 10, 15]);
    /// assert_eq!(set.ceiling(&12), Some(&15));
    /// assert_eq!(set.ceiling(&16), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn ceiling<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.ceiling(value).map(|(k, ())| k)
    }

    /// Returns the number of elements strictly less than `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let set = LLRBTreeSet::from([5, 10, 15]);
    /// assert_eq!(set.rank(&12), 2);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.rank(value)
    }

    /// Returns the zero-based rank of `value` in sorted order, or `None` if
    /// the value is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let set = LLRBTreeSet::from([10, 20]);
    ///
    /// assert_eq!(set.rank_of(&20), Some(1));
    /// assert_eq!(set.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.rank_of(value)
    }
}

impl<T> LLRBTreeSet<T> {
    /// Returns the element at 1-indexed `position` in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let set = LLRBTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.select(1), Some(&10));
    /// assert_eq!(set.select(0), None);
    /// ```
    #[must_use]
    pub fn select(&self, position: usize) -> Option<&T> {
        self.map.select(position).map(|(k, ())| k)
    }

    /// Returns the element at zero-based `rank` in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LLRBTreeSet;
    ///
    /// let set = LLRBTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.get_by_rank(1), Some(&20));
    /// assert!(set.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.map.get_by_rank(rank).map(|(k, ())| k)
    }
}

/// Indexes into the set by zero-based rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use llrb_tree::{LLRBTreeSet, Rank};
///
/// let set = LLRBTreeSet::from([10, 20, 30]);
/// assert_eq!(set[Rank(1)], 20);
/// ```
impl<T> Index<Rank> for LLRBTreeSet<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("rank out of bounds")
    }
}

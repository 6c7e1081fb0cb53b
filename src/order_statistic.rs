/// A zero-based rank into the sorted order of a map or set.
///
/// `Rank(0)` is the smallest key. The 1-indexed counterpart is
/// [`select`](crate::LLRBTreeMap::select).
///
/// # Examples
///
/// ```
/// use llrb_tree::{LLRBTreeMap, Rank};
///
/// let mut map = LLRBTreeMap::new();
/// map.insert("a", 10);
/// map.insert("b", 20);
///
/// assert_eq!(map[Rank(0)], 10);
/// assert_eq!(map[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

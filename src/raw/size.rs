use super::handle::Handle;

/// Number of nodes in a subtree, including its root.
///
/// Shares the handle encoding: a tree can never hold more nodes than the arena has slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(Handle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ONE: Self = Self::from_usize(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        Self(Handle::from_index(size))
    }

    /// Size of a node whose children hold `left` and `right` nodes.
    #[inline]
    pub(crate) const fn of_parent(left: usize, right: usize) -> Self {
        Self::from_usize(left + right + 1)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.to_index()
    }
}

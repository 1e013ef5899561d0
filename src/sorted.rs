use crate::error::OrdexError;
use crate::search;

// ---------------------------------------------------------------------------
// SortedSlice
// ---------------------------------------------------------------------------

/// A slice whose non-decreasing order has been checked, or vouched for.
///
/// [`find`](crate::find) trusts its caller and never verifies sortedness.
/// `SortedSlice` is the opt-in alternative: [`new`](SortedSlice::new) scans
/// the slice once (O(n)) and rejects unsorted input up front, so every
/// subsequent [`find`](SortedSlice::find) runs on a known-good sequence.
///
/// Borrows the slice — nothing is copied or owned.
///
/// # Example
///
/// ```rust
/// use ordex::SortedSlice;
///
/// let ranks = SortedSlice::new(&[100, 200, 200, 300])?;
///
/// assert_eq!(ranks.find(&300), Some(3));
/// assert_eq!(ranks.find(&150), None);
/// # Ok::<(), ordex::OrdexError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SortedSlice<'a, T> {
    inner: &'a [T],
}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Wrap `slice` after verifying it is sorted non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns [`OrdexError::Unsorted`] naming the index of the first element
    /// that is smaller than its predecessor.
    pub fn new(slice: &'a [T]) -> Result<Self, OrdexError> {
        match slice.windows(2).position(|pair| pair[0] > pair[1]) {
            Some(i) => Err(OrdexError::Unsorted { index: i + 1 }),
            None => Ok(Self { inner: slice }),
        }
    }

    /// Wrap `slice` without checking.
    ///
    /// The caller asserts the slice is sorted non-decreasing. If it is not,
    /// [`find`](SortedSlice::find) gives unspecified results — no panic, no
    /// out-of-range index, just no guarantee about what comes back.
    pub fn new_unchecked(slice: &'a [T]) -> Self {
        Self { inner: slice }
    }

    /// Binary-search the slice for `target`.
    ///
    /// Same contract as the free [`find`](crate::find): `Some(index)` of an
    /// equal element (any one, under ties), `None` when absent.
    pub fn find(&self, target: &T) -> Option<usize> {
        search::find(self.inner, target)
    }
}

impl<'a, T> SortedSlice<'a, T> {
    /// The underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.inner
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the slice is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

use std::cmp::Ordering;

use crate::sequence::Sequence;

// ---------------------------------------------------------------------------
// find()
// ---------------------------------------------------------------------------

/// Locate `target` in a sequence sorted in non-decreasing order.
///
/// Returns `Some(index)` for a position whose element equals `target`, or
/// `None` when no element does. Runs in O(log n) comparisons, reads the
/// sequence only through [`Sequence::get`], and never mutates or allocates.
///
/// # Precondition
///
/// The sequence must be sorted non-decreasing under `T`'s [`Ord`]. This is
/// **not** verified — a check would cost O(n) and defeat the point. On
/// unsorted input the result is unspecified: some index, or `None`, but
/// never a panic and never an out-of-range index.
///
/// # Duplicates
///
/// With ties on `target`, *some* matching index is returned; which one is
/// unspecified.
///
/// # Example
///
/// ```rust
/// let primes = [2, 3, 5, 7, 11, 13];
///
/// assert_eq!(ordex::find(&primes, &11), Some(4));
/// assert_eq!(ordex::find(&primes, &6), None);
/// ```
pub fn find<S, T>(sequence: &S, target: &T) -> Option<usize>
where
    S: Sequence<Item = T> + ?Sized,
    T: Ord,
{
    let mut low: usize = 0;
    let mut high = match sequence.len().checked_sub(1) {
        Some(h) => h,
        None => return None, // empty sequence
    };

    while low <= high {
        // Not (low + high) / 2: the sum can overflow near usize::MAX.
        let mid = low + (high - low) / 2;

        match sequence.get(mid).cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(h) => high = h,
                // mid == 0: the interval has collapsed below index zero.
                None => return None,
            },
        }
    }

    None
}

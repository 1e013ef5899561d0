/// An ordered, indexable, finite collection of elements.
///
/// Implement this to make ordex search anything with random access — slices,
/// vectors, ring buffers, column stores, memory-mapped records. The engine
/// reads elements strictly by index; it never iterates, copies, or mutates.
///
/// # Contract
///
/// `get(i)` must be valid for every `i < len()`, and the elements must be
/// arranged in non-decreasing order under the item type's [`Ord`] before
/// [`find`](crate::find) is called. [`find`] only probes in-range indices,
/// so `get` may index unconditionally.
///
/// # Example
///
/// ```rust
/// use ordex::Sequence;
///
/// /// The even half of an interleaved buffer.
/// struct EvenSlots(Vec<i64>);
///
/// impl Sequence for EvenSlots {
///     type Item = i64;
///
///     fn len(&self) -> usize {
///         self.0.len().div_ceil(2)
///     }
///
///     fn get(&self, index: usize) -> &i64 {
///         &self.0[index * 2]
///     }
/// }
///
/// let slots = EvenSlots(vec![1, 99, 4, 99, 9, 99]);
/// assert_eq!(ordex::find(&slots, &4), Some(1));
/// ```
pub trait Sequence {
    /// The element type, compared under its [`Ord`].
    type Item;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// The element at `index`. Only called with `index < len()`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Standard implementations ──────────────────────────────────────────────────

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

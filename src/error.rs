use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrdexError {
    // Validation. Only SortedSlice::new produces this; the search operation
    // itself has no error conditions ("not found" is a normal result).
    #[error("sequence not sorted at index {index}")]
    Unsorted {
        /// Index of the first element smaller than its predecessor.
        index: usize,
    },
}

//! # ordex
//!
//! Binary search over ordered sequences — generic, embeddable, zero opinions.
//!
//! ordex implements one primitive: [`find`], which locates a target value in
//! a sequence sorted in non-decreasing order and returns its index, or `None`
//! when the target is absent. It owns the search loop, the sequence contract
//! ([`Sequence`]), the error type, and the validated [`SortedSlice`] wrapper.
//! It does **not** own sorting, duplicate-tie policy, or comparator plumbing —
//! the element type's [`Ord`] is the one and only order.
//!
//! # Quick Start
//!
//! ```rust
//! let readings = vec![1, 3, 5, 7, 9, 11];
//!
//! assert_eq!(ordex::find(&readings, &7), Some(3));
//! assert_eq!(ordex::find(&readings, &4), None);
//! assert_eq!(ordex::find(&Vec::<i32>::new(), &0), None);
//! ```
//!
//! The sequence must already be sorted — `find` never checks, so it stays at
//! O(log n) comparisons. If the input is unsorted the result is unspecified
//! (some index or `None`, never a panic). To pay for the check once up front,
//! use [`SortedSlice`]:
//!
//! ```rust
//! use ordex::SortedSlice;
//!
//! let sorted = SortedSlice::new(&[2, 4, 8, 16])?;
//! assert_eq!(sorted.find(&8), Some(2));
//!
//! assert!(SortedSlice::new(&[3, 1, 2]).is_err());
//! # Ok::<(), ordex::OrdexError>(())
//! ```
//!
//! # Custom Sequences
//!
//! Implement [`Sequence`] to search anything indexable — ring buffers, column
//! stores, memory-mapped records, or any other random-access collection:
//!
//! ```rust
//! use ordex::Sequence;
//!
//! /// A column of ids stored apart from its payloads.
//! struct IdColumn {
//!     ids: Vec<u64>,
//! }
//!
//! impl Sequence for IdColumn {
//!     type Item = u64;
//!
//!     fn len(&self) -> usize {
//!         self.ids.len()
//!     }
//!
//!     fn get(&self, index: usize) -> &u64 {
//!         &self.ids[index]
//!     }
//! }
//!
//! let column = IdColumn { ids: vec![10, 20, 30, 40] };
//! assert_eq!(ordex::find(&column, &30), Some(2));
//! ```
//!
//! # Duplicates
//!
//! When the target occurs more than once, `find` returns the index of *some*
//! matching element — which one is unspecified and may vary with sequence
//! length. Callers needing first/last-occurrence semantics should scan
//! outward from the returned index.

#![forbid(unsafe_code)]

mod error;
mod search;
mod sequence;
mod sorted;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use error::OrdexError;
pub use search::find;
pub use sequence::Sequence;
pub use sorted::SortedSlice;

//! Comparator-driven bubble sort.
//!
//! [`sort_records`] sorts an opaque byte buffer holding `count` records
//! of `width` bytes each, given a three-way comparator over record
//! slices. [`bubble_sort`] is the same algorithm over a typed slice.
//!
//! The comparator must be a total order; with a broken comparator the
//! result is some permutation of the input, but not a sorted one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod records;

pub use error::SortError;
pub use records::{bubble_sort, sort_records, swap_records};

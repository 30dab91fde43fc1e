//! Storage layer for the sqlist sequential list.
//!
//! Owns the single contiguous element buffer behind a list and the
//! policy that decides when it grows or shrinks.
//!
//! # Architecture
//!
//! ```text
//! SeqList (sqlist-list)
//! ├── ListConfig     initial capacity, growth increment, shrink decrement
//! ├── Allocator      fallible slot allocation (SystemAllocator by default)
//! └── Buffer         Box<[Elem]> + live length
//!     ├── resize     allocate new, copy live prefix, drop old
//!     └── shift      move a contiguous run one slot left or right
//! ```
//!
//! Every resize goes through an [`Allocator`], so allocation failure is
//! an ordinary `Err` rather than an abort. The buffer is replaced only
//! after the new allocation succeeds, which keeps a failed resize from
//! leaving torn state behind.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod buffer;
pub mod config;

pub use alloc::{Allocator, SystemAllocator};
pub use buffer::{Buffer, Direction};
pub use config::ListConfig;

//! Capacity-managed sequential list.
//!
//! [`SeqList`] is a contiguous array of [`Elem`](sqlist_core::Elem) values
//! addressed by 1-based positions. Storage grows and shrinks in fixed
//! steps set by a [`ListConfig`](sqlist_storage::ListConfig); every
//! reallocation goes through an [`Allocator`](sqlist_storage::Allocator)
//! so out-of-memory is an ordinary error.
//!
//! # Lifecycle
//!
//! ```text
//! SeqList::new ──► live ──destroy()──► destroyed ──reinit()──► live
//!                   │ ▲
//!                   └─┘ insert / delete / clear / partition / grow / shrink
//! ```
//!
//! Every failure and policy branch is also reported to the list's
//! [`Diagnostics`](sqlist_core::Diagnostics) sink, which defaults to
//! [`TracingDiagnostics`](sqlist_core::TracingDiagnostics).
//!
//! # Example
//!
//! ```rust
//! use sqlist_list::SeqList;
//!
//! let mut list = SeqList::new().unwrap();
//! list.insert(1, 10).unwrap();
//! list.insert(2, 15).unwrap();
//! list.insert(3, 20).unwrap();
//! list.insert(2, 5).unwrap();
//! assert_eq!(list.to_vec(), vec![10, 5, 15, 20]);
//!
//! assert_eq!(list.delete(2).unwrap(), 5);
//! assert_eq!(list.locate(15).unwrap(), 2);
//! assert_eq!(list.predecessor(15).unwrap(), 10);
//! assert_eq!(list.successor(15).unwrap(), 20);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod list;
pub mod partition;
mod position;
mod positional;
mod query;

pub use list::{SeqList, ShrinkOutcome};
pub use partition::partition_odd_before_even;

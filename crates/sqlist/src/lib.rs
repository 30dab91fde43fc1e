//! sqlist: a capacity-managed sequential list.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sqlist sub-crates. For most users, adding `sqlist` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sqlist::prelude::*;
//!
//! let config = ListConfig {
//!     initial_capacity: 4,
//!     ..ListConfig::default()
//! };
//! let mut list = SeqList::with_config(config).unwrap();
//! for (position, value) in [(1, 10), (2, 15), (3, 20), (2, 5)] {
//!     list.insert(position, value).unwrap();
//! }
//! assert_eq!(list.to_string(), "[10, 5, 15, 20]");
//!
//! assert_eq!(list.predecessor(10), Err(ListError::NoNeighbor {
//!     position: 1,
//!     side: Side::Before,
//! }));
//!
//! list.insert(5, 7).unwrap();
//! assert_eq!(list.capacity(), 14);
//!
//! let odd = list.partition_odd_before_even();
//! assert_eq!(odd, 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sqlist-core` | `Elem`, errors, diagnostics |
//! | [`storage`] | `sqlist-storage` | `ListConfig`, `Allocator`, `Buffer` |
//! | [`list`] | `sqlist-list` | `SeqList` and partitioning |
//! | [`sort`] | `sqlist-sort` | comparator-driven bubble sort |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element type, errors, and diagnostics (`sqlist-core`).
pub use sqlist_core as types;

/// Capacity policy, allocator seam, and element buffer (`sqlist-storage`).
pub use sqlist_storage as storage;

/// The sequential list (`sqlist-list`).
pub use sqlist_list as list;

/// Comparator-driven bubble sort (`sqlist-sort`).
pub use sqlist_sort as sort;

/// Common imports for typical usage.
///
/// ```rust
/// use sqlist::prelude::*;
/// ```
pub mod prelude {
    pub use sqlist_core::{
        Diagnostics, Elem, ListError, NullDiagnostics, Notice, Side, TracingDiagnostics,
    };
    pub use sqlist_list::{SeqList, ShrinkOutcome};
    pub use sqlist_sort::{bubble_sort, sort_records};
    pub use sqlist_storage::{Allocator, ListConfig, SystemAllocator};
}

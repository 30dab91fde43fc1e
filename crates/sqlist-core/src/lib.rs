//! Core types for the sqlist sequential list.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the element type, the error taxonomy shared by every sqlist crate,
//! and the diagnostic notices emitted when an operation fails or takes
//! a policy branch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diag;
pub mod elem;
pub mod error;

pub use diag::{Diagnostics, NullDiagnostics, Notice, Severity, TracingDiagnostics};
pub use elem::{is_odd, Elem};
pub use error::{AllocError, ConfigError, ListError, Side};

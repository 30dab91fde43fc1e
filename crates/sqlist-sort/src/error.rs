//! Sort argument errors.

use std::error::Error;
use std::fmt;

/// The buffer and record layout passed to [`sort_records`](crate::sort_records)
/// do not agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortError {
    /// Records must be at least one byte wide.
    ZeroWidth,
    /// `count * width` overflows `usize`.
    LayoutOverflow {
        /// Record count.
        count: usize,
        /// Record width in bytes.
        width: usize,
    },
    /// The buffer is shorter than `count * width` bytes.
    BufferTooSmall {
        /// Bytes needed for the records.
        needed: usize,
        /// Bytes actually provided.
        actual: usize,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "record width must be at least 1 byte"),
            Self::LayoutOverflow { count, width } => {
                write!(f, "{count} records of {width} bytes overflow usize")
            }
            Self::BufferTooSmall { needed, actual } => {
                write!(f, "buffer holds {actual} bytes, records need {needed}")
            }
        }
    }
}

impl Error for SortError {}

//! Error types for the sqlist workspace.
//!
//! Every fallible list operation returns [`ListError`]. Allocation and
//! configuration failures have their own small types so the storage
//! layer can report them without knowing about positions or values.

use std::error::Error;
use std::fmt;

/// Storage could not obtain the requested number of element slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError {
    /// Number of element slots requested.
    pub requested: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not allocate {} element slots", self.requested)
    }
}

impl Error for AllocError {}

/// Invalid capacity policy passed to a list constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `initial_capacity` is zero.
    ZeroInitialCapacity,
    /// `growth_increment` is zero, so a full list could never grow.
    ZeroGrowthIncrement,
    /// `shrink_decrement` is zero, so shrinking would never release memory.
    ZeroShrinkDecrement,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInitialCapacity => write!(f, "initial_capacity must be at least 1"),
            Self::ZeroGrowthIncrement => write!(f, "growth_increment must be at least 1"),
            Self::ZeroShrinkDecrement => write!(f, "shrink_decrement must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Which neighbour of a located value was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The element one position earlier.
    Before,
    /// The element one position later.
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "predecessor"),
            Self::After => write!(f, "successor"),
        }
    }
}

/// Errors returned by sequential list operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// Storage growth, shrink, or initialization could not obtain memory.
    Allocation(AllocError),
    /// A 1-based position falls outside the operation's valid range.
    OutOfRange {
        /// The rejected position.
        position: usize,
        /// List length at the time of the call.
        length: usize,
    },
    /// A value lookup found no matching element.
    NotFound,
    /// The value was found but has no neighbour on the requested side.
    NoNeighbor {
        /// 1-based position of the first occurrence of the value.
        position: usize,
        /// The side that has no element.
        side: Side,
    },
    /// The list was destroyed and has not been re-initialized.
    Destroyed,
    /// The capacity policy is invalid.
    Config(ConfigError),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(e) => write!(f, "allocation failed: {e}"),
            Self::OutOfRange { position, length } => {
                write!(f, "position {position} out of range for length {length}")
            }
            Self::NotFound => write!(f, "element not found"),
            Self::NoNeighbor { position, side } => {
                write!(f, "element at position {position} has no {side}")
            }
            Self::Destroyed => write!(f, "list has been destroyed"),
            Self::Config(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for ListError {
    fn from(e: AllocError) -> Self {
        Self::Allocation(e)
    }
}

impl From<ConfigError> for ListError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

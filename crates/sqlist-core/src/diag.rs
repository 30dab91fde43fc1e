//! Diagnostic notices and the sinks that receive them.
//!
//! A list reports every failure and every policy branch (grow, shrink,
//! shrink skipped, invalid position, ...) as a [`Notice`] sent to its
//! [`Diagnostics`] sink. Notices are advisory: the outcome of an
//! operation is always carried by its `Result`, never by the sink.
//!
//! The default sink, [`TracingDiagnostics`], forwards notices to the
//! `tracing` ecosystem. Any `FnMut(&Notice)` closure is also a sink.

use std::fmt;

/// How loudly a notice should be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Routine housekeeping such as a capacity change.
    Debug,
    /// Caller-visible misuse such as an invalid position.
    Warn,
    /// Memory could not be obtained.
    Error,
}

/// A single advisory event emitted by a list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The initial allocation of `requested` slots failed.
    InitFailed {
        /// Capacity that could not be allocated.
        requested: usize,
    },
    /// Storage grew to `capacity` slots.
    Grown {
        /// Capacity after growth.
        capacity: usize,
    },
    /// Growth to `requested` slots failed; the list is unchanged.
    GrowFailed {
        /// Capacity that could not be allocated.
        requested: usize,
    },
    /// Storage shrank to `capacity` slots.
    Shrunk {
        /// Capacity after shrinking.
        capacity: usize,
    },
    /// Shrinking was refused because it would truncate live elements or
    /// go below the initial capacity.
    ShrinkSkipped {
        /// Current capacity.
        capacity: usize,
        /// Current length.
        length: usize,
    },
    /// Shrinking to `requested` slots failed; the list keeps its capacity.
    ShrinkFailed {
        /// Capacity that could not be allocated.
        requested: usize,
    },
    /// A position argument was rejected.
    InvalidPosition {
        /// Name of the rejecting operation.
        op: &'static str,
        /// The rejected position.
        position: usize,
        /// List length at the time of the call.
        length: usize,
    },
    /// A value lookup found nothing.
    ValueNotFound {
        /// Name of the lookup operation.
        op: &'static str,
    },
    /// A value was found at the list boundary with no neighbour.
    NoNeighbor {
        /// Name of the lookup operation.
        op: &'static str,
        /// 1-based position of the value.
        position: usize,
    },
    /// The list was cleared.
    Cleared,
    /// The list released its storage.
    Destroyed,
    /// An operation was attempted on a destroyed list.
    UseAfterDestroy {
        /// Name of the rejected operation.
        op: &'static str,
    },
}

impl Notice {
    /// The severity this notice is reported at.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Grown { .. } | Self::Shrunk { .. } | Self::ShrinkSkipped { .. } => {
                Severity::Debug
            }
            Self::Cleared | Self::Destroyed => Severity::Debug,
            Self::InvalidPosition { .. }
            | Self::ValueNotFound { .. }
            | Self::NoNeighbor { .. }
            | Self::UseAfterDestroy { .. } => Severity::Warn,
            Self::InitFailed { .. } | Self::GrowFailed { .. } | Self::ShrinkFailed { .. } => {
                Severity::Error
            }
        }
    }

    /// Short machine-friendly name of the notice.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InitFailed { .. } => "init_failed",
            Self::Grown { .. } => "grown",
            Self::GrowFailed { .. } => "grow_failed",
            Self::Shrunk { .. } => "shrunk",
            Self::ShrinkSkipped { .. } => "shrink_skipped",
            Self::ShrinkFailed { .. } => "shrink_failed",
            Self::InvalidPosition { .. } => "invalid_position",
            Self::ValueNotFound { .. } => "value_not_found",
            Self::NoNeighbor { .. } => "no_neighbor",
            Self::Cleared => "cleared",
            Self::Destroyed => "destroyed",
            Self::UseAfterDestroy { .. } => "use_after_destroy",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitFailed { requested } => {
                write!(f, "memory allocation of {requested} slots failed")
            }
            Self::Grown { capacity } => {
                write!(f, "expansion successful, new capacity: {capacity}")
            }
            Self::GrowFailed { requested } => {
                write!(f, "expansion to {requested} slots failed")
            }
            Self::Shrunk { capacity } => {
                write!(f, "shrinkage successful, new capacity: {capacity}")
            }
            Self::ShrinkSkipped { capacity, length } => {
                write!(
                    f,
                    "shrinkage skipped at capacity {capacity} with length {length}"
                )
            }
            Self::ShrinkFailed { requested } => {
                write!(f, "shrinkage to {requested} slots failed")
            }
            Self::InvalidPosition {
                op,
                position,
                length,
            } => {
                write!(f, "{op}: invalid position {position} (length {length})")
            }
            Self::ValueNotFound { op } => write!(f, "{op}: element not found"),
            Self::NoNeighbor { op, position } => {
                write!(f, "{op}: element at position {position} has no neighbour")
            }
            Self::Cleared => write!(f, "list cleared"),
            Self::Destroyed => write!(f, "list destroyed"),
            Self::UseAfterDestroy { op } => write!(f, "{op}: list has been destroyed"),
        }
    }
}

/// Receiver for list notices.
///
/// Sinks are owned by the list they observe, so they must be `Send` for
/// the list to move between threads.
pub trait Diagnostics: Send {
    /// Handle one notice. Must not panic.
    fn notice(&mut self, notice: &Notice);
}

impl<F> Diagnostics for F
where
    F: FnMut(&Notice) + Send,
{
    fn notice(&mut self, notice: &Notice) {
        self(notice)
    }
}

/// Sink that forwards notices to `tracing` under the `sqlist` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn notice(&mut self, notice: &Notice) {
        let kind = notice.kind();
        match notice.severity() {
            Severity::Debug => tracing::debug!(target: "sqlist", kind, "{notice}"),
            Severity::Warn => tracing::warn!(target: "sqlist", kind, "{notice}"),
            Severity::Error => tracing::error!(target: "sqlist", kind, "{notice}"),
        }
    }
}

/// Sink that discards every notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn notice(&mut self, _notice: &Notice) {}
}

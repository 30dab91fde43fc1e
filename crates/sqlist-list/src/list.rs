//! The [`SeqList`] type: construction, teardown, and capacity management.

use std::cell::RefCell;
use std::fmt;

use sqlist_core::{AllocError, Diagnostics, Elem, ListError, Notice, TracingDiagnostics};
use sqlist_storage::{Allocator, Buffer, ListConfig, SystemAllocator};

/// Result of a [`SeqList::shrink`] call that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShrinkOutcome {
    /// Capacity was reduced to the given number of slots.
    Shrunk {
        /// Capacity after shrinking.
        capacity: usize,
    },
    /// Shrinking would have dropped capacity below the live length or
    /// the initial capacity.
    Refused,
}

/// A capacity-managed sequential list of [`Elem`] values.
///
/// Positions are 1-based. Capacity starts at
/// [`ListConfig::initial_capacity`], grows by
/// [`ListConfig::growth_increment`] when an insert finds the list full,
/// and shrinks by [`ListConfig::shrink_decrement`] when deletes leave
/// enough slack.
///
/// The list is `Send` whenever its allocator is, so it can move to
/// another thread or sit behind a `Mutex`. It is not `Sync`: queries
/// take `&self` but still report notices through the sink.
pub struct SeqList<A: Allocator = SystemAllocator> {
    pub(crate) buffer: Buffer,
    config: ListConfig,
    alloc: A,
    destroyed: bool,
    diagnostics: RefCell<Box<dyn Diagnostics>>,
}

impl SeqList<SystemAllocator> {
    /// Create a list with the default capacity policy.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Allocation`] if the initial storage cannot be
    /// allocated.
    pub fn new() -> Result<Self, ListError> {
        Self::with_config(ListConfig::default())
    }

    /// Create a list with a custom capacity policy.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Config`] if `config` fails validation, or
    /// [`ListError::Allocation`] if the initial storage cannot be allocated.
    pub fn with_config(config: ListConfig) -> Result<Self, ListError> {
        Self::with_allocator(config, SystemAllocator)
    }
}

impl<A: Allocator> SeqList<A> {
    /// Create a list that draws its storage from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Config`] if `config` fails validation, or
    /// [`ListError::Allocation`] if the initial storage cannot be allocated.
    pub fn with_allocator(config: ListConfig, mut alloc: A) -> Result<Self, ListError> {
        config.validate()?;
        let buffer = match Buffer::with_capacity(&mut alloc, config.initial_capacity) {
            Ok(buffer) => buffer,
            Err(e) => {
                TracingDiagnostics.notice(&Notice::InitFailed {
                    requested: e.requested,
                });
                return Err(e.into());
            }
        };
        Ok(Self {
            buffer,
            config,
            alloc,
            destroyed: false,
            diagnostics: RefCell::new(Box::new(TracingDiagnostics)),
        })
    }

    /// Replace the diagnostics sink, returning the list.
    pub fn with_diagnostics(mut self, diagnostics: Box<dyn Diagnostics>) -> Self {
        self.set_diagnostics(diagnostics);
        self
    }

    /// Replace the diagnostics sink.
    pub fn set_diagnostics(&mut self, diagnostics: Box<dyn Diagnostics>) {
        *self.diagnostics.get_mut() = diagnostics;
    }

    /// Release the storage and reset length and capacity to zero.
    ///
    /// Calling it again is a no-op. Afterwards every fallible operation
    /// returns [`ListError::Destroyed`] until [`reinit`](Self::reinit).
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.buffer.release();
        self.destroyed = true;
        self.emit(Notice::Destroyed);
    }

    /// Allocate fresh storage at the initial capacity, discarding any
    /// existing elements.
    ///
    /// The new storage is allocated before the old is dropped, so on
    /// failure the list keeps its previous state (live or destroyed).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Allocation`] if the storage cannot be allocated.
    pub fn reinit(&mut self) -> Result<(), ListError> {
        match Buffer::with_capacity(&mut self.alloc, self.config.initial_capacity) {
            Ok(buffer) => {
                self.buffer = buffer;
                self.destroyed = false;
                Ok(())
            }
            Err(e) => {
                self.emit(Notice::InitFailed {
                    requested: e.requested,
                });
                Err(e.into())
            }
        }
    }

    /// Whether [`destroy`](Self::destroy) has been called since the last
    /// initialization.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The capacity policy this list was built with.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Copy of the elements in position order.
    pub fn to_vec(&self) -> Vec<Elem> {
        self.buffer.as_slice().to_vec()
    }

    /// Grow capacity by one growth increment.
    ///
    /// Returns the new capacity. On failure the list is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Destroyed`] on a destroyed list, or
    /// [`ListError::Allocation`] if the larger storage cannot be allocated.
    pub fn grow(&mut self) -> Result<usize, ListError> {
        self.ensure_live("grow")?;
        let capacity = self.buffer.capacity();
        let result = match self.config.grown_capacity(capacity) {
            Some(target) => self.buffer.resize(&mut self.alloc, target).map(|()| target),
            None => Err(AllocError {
                requested: usize::MAX,
            }),
        };
        match result {
            Ok(target) => {
                self.emit(Notice::Grown { capacity: target });
                Ok(target)
            }
            Err(e) => {
                self.emit(Notice::GrowFailed {
                    requested: e.requested,
                });
                Err(e.into())
            }
        }
    }

    /// Shrink capacity by one shrink decrement, if that keeps every
    /// live element.
    ///
    /// A shrink that would truncate live elements, or take capacity
    /// below [`ListConfig::initial_capacity`], is refused rather than
    /// failed. On allocation failure the list keeps its current
    /// capacity and contents.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Destroyed`] on a destroyed list, or
    /// [`ListError::Allocation`] if the smaller storage cannot be allocated.
    pub fn shrink(&mut self) -> Result<ShrinkOutcome, ListError> {
        self.ensure_live("shrink")?;
        let capacity = self.buffer.capacity();
        let length = self.buffer.len();
        let Some(target) = self.config.shrunk_capacity(capacity, length) else {
            self.emit(Notice::ShrinkSkipped { capacity, length });
            return Ok(ShrinkOutcome::Refused);
        };
        match self.buffer.resize(&mut self.alloc, target) {
            Ok(()) => {
                self.emit(Notice::Shrunk { capacity: target });
                Ok(ShrinkOutcome::Shrunk { capacity: target })
            }
            Err(e) => {
                self.emit(Notice::ShrinkFailed {
                    requested: e.requested,
                });
                Err(e.into())
            }
        }
    }

    pub(crate) fn ensure_live(&self, op: &'static str) -> Result<(), ListError> {
        if self.destroyed {
            self.emit(Notice::UseAfterDestroy { op });
            return Err(ListError::Destroyed);
        }
        Ok(())
    }

    pub(crate) fn emit(&self, notice: Notice) {
        self.diagnostics.borrow_mut().notice(&notice);
    }
}

impl<A: Allocator> fmt::Debug for SeqList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqList")
            .field("elements", &self.buffer.as_slice())
            .field("capacity", &self.buffer.capacity())
            .field("config", &self.config)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl<A: Allocator> fmt::Display for SeqList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.buffer.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

//! Value lookups: locate, predecessor, successor.
//!
//! All three scan from the front and act on the first matching element
//! only; later duplicates are never considered.

use sqlist_core::{Elem, ListError, Notice, Side};
use sqlist_storage::Allocator;

use crate::list::SeqList;

impl<A: Allocator> SeqList<A> {
    /// 1-based position of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if no element matches.
    pub fn locate(&self, value: Elem) -> Result<usize, ListError> {
        self.ensure_live("locate")?;
        self.first_position("locate", value)
    }

    /// Element immediately before the first occurrence of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if `value` is absent, or
    /// [`ListError::NoNeighbor`] if it is the first element.
    pub fn predecessor(&self, value: Elem) -> Result<Elem, ListError> {
        self.ensure_live("predecessor")?;
        self.neighbor("predecessor", value, Side::Before)
    }

    /// Element immediately after the first occurrence of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if `value` is absent, or
    /// [`ListError::NoNeighbor`] if it is the last element.
    pub fn successor(&self, value: Elem) -> Result<Elem, ListError> {
        self.ensure_live("successor")?;
        self.neighbor("successor", value, Side::After)
    }

    fn first_position(&self, op: &'static str, value: Elem) -> Result<usize, ListError> {
        match self.buffer.as_slice().iter().position(|&v| v == value) {
            Some(index) => Ok(index + 1),
            None => {
                self.emit(Notice::ValueNotFound { op });
                Err(ListError::NotFound)
            }
        }
    }

    fn neighbor(&self, op: &'static str, value: Elem, side: Side) -> Result<Elem, ListError> {
        let position = self.first_position(op, value)?;
        let index = position - 1;
        let neighbor = match side {
            Side::Before => index.checked_sub(1),
            Side::After => Some(index + 1),
        };
        match neighbor.and_then(|i| self.buffer.get(i)) {
            Some(v) => Ok(v),
            None => {
                self.emit(Notice::NoNeighbor { op, position });
                Err(ListError::NoNeighbor { position, side })
            }
        }
    }
}

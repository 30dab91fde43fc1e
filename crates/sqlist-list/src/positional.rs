//! Position-based access, insertion, deletion, and clearing.

use sqlist_core::{Elem, ListError, Notice};
use sqlist_storage::Allocator;

use crate::list::SeqList;
use crate::position::{element_index, insert_index};

impl<A: Allocator> SeqList<A> {
    /// Element at 1-based `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] unless `1 <= position <= len()`.
    pub fn get(&self, position: usize) -> Result<Elem, ListError> {
        self.ensure_live("get")?;
        let index = self.checked_index("get", position, element_index)?;
        Ok(self.buffer.as_slice()[index])
    }

    /// Insert `value` so that it ends up at 1-based `position`.
    ///
    /// Elements previously at `position..=len()` move one position up.
    /// A full list grows by one increment first; if that fails the list
    /// is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] unless `1 <= position <= len() + 1`,
    /// or [`ListError::Allocation`] if the list is full and cannot grow.
    pub fn insert(&mut self, position: usize, value: Elem) -> Result<(), ListError> {
        self.ensure_live("insert")?;
        let index = self.checked_index("insert", position, insert_index)?;
        if self.buffer.is_full() {
            self.grow()?;
        }
        self.buffer.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at 1-based `position`.
    ///
    /// Elements after it move one position down. If enough slack is
    /// left behind the list then tries to shrink; a failed shrink is
    /// reported to the diagnostics sink but does not fail the delete.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] unless `1 <= position <= len()`.
    pub fn delete(&mut self, position: usize) -> Result<Elem, ListError> {
        self.ensure_live("delete")?;
        let index = self.checked_index("delete", position, element_index)?;
        let removed = self.buffer.remove(index);
        if self
            .config()
            .should_shrink_after_delete(self.buffer.capacity(), self.buffer.len())
        {
            // The removal is committed; a refused or failed shrink only
            // leaves spare capacity behind.
            match self.shrink() {
                Ok(_) | Err(ListError::Allocation(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(removed)
    }

    /// Forget every element, keeping the allocated capacity.
    ///
    /// No-op on a destroyed list.
    pub fn clear(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.buffer.clear();
        self.emit(Notice::Cleared);
    }

    fn checked_index(
        &self,
        op: &'static str,
        position: usize,
        translate: fn(usize, usize) -> Option<usize>,
    ) -> Result<usize, ListError> {
        let length = self.buffer.len();
        translate(position, length).ok_or_else(|| {
            self.emit(Notice::InvalidPosition {
                op,
                position,
                length,
            });
            ListError::OutOfRange { position, length }
        })
    }
}

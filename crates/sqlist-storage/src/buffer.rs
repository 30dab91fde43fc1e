//! Owned element buffer with a live-length prefix.
//!
//! A [`Buffer`] is a fixed-size `Box<[Elem]>` whose first `len` slots are
//! live. Indices here are 0-based; translating and validating 1-based
//! positions is the list's job. Methods that take an index treat an
//! out-of-range index as a caller bug and panic.

use std::ops::Range;

use sqlist_core::{AllocError, Elem};

use crate::alloc::Allocator;

/// Direction of a one-slot shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices (opens a gap at the start of the range).
    Right,
    /// Towards lower indices (overwrites the slot before the range).
    Left,
}

/// Contiguous element storage owned by exactly one list.
#[derive(Debug)]
pub struct Buffer {
    /// Allocated slots. `slots.len()` is the capacity.
    slots: Box<[Elem]>,
    /// Number of live elements at the front of `slots`.
    len: usize,
}

impl Buffer {
    /// Allocate an empty buffer with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the allocator refuses the request.
    pub fn with_capacity<A: Allocator>(
        alloc: &mut A,
        capacity: usize,
    ) -> Result<Self, AllocError> {
        Ok(Self {
            slots: alloc.allocate(capacity)?,
            len: 0,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether every slot holds a live element.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[Elem] {
        &self.slots[..self.len]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [Elem] {
        &mut self.slots[..self.len]
    }

    /// Element at 0-based `index`, if live.
    pub fn get(&self, index: usize) -> Option<Elem> {
        self.as_slice().get(index).copied()
    }

    /// Replace the storage with a fresh allocation of `new_capacity` slots,
    /// copying the live prefix.
    ///
    /// The old slots are dropped only after the new allocation succeeds;
    /// on failure the buffer is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the allocator refuses the request.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity` is smaller than the live length.
    pub fn resize<A: Allocator>(
        &mut self,
        alloc: &mut A,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        assert!(
            new_capacity >= self.len,
            "resize to {new_capacity} would truncate {} live elements",
            self.len
        );
        let mut fresh = alloc.allocate(new_capacity)?;
        fresh[..self.len].copy_from_slice(&self.slots[..self.len]);
        self.slots = fresh;
        Ok(())
    }

    /// Move the elements in `range` one slot in `direction`.
    ///
    /// The vacated slot keeps its old value; callers overwrite it (insert)
    /// or drop it from the live prefix (delete).
    ///
    /// # Panics
    ///
    /// Panics if the destination would fall outside the allocated slots.
    pub fn shift(&mut self, range: Range<usize>, direction: Direction) {
        if range.is_empty() {
            return;
        }
        match direction {
            Direction::Right => {
                assert!(range.end < self.slots.len(), "shift right past capacity");
                let dest = range.start + 1;
                self.slots.copy_within(range, dest);
            }
            Direction::Left => {
                assert!(range.start > 0, "shift left past the first slot");
                let dest = range.start - 1;
                self.slots.copy_within(range, dest);
            }
        }
    }

    /// Insert `value` at 0-based `index`, shifting the tail right.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full or `index > len`.
    pub fn insert(&mut self, index: usize, value: Elem) {
        assert!(!self.is_full(), "insert into a full buffer");
        assert!(index <= self.len, "insert index {index} past length {}", self.len);
        self.shift(index..self.len, Direction::Right);
        self.slots[index] = value;
        self.len += 1;
    }

    /// Remove and return the element at 0-based `index`, shifting the
    /// tail left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Elem {
        assert!(index < self.len, "remove index {index} past length {}", self.len);
        let removed = self.slots[index];
        self.shift(index + 1..self.len, Direction::Left);
        self.len -= 1;
        removed
    }

    /// Forget every live element without touching the slots.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Drop the storage, leaving a zero-capacity buffer.
    pub fn release(&mut self) {
        self.slots = Box::default();
        self.len = 0;
    }
}

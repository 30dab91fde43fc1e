//! Fallible allocation of element slots.

use sqlist_core::{AllocError, Elem};

/// Source of fresh element storage.
///
/// Implementations return a zero-initialised boxed slice of exactly
/// `slots` elements, or [`AllocError`] if the memory cannot be obtained.
/// Lists call this for initialization and for every grow or shrink.
pub trait Allocator {
    /// Allocate `slots` zero-initialised elements.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the allocation cannot be satisfied.
    fn allocate(&mut self, slots: usize) -> Result<Box<[Elem]>, AllocError>;
}

/// Allocator backed by the global heap.
///
/// Uses `Vec::try_reserve_exact`, so an oversized or refused request
/// comes back as [`AllocError`] instead of aborting the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Box<[Elem]>, AllocError> {
        let mut data: Vec<Elem> = Vec::new();
        data.try_reserve_exact(slots)
            .map_err(|_| AllocError { requested: slots })?;
        data.resize(slots, 0);
        Ok(data.into_boxed_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_exact_zeroed_slots() {
        let slots = SystemAllocator.allocate(80).unwrap();
        assert_eq!(slots.len(), 80);
        assert!(slots.iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_slots_is_valid() {
        let slots = SystemAllocator.allocate(0).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn impossible_request_is_an_error_not_an_abort() {
        let result = SystemAllocator.allocate(usize::MAX);
        assert_eq!(
            result.unwrap_err(),
            AllocError {
                requested: usize::MAX
            }
        );
    }
}

//! Capacity policy for a sequential list.

use sqlist_core::ConfigError;

/// Capacity policy for a single list.
///
/// Each list carries its own copy, so lists in the same process can use
/// independent growth policies. Validated at list construction; the
/// list never mutates it afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Slots allocated at initialization, and the floor that
    /// delete-triggered shrinking never goes below.
    ///
    /// Default: 80.
    pub initial_capacity: usize,

    /// Slots added when an insert finds the list full.
    ///
    /// Default: 10.
    pub growth_increment: usize,

    /// Slots released by one shrink.
    ///
    /// Default: 10.
    pub shrink_decrement: usize,
}

impl ListConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 80;

    /// Default growth increment.
    pub const DEFAULT_GROWTH_INCREMENT: usize = 10;

    /// Default shrink decrement.
    pub const DEFAULT_SHRINK_DECREMENT: usize = 10;

    /// Create a config with the default capacity policy.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth_increment: Self::DEFAULT_GROWTH_INCREMENT,
            shrink_decrement: Self::DEFAULT_SHRINK_DECREMENT,
        }
    }

    /// Check that every step size is non-zero.
    ///
    /// # Errors
    ///
    /// Returns the first zero-valued field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroInitialCapacity);
        }
        if self.growth_increment == 0 {
            return Err(ConfigError::ZeroGrowthIncrement);
        }
        if self.shrink_decrement == 0 {
            return Err(ConfigError::ZeroShrinkDecrement);
        }
        Ok(())
    }

    /// Capacity after one growth step, or `None` on overflow.
    pub fn grown_capacity(&self, capacity: usize) -> Option<usize> {
        capacity.checked_add(self.growth_increment)
    }

    /// Capacity after one shrink step, if that still holds `length`
    /// elements and stays at or above the initial capacity.
    pub fn shrunk_capacity(&self, capacity: usize, length: usize) -> Option<usize> {
        capacity
            .checked_sub(self.shrink_decrement)
            .filter(|&target| target >= length && target >= self.initial_capacity)
    }

    /// Whether a delete that left `length` elements in `capacity` slots
    /// should try to release memory.
    ///
    /// True when spare capacity exceeds one growth increment and one
    /// shrink step stays at or above the initial capacity.
    pub fn should_shrink_after_delete(&self, capacity: usize, length: usize) -> bool {
        let spare = capacity.saturating_sub(length);
        let above_floor = capacity
            .checked_sub(self.shrink_decrement)
            .is_some_and(|target| target >= self.initial_capacity);
        spare > self.growth_increment && above_floor
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_textbook_policy() {
        let config = ListConfig::default();
        assert_eq!(config.initial_capacity, 80);
        assert_eq!(config.growth_increment, 10);
        assert_eq!(config.shrink_decrement, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_fields_are_rejected() {
        let mut config = ListConfig::new();
        config.initial_capacity = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInitialCapacity));

        let config = ListConfig {
            growth_increment: 0,
            ..ListConfig::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGrowthIncrement));

        let config = ListConfig {
            shrink_decrement: 0,
            ..ListConfig::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroShrinkDecrement));
    }

    #[test]
    fn grown_capacity_overflow_is_none() {
        let config = ListConfig::new();
        assert_eq!(config.grown_capacity(80), Some(90));
        assert_eq!(config.grown_capacity(usize::MAX), None);
    }

    #[test]
    fn shrunk_capacity_never_truncates() {
        let config = ListConfig::new();
        assert_eq!(config.shrunk_capacity(90, 80), Some(80));
        assert_eq!(config.shrunk_capacity(90, 81), None);
        assert_eq!(config.shrunk_capacity(5, 0), None);
    }

    #[test]
    fn shrunk_capacity_respects_initial_floor() {
        let config = ListConfig::new();
        assert_eq!(config.shrunk_capacity(85, 0), None);
        assert_eq!(config.shrunk_capacity(80, 0), None);
        assert_eq!(config.shrunk_capacity(100, 0), Some(90));
    }

    #[test]
    fn delete_shrink_needs_more_than_one_increment_of_slack() {
        let config = ListConfig::new();
        // 90 slots, 80 live: slack of exactly one increment is not enough.
        assert!(!config.should_shrink_after_delete(90, 80));
        assert!(config.should_shrink_after_delete(90, 79));
    }

    #[test]
    fn delete_shrink_respects_initial_floor() {
        let config = ListConfig::new();
        // 80 slots: shrinking would go below the initial capacity.
        assert!(!config.should_shrink_after_delete(80, 0));
        assert!(!config.should_shrink_after_delete(89, 0));
        assert!(config.should_shrink_after_delete(100, 0));
    }
}

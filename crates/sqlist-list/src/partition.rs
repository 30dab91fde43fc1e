//! Odd-before-even partitioning.
//!
//! Two cursors walk toward each other: the left one skips odd values,
//! the right one skips even values, and when both stop the pair is
//! swapped. One pass, constant extra space, not stable.
//!
//! Parity is [`is_odd`], which follows Rust's truncating `%`, so
//! negative odd values (`-3 % 2 == -1`) land in the odd prefix.

use sqlist_core::{is_odd, Elem};
use sqlist_storage::Allocator;

use crate::list::SeqList;

/// Reorder `values` so every odd value precedes every even value.
///
/// Returns the number of odd values, i.e. the 0-based index of the
/// first even value (or `values.len()` if there is none).
pub fn partition_odd_before_even(values: &mut [Elem]) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut left = 0;
    let mut right = values.len() - 1;
    while left < right {
        while left < right && is_odd(values[left]) {
            left += 1;
        }
        while left < right && !is_odd(values[right]) {
            right -= 1;
        }
        if left < right {
            values.swap(left, right);
        }
    }
    // The cursors meet on one unclassified element.
    if is_odd(values[left]) {
        left + 1
    } else {
        left
    }
}

impl<A: Allocator> SeqList<A> {
    /// Reorder the list in place so all odd elements come first.
    ///
    /// Returns the number of odd elements. Relative order within each
    /// parity class is not preserved. No-op on an empty or destroyed list.
    pub fn partition_odd_before_even(&mut self) -> usize {
        partition_odd_before_even(self.buffer.as_mut_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_partitioned(values: &[Elem], odd_count: usize) {
        assert!(values[..odd_count].iter().all(|&v| is_odd(v)));
        assert!(values[odd_count..].iter().all(|&v| !is_odd(v)));
    }

    #[test]
    fn walkthrough_sequence() {
        let mut values = [10, 15, 20, 7, 8];
        let odd = partition_odd_before_even(&mut values);
        assert_eq!(odd, 2);
        assert_eq!(values, [7, 15, 20, 10, 8]);
    }

    #[test]
    fn empty_and_single() {
        let mut empty: [Elem; 0] = [];
        assert_eq!(partition_odd_before_even(&mut empty), 0);

        let mut one = [3];
        assert_eq!(partition_odd_before_even(&mut one), 1);
        let mut one = [4];
        assert_eq!(partition_odd_before_even(&mut one), 0);
    }

    #[test]
    fn all_odd_and_all_even_are_untouched() {
        let mut odd = [1, 3, 5, 7];
        assert_eq!(partition_odd_before_even(&mut odd), 4);
        assert_eq!(odd, [1, 3, 5, 7]);

        let mut even = [2, 4, 6];
        assert_eq!(partition_odd_before_even(&mut even), 0);
        assert_eq!(even, [2, 4, 6]);
    }

    #[test]
    fn negative_odd_values_count_as_odd() {
        // -3 % 2 == -1, which is non-zero.
        let mut values = [-4, -3, 2, -1];
        let odd = partition_odd_before_even(&mut values);
        assert_eq!(odd, 2);
        assert_partitioned(&values, odd);
    }

    #[test]
    fn not_stable() {
        let mut values = [2, 1, 3];
        partition_odd_before_even(&mut values);
        assert_eq!(values, [3, 1, 2]);
    }

    #[test]
    fn list_method_partitions_live_elements_only() {
        let mut list = SeqList::new().unwrap();
        for (i, v) in [10, 15, 20, 7, 8].into_iter().enumerate() {
            list.insert(i + 1, v).unwrap();
        }
        assert_eq!(list.partition_odd_before_even(), 2);
        assert_eq!(list.to_vec(), vec![7, 15, 20, 10, 8]);
        assert_eq!(list.len(), 5);
    }

    proptest! {
        #[test]
        fn odd_prefix_even_suffix_same_multiset(
            values in proptest::collection::vec(any::<Elem>(), 0..64),
        ) {
            let mut sorted_before = values.clone();
            sorted_before.sort_unstable();

            let mut work = values;
            let odd = partition_odd_before_even(&mut work);
            prop_assert!(work[..odd].iter().all(|&v| is_odd(v)));
            prop_assert!(work[odd..].iter().all(|&v| !is_odd(v)));

            let mut sorted_after = work;
            sorted_after.sort_unstable();
            prop_assert_eq!(sorted_before, sorted_after);
        }
    }
}

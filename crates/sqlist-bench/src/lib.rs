//! Benchmark profiles for the sqlist sequential list.
//!
//! - [`textbook_config`]: the default 80/10/10 capacity policy
//! - [`tight_config`]: small steps, so benchmarks hit grow and shrink often
//! - [`prefilled`]: a list holding `0..len` under a given policy

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sqlist_core::{Elem, ListError};
use sqlist_list::SeqList;
use sqlist_storage::ListConfig;

/// The default capacity policy: 80 initial slots, steps of 10.
pub fn textbook_config() -> ListConfig {
    ListConfig::default()
}

/// A policy with 8 initial slots and steps of 4.
///
/// Append-heavy workloads reallocate every fourth insert past the
/// initial capacity, which makes reallocation cost visible.
pub fn tight_config() -> ListConfig {
    ListConfig {
        initial_capacity: 8,
        growth_increment: 4,
        shrink_decrement: 4,
    }
}

/// Build a list holding `0, 1, .., len - 1` under `config`.
///
/// # Errors
///
/// Propagates any [`ListError`] from construction or insertion.
pub fn prefilled(config: ListConfig, len: usize) -> Result<SeqList, ListError> {
    let mut list = SeqList::with_config(config)?;
    for i in 0..len {
        list.insert(i + 1, i as Elem)?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_holds_ascending_values() {
        let list = prefilled(tight_config(), 10).unwrap();
        assert_eq!(list.to_vec(), (0..10).collect::<Vec<Elem>>());
        assert_eq!(list.capacity(), 12);
    }

    #[test]
    fn configs_are_valid() {
        assert!(textbook_config().validate().is_ok());
        assert!(tight_config().validate().is_ok());
    }
}

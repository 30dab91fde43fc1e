//! Property tests over arbitrary operation sequences.
//!
//! A `Vec<Elem>` model runs alongside the list; after every operation
//! the list must agree with the model and hold `len <= capacity`.

use proptest::prelude::*;
use sqlist_core::{is_odd, Elem, ListError};
use sqlist_list::{SeqList, ShrinkOutcome};
use sqlist_storage::ListConfig;
use sqlist_test_utils::FailingAllocator;

#[derive(Clone, Debug)]
enum Op {
    Insert { position: usize, value: Elem },
    Delete { position: usize },
    Get { position: usize },
    Grow,
    Shrink,
    Clear,
    Partition,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0usize..40, -50i32..50).prop_map(|(position, value)| Op::Insert { position, value }),
        3 => (0usize..40).prop_map(|position| Op::Delete { position }),
        2 => (0usize..40).prop_map(|position| Op::Get { position }),
        1 => Just(Op::Grow),
        1 => Just(Op::Shrink),
        1 => Just(Op::Clear),
        1 => Just(Op::Partition),
    ]
}

fn small_config() -> ListConfig {
    ListConfig {
        initial_capacity: 4,
        growth_increment: 3,
        shrink_decrement: 2,
    }
}

proptest! {
    #[test]
    fn list_tracks_model_and_capacity_invariant(
        ops in proptest::collection::vec(op_strategy(), 1..120),
    ) {
        let mut list = SeqList::with_config(small_config()).unwrap();
        let mut model: Vec<Elem> = Vec::new();

        for op in ops {
            match op {
                Op::Insert { position, value } => {
                    let result = list.insert(position, value);
                    if (1..=model.len() + 1).contains(&position) {
                        prop_assert!(result.is_ok());
                        model.insert(position - 1, value);
                    } else {
                        let is_out_of_range = matches!(result, Err(ListError::OutOfRange { .. }));
                        prop_assert!(is_out_of_range);
                    }
                }
                Op::Delete { position } => {
                    let result = list.delete(position);
                    if (1..=model.len()).contains(&position) {
                        prop_assert_eq!(result, Ok(model.remove(position - 1)));
                    } else {
                        let is_out_of_range = matches!(result, Err(ListError::OutOfRange { .. }));
                        prop_assert!(is_out_of_range);
                    }
                }
                Op::Get { position } => {
                    let expected = position
                        .checked_sub(1)
                        .and_then(|i| model.get(i).copied());
                    prop_assert_eq!(list.get(position).ok(), expected);
                }
                Op::Grow => {
                    let before = list.capacity();
                    prop_assert_eq!(list.grow(), Ok(before + 3));
                }
                Op::Shrink => {
                    let before = list.capacity();
                    match list.shrink().unwrap() {
                        ShrinkOutcome::Shrunk { capacity } => {
                            prop_assert_eq!(capacity, before - 2);
                            prop_assert!(capacity >= 4);
                        }
                        ShrinkOutcome::Refused => {
                            prop_assert!(before < model.len().max(4) + 2);
                            prop_assert_eq!(list.capacity(), before);
                        }
                    }
                }
                Op::Clear => {
                    let before = list.capacity();
                    list.clear();
                    model.clear();
                    prop_assert_eq!(list.capacity(), before);
                }
                Op::Partition => {
                    let odd = list.partition_odd_before_even();
                    let values = list.to_vec();
                    prop_assert!(values[..odd].iter().all(|&v| is_odd(v)));
                    prop_assert!(values[odd..].iter().all(|&v| !is_odd(v)));
                    let mut a = values;
                    let mut b = model.clone();
                    a.sort_unstable();
                    b.sort_unstable();
                    prop_assert_eq!(a, b);
                    model = list.to_vec();
                }
            }
            prop_assert!(list.len() <= list.capacity());
            prop_assert!(list.capacity() >= 4);
            prop_assert_eq!(list.to_vec(), model.clone());
        }
    }

    #[test]
    fn insert_then_delete_round_trips(
        values in proptest::collection::vec(any::<Elem>(), 0..30),
        value in any::<Elem>(),
        seed in any::<usize>(),
    ) {
        let mut list = SeqList::with_config(small_config()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            list.insert(i + 1, v).unwrap();
        }
        let position = seed % (values.len() + 1) + 1;

        list.insert(position, value).unwrap();
        prop_assert_eq!(list.get(position).unwrap(), value);
        for p in 1..position {
            prop_assert_eq!(list.get(p).unwrap(), values[p - 1]);
        }
        for p in position..=values.len() {
            prop_assert_eq!(list.get(p + 1).unwrap(), values[p - 1]);
        }

        prop_assert_eq!(list.delete(position).unwrap(), value);
        prop_assert_eq!(list.to_vec(), values);
    }

    #[test]
    fn shrink_never_loses_data(
        values in proptest::collection::vec(any::<Elem>(), 0..30),
        extra_grows in 0usize..5,
    ) {
        let mut list = SeqList::with_config(small_config()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            list.insert(i + 1, v).unwrap();
        }
        for _ in 0..extra_grows {
            list.grow().unwrap();
        }
        for _ in 0..10 {
            list.shrink().unwrap();
            prop_assert!(list.capacity() >= list.len());
            prop_assert!(list.capacity() >= 4);
            prop_assert_eq!(list.to_vec(), values.clone());
        }
    }

    #[test]
    fn failed_allocation_never_changes_visible_state(
        values in proptest::collection::vec(any::<Elem>(), 4..12),
    ) {
        let (alloc, control) = FailingAllocator::new();
        let mut list = SeqList::with_allocator(small_config(), alloc).unwrap();
        for (i, &v) in values.iter().enumerate() {
            list.insert(i + 1, v).unwrap();
        }
        while list.len() < list.capacity() {
            list.insert(list.len() + 1, 0).unwrap();
        }
        let before = list.to_vec();
        let capacity = list.capacity();

        control.fail_next(1);
        let is_allocation = matches!(list.insert(1, 42), Err(ListError::Allocation(_)));
        prop_assert!(is_allocation);
        prop_assert_eq!(list.to_vec(), before);
        prop_assert_eq!(list.capacity(), capacity);
    }
}

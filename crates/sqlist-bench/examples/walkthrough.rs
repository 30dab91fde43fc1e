//! Console walkthrough of a list's lifetime.
//!
//! Demonstrates: init → insert → delete → locate → predecessor/successor
//! → explicit grow → partition → clear → destroy, followed by a bubble
//! sort of `10..=1`. Capacity notices are printed through `tracing`.

use sqlist_core::Elem;
use sqlist_list::SeqList;
use sqlist_sort::bubble_sort;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    println!("=== sqlist walkthrough ===\n");

    println!("Initializing the list...");
    let mut list = match SeqList::new() {
        Ok(list) => list,
        Err(e) => {
            eprintln!("initialization failed: {e}");
            return;
        }
    };
    println!("{list} (capacity {})", list.capacity());

    println!("\nInserting elements...");
    for (position, value) in [(1, 10), (2, 15), (3, 20), (2, 5)] {
        if let Err(e) = list.insert(position, value) {
            println!("  insert {value} at {position}: {e}");
        }
    }
    println!("{list}");

    println!("\nDeleting position 2...");
    match list.delete(2) {
        Ok(value) => println!("  removed {value}"),
        Err(e) => println!("  delete at 2: {e}"),
    }
    println!("{list}");

    println!("\nLocating 15...");
    match list.locate(15) {
        Ok(position) => println!("  position of 15: {position}"),
        Err(e) => println!("  15: {e}"),
    }

    println!("\nNeighbors of 15...");
    match list.predecessor(15) {
        Ok(value) => println!("  predecessor: {value}"),
        Err(e) => println!("  predecessor: {e}"),
    }
    match list.successor(15) {
        Ok(value) => println!("  successor: {value}"),
        Err(e) => println!("  successor: {e}"),
    }

    println!("\nGrowing the list explicitly...");
    match list.grow() {
        Ok(capacity) => println!("  capacity now {capacity}"),
        Err(e) => println!("  grow: {e}"),
    }

    println!("\nPartitioning odd before even...");
    for (position, value) in [(4, 7), (5, 8)] {
        if let Err(e) = list.insert(position, value) {
            println!("  insert {value} at {position}: {e}");
        }
    }
    println!("  before: {list}");
    let odd = list.partition_odd_before_even();
    println!("  after:  {list} ({odd} odd)");

    println!("\nClearing the list...");
    list.clear();
    println!("{list} (capacity {})", list.capacity());

    println!("\nDestroying the list...");
    list.destroy();
    if let Err(e) = list.insert(1, 1) {
        println!("  insert after destroy: {e}");
    }

    println!("\nBubble sort of 10..=1...");
    let mut values: Vec<Elem> = (1..=10).rev().collect();
    bubble_sort(&mut values, |a, b| a.cmp(b));
    println!("  {values:?}");
}

//! Console walkthrough of `ChainedHashMap` behavior.
//!
//! Prints each operation and its observable effect, including chain order
//! under collisions and capacity doubling under load.

use chainmap::{ChainedHashMap, HashMapExtensions};

/// Prints a section banner.
fn banner(title: &str) {
    println!();
    println!("=== {title} ===");
}

/// Runs the walkthrough.
fn main() {
    banner("Construction");
    let mut map: ChainedHashMap<i64> = ChainedHashMap::new();
    println!("new map: capacity = {}, len = {}", map.capacity(), map.len());
    println!("growth threshold: load factor > {}", ChainedHashMap::<i64>::LOAD_FACTOR_THRESHOLD);

    banner("Insert and lookup");
    for (key, value) in [("apple", 3), ("banana", 7), ("cherry", 2)] {
        map.insert(key.to_string(), value);
        println!("insert {key:>6} = {value}");
    }
    println!("get apple  -> {:?}", map.get("apple"));
    println!("get durian -> {:?}", map.get("durian"));
    println!("contains_key banana -> {}", map.contains_key("banana"));

    banner("Update");
    let previous = map.insert("apple".to_string(), 30);
    println!("insert apple = 30 (was {previous:?})");
    println!("get apple -> {:?}, len = {}", map.get("apple"), map.len());

    banner("Collisions");
    // Anagrams share a character sum, so they land in one bucket at any
    // capacity and chain in insertion order.
    for (key, value) in [("pat", 1), ("tap", 2), ("apt", 3)] {
        map.insert(key.to_string(), value);
    }
    let chained: Vec<String> =
        map.keys().into_iter().filter(|key| ["pat", "tap", "apt"].contains(&key.as_str())).collect();
    println!("chain order for the anagram bucket: {chained:?}");

    banner("Remove");
    println!("remove tap    -> {:?}", map.remove("tap"));
    println!("remove tap    -> {:?}", map.remove("tap"));
    println!("len = {}", map.len());

    banner("Bulk views");
    println!("keys:   {:?}", map.keys());
    println!("values: {:?}", map.values());
    for line in map.entries() {
        println!("  {line}");
    }

    banner("Growth under load");
    let mut grower: ChainedHashMap<usize> = ChainedHashMap::new();
    let mut last_capacity = grower.capacity();
    for i in 0..64_usize {
        grower.insert(format!("key{i}"), i);
        if grower.capacity() != last_capacity {
            println!(
                "insert #{:>2} doubled capacity: {} -> {} (load factor {:.3})",
                grower.len(),
                last_capacity,
                grower.capacity(),
                grower.load_factor()
            );
            last_capacity = grower.capacity();
        }
    }
    println!(
        "final: len = {}, capacity = {}, load factor = {:.3}",
        grower.len(),
        grower.capacity(),
        grower.load_factor()
    );

    banner("Clear");
    grower.clear();
    println!("after clear: len = {}, capacity = {}", grower.len(), grower.capacity());
}

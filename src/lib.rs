//! # Chained Hash Map
//!
//! A Rust implementation of a hash table with separate chaining.
//!
//! Keys are strings hashed by summing their character codes, each weighted
//! by 11, and reducing the sum modulo the current bucket count. Colliding
//! keys share a bucket as a linked chain, with new keys appended at the
//! chain tail. When an insert would push the load factor above 0.75 the
//! bucket count doubles and every entry is rehashed into fresh chains.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.insert("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Collisions and Bulk Views
//!
//! ```rust
//! use chainmap::{ChainedHashMap, HashMapExtensions};
//!
//! let mut map = ChainedHashMap::new();
//!
//! // "pat" and "tap" have the same character sum, so they always share
//! // a bucket and chain in insertion order
//! map.insert("pat".to_string(), 1);
//! map.insert("tap".to_string(), 2);
//!
//! assert_eq!(map.get("pat"), Some(&1));
//! assert_eq!(map.get("tap"), Some(&2));
//! assert!(map.contains_key("tap"));
//!
//! // Bulk views walk buckets in order, then each chain head to tail
//! assert_eq!(map.keys(), vec!["pat".to_string(), "tap".to_string()]);
//! assert_eq!(map.entries().first().map(String::as_str), Some("Key: pat | Value: 1"));
//! ```

/// Module implementing a single-threaded hash map with separate chaining
mod chained_hashmap;
/// Utility functions and traits for the hash map
mod utils;

pub use chained_hashmap::{ChainedHashMap, Iter};
pub use utils::{from_iter, HashMapExtensions};

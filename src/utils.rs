//! Utility functions and traits for `ChainedHashMap`

use crate::ChainedHashMap;
use std::fmt::Display;

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions<V> {
    /// Returns the keys of the hash map as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the hash map as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns one formatted `"Key: <key> | Value: <value>"` line per entry
    fn entries(&self) -> Vec<String>
    where
        V: Display;

    /// Returns true if the hash map contains the given key
    fn contains_key(&self, key: &str) -> bool;
}

impl<V> HashMapExtensions<V> for ChainedHashMap<V>
where
    V: Clone,
{
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn entries(&self) -> Vec<String>
    where
        V: Display,
    {
        self.iter().map(|(key, value)| format!("Key: {key} | Value: {value}")).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Creates a `ChainedHashMap` from an iterator of key-value pairs
///
/// ```rust
/// use chainmap::from_iter;
///
/// let map = from_iter([("a".to_string(), 1), ("b".to_string(), 2)]);
/// assert_eq!(map.get("a"), Some(&1));
/// assert_eq!(map.len(), 2);
/// ```
pub fn from_iter<V, I>(iter: I) -> ChainedHashMap<V>
where
    I: IntoIterator<Item = (String, V)>,
{
    let iter = iter.into_iter();
    let mut map = ChainedHashMap::new();

    for (key, value) in iter {
        map.insert(key, value);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainedHashMap;

    #[test]
    fn test_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let map = from_iter(data);

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_keys_and_values() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("c".to_string(), 3);

        let mut keys = map.keys();
        keys.sort(); // Sort for predictable comparison

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_keys_follow_bucket_order() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);
        map.insert("pat".to_string(), 2);
        map.insert("c".to_string(), 3);
        map.insert("tap".to_string(), 4);
        map.insert("b".to_string(), 5);

        assert_eq!(map.keys(), vec!["c", "b", "pat", "tap", "a"]);
        assert_eq!(map.values(), vec![3, 5, 2, 4, 1]);
    }

    #[test]
    fn test_entries_format() {
        let mut map = ChainedHashMap::new();
        map.insert("pat".to_string(), 1);
        map.insert("tap".to_string(), 2);

        assert_eq!(
            map.entries(),
            vec!["Key: pat | Value: 1".to_string(), "Key: tap | Value: 2".to_string()]
        );
    }

    #[test]
    fn test_entries_with_non_numeric_values() {
        let mut map = ChainedHashMap::new();
        map.insert("greeting".to_string(), "hello".to_string());

        assert_eq!(map.entries(), vec!["Key: greeting | Value: hello".to_string()]);
    }

    #[test]
    fn test_contains_key() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);

        assert!(map.contains_key("a"));
        assert!(!map.contains_key("b"));
    }
}

use std::mem;

/// Weight applied to each character code when hashing a key.
const CHAR_WEIGHT: u64 = 11;

/// Capacity-independent portion of the hash: the sum of the key's
/// character codes, each scaled by [`CHAR_WEIGHT`].
fn weighted_sum(key: &str) -> u64 {
    key.chars().fold(0_u64, |sum, c| sum.wrapping_add(u64::from(c).wrapping_mul(CHAR_WEIGHT)))
}

/// Maps a key to a bucket index under the given bucket count.
///
/// This is a pure function of `(key, bucket_count)`. The index depends on
/// the live bucket count, so callers recompute it after every capacity
/// change instead of caching it.
#[allow(clippy::cast_possible_truncation)]
fn bucket_for(key: &str, bucket_count: usize) -> usize {
    (weighted_sum(key) as usize).checked_rem(bucket_count).unwrap_or(0)
}

/// Appends a freshly built node at the tail of the chain rooted in `slot`.
///
/// The caller guarantees `key` is not already present in the chain.
fn push_tail<V>(slot: &mut Option<Box<Entry<V>>>, key: String, value: V) {
    let mut cursor = slot;
    while let Some(entry) = cursor {
        cursor = &mut entry.next;
    }
    *cursor = Some(Box::new(Entry { key, value, next: None }));
}

/// A single key-value node in a bucket's collision chain.
#[derive(Debug)]
struct Entry<V> {
    /// The key owned by this node
    key: String,
    /// The value associated with the key
    value: V,
    /// The next node in the chain, exclusively owned by this one
    next: Option<Box<Entry<V>>>,
}

/// A hash map resolving collisions with one owned chain per bucket.
///
/// Keys are strings, hashed by a weighted character sum reduced modulo the
/// live bucket count. When an insert would push occupancy past
/// [`LOAD_FACTOR_THRESHOLD`](Self::LOAD_FACTOR_THRESHOLD), the bucket
/// count doubles and every entry is rebuilt into a fresh chain under the
/// new capacity.
///
/// Note: This implementation is not thread-safe. Callers needing shared
/// access must provide their own synchronization.
#[derive(Debug)]
pub struct ChainedHashMap<V> {
    /// Bucket slots; each slot owns the head of its collision chain.
    /// The vector length is the map's capacity and is never zero.
    buckets: Vec<Option<Box<Entry<V>>>>,
    /// Number of distinct keys currently stored
    size: usize,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(String, V)> for ChainedHashMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> ChainedHashMap<V> {
    /// Bucket count used by [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Occupancy ratio beyond which an insert doubles the bucket count.
    pub const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

    /// Creates an empty map with the default capacity of 16 buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty map with the specified number of buckets.
    ///
    /// The count is clamped to at least 1 and used as given otherwise;
    /// chained indexing works with any positive bucket count.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self { buckets, size: 0 }
    }

    /// Bucket index for a key under the current bucket count.
    fn bucket_index(&self, key: &str) -> usize {
        bucket_for(key, self.buckets.len())
    }

    /// Inserts a key-value pair, returning the previous value when the key
    /// was already present.
    ///
    /// The growth check runs before the chain walk and compares the
    /// occupancy one more key would produce against
    /// [`LOAD_FACTOR_THRESHOLD`](Self::LOAD_FACTOR_THRESHOLD), so a call
    /// that only replaces an existing value can still double the capacity.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        let projected = (self.size.saturating_add(1)) as f64 / self.buckets.len() as f64;
        if projected > Self::LOAD_FACTOR_THRESHOLD {
            self.resize();
        }

        let index = self.bucket_index(&key);
        let mut cursor = self.buckets.get_mut(index)?;
        loop {
            match cursor {
                Some(entry) if entry.key == key => {
                    return Some(mem::replace(&mut entry.value, value));
                }
                Some(entry) => cursor = &mut entry.next,
                None => break,
            }
        }

        *cursor = Some(Box::new(Entry { key, value, next: None }));
        self.size = self.size.saturating_add(1);
        None
    }

    /// Retrieves the value stored for a key.
    ///
    /// `None` means the key is absent. A stored value is always returned
    /// wrapped in `Some`, so a map with an `Option` value type keeps
    /// "present but empty" distinct from "missing".
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        let mut current = self.buckets.get(index).and_then(Option::as_deref);
        while let Some(entry) = current {
            if entry.key == key {
                return Some(&entry.value);
            }
            current = entry.next.as_deref();
        }
        None
    }

    /// Retrieves a mutable reference to the value stored for a key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        let mut current = self.buckets.get_mut(index).and_then(Option::as_deref_mut);
        while let Some(entry) = current {
            if entry.key == key {
                return Some(&mut entry.value);
            }
            current = entry.next.as_deref_mut();
        }
        None
    }

    /// Removes a key, returning its value when the key was present.
    ///
    /// Unlinking bypasses the removed node: its predecessor takes over the
    /// successor link, or the successor becomes the new chain head. The
    /// bucket count never shrinks.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let mut cursor = self.buckets.get_mut(index)?;
        loop {
            match cursor {
                None => return None,
                Some(entry) if entry.key == key => break,
                Some(entry) => cursor = &mut entry.next,
            }
        }

        let mut unlinked = cursor.take()?;
        *cursor = unlinked.next.take();
        self.size = self.size.saturating_sub(1);
        Some(unlinked.value)
    }

    /// Returns the number of keys in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true when the map holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the current number of bucket slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current ratio of stored keys to bucket slots.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Removes every key. The bucket count stays as it is.
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            // Unlink chains link by link; a recursive drop could exhaust
            // the stack on a degenerate chain.
            let mut chain = slot.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
        self.size = 0;
    }

    /// Returns an iterator over `(key, value)` pairs in bucket order,
    /// walking each chain from head to tail.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, index: 0, chain: None }
    }

    /// Doubles the bucket count and rebuilds every chain under it.
    ///
    /// Old chains are drained head to tail and each key-value pair is
    /// re-appended as a freshly built node at the tail of its new chain,
    /// so keys that still share a bucket keep their relative order. Link
    /// pointers are never carried over.
    fn resize(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(2);
        let mut new_buckets: Vec<Option<Box<Entry<V>>>> = Vec::with_capacity(new_capacity);
        new_buckets.resize_with(new_capacity, || None);

        for mut chain in mem::take(&mut self.buckets) {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let Entry { key, value, .. } = *entry;
                let index = bucket_for(&key, new_capacity);
                if let Some(slot) = new_buckets.get_mut(index) {
                    push_tail(slot, key, value);
                }
            }
        }

        self.buckets = new_buckets;
    }
}

impl<V> Drop for ChainedHashMap<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<V: Clone> Clone for ChainedHashMap<V> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.capacity());
        for (key, value) in self.iter() {
            cloned.insert(key.to_owned(), value.clone());
        }
        cloned
    }
}

/// Borrowed iterator over a map's entries in bucket-then-chain order.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// The map's bucket slots
    buckets: &'a [Option<Box<Entry<V>>>],
    /// Index of the next bucket slot to visit
    index: usize,
    /// Cursor inside the chain currently being walked
    chain: Option<&'a Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                return Some((entry.key.as_str(), &entry.value));
            }
            match self.buckets.get(self.index) {
                Some(slot) => {
                    self.index = self.index.saturating_add(1);
                    self.chain = slot.as_deref();
                }
                None => return None,
            }
        }
    }
}

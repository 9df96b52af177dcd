/*!
This module provides a `Cache` trait for the memoization of computed ranks. A cache that never
evicts its entries is provided.

Cache methods take `&self` so that a comparator can memoize through a shared reference. The
provided implementation guards its entries with a lock so that a comparator can be shared by
concurrent sorts.
*/

use parking_lot::RwLock;
use std::{collections::HashMap, hash::Hash};

/**
A cache that stores mappings from keys to values.

# Concurrency

Implementations of this trait must be thread-safe.
*/
pub(crate) trait Cache<K, V>: Send + Sync {
    /**
    Insert the key-value pair into the cache.

    If the key already existed in the cache, no update is performed.
    */
    fn insert(&self, key: K, value: V);

    /// Get a copy of the cached value for the given key.
    fn get(&self, key: &K) -> Option<V>;

    /// Get the current number of elements in the cache.
    fn len(&self) -> usize;
}

/// A cache without an eviction policy. Entries live as long as the cache does.
#[derive(Debug)]
pub(crate) struct UnboundedCache<K, V>
where
    K: Hash + Eq,
{
    /// The entries of the cache.
    entries: RwLock<HashMap<K, V>>,
}

/// Crate-only methods
impl<K, V> UnboundedCache<K, V>
where
    K: Hash + Eq,
{
    /// Create a new instance of the [`UnboundedCache`] with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }
}

impl<K, V> Cache<K, V> for UnboundedCache<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Copy + Send + Sync,
{
    fn insert(&self, key: K, value: V) {
        // Racing inserts for a key compute the same value so the first one is kept
        self.entries.write().entry(key).or_insert(value);
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.read().get(key).copied()
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

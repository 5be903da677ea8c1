use std::{borrow::Borrow, fmt, mem};

use crate::{
    GROWTH_FACTOR, KeyHasher, SumOfCodes,
    prime::table_capacity,
    table::key_str,
};

/// Load factor at which `put` grows the table before inserting.
pub const CHAINING_MAX_LOAD: f64 = 1.0;

/// Capacity used by [`ChainedMap::default`].
pub const DEFAULT_CAPACITY: usize = 11;

/// Collision list of one bucket.
type Chain<K, V> = Vec<(K, V)>;

/// A hash map resolving collisions with separate chaining.
///
/// Each of the (prime number of) buckets owns the list of pairs hashing to
/// it. New keys are appended to their bucket; the order inside a bucket
/// carries no meaning.
#[derive(Debug, Clone)]
pub struct ChainedMap<K, V, H = SumOfCodes> {
    /// One collision list per bucket
    buckets: Vec<Chain<K, V>>,
    /// Number of stored pairs
    size: usize,
    /// Strategy turning keys into bucket indices
    hasher: H,
}

/// Allocates `capacity` empty buckets.
fn fresh_buckets<K, V>(capacity: usize) -> Vec<Chain<K, V>> {
    std::iter::repeat_with(Vec::new).take(capacity).collect()
}

impl<K, V> Default for ChainedMap<K, V>
where
    K: Eq + Borrow<str>,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, SumOfCodes)
    }
}

impl<K, V, H> ChainedMap<K, V, H>
where
    K: Eq + Borrow<str>,
    H: KeyHasher,
{
    /// Creates a map with `capacity` buckets rounded up to a prime.
    pub fn new(capacity: usize, hasher: H) -> Self {
        Self { buckets: fresh_buckets(table_capacity(capacity)), size: 0, hasher }
    }

    /// Index of the bucket `key` belongs to.
    fn bucket_index(&self, key: &str) -> usize {
        self.hasher.hash_key(key).checked_rem(self.buckets.len()).unwrap_or(0)
    }

    /// The chain `key` belongs to.
    fn chain(&self, key: &str) -> Option<&Chain<K, V>> {
        self.buckets.get(self.bucket_index(key))
    }

    /// The chain `key` belongs to, mutably.
    fn chain_mut(&mut self, key: &str) -> Option<&mut Chain<K, V>> {
        let index = self.bucket_index(key);
        self.buckets.get_mut(index)
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// Grows the table first once the load factor has reached [`CHAINING_MAX_LOAD`].
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.table_load() >= CHAINING_MAX_LOAD {
            self.resize_table(self.buckets.len().saturating_mul(GROWTH_FACTOR));
        }

        let chain = self.chain_mut(key_str(&key))?;
        if let Some((_, old)) = chain.iter_mut().find(|(k, _)| key_str(k) == key_str(&key)) {
            return Some(mem::replace(old, value));
        }
        chain.push((key, value));
        self.size = self.size.saturating_add(1);
        None
    }

    /// Retrieve a value for a given key
    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain(key)?.iter().find(|(k, _)| key_str(k) == key).map(|(_, v)| v)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.chain_mut(key)?.iter_mut().find(|(k, _)| key_str(k) == key).map(|(_, v)| v)
    }

    /// Returns true if `key` is stored.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` from its chain. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let chain = self.chain_mut(key)?;
        let position = chain.iter().position(|(k, _)| key_str(k) == key)?;
        let (_, value) = chain.swap_remove(position);
        self.size = self.size.saturating_sub(1);
        Some(value)
    }

    /// Rehashes every pair into `new_capacity` buckets rounded up to a prime.
    ///
    /// A request of 0 is ignored. Pairs are re-inserted bucket by bucket with
    /// the usual growth rule, so shrinking below `len()` grows back.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            return;
        }

        let old = mem::replace(&mut self.buckets, fresh_buckets(table_capacity(new_capacity)));
        self.size = 0;
        for (key, value) in old.into_iter().flatten() {
            self.put(key, value);
        }
    }

    /// Clears the hash map, keeping its capacity
    pub fn clear(&mut self) {
        self.buckets = fresh_buckets(self.buckets.len());
        self.size = 0;
    }

    /// All pairs, bucket by bucket.
    #[must_use]
    pub fn keys_and_values(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V, H> ChainedMap<K, V, H> {
    /// Returns the number of elements in the hash table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the hash table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the hash map
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Number of buckets with an empty chain.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Iterates over all pairs, bucket order then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }
}

impl<K, V, H> Extend<(K, V)> for ChainedMap<K, V, H>
where
    K: Eq + Borrow<str>,
    H: KeyHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, H> fmt::Display for ChainedMap<K, V, H>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            write!(f, "{index}: [")?;
            for (position, (key, value)) in chain.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}: {value}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

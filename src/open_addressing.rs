use std::{borrow::Borrow, fmt, iter::FusedIterator, mem};

use crate::{
    GROWTH_FACTOR, KeyHasher, SumOfCodes,
    prime::table_capacity,
    table::key_str,
};

/// Load factor the table never exceeds once `put` returns.
pub const OPEN_ADDRESSING_MAX_LOAD: f64 = 0.5;

/// A single slot of an [`OpenAddressingMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot<K, V> {
    /// Never used since the last rebuild; ends every probe sequence.
    #[default]
    Empty,
    /// Held an entry that was removed. Probes walk past it and inserts may
    /// reuse it.
    Tombstone,
    /// A live entry.
    Occupied {
        /// The stored key
        key: K,
        /// The value associated with the key
        value: V,
    },
}

impl<K, V> Slot<K, V> {
    /// Returns true if the slot holds a live entry.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }
}

/// Outcome of walking a key's probe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key lives at this index.
    Found(usize),
    /// The key is absent; a new entry for it belongs at this index.
    Vacant(usize),
    /// The key is absent and every probed slot is occupied.
    Full,
}

/// Yields `(home + i^2) mod capacity` for `i` in `0..capacity`.
#[derive(Debug, Clone)]
struct ProbeSequence {
    /// Slot for the current step
    index: usize,
    /// Current step `i`
    step: usize,
    /// Number of slots in the table
    capacity: usize,
}

impl ProbeSequence {
    /// Starts a sequence at `home`, which must be below `capacity`.
    fn new(home: usize, capacity: usize) -> Self {
        Self { index: home, step: 0, capacity }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    /// Advances with `(i + 1)^2 - i^2 = 2i + 1` so no square is ever formed.
    fn next(&mut self) -> Option<usize> {
        if self.step >= self.capacity {
            return None;
        }
        let current = self.index;
        let delta = self.step.saturating_mul(2).saturating_add(1);
        self.index = current.saturating_add(delta).checked_rem(self.capacity).unwrap_or(0);
        self.step = self.step.saturating_add(1);
        Some(current)
    }
}

/// A hash map resolving collisions with quadratic probing.
///
/// The slot array always has a prime length. Removal leaves a
/// [`Slot::Tombstone`] behind so that probe sequences running through the
/// slot stay intact; tombstones are reused by later inserts and dropped on
/// every resize.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct OpenAddressingMap<K, V, H = SumOfCodes> {
    /// The slots; their count is the capacity
    slots: Box<[Slot<K, V>]>,
    /// Number of occupied slots
    size: usize,
    /// Strategy turning keys into home indices
    hasher: H,
}

/// Allocates `capacity` empty slots.
fn empty_slots<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    std::iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

impl<K, V, H> OpenAddressingMap<K, V, H>
where
    K: Eq + Borrow<str>,
    H: KeyHasher,
{
    /// Creates a map with room for `capacity` slots rounded up to a prime.
    pub fn new(capacity: usize, hasher: H) -> Self {
        Self { slots: empty_slots(table_capacity(capacity)), size: 0, hasher }
    }

    /// Home index of `key`.
    fn home_index(&self, key: &str) -> usize {
        self.hasher.hash_key(key).checked_rem(self.slots.len()).unwrap_or(0)
    }

    /// Walks the probe sequence of `key`.
    ///
    /// Tombstones are skipped but the first one is remembered: a missing key
    /// goes there, since the walk had to reach an empty slot to prove the key
    /// is absent further along.
    fn probe(&self, key: &str) -> Probe {
        let mut reusable = None;
        for index in ProbeSequence::new(self.home_index(key), self.slots.len()) {
            match self.slots.get(index) {
                Some(Slot::Occupied { key: existing, .. }) if key_str(existing) == key => {
                    return Probe::Found(index);
                }
                Some(Slot::Tombstone) => {
                    reusable.get_or_insert(index);
                }
                Some(Slot::Empty) => return Probe::Vacant(reusable.unwrap_or(index)),
                _ => {}
            }
        }
        reusable.map_or(Probe::Full, Probe::Vacant)
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// Grows the table first if the load factor has already reached
    /// [`OPEN_ADDRESSING_MAX_LOAD`], so at most `(C + 1) / 2` slots end up occupied.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.table_load() >= OPEN_ADDRESSING_MAX_LOAD {
            self.grow();
        }
        self.insert_probed(key, value)
    }

    /// Places an entry once the load check has passed.
    fn insert_probed(&mut self, key: K, value: V) -> Option<V> {
        match self.probe(key_str(&key)) {
            Probe::Found(index) => match self.slots.get_mut(index) {
                Some(Slot::Occupied { value: old, .. }) => Some(mem::replace(old, value)),
                _ => None,
            },
            Probe::Vacant(index) => {
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = Slot::Occupied { key, value };
                    self.size = self.size.saturating_add(1);
                }
                None
            }
            // Unreachable below the load limit for a prime capacity; grow anyway.
            Probe::Full => {
                self.grow();
                self.insert_probed(key, value)
            }
        }
    }

    /// Resizes to `GROWTH_FACTOR` times the current capacity.
    fn grow(&mut self) {
        self.resize_table(self.slots.len().saturating_mul(GROWTH_FACTOR));
    }

    /// Retrieve a value for a given key
    pub fn get(&self, key: &str) -> Option<&V> {
        match self.probe(key) {
            Probe::Found(index) => match self.slots.get(index) {
                Some(Slot::Occupied { value, .. }) => Some(value),
                _ => None,
            },
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        match self.probe(key) {
            Probe::Found(index) => match self.slots.get_mut(index) {
                Some(Slot::Occupied { value, .. }) => Some(value),
                _ => None,
            },
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Returns true if `key` has a live entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, leaving a tombstone in its slot.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let Probe::Found(index) = self.probe(key) else {
            return None;
        };
        let slot = self.slots.get_mut(index)?;
        if let Slot::Occupied { value, .. } = mem::replace(slot, Slot::Tombstone) {
            self.size = self.size.saturating_sub(1);
            return Some(value);
        }
        None
    }

    /// Rehashes every live entry into `new_capacity` slots rounded up to a prime.
    ///
    /// Requests below the current number of entries are ignored. Tombstones
    /// are not carried over. The re-inserts follow the usual growth rule, so
    /// a request close to `len()` ends with a larger table.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < self.size {
            return;
        }

        let old = mem::replace(&mut self.slots, empty_slots(table_capacity(new_capacity)));
        self.size = 0;
        for slot in old.into_vec() {
            if let Slot::Occupied { key, value } = slot {
                self.put(key, value);
            }
        }
    }

    /// Clears the hash map, keeping its capacity
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.slots.len());
        self.size = 0;
    }

    /// Number of empty or tombstoned slots.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_occupied()).count()
    }

    /// All live entries in slot order.
    #[must_use]
    pub fn keys_and_values(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V, H> OpenAddressingMap<K, V, H> {
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

    /// Returns the number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current load factor of the hash map
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Read-only view of the slot array.
    #[must_use]
    pub fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    /// Returns an iterator over the live entries, starting from slot 0.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: self.slots.iter() }
    }
}

impl<K, V, H> Extend<(K, V)> for OpenAddressingMap<K, V, H>
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

impl<K, V, H> fmt::Display for OpenAddressingMap<K, V, H>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}: None")?,
                Slot::Tombstone => writeln!(f, "{index}: TS")?,
                Slot::Occupied { key, value } => writeln!(f, "{index}: {key}: {value}")?,
            }
        }
        Ok(())
    }
}

/// Iterator over the live entries of an [`OpenAddressingMap`] in slot order.
///
/// Empty and tombstoned slots are skipped. Each call to
/// [`OpenAddressingMap::iter`] starts a fresh pass.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Remaining slots
    slots: std::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key, value)),
            Slot::Empty | Slot::Tombstone => None,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V, H> IntoIterator for &'a OpenAddressingMap<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

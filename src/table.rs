//! The contract shared by [`OpenAddressingMap`] and [`ChainedMap`].

use std::borrow::Borrow;

use crate::{ChainedMap, KeyHasher, OpenAddressingMap};

/// Operations common to both table variants.
///
/// Both maps expose the same methods inherently; the trait lets generic code
/// and tests run against either one.
pub trait HashTable<K, V> {
    /// Inserts or overwrites `key`, returning the previous value if there was one.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&V>;

    /// Removes `key`, returning its value. Absent keys are a no-op.
    fn remove(&mut self, key: &str) -> Option<V>;

    /// Drops every entry while keeping the capacity.
    fn clear(&mut self);

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Number of slots or buckets.
    fn capacity(&self) -> usize;

    /// Number of slots or buckets that hold no live entry.
    fn empty_buckets(&self) -> usize;

    /// Rehashes into a table of (at least) `new_capacity` slots.
    fn resize_table(&mut self, new_capacity: usize);

    /// Every live pair, in the table's iteration order.
    fn keys_and_values(&self) -> Vec<(&K, &V)>;

    /// Returns true if `key` is present.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if the table holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ratio of live entries to capacity.
    #[allow(clippy::cast_precision_loss)]
    fn table_load(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// The keys, in iteration order.
    fn keys<'a>(&'a self) -> Vec<&'a K>
    where
        V: 'a,
    {
        self.keys_and_values().into_iter().map(|(k, _)| k).collect()
    }

    /// The values, in iteration order.
    fn values<'a>(&'a self) -> Vec<&'a V>
    where
        K: 'a,
    {
        self.keys_and_values().into_iter().map(|(_, v)| v).collect()
    }
}

/// Views a stored key as the `&str` it is hashed and compared by.
pub(crate) fn key_str<K: Borrow<str>>(key: &K) -> &str {
    key.borrow()
}

/// Implements [`HashTable`] for a map type by forwarding to its inherent methods.
macro_rules! forward_hash_table {
    ($map:ident) => {
        impl<K, V, H> HashTable<K, V> for $map<K, V, H>
        where
            K: Eq + Borrow<str>,
            H: KeyHasher,
        {
            fn put(&mut self, key: K, value: V) -> Option<V> {
                $map::put(self, key, value)
            }

            fn get(&self, key: &str) -> Option<&V> {
                $map::get(self, key)
            }

            fn remove(&mut self, key: &str) -> Option<V> {
                $map::remove(self, key)
            }

            fn clear(&mut self) {
                $map::clear(self);
            }

            fn len(&self) -> usize {
                $map::len(self)
            }

            fn capacity(&self) -> usize {
                $map::capacity(self)
            }

            fn empty_buckets(&self) -> usize {
                $map::empty_buckets(self)
            }

            fn resize_table(&mut self, new_capacity: usize) {
                $map::resize_table(self, new_capacity);
            }

            fn keys_and_values(&self) -> Vec<(&K, &V)> {
                $map::keys_and_values(self)
            }
        }
    };
}

forward_hash_table!(OpenAddressingMap);
forward_hash_table!(ChainedMap);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PositionWeighted, SumOfCodes};

    /// Runs the same scenario against any table.
    fn exercise<T: HashTable<String, i32>>(table: &mut T) {
        assert!(table.is_empty());
        table.put("a".to_string(), 1);
        table.put("b".to_string(), 2);
        table.put("c".to_string(), 3);
        assert_eq!(table.put("a".to_string(), 10), Some(1));

        assert_eq!(table.len(), 3);
        assert!(table.contains_key("a"));
        assert_eq!(table.get("a"), Some(&10));

        let mut keys: Vec<&String> = table.keys();
        keys.sort();
        assert_eq!(keys, vec!["a", "b", "c"]);

        let mut values: Vec<i32> = table.values().into_iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![2, 3, 10]);

        assert_eq!(table.remove("b"), Some(2));
        assert_eq!(table.remove("b"), None);
        assert_eq!(table.len(), 2);

        table.resize_table(50);
        assert_eq!(table.capacity(), 53);
        assert_eq!(table.get("c"), Some(&3));
        assert_eq!(table.empty_buckets(), 51);

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 53);
    }

    #[test]
    fn test_open_addressing_through_trait() {
        exercise(&mut OpenAddressingMap::new(11, SumOfCodes));
    }

    #[test]
    fn test_chained_through_trait() {
        exercise(&mut ChainedMap::new(11, PositionWeighted));
    }

    #[test]
    fn test_keys_and_values_with_borrowed_values() {
        let words = vec!["one".to_string(), "two".to_string()];
        let mut table: ChainedMap<String, &str> = ChainedMap::new(5, SumOfCodes);
        for word in &words {
            table.put(word.to_uppercase(), word.as_str());
        }

        let mut keys = HashTable::keys(&table);
        keys.sort();
        assert_eq!(keys, vec!["ONE", "TWO"]);
        let mut values: Vec<&str> = HashTable::values(&table).into_iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec!["one", "two"]);
    }

    #[test]
    fn test_trait_objects() {
        let mut tables: Vec<Box<dyn HashTable<String, i32>>> = vec![
            Box::new(OpenAddressingMap::new(7, SumOfCodes)),
            Box::new(ChainedMap::new(7, SumOfCodes)),
        ];
        for table in &mut tables {
            for i in 0..20 {
                table.put(format!("k{i}"), i);
            }
            assert_eq!(table.len(), 20);
            assert!(table.table_load() <= 1.0);
        }
    }
}

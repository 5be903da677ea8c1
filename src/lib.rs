//! # Prime Map
//!
//! Hash maps over a prime number of slots, in two flavours:
//!
//! - `OpenAddressingMap`: quadratic probing, tombstone deletion
//! - `ChainedMap`: separate chaining with one collision list per bucket
//!
//! Both round their capacity up to the next prime, grow by doubling once
//! their load factor limit is hit, and take the hash function as a
//! [`KeyHasher`] strategy chosen at construction. Keys are string-like
//! (`K: Borrow<str>`); lookups take `&str`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use primemap::{OpenAddressingMap, SumOfCodes};
//!
//! // Capacity 20 is rounded up to 23
//! let mut map = OpenAddressingMap::new(20, SumOfCodes);
//! assert_eq!(map.capacity(), 23);
//!
//! // Insert values
//! map.put("apple".to_string(), 1);
//! map.put("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values; the slot becomes a tombstone
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! assert_eq!(map.len(), 1);
//! ```
//!
//! ## Chaining and Mode Finding
//!
//! ```rust
//! use primemap::{ChainedMap, PositionWeighted, find_mode};
//!
//! let mut map = ChainedMap::new(3, PositionWeighted);
//! for i in 0..10 {
//!     map.put(format!("key-{i}"), i);
//! }
//! assert!(map.table_load() <= 1.0);
//! assert_eq!(map.get("key-7"), Some(&7));
//!
//! let mode = find_mode(["a", "b", "b", "c"]);
//! assert_eq!(mode.values, vec!["b"]);
//! assert_eq!(mode.frequency, 2);
//! ```

/// Module implementing the separate chaining hash map
mod chained;
/// Hash strategies
mod hasher;
/// Mode finding built on the chained map
mod mode;
/// Module implementing the quadratic probing hash map and its iterator
mod open_addressing;
/// Prime capacity policy
pub mod prime;
/// The contract shared by both maps
mod table;

pub use chained::{CHAINING_MAX_LOAD, ChainedMap, DEFAULT_CAPACITY};
pub use hasher::{KeyHasher, PositionWeighted, StdKeyHasher, SumOfCodes};
pub use mode::{Mode, find_mode};
pub use open_addressing::{Iter, OPEN_ADDRESSING_MAX_LOAD, OpenAddressingMap, Slot};
pub use table::HashTable;

/// Factor both maps multiply their capacity by when they grow.
pub const GROWTH_FACTOR: usize = 2;

//! Mode finding on top of [`ChainedMap`].

use std::borrow::Borrow;

use crate::ChainedMap;

/// The most frequent values of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode<K> {
    /// Every value that reaches `frequency`, in table iteration order
    pub values: Vec<K>,
    /// How often each of `values` occurs; 0 for an empty input
    pub frequency: usize,
}

/// Finds the values occurring most often in `values`.
///
/// Occurrences are counted in a default [`ChainedMap`]. Ties are all
/// returned, in the order the map stores them rather than input order.
///
/// ```
/// use primemap::find_mode;
///
/// let mode = find_mode(["apple", "apple", "grape", "melon", "peach"]);
/// assert_eq!(mode.values, vec!["apple"]);
/// assert_eq!(mode.frequency, 2);
/// ```
pub fn find_mode<K, I>(values: I) -> Mode<K>
where
    I: IntoIterator<Item = K>,
    K: Eq + Borrow<str> + Clone,
{
    let mut counts: ChainedMap<K, usize> = ChainedMap::default();
    for value in values {
        let key: &str = value.borrow();
        if counts.contains_key(key) {
            let seen = counts.get(key).copied().unwrap_or(0);
            counts.put(value, seen.saturating_add(1));
        } else {
            counts.put(value, 1);
        }
    }

    let pairs = counts.keys_and_values();
    let frequency = pairs.iter().map(|(_, count)| **count).max().unwrap_or(0);
    let values = pairs
        .into_iter()
        .filter(|(_, count)| **count == frequency)
        .map(|(key, _)| key.clone())
        .collect();

    Mode { values, frequency }
}

//! Hash strategies used to map a key onto a slot index.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// Maps a string key to a non-negative integer.
///
/// Tables reduce the result modulo their capacity, so a strategy only has to
/// be deterministic. Any `Fn(&str) -> usize` is a strategy as well.
pub trait KeyHasher {
    /// Hashes `key`.
    fn hash_key(&self, key: &str) -> usize;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> usize,
{
    fn hash_key(&self, key: &str) -> usize {
        self(key)
    }
}

/// Sums the scalar values of the key's characters.
///
/// Anagrams collide, which makes it handy for exercising collision paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumOfCodes;

impl KeyHasher for SumOfCodes {
    fn hash_key(&self, key: &str) -> usize {
        key.chars().fold(0usize, |hash, c| hash.wrapping_add(char_code(c)))
    }
}

/// Sums each character's scalar value weighted by its 1-based position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionWeighted;

impl KeyHasher for PositionWeighted {
    fn hash_key(&self, key: &str) -> usize {
        key.chars().zip(1usize..).fold(0usize, |hash, (c, position)| {
            hash.wrapping_add(position.wrapping_mul(char_code(c)))
        })
    }
}

/// The standard library's `DefaultHasher`, built with fixed keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdKeyHasher;

impl KeyHasher for StdKeyHasher {
    #[allow(clippy::cast_possible_truncation)]
    fn hash_key(&self, key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish() as usize
    }
}

/// Widens a character to its scalar value.
fn char_code(c: char) -> usize {
    usize::try_from(u32::from(c)).unwrap_or(usize::MAX)
}

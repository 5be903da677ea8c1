//! Prime capacity policy shared by both table variants.
//!
//! Table sizes are kept prime so that quadratic probe sequences and
//! `hash mod capacity` bucket selection spread keys evenly.

/// Largest prime that fits in a `usize`.
#[cfg(target_pointer_width = "64")]
pub const LARGEST_PRIME: usize = 18_446_744_073_709_551_557;
/// Largest prime that fits in a `usize`.
#[cfg(target_pointer_width = "32")]
pub const LARGEST_PRIME: usize = 4_294_967_291;
/// Largest prime that fits in a `usize`.
#[cfg(target_pointer_width = "16")]
pub const LARGEST_PRIME: usize = 65_521;

/// Returns `true` if `n` is prime.
///
/// 2 and 3 are prime, 0, 1 and every other even number are not. The rest is
/// decided by trial division with odd factors up to `sqrt(n)`.
#[must_use]
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut factor: usize = 3;
    while let Some(square) = factor.checked_mul(factor) {
        if square > n {
            break;
        }
        if n.checked_rem(factor) == Some(0) {
            return false;
        }
        factor = factor.saturating_add(2);
    }
    true
}

/// Returns the smallest prime that is `>= n`, searching odd numbers only.
///
/// An even `n` is bumped to the next odd number first, so `next_prime(2)` is
/// 3. Callers that want a table of exactly two slots use [`table_capacity`].
/// Above [`LARGEST_PRIME`] no larger prime exists, so that is returned.
#[must_use]
pub fn next_prime(n: usize) -> usize {
    if n > LARGEST_PRIME {
        return LARGEST_PRIME;
    }
    let mut candidate = if n % 2 == 0 { n.saturating_add(1) } else { n };
    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }
    candidate
}

/// Returns the number of slots a table allocates when `requested` is asked for.
///
/// A request for exactly 2 is honoured as is; anything else is rounded up to
/// the next prime, so the result is never below 2.
#[must_use]
pub fn table_capacity(requested: usize) -> usize {
    if requested == 2 { 2 } else { next_prime(requested) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_odd_composites() {
        for n in [9, 15, 21, 25, 49, 121, 169, 221, 7917] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
        assert!(is_prime(7919));
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(20), 23);
        assert_eq!(next_prime(23), 23);
        assert_eq!(next_prime(24), 29);
        assert_eq!(next_prime(106), 107);
        assert_eq!(next_prime(0), 3);
        assert_eq!(next_prime(1), 3);
        assert_eq!(next_prime(2), 3);
    }

    #[test]
    fn test_next_prime_past_largest_prime() {
        assert_eq!(next_prime(usize::MAX - 10), LARGEST_PRIME);
        assert_eq!(next_prime(usize::MAX), LARGEST_PRIME);
        assert_eq!(table_capacity(usize::MAX), LARGEST_PRIME);
    }

    #[test]
    fn test_table_capacity() {
        assert_eq!(table_capacity(2), 2);
        assert_eq!(table_capacity(20), 23);
        assert_eq!(table_capacity(53), 53);
        assert_eq!(table_capacity(100), 101);
        assert_eq!(table_capacity(0), 3);
        assert_eq!(table_capacity(1), 3);
    }
}

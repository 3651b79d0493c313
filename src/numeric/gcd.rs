// ============================================================================
// Greatest Common Divisor
// Euclid's algorithm on magnitudes, plus trial-division factoring
// ============================================================================

/// Greatest common divisor of `|a|` and `|b|`.
///
/// `gcd(a, 0) == |a|`, so `gcd(0, 0) == 0`.
#[inline]
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u128(a.unsigned_abs() as u128, b.unsigned_abs() as u128) as u64
}

/// Wide variant used by normalisation, where products of two i64 live.
#[inline]
pub(crate) const fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let c = a % b;
        a = b;
        b = c;
    }
    a
}

/// Prime factors of `|n|` in ascending order, with multiplicity.
///
/// Returns an empty vector for 0 and 1.
///
/// # Example
/// ```
/// use shopfrac::numeric::prime_factors;
///
/// assert_eq!(prime_factors(360), vec![2, 2, 2, 3, 3, 5]);
/// ```
pub fn prime_factors(n: i64) -> Vec<u64> {
    let mut num = n.unsigned_abs();
    let mut factors = Vec::new();
    if num < 2 {
        return factors;
    }

    let mut factor: u64 = 2;
    while factor.saturating_mul(factor) <= num {
        if num % factor == 0 {
            factors.push(factor);
            num /= factor;
        } else {
            factor += 1;
        }
    }

    // Whatever is left is the last prime factor
    if num != 1 {
        factors.push(num);
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(4, 16), 4);
        assert_eq!(gcd(14, 28), 14);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_gcd_signs_and_zero() {
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_gcd_extremes() {
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
        assert_eq!(gcd(i64::MIN, 2), 2);
        assert_eq!(gcd(i64::MAX, i64::MAX), i64::MAX as u64);
    }

    #[test]
    fn test_prime_factors() {
        assert_eq!(prime_factors(0), Vec::<u64>::new());
        assert_eq!(prime_factors(1), Vec::<u64>::new());
        assert_eq!(prime_factors(16), vec![2, 2, 2, 2]);
        assert_eq!(prime_factors(-30), vec![2, 3, 5]);
        assert_eq!(prime_factors(97), vec![97]);
    }
}

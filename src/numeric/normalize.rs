// ============================================================================
// Normalisation
// Canonical (numerator, denominator) form for integer and float inputs
// ============================================================================
//
// Canonical form:
// - both components integral
// - denominator > 0
// - gcd(|numerator|, denominator) == 1, zero is 0/1
// - sign carried by the numerator
//
// Float inputs are first rounded to FLOAT_PLACES decimal places so that
// binary representation noise (0.1 + 0.2) does not leak into the result.
// The rounded value is then an exact decimal mantissa × 10^-scale, which
// becomes an integer pair without further loss.

use super::errors::{FractionError, FractionResult};
use super::gcd::gcd_u128;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept when turning a float into a ratio of integers.
pub const FLOAT_PLACES: u32 = 9;

/// Reduce an integer pair to canonical form.
///
/// Returns `None` for a zero denominator (the undefined state).
pub(crate) fn reduce(numerator: i128, denominator: i128) -> FractionResult<Option<(i64, i64)>> {
    if denominator == 0 {
        return Ok(None);
    }
    if numerator == 0 {
        return Ok(Some((0, 1)));
    }

    let g = gcd_u128(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
    let (mut num, mut den) = (numerator / g, denominator / g);
    if den < 0 {
        num = -num;
        den = -den;
    }

    let num = i64::try_from(num).map_err(|_| FractionError::Overflow)?;
    let den = i64::try_from(den).map_err(|_| FractionError::Overflow)?;
    Ok(Some((num, den)))
}

/// Turn a float pair into an integer pair with the same ratio.
///
/// Each component is rounded to [`FLOAT_PLACES`] places (half away from
/// zero) and both are scaled by the powers of ten that make them integral.
/// The pair is not reduced; pass it through [`reduce`].
pub(crate) fn rationalize(numerator: f64, denominator: f64) -> FractionResult<(i128, i128)> {
    let (num_mantissa, num_scale) = scaled(numerator)?;
    let (den_mantissa, den_scale) = scaled(denominator)?;

    if num_scale > 0 || den_scale > 0 {
        tracing::trace!(
            numerator,
            denominator,
            num_scale,
            den_scale,
            "scaling float components to integers"
        );
    }

    // n/d = (mn / 10^sn) / (md / 10^sd) = (mn * 10^sd) / (md * 10^sn)
    let num = num_mantissa
        .checked_mul(pow10(den_scale))
        .ok_or(FractionError::Overflow)?;
    let den = den_mantissa
        .checked_mul(pow10(num_scale))
        .ok_or(FractionError::Overflow)?;
    Ok((num, den))
}

/// Exact decimal mantissa and scale of `value` rounded to FLOAT_PLACES.
fn scaled(value: f64) -> FractionResult<(i128, u32)> {
    if !value.is_finite() {
        return Err(FractionError::InvalidOperation);
    }
    let decimal = Decimal::from_f64(value)
        .ok_or(FractionError::Overflow)?
        .round_dp_with_strategy(FLOAT_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    Ok((decimal.mantissa(), decimal.scale()))
}

/// Exact mantissa and scale of a decimal, for lossless conversion.
pub(crate) fn decimal_parts(value: Decimal) -> (i128, i128) {
    let value = value.normalize();
    (value.mantissa(), pow10(value.scale()))
}

#[inline]
const fn pow10(n: u32) -> i128 {
    10i128.pow(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_basic() {
        assert_eq!(reduce(4, 16).unwrap(), Some((1, 4)));
        assert_eq!(reduce(14, 28).unwrap(), Some((1, 2)));
        assert_eq!(reduce(6, 3).unwrap(), Some((2, 1)));
    }

    #[test]
    fn test_reduce_sign_lives_on_numerator() {
        assert_eq!(reduce(1, -2).unwrap(), Some((-1, 2)));
        assert_eq!(reduce(-1, -2).unwrap(), Some((1, 2)));
        assert_eq!(reduce(-3, 9).unwrap(), Some((-1, 3)));
    }

    #[test]
    fn test_reduce_zero_and_undefined() {
        assert_eq!(reduce(0, -7).unwrap(), Some((0, 1)));
        assert_eq!(reduce(5, 0).unwrap(), None);
    }

    #[test]
    fn test_reduce_overflow() {
        let big = i64::MAX as i128 * 3;
        assert_eq!(reduce(big, 2), Err(FractionError::Overflow));
        // Large intermediates are fine when they reduce back into range
        assert_eq!(reduce(big, 3).unwrap(), Some((i64::MAX, 1)));
    }

    #[test]
    fn test_rationalize_decimals() {
        assert_eq!(rationalize(0.125, 1.0).unwrap(), (125, 1000));
        assert_eq!(rationalize(3.0, 4.0).unwrap(), (3, 4));
        assert_eq!(rationalize(1.5, 2.5).unwrap(), (150, 250));
    }

    #[test]
    fn test_rationalize_removes_float_noise() {
        let noisy = 0.1 + 0.2;
        assert_eq!(rationalize(noisy, 1.0).unwrap(), (3, 10));
        assert_eq!(rationalize(8.999_999_999_7, 1.0).unwrap(), (9, 1));
    }

    #[test]
    fn test_rationalize_rejects_non_finite() {
        assert_eq!(
            rationalize(f64::NAN, 1.0),
            Err(FractionError::InvalidOperation)
        );
        assert_eq!(
            rationalize(1.0, f64::INFINITY),
            Err(FractionError::InvalidOperation)
        );
    }

    #[test]
    fn test_decimal_parts() {
        assert_eq!(decimal_parts(Decimal::new(12500, 5)), (125, 1000));
        assert_eq!(decimal_parts(Decimal::from(-7)), (-7, 1));
    }
}

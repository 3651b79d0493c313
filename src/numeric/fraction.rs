// ============================================================================
// Fraction
// Exact rational value type in canonical form
// ============================================================================

use super::errors::{FractionError, FractionResult};
use super::normalize::{decimal_parts, rationalize, reduce};
use super::operand::Operand;
use super::parse;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact rational number kept as a reduced `numerator / denominator` pair.
///
/// Every constructor and operation returns the canonical form: the
/// denominator is positive, numerator and denominator share no factor, and
/// zero is `0/1`. Because the form is unique, structural equality is value
/// equality.
///
/// A zero denominator is the *undefined* state ([`Fraction::UNDEFINED`]).
/// It can be built and printed (as `NaN`), but every arithmetic operation
/// on it fails with [`FractionError::InvalidOperation`].
///
/// # Example
/// ```
/// use shopfrac::numeric::Fraction;
///
/// let width: Fraction = "8 1/16".parse()?;
/// let inset = width.subtract("11/16")?;
/// assert_eq!(inset.to_string(), "7 3/8");
/// assert_eq!(inset.to_decimal(), 7.375);
/// # Ok::<(), shopfrac::numeric::FractionError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Zero (0/1)
    pub const ZERO: Self = Self::from_integer(0);

    /// One (1/1)
    pub const ONE: Self = Self::from_integer(1);

    /// The undefined value produced by a zero denominator
    pub const UNDEFINED: Self = Self {
        numerator: 0,
        denominator: 0,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a numerator/denominator pair, reducing it.
    ///
    /// A zero denominator yields [`Fraction::UNDEFINED`].
    ///
    /// # Errors
    /// Returns `Overflow` only for `i64::MIN` magnitudes that cannot be
    /// sign-normalised.
    pub fn new(numerator: i64, denominator: i64) -> FractionResult<Self> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    /// Create a whole number.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Zero value factory.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Create from a float, keeping 9 decimal places.
    ///
    /// # Errors
    /// `InvalidOperation` for NaN or infinities, `Overflow` when the value
    /// does not fit.
    pub fn from_f64(value: f64) -> FractionResult<Self> {
        Self::from_f64_pair(value, 1.0)
    }

    /// Create from a float numerator/denominator pair.
    pub fn from_f64_pair(numerator: f64, denominator: f64) -> FractionResult<Self> {
        let (num, den) = rationalize(numerator, denominator)?;
        Self::from_wide(num, den)
    }

    /// Create from two decimal strings, e.g. `("1,5", "2")` is 3/4.
    ///
    /// # Errors
    /// `Parse` if either string is not a decimal number.
    pub fn from_str_pair(numerator: &str, denominator: &str) -> FractionResult<Self> {
        parse::parse_pair(numerator, denominator)
    }

    /// Parse shop notation: `"5"`, `"3/4"`, `"8 1/16"`, `"0.125"`.
    pub fn parse(input: &str) -> FractionResult<Self> {
        parse::parse_text(input)
    }

    /// Create from any accepted operand.
    pub fn from_operand(operand: impl Into<Operand>) -> FractionResult<Self> {
        match operand.into() {
            Operand::Fraction(value) => Ok(value),
            Operand::Integer(value) => Ok(Self::from_integer(value)),
            Operand::Float(value) => Self::from_f64(value),
            Operand::Text(text) => Self::parse(&text),
        }
    }

    /// Exact conversion from rust_decimal::Decimal.
    pub fn from_rust_decimal(value: rust_decimal::Decimal) -> FractionResult<Self> {
        let (num, den) = decimal_parts(value);
        Self::from_wide(num, den)
    }

    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> FractionResult<Self> {
        Ok(match reduce(numerator, denominator)? {
            Some((numerator, denominator)) => Self {
                numerator,
                denominator,
            },
            None => Self::UNDEFINED,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Signed numerator of the canonical form.
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Positive denominator of the canonical form (0 when undefined).
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Check if the denominator is zero.
    #[inline]
    pub const fn is_undefined(self) -> bool {
        self.denominator == 0
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0 && self.denominator == 1
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    /// Whole part, truncated toward zero (0 when undefined).
    #[inline]
    pub const fn whole_part(self) -> i64 {
        match self.numerator.checked_div(self.denominator) {
            Some(whole) => whole,
            None => 0,
        }
    }

    /// Absolute value.
    pub fn abs(self) -> FractionResult<Self> {
        let this = self.defined()?;
        let numerator = this
            .numerator
            .checked_abs()
            .ok_or(FractionError::Overflow)?;
        Ok(Self { numerator, ..this })
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    /// `DivisionByZero` for zero, `InvalidOperation` when undefined.
    pub fn reciprocal(self) -> FractionResult<Self> {
        let this = self.defined()?;
        if this.numerator == 0 {
            return Err(FractionError::DivisionByZero);
        }
        Self::from_wide(this.denominator as i128, this.numerator as i128)
    }

    #[inline]
    pub(crate) fn defined(self) -> FractionResult<Self> {
        if self.is_undefined() {
            Err(FractionError::InvalidOperation)
        } else {
            Ok(self)
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================
    //
    // The receiver is never modified; each call returns a new canonical
    // value. Products are formed in i128 and only narrowed after reduction.

    /// `self + rhs`
    pub fn add(&self, rhs: impl Into<Operand>) -> FractionResult<Self> {
        let (a, b) = self.operands(rhs)?;
        Self::from_wide(
            a.numerator as i128 * b.denominator as i128 + b.numerator as i128 * a.denominator as i128,
            a.denominator as i128 * b.denominator as i128,
        )
    }

    /// `self - rhs`
    pub fn subtract(&self, rhs: impl Into<Operand>) -> FractionResult<Self> {
        let (a, b) = self.operands(rhs)?;
        Self::from_wide(
            a.numerator as i128 * b.denominator as i128 - b.numerator as i128 * a.denominator as i128,
            a.denominator as i128 * b.denominator as i128,
        )
    }

    /// `self × rhs`
    ///
    /// An integer operand scales the numerator only. A float operand is
    /// first converted to a fraction, so `f.multiply(0.5)` halves `f`.
    pub fn multiply(&self, rhs: impl Into<Operand>) -> FractionResult<Self> {
        let a = self.defined()?;
        match rhs.into() {
            Operand::Integer(k) => {
                Self::from_wide(a.numerator as i128 * k as i128, a.denominator as i128)
            },
            other => {
                let b = Self::from_operand(other)?.defined()?;
                Self::from_wide(
                    a.numerator as i128 * b.numerator as i128,
                    a.denominator as i128 * b.denominator as i128,
                )
            },
        }
    }

    /// `self ÷ rhs`
    ///
    /// An integer operand scales the denominator only.
    ///
    /// # Errors
    /// `DivisionByZero` when `rhs` is zero.
    pub fn divide(&self, rhs: impl Into<Operand>) -> FractionResult<Self> {
        let a = self.defined()?;
        match rhs.into() {
            Operand::Integer(0) => Err(FractionError::DivisionByZero),
            Operand::Integer(k) => {
                Self::from_wide(a.numerator as i128, a.denominator as i128 * k as i128)
            },
            other => {
                let b = Self::from_operand(other)?.defined()?;
                if b.numerator == 0 {
                    return Err(FractionError::DivisionByZero);
                }
                Self::from_wide(
                    a.numerator as i128 * b.denominator as i128,
                    a.denominator as i128 * b.numerator as i128,
                )
            },
        }
    }

    /// Value equality against any operand.
    ///
    /// Both sides are canonical, so this compares the pairs directly.
    pub fn equals(&self, rhs: impl Into<Operand>) -> FractionResult<bool> {
        let (a, b) = self.operands(rhs)?;
        Ok(a.numerator == b.numerator && a.denominator == b.denominator)
    }

    fn operands(&self, rhs: impl Into<Operand>) -> FractionResult<(Self, Self)> {
        let a = self.defined()?;
        let b = Self::from_operand(rhs)?.defined()?;
        Ok((a, b))
    }
}

/// General factory: build a fraction from any accepted operand.
///
/// ```
/// use shopfrac::numeric::fraction;
///
/// assert_eq!(fraction("4/16")?.to_string(), "1/4");
/// assert_eq!(fraction(0.5)?, fraction("1/2")?);
/// # Ok::<(), shopfrac::numeric::FractionError>(())
/// ```
pub fn fraction(input: impl Into<Operand>) -> FractionResult<Fraction> {
    Fraction::from_operand(input)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Fraction {
    /// Orders by value. Undefined values only compare equal to themselves.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_undefined(), other.is_undefined()) {
            (false, false) => {
                let lhs = self.numerator as i128 * other.denominator as i128;
                let rhs = other.numerator as i128 * self.denominator as i128;
                Some(lhs.cmp(&rhs))
            },
            (true, true) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Self::from_integer(value as i64)
    }
}

impl std::str::FromStr for Fraction {
    type Err = FractionError;

    /// Parse shop notation.
    ///
    /// # Examples
    /// - "5" -> 5/1
    /// - "4/16" -> 1/4
    /// - "1 2/3" -> 5/3
    /// - "-0.375" -> -3/8
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Fraction {
    type Error = FractionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Fraction> for String {
    fn from(value: Fraction) -> Self {
        value.to_notation()
    }
}

// ============================================================================
// Tests
// ============================================================================

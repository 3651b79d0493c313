// ============================================================================
// Fraction Formatting
// Plain mixed-number text, TeX, floats and fixed-point decimals
// ============================================================================

use super::errors::{FractionError, FractionResult};
use super::fraction::Fraction;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Text rendered for the undefined value.
pub const UNDEFINED_TEXT: &str = "NaN";

/// Largest number of places `to_fixed` will render.
pub const MAX_FIXED_PLACES: u32 = 28;

/// Sign, whole part and remainder of the magnitude.
struct Parts {
    negative: bool,
    whole: u64,
    remainder: u64,
    numerator: u64,
    denominator: u64,
}

impl Parts {
    fn of(value: Fraction) -> Self {
        let numerator = value.numerator().unsigned_abs();
        let denominator = value.denominator().unsigned_abs();
        Self {
            negative: value.numerator() < 0,
            whole: numerator / denominator,
            remainder: numerator % denominator,
            numerator,
            denominator,
        }
    }

    fn sign(&self) -> &'static str {
        if self.negative {
            "-"
        } else {
            ""
        }
    }
}

impl Fraction {
    /// Value as a float. Undefined values give `f64::NAN`.
    #[inline]
    pub fn to_decimal(self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }

    /// TeX rendering for MathJax/KaTeX.
    ///
    /// Simple mode keeps the improper form (`\frac{9}{4}`, or a bare
    /// integer). Mixed mode pulls out the whole part and appends the
    /// remainder with no separator: `2\frac{1}{4}`.
    pub fn to_tex(self, mixed: bool) -> String {
        if self.is_undefined() {
            return UNDEFINED_TEXT.to_string();
        }
        let parts = Parts::of(self);
        let sign = parts.sign();

        if !mixed {
            return if parts.denominator == 1 {
                format!("{}{}", sign, parts.numerator)
            } else {
                format!("{}\\frac{{{}}}{{{}}}", sign, parts.numerator, parts.denominator)
            };
        }

        let mut out = String::from(sign);
        if parts.whole != 0 {
            out.push_str(&parts.whole.to_string());
        }
        if parts.remainder != 0 {
            out.push_str(&format!(
                "\\frac{{{}}}{{{}}}",
                parts.remainder, parts.denominator
            ));
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }

    /// Mixed-number text that parses back to the same value.
    ///
    /// Matches `Display` except for negative mixed numbers, whose
    /// fractional part repeats the sign: `-7/2` is `"-3 -1/2"`.
    pub fn to_notation(self) -> String {
        if self.is_undefined() {
            return UNDEFINED_TEXT.to_string();
        }
        let parts = Parts::of(self);
        if parts.negative && parts.whole != 0 && parts.remainder != 0 {
            format!("-{} -{}/{}", parts.whole, parts.remainder, parts.denominator)
        } else {
            self.to_string()
        }
    }

    /// Fixed-point text with `places` decimals, rounded half away from zero.
    ///
    /// This is exact: the division happens in decimal, not binary, so
    /// `1/16` always renders as `0.062500` at six places.
    ///
    /// # Errors
    /// `InvalidOperation` when undefined.
    pub fn to_fixed(self, places: u32) -> FractionResult<String> {
        let places = places.min(MAX_FIXED_PLACES);
        let value = self
            .to_rust_decimal()?
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        Ok(format!("{:.*}", places as usize, value))
    }

    /// Convert to rust_decimal::Decimal (28 significant digits).
    ///
    /// # Errors
    /// `InvalidOperation` when undefined.
    pub fn to_rust_decimal(self) -> FractionResult<Decimal> {
        let this = self.defined()?;
        Decimal::from(this.numerator())
            .checked_div(Decimal::from(this.denominator()))
            .ok_or(FractionError::Overflow)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Fraction {
    /// Plain shop notation: `8 1/16`, `-3/8`, `12`, `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            return f.write_str(UNDEFINED_TEXT);
        }
        let parts = Parts::of(*self);

        match (parts.whole, parts.remainder) {
            (0, 0) => f.write_str("0"),
            (whole, 0) => write!(f, "{}{}", parts.sign(), whole),
            (0, rem) => write!(f, "{}{}/{}", parts.sign(), rem, parts.denominator),
            (whole, rem) => write!(
                f,
                "{}{} {}/{}",
                parts.sign(),
                whole,
                rem,
                parts.denominator
            ),
        }
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator(), self.denominator())
    }
}

// ============================================================================
// Fraction Snapping
// Nearest small-denominator approximation of a value
// ============================================================================
//
// Both searches split the value into a whole part (truncated toward zero)
// and a non-negative fractional magnitude, approximate only the magnitude,
// then recombine with the original sign.
//
// Candidates are scanned in ascending order, denominators outermost, and the
// first hit wins. A coarser fraction within tolerance therefore beats a finer
// one that is closer: 0.50003 snaps to 1/2, not 5000/9999. The scan order is
// part of the contract; results must be reproducible.

use super::config::{SnapConfig, DEFAULT_MAX_DENOMINATOR, DEFAULT_THRESHOLD};
use crate::numeric::{Fraction, FractionError, FractionResult};

/// Whole part and fractional magnitude of a defined fraction.
struct Target {
    whole: i128,
    fraction: f64,
    negative: bool,
}

impl Target {
    fn of(value: Fraction) -> FractionResult<Self> {
        let value = value.defined()?;
        let den = value.denominator().unsigned_abs();
        let rem = value.numerator().unsigned_abs() % den;
        Ok(Self {
            whole: value.whole_part() as i128,
            fraction: rem as f64 / den as f64,
            negative: value.is_negative(),
        })
    }

    #[inline]
    fn accepts(&self, numerator: u32, denominator: u32, threshold: f64) -> bool {
        let approximation = numerator as f64 / denominator as f64;
        (approximation - self.fraction).abs() < threshold
    }

    fn combine(&self, numerator: u32, denominator: u32) -> FractionResult<Fraction> {
        let part = if self.negative {
            -(numerator as i128)
        } else {
            numerator as i128
        };
        Fraction::from_wide(
            self.whole * denominator as i128 + part,
            denominator as i128,
        )
    }
}

impl Fraction {
    /// Simplest fraction within `threshold` of this value.
    ///
    /// Denominators `1..=max_denominator` are tried in order, and for each
    /// numerators `0..=max_denominator`. The first candidate strictly within
    /// `threshold` of the fractional part is returned. When nothing
    /// qualifies the value is returned unchanged.
    ///
    /// A zero `max_denominator` means 100; a zero or NaN `threshold` means
    /// 0.0001.
    ///
    /// # Example
    /// ```
    /// use shopfrac::numeric::Fraction;
    ///
    /// let measured = Fraction::from_f64(2.3125004)?;
    /// assert_eq!(measured.snap(16, 0.001)?.to_string(), "2 5/16");
    /// # Ok::<(), shopfrac::numeric::FractionError>(())
    /// ```
    ///
    /// # Errors
    /// `InvalidOperation` when undefined.
    pub fn snap(&self, max_denominator: u32, threshold: f64) -> FractionResult<Fraction> {
        let max = if max_denominator == 0 {
            DEFAULT_MAX_DENOMINATOR
        } else {
            max_denominator
        };
        let threshold = if threshold == 0.0 || threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold
        };
        let target = Target::of(*self)?;

        for denominator in 1..=max {
            for numerator in 0..=max {
                if target.accepts(numerator, denominator, threshold) {
                    return target.combine(numerator, denominator);
                }
            }
        }

        tracing::debug!(
            value = %self,
            max_denominator = max,
            threshold,
            "no snap candidate within threshold, keeping value"
        );
        Ok(*self)
    }

    /// [`snap`](Self::snap) driven by a validated [`SnapConfig`].
    ///
    /// # Errors
    /// `InvalidOperation` when the config is invalid or the value undefined.
    pub fn snap_with(&self, config: &SnapConfig) -> FractionResult<Fraction> {
        if let Err(reason) = config.validate() {
            tracing::warn!(%reason, ?config, "rejected snap configuration");
            return Err(FractionError::InvalidOperation);
        }
        self.snap(config.max_denominator, config.threshold)
    }

    /// Nearest multiple of `1/denominator`.
    ///
    /// Numerators `0..=denominator` are scanned in order and the first one
    /// within half a step is taken, so an exact midpoint rounds toward zero.
    ///
    /// # Example
    /// ```
    /// use shopfrac::numeric::Fraction;
    ///
    /// let third = Fraction::from_f64(0.333333333)?;
    /// assert_eq!(third.snap_nearest(3)?.to_string(), "1/3");
    /// # Ok::<(), shopfrac::numeric::FractionError>(())
    /// ```
    ///
    /// # Errors
    /// `InvalidOperation` for a zero denominator or an undefined value.
    pub fn snap_nearest(&self, denominator: u32) -> FractionResult<Fraction> {
        if denominator == 0 {
            return Err(FractionError::InvalidOperation);
        }
        // Half a step: a full 1/denominator window takes 0/3 for 0.333333333
        let threshold = 0.5 / denominator as f64;
        let target = Target::of(*self)?;

        for numerator in 0..=denominator {
            let approximation = numerator as f64 / denominator as f64;
            if (approximation - target.fraction).abs() <= threshold {
                return target.combine(numerator, denominator);
            }
        }

        tracing::debug!(value = %self, denominator, "no nearest snap candidate, keeping value");
        Ok(*self)
    }
}

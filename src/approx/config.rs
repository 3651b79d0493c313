// ============================================================================
// Snap Configuration
// Denominator bound and tolerance for fraction approximation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default largest denominator searched by `snap`.
pub const DEFAULT_MAX_DENOMINATOR: u32 = 100;

/// Default absolute tolerance for `snap`.
pub const DEFAULT_THRESHOLD: f64 = 0.0001;

/// Largest denominator a valid config may search. `snap` scans
/// `max_denominator²` candidates.
pub const MAX_DENOMINATOR_LIMIT: u32 = 1 << MAX_POWER_OF_TWO;

/// Largest exponent accepted by [`SnapConfig::power_of_two`].
pub const MAX_POWER_OF_TWO: u32 = 10;

/// Parameters for [`Fraction::snap_with`](crate::numeric::Fraction::snap_with).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnapConfig {
    /// Largest denominator tried (denominators run 1..=max)
    pub max_denominator: u32,

    /// A candidate is accepted when it is strictly closer than this
    pub threshold: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DENOMINATOR, DEFAULT_THRESHOLD)
    }
}

impl SnapConfig {
    /// Create a new configuration
    pub fn new(max_denominator: u32, threshold: f64) -> Self {
        Self {
            max_denominator,
            threshold,
        }
    }

    /// Builder method: Set the largest denominator
    pub fn with_max_denominator(mut self, max_denominator: u32) -> Self {
        self.max_denominator = max_denominator;
        self
    }

    /// Builder method: Set the tolerance
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_denominator == 0 {
            return Err("Maximum denominator must be at least 1".to_string());
        }
        if self.max_denominator > MAX_DENOMINATOR_LIMIT {
            return Err(format!(
                "Maximum denominator must not exceed {}",
                MAX_DENOMINATOR_LIMIT
            ));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err("Threshold must be a positive finite number".to_string());
        }
        Ok(())
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// Denominators up to `2^power`, tolerance of half a `1/2^power` step.
    ///
    /// Simpler fractions such as 1/5 still win when they are close enough.
    /// `power` is clamped to [`MAX_POWER_OF_TWO`] (1024ths).
    pub fn power_of_two(power: u32) -> Self {
        let max_denominator = 1u32 << power.min(MAX_POWER_OF_TWO);
        Self::new(max_denominator, 0.5 / max_denominator as f64)
    }

    /// Tape-measure resolution
    pub fn sixteenths() -> Self {
        Self::power_of_two(4)
    }

    /// Fine rule resolution
    pub fn thirty_seconds() -> Self {
        Self::power_of_two(5)
    }

    /// Machinist rule resolution
    pub fn sixty_fourths() -> Self {
        Self::power_of_two(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = SnapConfig::default();
        assert_eq!(config.max_denominator, 100);
        assert_eq!(config.threshold, 0.0001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SnapConfig::default()
            .with_max_denominator(32)
            .with_threshold(0.001);
        assert_eq!(config, SnapConfig::new(32, 0.001));
    }

    #[test]
    fn test_validate() {
        assert!(SnapConfig::new(0, 0.1).validate().is_err());
        assert!(SnapConfig::new(8, 0.0).validate().is_err());
        assert!(SnapConfig::new(8, -0.1).validate().is_err());
        assert!(SnapConfig::new(8, f64::NAN).validate().is_err());
        assert!(SnapConfig::new(MAX_DENOMINATOR_LIMIT, 0.1).validate().is_ok());
        assert!(SnapConfig::new(MAX_DENOMINATOR_LIMIT + 1, 0.1).validate().is_err());
        assert!(SnapConfig::new(1 << 31, 0.1).validate().is_err());
    }

    #[test]
    fn test_power_of_two_is_clamped() {
        assert_eq!(SnapConfig::power_of_two(31).max_denominator, 1024);
        assert_eq!(SnapConfig::power_of_two(u32::MAX), SnapConfig::power_of_two(10));
        assert!(SnapConfig::power_of_two(31).validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(SnapConfig::sixteenths(), SnapConfig::new(16, 1.0 / 32.0));
        assert_eq!(SnapConfig::thirty_seconds().max_denominator, 32);
        assert_eq!(SnapConfig::sixty_fourths().max_denominator, 64);
        assert!(SnapConfig::sixty_fourths().validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = SnapConfig::sixteenths();
        let json = serde_json::to_string(&config).unwrap();
        let back: SnapConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

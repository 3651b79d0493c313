// ============================================================================
// Approximation Module
// Snapping values to the simplest nearby fraction
// ============================================================================

pub mod config;
mod snap;

pub use config::{
    SnapConfig, DEFAULT_MAX_DENOMINATOR, DEFAULT_THRESHOLD, MAX_DENOMINATOR_LIMIT, MAX_POWER_OF_TWO,
};

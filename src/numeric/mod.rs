// ============================================================================
// Numeric Module
// Exact rational arithmetic for shop measurements
// ============================================================================
//
// This module provides:
// - Fraction: reduced numerator/denominator pair with parsing and arithmetic
// - Operand: right-hand inputs (fraction, integer, float, text)
// - FractionError: error types for construction and arithmetic
// - gcd / prime_factors helpers
//
// Design principles:
// - Canonical form after every operation (positive denominator, gcd 1)
// - All fallible arithmetic returns Result (no panics)
// - i128 intermediates, narrowed to i64 after reduction
// - Floats are only accepted at the edges and rounded to 9 places

mod errors;
mod format;
mod fraction;
mod gcd;
mod normalize;
mod operand;
mod parse;

#[cfg(test)]
mod proptests;

pub use errors::{FractionError, FractionResult};
pub use format::{MAX_FIXED_PLACES, UNDEFINED_TEXT};
pub use fraction::{fraction, Fraction};
pub use gcd::{gcd, prime_factors};
pub use normalize::FLOAT_PLACES;
pub use operand::Operand;

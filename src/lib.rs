// ============================================================================
// Shop Fraction Library
// Exact fractions for woodworking and CNC measurements
// ============================================================================

//! # shopfrac
//!
//! Exact rational numbers for shop measurements, written the way people
//! write them on a cut list.
//!
//! ## Features
//!
//! - **Shop notation parsing**: `"12"`, `"3/4"`, `"8 1/16"`, `"0.125"`, `"0,5"`
//! - **Exact arithmetic** with canonical reduced form after every operation
//! - **Snapping** to the simplest fraction under a denominator bound
//! - **Formatting** as mixed numbers, TeX, floats or fixed-point text
//! - **Output sinks** so program generators stay free of I/O
//!
//! ## Example
//!
//! ```rust
//! use shopfrac::prelude::*;
//!
//! let board_x = fraction("8 1/16")?;
//! let offset = fraction("11/16")?;
//!
//! // Inner edge of the profile pass
//! let x = board_x.subtract(offset)?;
//! assert_eq!(x.to_string(), "7 3/8");
//! assert_eq!(x.to_fixed(6)?, "7.375000");
//!
//! // Depth of each of three passes, cutting down
//! let per_pass = fraction("3/16")?.divide(3)?.multiply(-1)?;
//! assert_eq!(per_pass.to_string(), "-1/16");
//!
//! // A caliper reading snapped to sixteenths
//! let reading = Fraction::from_f64(0.3128)?;
//! assert_eq!(reading.snap_with(&SnapConfig::sixteenths())?.to_string(), "1/3");
//! assert_eq!(reading.snap_nearest(16)?.to_string(), "5/16");
//! # Ok::<(), shopfrac::numeric::FractionError>(())
//! ```

pub mod approx;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::approx::SnapConfig;
    pub use crate::interfaces::{LoggingSink, MemorySink, NoOpSink, ProgramSink};
    pub use crate::numeric::{fraction, Fraction, FractionError, FractionResult, Operand};
}

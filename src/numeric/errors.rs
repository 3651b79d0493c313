// ============================================================================
// Fraction Errors
// Error types for fraction construction and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining fractions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FractionError {
    /// Input could not be read as any supported fraction notation
    Parse {
        /// The offending input, as received
        input: String,
    },
    /// An undefined fraction (zero denominator) or non-finite value reached
    /// an operation that needs a real number
    InvalidOperation,
    /// Attempted division by a zero-valued operand
    DivisionByZero,
    /// Canonical result does not fit in i64
    Overflow,
}

impl FractionError {
    /// Shorthand for a parse failure on `input`.
    pub(crate) fn parse(input: impl Into<String>) -> Self {
        FractionError::Parse {
            input: input.into(),
        }
    }
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::Parse { input } => {
                write!(f, "could not interpret input as a fraction: {:?}", input)
            },
            FractionError::InvalidOperation => write!(
                f,
                "invalid operation: fraction is undefined (zero denominator)"
            ),
            FractionError::DivisionByZero => write!(f, "division by zero"),
            FractionError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded i64 range")
            },
        }
    }
}

impl std::error::Error for FractionError {}

/// Result type alias for fraction operations
pub type FractionResult<T> = Result<T, FractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FractionError::parse("1 x/y").to_string(),
            "could not interpret input as a fraction: \"1 x/y\""
        );
        assert_eq!(FractionError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            FractionError::Overflow.to_string(),
            "arithmetic overflow: result exceeded i64 range"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FractionError::Overflow, FractionError::Overflow);
        assert_ne!(FractionError::Overflow, FractionError::InvalidOperation);
        assert_ne!(FractionError::parse("a"), FractionError::parse("b"));
    }
}

// ============================================================================
// Operand
// Right-hand inputs accepted by construction and arithmetic
// ============================================================================

use super::fraction::Fraction;

/// Anything that can stand in for a fraction on the right of an operation.
///
/// Arithmetic methods take `impl Into<Operand>`, so callers can write
/// `f.add(2)`, `f.add("1/16")` or `f.add(other)` alike.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// An already-built fraction
    Fraction(Fraction),
    /// A whole-number scalar
    Integer(i64),
    /// A float, canonicalised to 9 decimal places on use
    Float(f64),
    /// Shop notation text: `"5"`, `"3/4"`, `"8 1/16"`, `"0.125"`
    Text(String),
}

impl From<Fraction> for Operand {
    fn from(value: Fraction) -> Self {
        Operand::Fraction(value)
    }
}

impl From<&Fraction> for Operand {
    fn from(value: &Fraction) -> Self {
        Operand::Fraction(*value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::Text(value.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(value as f64)
    }
}

macro_rules! integer_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Integer(value as i64)
                }
            }
        )*
    };
}

integer_operand!(i8, i16, i32, i64, u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Operand::from(3), Operand::Integer(3));
        assert_eq!(Operand::from(3u8), Operand::Integer(3));
        assert_eq!(Operand::from(0.5), Operand::Float(0.5));
        assert_eq!(Operand::from("3/4"), Operand::Text("3/4".to_string()));
        assert_eq!(
            Operand::from(Fraction::ONE),
            Operand::Fraction(Fraction::ONE)
        );
    }
}

// ============================================================================
// Property Tests
// Algebraic and canonical-form properties of Fraction
// ============================================================================

use super::{gcd, Fraction};
use proptest::prelude::*;
use quickcheck::{quickcheck, TestResult};

/// Components small enough that every product below stays in i64.
fn component() -> impl Strategy<Value = i64> {
    -100_000i64..=100_000
}

fn nonzero() -> impl Strategy<Value = i64> {
    component().prop_filter("non-zero", |v| *v != 0)
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (component(), nonzero()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn nonzero_fraction() -> impl Strategy<Value = Fraction> {
    (nonzero(), nonzero()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn is_canonical(value: Fraction) -> bool {
    value.denominator() > 0
        && gcd(value.numerator(), value.denominator()) == 1
        && (value.numerator() != 0 || value.denominator() == 1)
}

proptest! {
    #[test]
    fn construction_is_canonical(n in component(), d in nonzero()) {
        prop_assert!(is_canonical(Fraction::new(n, d).unwrap()));
    }

    #[test]
    fn normalization_is_idempotent(a in fraction()) {
        let again = Fraction::new(a.numerator(), a.denominator()).unwrap();
        prop_assert_eq!(again, a);
    }

    #[test]
    fn notation_parses_back(a in fraction()) {
        let text = a.to_notation();
        let back: Fraction = text.parse().unwrap();
        prop_assert_eq!(back, a, "via {:?}", text);
    }

    #[test]
    fn display_parses_back_without_negative_whole(a in fraction()) {
        prop_assume!(a.whole_part() == 0 || !a.is_negative());
        let text = a.to_string();
        let back: Fraction = text.parse().unwrap();
        prop_assert_eq!(back, a, "via {:?}", text);
    }

    #[test]
    fn decimal_and_simple_forms_agree(n in 0i64..1000) {
        // n/8 always has an exact short decimal expansion
        let simple = Fraction::parse(&format!("{}/8", n)).unwrap();
        let decimal = Fraction::parse(&format!("{}", n as f64 / 8.0)).unwrap();
        prop_assert_eq!(simple, decimal);
    }

    #[test]
    fn add_then_subtract_is_identity(a in fraction(), b in fraction()) {
        let round = a.add(b).unwrap().subtract(b).unwrap();
        prop_assert!(round.equals(a).unwrap());
    }

    #[test]
    fn multiply_commutes(a in fraction(), b in fraction()) {
        prop_assert_eq!(a.multiply(b).unwrap(), b.multiply(a).unwrap());
    }

    #[test]
    fn divide_then_multiply_is_identity(a in fraction(), b in nonzero_fraction()) {
        let round = a.divide(b).unwrap().multiply(b).unwrap();
        prop_assert!(round.equals(a).unwrap());
    }

    #[test]
    fn results_stay_canonical(a in fraction(), b in nonzero_fraction()) {
        prop_assert!(is_canonical(a.add(b).unwrap()));
        prop_assert!(is_canonical(a.subtract(b).unwrap()));
        prop_assert!(is_canonical(a.multiply(b).unwrap()));
        prop_assert!(is_canonical(a.divide(b).unwrap()));
    }

    #[test]
    fn ordering_matches_decimal(a in fraction(), b in fraction()) {
        prop_assume!(a != b);
        prop_assert_eq!(a < b, a.to_decimal() < b.to_decimal());
    }

    #[test]
    fn snap_respects_bounds(
        value in -1000.0f64..1000.0,
        max in 1u32..64,
        threshold in 0.0001f64..0.1,
    ) {
        let original = Fraction::from_f64(value).unwrap();
        let snapped = original.snap(max, threshold).unwrap();
        if snapped != original || original.denominator() <= max as i64 {
            prop_assert!(snapped.denominator() <= max as i64);
            let error = (snapped.to_decimal() - original.to_decimal()).abs();
            prop_assert!(error <= threshold + 1e-9, "error {} > {}", error, threshold);
        }
    }

    #[test]
    fn snap_nearest_is_within_half_step(value in -1000.0f64..1000.0, den in 1u32..128) {
        let original = Fraction::from_f64(value).unwrap();
        let snapped = original.snap_nearest(den).unwrap();
        prop_assert!(snapped.denominator() <= den as i64);
        let error = (snapped.to_decimal() - original.to_decimal()).abs();
        prop_assert!(error <= 0.5 / den as f64 + 1e-9);
    }
}

#[test]
fn quickcheck_sign_lives_on_numerator() {
    fn prop(n: i32, d: i32) -> TestResult {
        if d == 0 {
            return TestResult::discard();
        }
        let value = Fraction::new(n as i64, d as i64).unwrap();
        let expected_negative = (n < 0) != (d < 0) && n != 0;
        TestResult::from_bool(value.denominator() > 0 && value.is_negative() == expected_negative)
    }
    quickcheck(prop as fn(i32, i32) -> TestResult);
}

#[test]
fn quickcheck_float_noise_is_absorbed() {
    fn prop(n: i16) -> bool {
        let exact = Fraction::new(n as i64, 10).unwrap();
        let noisy = Fraction::from_f64(n as f64 / 10.0 + 1e-12).unwrap();
        exact == noisy
    }
    quickcheck(prop as fn(i16) -> bool);
}

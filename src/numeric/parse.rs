// ============================================================================
// Shop Notation Parser
// Whole, simple, mixed and decimal fraction text
// ============================================================================
//
// Grammar (first match wins, surrounding whitespace ignored):
//
//   mixed    := whole ' ' simple        "8 1/16", "1 -1/2"
//   simple   := number '/' number       "3/4", "1.5/2"
//   decimal  := number with '.' or ','  "0.125", "0,5"
//   integer  := ['+'|'-'] digits        "5", "-12"
//
// A comma is accepted as the decimal separator. A mixed number is the sum
// of its two parts, each carrying its own sign: "-1 1/2" is -1/2.

use super::errors::{FractionError, FractionResult};
use super::fraction::Fraction;

/// Parse a single shop-notation string.
pub(crate) fn parse_text(input: &str) -> FractionResult<Fraction> {
    let result = parse_inner(input.trim());
    if let Err(FractionError::Parse { .. }) = &result {
        tracing::debug!(input, "rejected fraction input");
    }
    result.map_err(|err| match err {
        FractionError::Parse { .. } => FractionError::parse(input),
        other => other,
    })
}

/// Parse a numerator/denominator pair given as two decimal strings.
pub(crate) fn parse_pair(numerator: &str, denominator: &str) -> FractionResult<Fraction> {
    match (number_token(numerator), number_token(denominator)) {
        (Some(num), Some(den)) => Fraction::from_f64_pair(num, den),
        _ => {
            tracing::debug!(numerator, denominator, "rejected fraction pair");
            Err(FractionError::parse(format!("{}/{}", numerator, denominator)))
        },
    }
}

fn parse_inner(text: &str) -> FractionResult<Fraction> {
    if text.is_empty() {
        return Err(FractionError::parse(text));
    }

    match text.split_once(' ') {
        Some((head, tail)) => mixed(head, tail.trim()),
        None => single(text),
    }
}

fn mixed(head: &str, tail: &str) -> FractionResult<Fraction> {
    let whole = match number_token(head) {
        Some(value) if value.fract() == 0.0 => Fraction::from_f64(value)?,
        _ => return Err(FractionError::parse(head)),
    };
    if !tail.contains('/') || tail.contains(' ') {
        return Err(FractionError::parse(tail));
    }
    whole.add(simple(tail)?)
}

fn single(token: &str) -> FractionResult<Fraction> {
    if token.contains('/') {
        return simple(token);
    }
    if token.contains(['.', ',']) {
        return number_token(token)
            .ok_or_else(|| FractionError::parse(token))
            .and_then(Fraction::from_f64);
    }
    token
        .parse::<i64>()
        .map(Fraction::from_integer)
        .map_err(|_| FractionError::parse(token))
}

fn simple(token: &str) -> FractionResult<Fraction> {
    let (num, den) = token
        .split_once('/')
        .ok_or_else(|| FractionError::parse(token))?;
    if den.contains('/') {
        return Err(FractionError::parse(token));
    }
    match (number_token(num), number_token(den)) {
        (Some(num), Some(den)) => Fraction::from_f64_pair(num, den),
        _ => Err(FractionError::parse(token)),
    }
}

/// Read a finite decimal number, accepting `,` as the decimal point.
fn number_token(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    // Reject the spelled-out forms f64::from_str would otherwise accept
    if !token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    token
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

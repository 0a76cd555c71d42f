//! Lenient JSON → Decimal coercion.
//!
//! UI forms post transient values while the user types (`""`, `"12,"`,
//! `null`, negative numbers). None of these are errors: each is reduced to a
//! non-negative Decimal, and every coercion is logged.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Number, Value};
use tracing::warn;

/// Largest magnitude accepted from JSON. Anything above is treated as
/// invalid input, which keeps a single price times quantity exact; sums over
/// many lines can still reach the `Decimal` bounds and saturate in `core`.
pub(crate) const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000);

/// Result of reading one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Numeric {
    /// Field absent or `null`.
    Missing,
    /// Field present but not a usable number.
    Invalid,
    Value(Decimal),
}

pub(crate) fn read_numeric(value: Option<&Value>) -> Numeric {
    let parsed = match value {
        None | Some(Value::Null) => return Numeric::Missing,
        Some(Value::Number(n)) => number_to_decimal(n),
        Some(Value::String(s)) => str_to_decimal(s),
        Some(_) => None,
    };
    match parsed {
        Some(d) if d.abs() <= MAX_AMOUNT => Numeric::Value(d),
        _ => Numeric::Invalid,
    }
}

fn number_to_decimal(n: &Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    let repr = n.to_string();
    Decimal::from_str(&repr)
        .or_else(|_| Decimal::from_scientific(&repr))
        .ok()
        .or_else(|| n.as_f64().and_then(|f| Decimal::try_from(f).ok()))
}

fn str_to_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// A required amount: missing or invalid becomes zero, negatives clamp.
pub(crate) fn required_amount(value: Option<&Value>, path: &str) -> Decimal {
    match read_numeric(value) {
        Numeric::Value(d) => clamp_negative(d, path),
        Numeric::Missing => {
            warn!(field = path, "missing numeric field, using 0");
            Decimal::ZERO
        }
        Numeric::Invalid => {
            warn!(field = path, raw = ?value, "non-numeric value, using 0");
            Decimal::ZERO
        }
    }
}

/// An optional amount: missing stays `None`, invalid becomes `Some(0)`.
pub(crate) fn optional_amount(value: Option<&Value>, path: &str) -> Option<Decimal> {
    match read_numeric(value) {
        Numeric::Value(d) => Some(clamp_negative(d, path)),
        Numeric::Missing => None,
        Numeric::Invalid => {
            warn!(field = path, raw = ?value, "non-numeric value, using 0");
            Some(Decimal::ZERO)
        }
    }
}

pub(crate) fn clamp_negative(d: Decimal, path: &str) -> Decimal {
    if d.is_sign_negative() && !d.is_zero() {
        warn!(field = path, value = %d, "negative value clamped to 0");
        Decimal::ZERO
    } else {
        d
    }
}

/// Render a string-ish JSON value; numbers are stringified.
pub(crate) fn read_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

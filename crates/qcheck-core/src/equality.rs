//! Value equality used for choice distinctness and answer membership.
//!
//! Plain `serde_json::Value` equality treats `1` and `1.0` as different
//! numbers. Question files are hand-written, so numbers are compared by the
//! value they denote, without rounding through `f64`: `9007199254740993`
//! and `9007199254740992.0` are different numbers. Booleans never equal
//! numbers.

use serde_json::{Number, Value};

/// Compare two JSON values, normalising numbers at every nesting level.
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => numbers_equal(l, r),
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, a)| r.get(key).is_some_and(|b| values_equal(a, b)))
        }
        _ => left == right,
    }
}

/// Distinct values of `values`, in first-occurrence order.
#[must_use]
pub fn distinct(values: &[Value]) -> Vec<&Value> {
    let mut unique: Vec<&Value> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.iter().any(|seen| values_equal(seen, value)) {
            unique.push(value);
        }
    }
    unique
}

/// A JSON number in a form that compares without rounding.
#[derive(Debug)]
enum Exact {
    Int(i128),
    Float(f64),
    /// Integer literal outside the `i128` range, or text `f64` cannot hold.
    Text(String),
}

impl Exact {
    fn of(number: &Number) -> Self {
        if let Some(value) = number.as_i64() {
            return Self::Int(i128::from(value));
        }
        if let Some(value) = number.as_u64() {
            return Self::Int(i128::from(value));
        }

        let text = number.to_string();
        if is_integer_literal(&text) {
            return text.parse().map_or(Self::Text(text), Self::Int);
        }
        number.as_f64().map_or(Self::Text(text), Self::Float)
    }
}

#[allow(clippy::float_cmp)]
fn numbers_equal(left: &Number, right: &Number) -> bool {
    match (Exact::of(left), Exact::of(right)) {
        (Exact::Int(l), Exact::Int(r)) => l == r,
        (Exact::Float(l), Exact::Float(r)) => l == r,
        (Exact::Int(int), Exact::Float(float)) | (Exact::Float(float), Exact::Int(int)) => {
            float_equals_int(float, int)
        }
        (Exact::Text(text), Exact::Float(float)) | (Exact::Float(float), Exact::Text(text)) => {
            is_whole(float) && format!("{float:.0}") == text
        }
        (Exact::Text(l), Exact::Text(r)) => l == r,
        // Text integers lie outside the i128 range.
        (Exact::Int(_), Exact::Text(_)) | (Exact::Text(_), Exact::Int(_)) => false,
    }
}

/// Whole floats inside the `i128` range convert exactly, so the comparison
/// is done on integers rather than on a rounded `f64`.
#[allow(clippy::cast_possible_truncation)]
fn float_equals_int(float: f64, int: i128) -> bool {
    let bound = 2f64.powi(127);
    is_whole(float) && float >= -bound && float < bound && float as i128 == int
}

fn is_whole(float: f64) -> bool {
    float.is_finite() && float.fract() == 0.0
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

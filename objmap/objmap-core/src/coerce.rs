//! Built-in scalar coercion.
//!
//! Coercion is total: every input produces a value of the requested kind.
//! Inputs already of the target kind are returned unchanged.

use crate::{category::ScalarKind, value::Value};

/// Coerce `value` to the primitive `kind`.
pub fn coerce(kind: ScalarKind, value: &Value) -> Value {
    match kind {
        ScalarKind::Int => Value::Int(to_int(value)),
        ScalarKind::Float => Value::Float(to_float(value)),
        ScalarKind::String => to_string(value),
        ScalarKind::Bool => Value::Bool(to_bool(value)),
    }
}

fn to_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(v) => i64::from(*v),
        Value::Int(v) => *v,
        Value::Float(v) => float_to_int(*v),
        Value::String(s) => parse_int_prefix(s),
        Value::List(items) => i64::from(!items.is_empty()),
        Value::Object(members) => i64::from(!members.is_empty()),
    }
}

fn to_float(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(v) => f64::from(u8::from(*v)),
        Value::Int(v) => *v as f64,
        Value::Float(v) => *v,
        Value::String(s) => parse_float_prefix(s),
        Value::List(items) => f64::from(u8::from(!items.is_empty())),
        Value::Object(members) => f64::from(u8::from(!members.is_empty())),
    }
}

fn to_string(value: &Value) -> Value {
    match value {
        Value::Null => Value::string(""),
        Value::Bool(true) => Value::string("1"),
        Value::Bool(false) => Value::string(""),
        Value::Int(v) => Value::string(v.to_string()),
        Value::Float(v) => Value::string(v.to_string()),
        Value::String(_) => value.clone(),
        // compound values have no textual scalar form
        Value::List(_) | Value::Object(_) => Value::Null,
    }
}

fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(v) => *v,
        Value::Int(v) => *v != 0,
        Value::Float(v) => *v != 0.0,
        Value::String(s) => !(s.is_empty() || s.as_ref() == "0"),
        Value::List(items) => !items.is_empty(),
        Value::Object(members) => !members.is_empty(),
    }
}

fn float_to_int(v: f64) -> i64 {
    if v.is_finite() { v as i64 } else { 0 }
}

/// Longest leading slice of `s` (after whitespace) that reads as a decimal
/// number: sign, digits, optional fraction, optional exponent.
fn numeric_prefix(s: &str) -> &str {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return "";
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    &s[..end]
}

fn parse_float_prefix(s: &str) -> f64 {
    numeric_prefix(s).parse().unwrap_or(0.0)
}

fn parse_int_prefix(s: &str) -> i64 {
    let prefix = numeric_prefix(s);
    match prefix.parse::<i64>() {
        Ok(v) => v,
        Err(_) => float_to_int(prefix.parse().unwrap_or(0.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_prefix_stops_at_first_non_numeric_byte() {
        assert_eq!(numeric_prefix("  12abc"), "12");
        assert_eq!(numeric_prefix("-3.5e2x"), "-3.5e2");
        assert_eq!(numeric_prefix(".5"), ".5");
        assert_eq!(numeric_prefix("1e"), "1");
        assert_eq!(numeric_prefix("abc"), "");
        assert_eq!(numeric_prefix("-"), "");
    }

    #[test]
    fn int_prefix_truncates_fractions_and_exponents() {
        assert_eq!(parse_int_prefix("1.9"), 1);
        assert_eq!(parse_int_prefix("1e3"), 1000);
        assert_eq!(parse_int_prefix("0x1A"), 0);
    }
}

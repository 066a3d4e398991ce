// src/core/format.rs
//
// Number formatting for result metadata.

use serde_json::Value;

use crate::error::RenderError;

/// Read a JSON value the way `Number(x)` would: numbers pass, numeric
/// strings are parsed (blank reads as 0), everything else fails.
pub fn as_number(field: &'static str, v: &Value) -> Result<f64, RenderError> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match n {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(RenderError::NotANumber { field, value: v.to_string() }),
    }
}

/// `1234567.5` → `"1,234,567.5"`. Up to three fraction digits, trailing
/// zeros dropped.
pub fn group_thousands(n: f64) -> String {
    // `{:.3}` prints the exact decimal expansion, so large whole numbers
    // keep every digit.
    let fixed = format!("{:.3}", n.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut out = String::with_capacity(int.len() + int.len() / 3 + 5);
    if n < 0.0 && (int != "0" || !frac.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Fraction → whole-number percentage: `0.5` → `"50%"`.
pub fn percent(fraction: f64) -> String {
    let p = (fraction * 100.0).round();
    // avoid "-0%"
    let p = if p == 0.0 { 0.0 } else { p };
    format!("{p}%")
}

//! Boundary coercion for raw numeric input.
//!
//! Form fields arrive as text on every keystroke. Nothing here fails: text
//! that does not read as a finite number yields `None` and the caller
//! substitutes its default.

/// Parse a user-typed number, tolerating thousands separators, `_`, a
/// leading `$` and surrounding whitespace.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an integer field; fractional input is truncated and negatives
/// saturate to zero.
pub fn parse_integer(raw: &str) -> Option<u64> {
    parse_numeric(raw).map(|v| v.trunc() as u64)
}

/// Raise `value` to `floor`, mapping non-finite values to the floor.
pub fn at_least(value: f64, floor: f64) -> f64 {
    if value.is_finite() {
        value.max(floor)
    } else {
        floor
    }
}

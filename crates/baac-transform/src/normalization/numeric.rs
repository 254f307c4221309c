//! Passthrough cleaning and inclusive range checks.

use baac_model::CellValue;

use super::sentinel::is_sentinel;

/// Parse a decimal integer, ignoring surrounding whitespace.
pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Parse an integer only when the text is already in canonical form
/// (no padding, no leading zeros, no `+`), so rendering it back is lossless.
fn parse_canonical_integer(value: &str) -> Option<i64> {
    let parsed: i64 = value.parse().ok()?;
    (parsed.to_string() == value).then_some(parsed)
}

/// Generic passthrough: sentinel tokens become empty, everything else is kept.
///
/// Integer-looking values come back as integers, other text unchanged.
/// Values such as `"007"` stay text.
pub fn clean(value: &str) -> CellValue {
    if is_sentinel(value) {
        return CellValue::Empty;
    }
    match parse_canonical_integer(value) {
        Some(number) => CellValue::Integer(number),
        None => CellValue::text(value),
    }
}

/// Inclusive range check for coded categorical columns.
///
/// - sentinel with `min == 0`: the textual zero default (see
///   [`CellValue::zero_default`])
/// - sentinel otherwise: empty
/// - integer inside `min..=max`, padding ignored: that integer
/// - anything else: the raw value, untouched
pub fn clamp_range(value: &str, min: i64, max: i64) -> CellValue {
    if is_sentinel(value) {
        return if min == 0 {
            CellValue::zero_default()
        } else {
            CellValue::Empty
        };
    }
    match parse_integer(value) {
        Some(number) if (min..=max).contains(&number) => CellValue::Integer(number),
        _ => CellValue::text(value),
    }
}

//! Code-list validators: vehicle category, safety equipment, letter codes.
//!
//! Unlike [`clamp_range`](super::clamp_range), these rules clear values that
//! fall outside their code list.

use baac_model::CellValue;

use super::numeric::parse_integer;
use super::sentinel::is_sentinel;

/// Vehicle category (`catv`): 1 to 40, or 99 for "other vehicle".
pub fn clamp_vehicle_category(value: &str) -> CellValue {
    if is_sentinel(value) {
        return CellValue::zero_default();
    }
    match parse_integer(value) {
        Some(code) if (1..=40).contains(&code) || code == 99 => CellValue::Integer(code),
        _ => CellValue::Empty,
    }
}

/// Safety-equipment codes (`secu`).
///
/// Single digits 1-3 and 9 come from the older coding. Two-digit codes pair
/// an equipment type (tens: 1 belt, 2 helmet, 3 child seat, 4 reflective
/// vest, 9 other) with whether it was worn (units: 1 yes, 2 no, 3 unknown).
fn is_security_code(code: i64) -> bool {
    matches!(
        code,
        1..=3 | 9 | 11..=13 | 21..=23 | 31..=33 | 41..=43 | 91..=93
    )
}

/// Safety equipment (`secu`). Sentinels default to `"0"`; anything outside
/// the code list is cleared.
pub fn clamp_security_code(value: &str) -> CellValue {
    if is_sentinel(value) {
        return CellValue::zero_default();
    }
    match parse_integer(value) {
        Some(code) if is_security_code(code) => CellValue::Integer(code),
        _ => CellValue::Empty,
    }
}

/// Keep `value` only if it is one of `allowed` (exact, case-sensitive).
pub fn clamp_letter_enum(value: &str, allowed: &[&str]) -> CellValue {
    if is_sentinel(value) || !allowed.contains(&value) {
        return CellValue::Empty;
    }
    CellValue::text(value)
}

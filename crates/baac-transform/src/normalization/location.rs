//! Commune codes, street addresses and department codes.

use baac_model::CellValue;

use super::NormalizeError;
use super::numeric::parse_integer;
use super::sentinel::{is_sentinel, is_sentinel_char};

/// Commune number, right-padded with zeros to three digits.
///
/// The export drops trailing zeros from commune numbers, so `"32"` stands for
/// commune 320 and `"5"` for 500. Padding is appended, never prepended.
pub fn format_commune_code(value: &str) -> Result<CellValue, NormalizeError> {
    if is_sentinel(value) {
        return Ok(CellValue::Empty);
    }
    let mut padded = value.to_string();
    while padded.chars().count() < 3 {
        padded.push('0');
    }
    parse_integer(&padded)
        .map(CellValue::Integer)
        .ok_or_else(|| NormalizeError::NotAnInteger {
            value: value.to_string(),
        })
}

/// First space-delimited token of `address`.
fn first_token(address: &str) -> &str {
    address.split(' ').next().unwrap_or_default()
}

/// Clean a free-text street address.
///
/// Leading sentinel characters are stripped and the rest is upper-cased, then
/// abbreviations are expanded in a fixed order:
///
/// 1. leading `RTE` token becomes `ROUTE`
/// 2. every ` RTE ` becomes ` ROUTE `
/// 3. every `RD POINT` becomes `ROND POINT`
/// 4. leading `BD` token becomes `BOULEVARD`
/// 5. every ` BD ` becomes `BOULEVARD ` (the space before `BD` is dropped)
///
/// Blank input is returned unchanged.
pub fn normalize_address(address: &str) -> String {
    if address.trim().is_empty() {
        return address.to_string();
    }
    let mut normalized = address.trim_start_matches(is_sentinel_char).to_uppercase();

    if first_token(&normalized) == "RTE" {
        normalized = normalized.replacen("RTE", "ROUTE", 1);
    }
    normalized = normalized.replace(" RTE ", " ROUTE ");
    normalized = normalized.replace("RD POINT", "ROND POINT");
    if first_token(&normalized) == "BD" {
        normalized = normalized.replacen("BD", "BOULEVARD", 1);
    }
    normalized.replace(" BD ", "BOULEVARD ")
}

/// Department code with the export's trailing zero removed.
///
/// Metropolitan departments are exported on three characters with a trailing
/// zero (`"750"` for Paris); those come back as the integer department
/// number. Shorter codes and codes not ending in zero are kept as text.
pub fn normalize_postal_code(code: &str) -> Result<CellValue, NormalizeError> {
    if code.is_empty() {
        return Ok(CellValue::Empty);
    }
    match code.strip_suffix('0') {
        Some(department) if code.chars().count() > 2 => parse_integer(department)
            .map(CellValue::Integer)
            .ok_or_else(|| NormalizeError::NotAnInteger {
                value: code.to_string(),
            }),
        _ => Ok(CellValue::text(code)),
    }
}

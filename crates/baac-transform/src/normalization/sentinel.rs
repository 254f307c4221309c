//! Sentinel tokens: raw cells that carry no information.
//!
//! The export fills unknown cells with a handful of punctuation marks rather
//! than leaving them empty. This is an allow-list of those tokens, not a
//! general "blank" check: `"  "` or `"0"` are ordinary values.

/// Every token treated as "no data".
pub const SENTINELS: [&str; 11] = ["-", " ", ",", ";", "|", "", "#", "*", ".", "!", "?"];

/// True iff `value` is exactly one of [`SENTINELS`].
pub fn is_sentinel(value: &str) -> bool {
    SENTINELS.contains(&value)
}

/// True for the characters of the non-empty sentinel tokens.
pub fn is_sentinel_char(ch: char) -> bool {
    matches!(
        ch,
        '-' | ' ' | ',' | ';' | '|' | '#' | '*' | '.' | '!' | '?'
    )
}

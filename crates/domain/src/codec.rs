//! Wire grammar shared by the character and cliche codecs
//!
//! ```text
//! <character_record> ::= <name> ";" <desc> ";" <cliche_list>
//! <cliche_list>      ::= "" | <cliche_record> ( "|" <cliche_record> )*
//! <cliche_record>    ::= <name> ":" <value> ":" <double_flag> ":" <funky_tag>
//! <double_flag>      ::= "0" | "1"
//! ```
//!
//! Separators are reserved and never escaped. Callers must keep them out of
//! names, descriptions and tags.

/// Separates the top-level character fields.
pub const RECORD_SEPARATOR: &str = ";";

/// Separates cliche sub-records inside the third character field.
pub const CLICHE_SEPARATOR: &str = "|";

/// Separates the positional fields of a cliche sub-record.
pub const FIELD_SEPARATOR: &str = ":";

/// Encoded form of a doubling flag.
pub fn flag_to_wire(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

/// Decodes a doubling flag: nonzero leading integer is true, anything else
/// (zero, empty, non-numeric) is false.
pub fn flag_from_wire(text: &str) -> bool {
    leading_int(text) != 0
}

/// Parses the leading integer of `text`, returning 0 when there is none.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit, including `_`, so `"0_1"` reads as 0 rather than as a
/// digit-grouped 1. Values saturate at the `i64` bounds.
///
/// # Examples
///
/// ```
/// use risus_domain::codec::leading_int;
///
/// assert_eq!(leading_int("4"), 4);
/// assert_eq!(leading_int("  -2"), -2);
/// assert_eq!(leading_int("3dice"), 3);
/// assert_eq!(leading_int("yes"), 0);
/// assert_eq!(leading_int(""), 0);
/// ```
pub fn leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// [`leading_int`] narrowed to `i32`, saturating at the bounds.
pub fn leading_i32(text: &str) -> i32 {
    let wide = leading_int(text);
    i32::try_from(wide).unwrap_or(if wide < 0 { i32::MIN } else { i32::MAX })
}

//! Numeric coercion for CSS value strings.
//!
//! [CSS Values and Units Level 4 § 4.2 Numbers](https://www.w3.org/TR/css-values-4/#numbers)
//! [CSS Values and Units Level 4 § 4.4 Dimensions](https://www.w3.org/TR/css-values-4/#dimensions)
//!
//! "A dimension is a number immediately followed by a unit identifier."
//!
//! The panel edits dimension values (`"12px"`, `"1.5rem"`) through numeric
//! sliders, so it needs to pull the leading number out of a value string
//! while keeping non-numeric values (`"auto"`, `"fit-content"`) untouched.
//! These helpers implement that coercion with `parseFloat` semantics:
//! leading whitespace is skipped, the longest leading number wins, and
//! whatever trails it (typically the unit) is ignored.

use serde::Serialize;

/// Result of coercing a CSS value string to a number.
///
/// Values that do not start with a number are passed through unchanged so
/// keyword values survive a save/restore cycle byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CssNumber {
    /// The value started with a number; any unit suffix has been dropped.
    Number(f64),
    /// The value had no leading number and is preserved verbatim.
    Literal(String),
}

impl CssNumber {
    /// Check whether the coercion produced a number.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// [§ 4.2 Numbers](https://www.w3.org/TR/css-values-4/#numbers)
///
/// Coerce a CSS value string to a number, falling back to the original
/// text when no number leads the string.
///
/// The unit suffix of a dimension is implicitly stripped: `"12px"` coerces
/// to `12`. Keyword values coerce to themselves: `"auto"` stays `"auto"`.
///
/// # Example
/// ```
/// use tweakcss_common::number::{CssNumber, parse_number_or_original};
///
/// assert_eq!(parse_number_or_original("12px"), CssNumber::Number(12.0));
/// assert_eq!(
///     parse_number_or_original("auto"),
///     CssNumber::Literal("auto".to_string())
/// );
/// ```
#[must_use]
pub fn parse_number_or_original(text: &str) -> CssNumber {
    match leading_float(text) {
        Some((number, _)) => CssNumber::Number(number),
        None => CssNumber::Literal(text.to_string()),
    }
}

/// [§ 4.4 Dimensions](https://www.w3.org/TR/css-values-4/#dimensions)
///
/// Extract the unit identifier of a numeric CSS value.
///
/// "A dimension is a number immediately followed by a unit identifier."
///
/// One space between number and unit is tolerated, since hand-written
/// custom property values sometimes carry it. Returns `None` when the
/// value has no leading number or the trailing text is not a plain unit
/// identifier (ASCII letters or `%`). A bare number yields `Some("")`.
///
/// The restore layer uses this to re-attach the live unit to a persisted
/// bare number before writing it back to the document style.
#[must_use]
pub fn leading_number_unit(text: &str) -> Option<&str> {
    let (_, consumed) = leading_float(text)?;
    let rest = text[consumed..].strip_prefix(' ').unwrap_or(&text[consumed..]);
    let unit = rest.trim_end();
    if unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
        Some(unit)
    } else {
        None
    }
}

/// [CSS Syntax Level 3 § 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
///
/// Scan the longest leading floating-point number of `text`, after
/// skipping leading whitespace.
///
/// Accepts an optional sign, an integer part, a fractional part, and an
/// exponent part (each optional, but at least one digit must appear in the
/// integer or fractional part). Returns the parsed number together with
/// the number of bytes consumed from the start of `text`, or `None` when
/// the string does not start with a number.
fn leading_float(text: &str) -> Option<(f64, usize)> {
    let trimmed = text.trim_start();
    let skipped = text.len() - trimmed.len();
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    // "If the next input code point is U+002B PLUS SIGN (+) or U+002D
    // HYPHEN-MINUS (-), consume it."
    if matches!(bytes.first().copied(), Some(b'+' | b'-')) {
        i += 1;
    }

    // "While the next input code point is a digit, consume it."
    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let int_digits = i - int_start;

    // "If the next 2 input code points are U+002E FULL STOP (.) followed
    // by a digit, consume them."
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        frac_digits = j - frac_start;
        i = j;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent part: 'e' or 'E', optional sign, at least one digit.
    // Consumed only when complete, so "12em" keeps its unit intact.
    if matches!(bytes.get(i).copied(), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j).copied(), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let number = trimmed[..i].parse::<f64>().ok()?;
    Some((number, skipped + i))
}

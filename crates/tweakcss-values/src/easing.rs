//! The `cubic-bezier()` easing function.
//!
//! [CSS Easing Functions Level 1 § 2.3 Cubic Bézier easing functions](https://www.w3.org/TR/css-easing-1/#cubic-bezier-easing-functions)
//!
//! "A cubic Bézier easing function is a type of easing function defined by
//! four real numbers that specify the two control points, P1 and P2, of a
//! cubic Bézier curve whose end point P0 and P3 are fixed at (0, 0) and
//! (1, 1) respectively."
//!
//! "cubic-bezier(`<number>`, `<number>`, `<number>`, `<number>`)"
//!
//! The panel edits a `cubic-bezier()` variable through four numeric
//! sliders, so the value decomposes into a fixed 4-tuple of numbers. The
//! grammar is strict and anchored: exactly four bare decimals, no nested
//! expressions, no exponent notation. Range validation of the x
//! coordinates ("both x values must be in the range [0, 1]") is left to
//! the editing layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The literal prefix that opens the function.
const PREFIX: &str = "cubic-bezier(";

/// A decomposed `cubic-bezier()` value.
///
/// [§ 2.3](https://www.w3.org/TR/css-easing-1/#cubic-bezier-easing-functions)
///
/// The four control point coordinates in argument order. All four are
/// finite when produced by [`parse_cubic_bezier`]: the strict grammar
/// cannot write an infinity or NaN, and a digit string long enough to
/// overflow the conversion is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    /// x coordinate of control point P1.
    pub x1: f64,
    /// y coordinate of control point P1.
    pub y1: f64,
    /// x coordinate of control point P2.
    pub x2: f64,
    /// y coordinate of control point P2.
    pub y2: f64,
}

impl CubicBezier {
    /// The four coordinates in argument order (x1, y1, x2, y2).
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Rebuild the CSS text of the function.
    ///
    /// Each number uses its default decimal representation (shortest text
    /// that parses back to the same value, never exponent notation), so a
    /// rebuild-then-parse cycle reproduces the exact 4-tuple.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl From<[f64; 4]> for CubicBezier {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Why a string failed to parse as a `cubic-bezier()` function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a cubic-bezier() function with four numeric arguments")]
pub struct ParseCubicBezierError;

impl FromStr for CubicBezier {
    type Err = ParseCubicBezierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cubic_bezier(s).ok_or(ParseCubicBezierError)
    }
}

/// [§ 2.3](https://www.w3.org/TR/css-easing-1/#cubic-bezier-easing-functions)
///
/// Check whether a CSS value is a well-formed `cubic-bezier()` function.
///
/// Unlike the `light-dark()` classifier this is a strict full match of the
/// trimmed value, anchored at both ends: the complete function call with
/// exactly four comma-separated numeric arguments.
#[must_use]
pub fn is_cubic_bezier_str(value: &str) -> bool {
    parse_cubic_bezier(value).is_some()
}

/// [§ 2.3](https://www.w3.org/TR/css-easing-1/#cubic-bezier-easing-functions)
///
/// Parse a `cubic-bezier()` function into its four control point
/// coordinates, in argument order.
///
/// The arguments are constrained to bare numbers, so no nesting-aware
/// scanning is needed: the inner content splits on commas directly. Each
/// argument must be an optionally negative decimal without exponent
/// notation; a malformed number (double decimal point, stray text) fails
/// the whole match before any numeric conversion happens.
///
/// # Example
/// ```
/// use tweakcss_values::easing::{CubicBezier, parse_cubic_bezier};
///
/// assert_eq!(
///     parse_cubic_bezier("cubic-bezier(0.25, 0.1, 0.25, 1)"),
///     Some(CubicBezier { x1: 0.25, y1: 0.1, x2: 0.25, y2: 1.0 })
/// );
/// ```
#[must_use]
pub fn parse_cubic_bezier(value: &str) -> Option<CubicBezier> {
    let inner = value.trim().strip_prefix(PREFIX)?.strip_suffix(')')?;

    let mut coords = [0.0_f64; 4];
    let mut arguments = inner.split(',');
    for coord in &mut coords {
        *coord = parse_plain_number(arguments.next()?.trim())?;
    }
    // A fifth argument makes the value some other timing expression.
    if arguments.next().is_some() {
        return None;
    }

    Some(CubicBezier::from(coords))
}

/// Parse a bare decimal number: optional leading minus, digits, at most
/// one decimal point, no exponent. Anchored over the whole string.
fn parse_plain_number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);

    let mut seen_digit = false;
    let mut seen_dot = false;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }
    if !seen_digit {
        return None;
    }

    // An overlong digit string overflows the conversion to infinity, which
    // would escape the finiteness invariant and print back as "inf".
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

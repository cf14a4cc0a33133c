//! Value classification for widget selection.
//!
//! The panel reads variable values from two untyped sources: computed
//! styles on the document root and a persisted JSON map. Classification
//! decides which widget edits a value - a color swatch, a `light-dark()`
//! swatch pair, a bezier editor, or a plain field - and must fail closed on
//! anything it does not recognize: a non-string or malformed value simply
//! classifies as "not this shape", never as an error.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::color::is_color_expression;
use crate::easing::is_cubic_bezier_str;
use crate::light_dark::is_light_dark_value;

/// An untyped variable value as read from an external source.
///
/// Persisted panel state is a JSON map of variable name to value, where
/// numeric sliders store bare numbers and everything else stores text, so
/// the untagged representation deserializes the stored shape directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// JSON `null` (a variable that was cleared).
    Null,
    /// A boolean toggle value.
    Bool(bool),
    /// A bare number (a slider value persisted without its unit).
    Number(f64),
    /// A CSS value string.
    Text(String),
}

impl RawValue {
    /// The text content, when the value is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

/// A recognized CSS function value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// A `light-dark()` color scheme pair.
    LightDark,
    /// A `cubic-bezier()` easing function.
    CubicBezier,
    /// A color expression (hex, named, or color function).
    Color,
}

/// Check whether an untyped value is a recognizable color expression.
///
/// False for any non-string value; for strings, true iff the color parser
/// reports channel values (or recognizes the color space). See
/// [`is_color_expression`].
#[must_use]
pub fn is_color_string(value: &RawValue) -> bool {
    value.as_text().is_some_and(is_color_expression)
}

/// Check whether an untyped value is a well-formed `cubic-bezier()` string.
///
/// False for any non-string value; for strings, a strict anchored match of
/// the four-argument numeric form. See [`is_cubic_bezier_str`].
#[must_use]
pub fn is_cubic_bezier_string(value: &RawValue) -> bool {
    value.as_text().is_some_and(is_cubic_bezier_str)
}

/// Classify an untyped value against the recognized function shapes.
///
/// Shapes are checked in specificity order: `light-dark()` first (its
/// arguments are often colors, so the color check would also match a
/// substring-level reading of it), then the strict `cubic-bezier()` match,
/// then general color expressions. `None` means the panel falls back to a
/// plain text or numeric field.
#[must_use]
pub fn classify(value: &RawValue) -> Option<ValueKind> {
    let text = value.as_text()?;
    if is_light_dark_value(text) {
        Some(ValueKind::LightDark)
    } else if is_cubic_bezier_str(text) {
        Some(ValueKind::CubicBezier)
    } else if is_color_expression(text) {
        Some(ValueKind::Color)
    } else {
        None
    }
}

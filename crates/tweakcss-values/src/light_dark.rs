//! The `light-dark()` color scheme function.
//!
//! [CSS Color Module Level 5 § 7.1 Selecting a scheme-based color](https://www.w3.org/TR/css-color-5/#light-dark)
//!
//! "light-dark() = light-dark( `<color>`, `<color>` )"
//!
//! "If the used color scheme is light... the function computes to the
//! computed value of the first color. If the used color scheme is dark...
//! the function computes to the computed value of the second color."
//!
//! The panel shows a `light-dark()` variable as a pair of color swatches,
//! so the value has to be split into its two arguments and rebuilt after
//! either swatch is edited. The arguments are opaque CSS color expressions;
//! they are not parsed further here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The literal prefix that opens the function.
const PREFIX: &str = "light-dark(";

/// A decomposed `light-dark()` value.
///
/// Both components are trimmed substrings of the original value, kept as
/// opaque CSS expressions (they may themselves be nested function calls
/// like `oklch(...)` or `color-mix(...)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightDark {
    /// The color used when the light scheme is active.
    pub light: String,
    /// The color used when the dark scheme is active.
    pub dark: String,
}

impl LightDark {
    /// Rebuild the CSS text of the function.
    ///
    /// The separator is always `", "` regardless of the spacing in the
    /// source the value was parsed from. The components are emitted as-is;
    /// supplying valid CSS expressions is the caller's responsibility.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("light-dark({}, {})", self.light, self.dark)
    }
}

impl fmt::Display for LightDark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "light-dark({}, {})", self.light, self.dark)
    }
}

/// Why a string failed to parse as a `light-dark()` function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLightDarkError {
    /// The trimmed value does not have the `light-dark(` prefix and `)` suffix.
    #[error("not a light-dark() function")]
    NotLightDark,
    /// No top-level comma separates the two arguments (or the parentheses
    /// inside the arguments are unbalanced).
    #[error("light-dark() needs two comma-separated color arguments")]
    MissingSeparator,
}

impl FromStr for LightDark {
    type Err = ParseLightDarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !(trimmed.starts_with(PREFIX) && trimmed.ends_with(')')) {
            return Err(ParseLightDarkError::NotLightDark);
        }
        parse_light_dark(s).ok_or(ParseLightDarkError::MissingSeparator)
    }
}

/// [§ 7.1](https://www.w3.org/TR/css-color-5/#light-dark)
///
/// Check whether a CSS value is a `light-dark()` function.
///
/// A cheap syntactic prefix check after trimming; balanced parentheses and
/// argument validity are only verified by [`parse_light_dark`].
#[must_use]
pub fn is_light_dark_value(value: &str) -> bool {
    value.trim().starts_with(PREFIX)
}

/// [§ 7.1](https://www.w3.org/TR/css-color-5/#light-dark)
///
/// Parse a `light-dark()` function into its light and dark components.
///
/// The inner content is scanned code point by code point with a nesting
/// depth counter, so commas inside nested function calls (e.g. the legacy
/// comma syntax of `rgb()`, or `color-mix()` arguments) are never mistaken
/// for the argument separator. Everything after the first top-level comma
/// — including any further commas — belongs to the dark component
/// verbatim: the function has exactly two logical arguments.
///
/// Returns `None` when the value is not a complete `light-dark(...)` call,
/// has no top-level comma, or closes more parentheses than it opens.
///
/// # Example
/// ```
/// use tweakcss_values::light_dark::{LightDark, parse_light_dark};
///
/// let parsed = parse_light_dark("light-dark(oklch(100% 0 0deg), oklch(16.84% 0 0deg))");
/// assert_eq!(
///     parsed,
///     Some(LightDark {
///         light: "oklch(100% 0 0deg)".to_string(),
///         dark: "oklch(16.84% 0 0deg)".to_string(),
///     })
/// );
/// ```
#[must_use]
pub fn parse_light_dark(value: &str) -> Option<LightDark> {
    let trimmed = value.trim();

    // Extract the inner content between `light-dark(` and the final `)`.
    let inner = trimmed.strip_prefix(PREFIX)?.strip_suffix(')')?;

    // Find the first comma at nesting depth 0. A depth that would go
    // negative means an unbalanced closing paren inside the arguments;
    // the value is rejected rather than letting the counter desync.
    let mut depth: u32 = 0;
    let mut separator = None;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                separator = Some(i);
                break;
            }
            _ => {}
        }
    }

    let separator = separator?;
    Some(LightDark {
        light: inner[..separator].trim().to_string(),
        dark: inner[separator + 1..].trim().to_string(),
    })
}

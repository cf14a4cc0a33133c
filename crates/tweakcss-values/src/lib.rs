//! CSS value classification, decomposition, and reconstruction for the
//! TweakCSS panel.
//!
//! # Scope
//!
//! This crate implements the pure string core of the panel:
//!
//! - **Value Classification** - deciding which widget edits a value
//!   - Color expressions ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - `light-dark()` pairs ([CSS Color Level 5 § 7.1](https://www.w3.org/TR/css-color-5/#light-dark))
//!   - `cubic-bezier()` curves ([CSS Easing Level 1 § 2.3](https://www.w3.org/TR/css-easing-1/#cubic-bezier-easing-functions))
//!
//! - **Decomposition** - splitting a recognized function call into editable
//!   components, with nesting-aware argument scanning for `light-dark()`
//!
//! - **Reconstruction** - rebuilding canonical CSS text from edited
//!   components, with round-trip fidelity (reconstruct-then-parse returns
//!   the components unchanged)
//!
//! Every operation is pure and total: malformed input classifies as false
//! or parses to `None`, never to a panic or an error.
//!
//! # Not Implemented
//!
//! - Channel decomposition for `oklch()`, `oklab()`, `lab()`, `lch()`,
//!   `hwb()`, `color()`, and `color-mix()` (they classify as colors only)
//! - Color-space conversion
//! - CSS grammar beyond the shapes above (the arguments of `light-dark()`
//!   stay opaque strings)

/// Value classification over untyped inputs.
pub mod classify;
/// Color expression parsing per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// `cubic-bezier()` parsing per [CSS Easing Level 1](https://www.w3.org/TR/css-easing-1/).
pub mod easing;
/// `light-dark()` parsing per [CSS Color Level 5](https://www.w3.org/TR/css-color-5/).
pub mod light_dark;

// Re-exports for convenience
pub use classify::{RawValue, ValueKind, classify, is_color_string, is_cubic_bezier_string};
pub use color::{ColorValue, is_color_expression, parse_color};
pub use easing::{CubicBezier, ParseCubicBezierError, is_cubic_bezier_str, parse_cubic_bezier};
pub use light_dark::{LightDark, ParseLightDarkError, is_light_dark_value, parse_light_dark};

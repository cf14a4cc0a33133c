//! CSS color expression parsing.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! The panel only needs to *recognize* color values to pick the swatch
//! widget, but recognition is delegated to a real parser: a value counts as
//! a color when this module can extract channel values from it (or when it
//! names a known color space this module does not decompose yet).

use serde::Serialize;
use tweakcss_common::warning::warn_once;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

/// Color-space function names this module recognizes but cannot decompose
/// into channels yet. They still classify as colors so the panel does not
/// fall back to a plain text field for them.
const UNSUPPORTED_COLOR_SPACES: &[&str] =
    &["oklch", "oklab", "lab", "lch", "hwb", "color", "color-mix"];

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };

    /// White (#ffffff)
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // Guard the digit slicing below: indexing is by byte, so multi-byte
        // characters would split mid-char.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            // [§ 4.2.1]
            // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
            // by replicating digits, not by adding zeros."
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            // Four-digit RGBA notation (#RGBA)
            4 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                let a = u8::from_str_radix(&hex[3..4].repeat(2), 16).ok()?;
                Some(Self { r, g, b, a })
            }
            // Six-digit RGB notation (#RRGGBB)
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            // Eight-digit RGBA notation (#RRGGBBAA)
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// The basic named color table: the 16 HTML colors plus `transparent`
    /// and the `gray`/`grey` spelling pair. Enough for hand-written theme
    /// variables; the extended X11 set is not needed for classification of
    /// real-world custom properties seen so far.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let rgb = |r, g, b| Some(Self { r, g, b, a: 255 });
        match name.to_ascii_lowercase().as_str() {
            "white" => rgb(255, 255, 255),
            "black" => rgb(0, 0, 0),
            "red" => rgb(255, 0, 0),
            "green" => rgb(0, 128, 0),
            "blue" => rgb(0, 0, 255),
            "yellow" => rgb(255, 255, 0),
            "aqua" | "cyan" => rgb(0, 255, 255),
            "fuchsia" | "magenta" => rgb(255, 0, 255),
            "gray" | "grey" => rgb(128, 128, 128),
            "lime" => rgb(0, 255, 0),
            "maroon" => rgb(128, 0, 0),
            "navy" => rgb(0, 0, 128),
            "olive" => rgb(128, 128, 0),
            "orange" => rgb(255, 165, 0),
            "purple" => rgb(128, 0, 128),
            "silver" => rgb(192, 192, 192),
            "teal" => rgb(0, 128, 128),
            // [§ 6.3 Transparent Color](https://www.w3.org/TR/css-color-4/#transparent-color)
            "transparent" => Some(Self { r: 0, g: 0, b: 0, a: 0 }),
            _ => None,
        }
    }

    /// Convert to hex string notation (#RRGGBB, or #RRGGBBAA if alpha != 255)
    ///
    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// This is the canonical form the panel's color swatch binds to.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Check whether a string is a recognizable CSS color expression.
///
/// True when [`parse_color`] extracts channels, or when the value is a call
/// to a known color-space function this module does not decompose yet (the
/// latter case emits a one-time unsupported-space warning).
///
/// Never panics on malformed input; unparseable strings simply classify as
/// false.
#[must_use]
pub fn is_color_expression(value: &str) -> bool {
    if parse_color(value).is_some() {
        return true;
    }

    if let Some((name, _)) = split_function(value.trim())
        && UNSUPPORTED_COLOR_SPACES.contains(&name.to_ascii_lowercase().as_str())
    {
        warn_once(
            "Values",
            &format!("unsupported color space '{name}' - classified as color without channels"),
        );
        return true;
    }

    false
}

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// Parse a color expression string into sRGB channels.
///
/// Supports hex notation, the basic named colors, and the `rgb()`/`rgba()`
/// and `hsl()`/`hsla()` function forms in both modern (space-separated,
/// `/ alpha`) and legacy (comma-separated) syntax.
#[must_use]
pub fn parse_color(value: &str) -> Option<ColorValue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('#') {
        return ColorValue::from_hex(trimmed);
    }

    if let Some((name, inner)) = split_function(trimmed) {
        return parse_color_function(name, inner);
    }

    ColorValue::from_named(trimmed)
}

/// Split a `name(inner)` function call into its name and inner content.
/// Returns `None` unless the whole trimmed string is a single call.
fn split_function(trimmed: &str) -> Option<(&str, &str)> {
    let open = trimmed.find('(')?;
    let inner = trimmed[open + 1..].strip_suffix(')')?;
    let name = trimmed[..open].trim_end();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some((name, inner))
}

/// [§ 4.1 The RGB Functions: rgb() and rgba()](https://www.w3.org/TR/css-color-4/#rgb-functions)
/// [§ 4.1 The HSL Functions: hsl() and hsla()](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// Per CSS Color 4, rgb()/rgba() and hsl()/hsla() are aliases.
fn parse_color_function(name: &str, inner: &str) -> Option<ColorValue> {
    match name.to_ascii_lowercase().as_str() {
        "rgb" | "rgba" => parse_rgb_function(inner),
        "hsl" | "hsla" => parse_hsl_function(inner),
        _ => None,
    }
}

/// A numeric value extracted from a color function argument.
///
/// Color function arguments can be plain numbers (0-255 for RGB), numbers
/// with an angle unit (hue), or percentages (0%-100%).
#[derive(Debug, Clone, Copy)]
enum ColorArg {
    Number(f64),
    Percentage(f64),
}

/// Extract numeric arguments from a color function's inner content.
///
/// Handles both modern syntax (space-separated with optional `/ alpha`)
/// and legacy syntax (comma-separated): commas, slashes, and whitespace all
/// act as separators, and every remaining word must parse as a number,
/// percentage, or `deg` angle. Any other word makes the whole expression
/// fail (it is not a color this module understands).
fn extract_color_args(inner: &str) -> Option<Vec<ColorArg>> {
    let mut args = Vec::new();
    for segment in inner.split([',', '/']) {
        for word in segment.split_whitespace() {
            args.push(parse_color_arg(word)?);
        }
    }
    Some(args)
}

/// Parse one color function argument word.
fn parse_color_arg(word: &str) -> Option<ColorArg> {
    if let Some(percent) = word.strip_suffix('%') {
        return percent.parse().ok().map(ColorArg::Percentage);
    }
    // [§ 4.1] "<hue> is a <number> or <angle>, interpreted as degrees."
    let number = word.strip_suffix("deg").unwrap_or(word);
    number.parse().ok().map(ColorArg::Number)
}

/// [§ 4.1 The RGB Functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// "rgb() = rgb( <percentage>{3} [ / <alpha-value> ]? ) |
///          rgb( <number>{3} [ / <alpha-value> ]? )"
///
/// "Values outside these ranges are not invalid, but are clamped to the
/// ranges defined here at parsed-value time."
fn parse_rgb_function(inner: &str) -> Option<ColorValue> {
    let args = extract_color_args(inner)?;
    if !(3..=4).contains(&args.len()) {
        return None;
    }

    let r = color_channel_to_u8(args[0]);
    let g = color_channel_to_u8(args[1]);
    let b = color_channel_to_u8(args[2]);

    // "The final argument, <alpha-value>, specifies the alpha of the color."
    // "If omitted, it defaults to 100%."
    let a = args.get(3).map_or(255, |arg| alpha_to_u8(*arg));

    Some(ColorValue { r, g, b, a })
}

/// [§ 4.1 The HSL Functions](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// "hsl() = hsl( <hue> <percentage> <percentage> [ / <alpha-value> ]? )"
fn parse_hsl_function(inner: &str) -> Option<ColorValue> {
    let args = extract_color_args(inner)?;
    if !(3..=4).contains(&args.len()) {
        return None;
    }

    // "Because this value is so often given in degrees, the argument
    // can also be given as a number, which is interpreted as degrees."
    let hue = match args[0] {
        ColorArg::Number(v) => v,
        ColorArg::Percentage(v) => v * 3.6, // 100% = 360 degrees
    };

    // "The second argument is the saturation... interpreted as a percentage."
    let saturation = match args[1] {
        ColorArg::Percentage(v) | ColorArg::Number(v) => v / 100.0,
    };

    // "The third argument is the lightness... interpreted as a percentage."
    let lightness = match args[2] {
        ColorArg::Percentage(v) | ColorArg::Number(v) => v / 100.0,
    };

    let a = args.get(3).map_or(255, |arg| alpha_to_u8(*arg));

    let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
    Some(ColorValue { r, g, b, a })
}

/// Convert a color channel argument to a u8 (0-255).
///
/// [§ 4.1](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// Numbers are clamped to 0-255; percentages map 0%-100% to 0-255.
fn color_channel_to_u8(arg: ColorArg) -> u8 {
    let v = match arg {
        ColorArg::Number(n) => n,
        // "100% = 255"
        ColorArg::Percentage(p) => p * 255.0 / 100.0,
    };
    v.round().clamp(0.0, 255.0) as u8
}

/// Convert an alpha argument to a u8 (0-255).
///
/// "The <alpha-value> can be a <number> (clamped to [0, 1]) or a
/// <percentage> (clamped to [0%, 100%])."
fn alpha_to_u8(arg: ColorArg) -> u8 {
    let v = match arg {
        ColorArg::Number(n) => n * 255.0,
        ColorArg::Percentage(p) => p * 255.0 / 100.0,
    };
    v.round().clamp(0.0, 255.0) as u8
}

/// [§ 4.2.4 HSL-to-RGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
///
/// Convert HSL color to RGB.
///
/// - hue: angle in degrees (0-360, wraps)
/// - saturation: 0.0-1.0
/// - lightness: 0.0-1.0
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    // Normalize hue to [0, 360)
    let h = ((hue % 360.0) + 360.0) % 360.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    // Standard algorithm using chroma and intermediate value.
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        5 => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    (to_u8(r1), to_u8(g1), to_u8(b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_color("#fff"), Some(ColorValue::WHITE));
        assert_eq!(
            parse_color("#ff0000"),
            Some(ColorValue { r: 255, g: 0, b: 0, a: 255 })
        );
        assert_eq!(
            parse_color("#ff000080"),
            Some(ColorValue { r: 255, g: 0, b: 0, a: 128 })
        );
        assert_eq!(parse_color("#ff00"), Some(ColorValue { r: 255, g: 255, b: 0, a: 0 }));
        assert_eq!(parse_color("#gggggg"), None);
        assert_eq!(parse_color("#ff00f"), None);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("red"), Some(ColorValue { r: 255, g: 0, b: 0, a: 255 }));
        assert_eq!(parse_color("RED"), Some(ColorValue { r: 255, g: 0, b: 0, a: 255 }));
        assert_eq!(
            parse_color("transparent"),
            Some(ColorValue { r: 0, g: 0, b: 0, a: 0 })
        );
        assert_eq!(parse_color("auto"), None);
    }

    #[test]
    fn test_rgb_legacy_syntax() {
        assert_eq!(
            parse_color("rgb(255, 165, 0)"),
            Some(ColorValue { r: 255, g: 165, b: 0, a: 255 })
        );
        assert_eq!(
            parse_color("rgba(255, 0, 0, 0.5)"),
            Some(ColorValue { r: 255, g: 0, b: 0, a: 128 })
        );
    }

    #[test]
    fn test_rgb_modern_syntax() {
        assert_eq!(
            parse_color("rgb(255 0 0 / 0.5)"),
            Some(ColorValue { r: 255, g: 0, b: 0, a: 128 })
        );
        assert_eq!(
            parse_color("rgb(100% 0% 0%)"),
            Some(ColorValue { r: 255, g: 0, b: 0, a: 255 })
        );
    }

    #[test]
    fn test_rgb_clamping() {
        // "Values outside these ranges are not invalid, but are clamped."
        assert_eq!(
            parse_color("rgb(300, -20, 0)"),
            Some(ColorValue { r: 255, g: 0, b: 0, a: 255 })
        );
    }

    #[test]
    fn test_hsl() {
        assert_eq!(
            parse_color("hsl(0, 100%, 50%)"),
            Some(ColorValue { r: 255, g: 0, b: 0, a: 255 })
        );
        assert_eq!(
            parse_color("hsl(120deg 100% 50%)"),
            Some(ColorValue { r: 0, g: 255, b: 0, a: 255 })
        );
    }

    #[test]
    fn test_malformed_function_args() {
        assert_eq!(parse_color("rgb(red, green, blue)"), None);
        assert_eq!(parse_color("rgb(255, 0)"), None);
        assert_eq!(parse_color("rgb(255, 0, 0, 1, 1)"), None);
        assert_eq!(parse_color("rgb(255, 0, 0"), None);
    }

    #[test]
    fn test_is_color_expression() {
        assert!(is_color_expression("#336699"));
        assert!(is_color_expression("rgb(1, 2, 3)"));
        assert!(is_color_expression("hsl(200, 50%, 50%)"));
        // Known color space without channel decomposition still classifies.
        assert!(is_color_expression("oklch(70% 0.1 50deg)"));
        assert!(is_color_expression("color-mix(in srgb, red, blue)"));
        // Not colors.
        assert!(!is_color_expression("12px"));
        assert!(!is_color_expression("light-dark(red, blue)"));
        assert!(!is_color_expression(""));
    }

    #[test]
    fn test_to_hex_string() {
        assert_eq!(ColorValue { r: 255, g: 165, b: 0, a: 255 }.to_hex_string(), "#ffa500");
        assert_eq!(
            ColorValue { r: 255, g: 0, b: 0, a: 128 }.to_hex_string(),
            "#ff000080"
        );
    }
}

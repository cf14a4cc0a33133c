//! TweakCSS CLI
//!
//! A headless value inspector for testing and debugging: classifies a CSS
//! value the way the panel would and prints its decomposition.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use std::env;

use tweakcss_common::name::{clean_name, strip_prefix};
use tweakcss_common::number::{CssNumber, leading_number_unit, parse_number_or_original};
use tweakcss_values::{
    RawValue, ValueKind, classify, parse_color, parse_cubic_bezier, parse_light_dark,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: tweakcss-cli <css-value>");
        eprintln!("       tweakcss-cli --json <css-value>");
        eprintln!("       tweakcss-cli --name <custom-property-name>");
        std::process::exit(1);
    }

    if args[1] == "--name" {
        if args.len() < 3 {
            eprintln!("Error: --name requires a custom property name");
            std::process::exit(1);
        }
        let label = clean_name(&args[2]);
        println!("label:  {label}");
        println!("folder: {}", label.split(' ').next().unwrap_or(""));
        println!("short:  {}", strip_prefix(&label));
        return Ok(());
    }

    let (as_json, value) = if args[1] == "--json" {
        if args.len() < 3 {
            eprintln!("Error: --json requires a CSS value argument");
            std::process::exit(1);
        }
        (true, args[2].clone())
    } else {
        (false, args[1].clone())
    };

    let kind = classify(&RawValue::Text(value.clone()));
    if as_json {
        println!("{}", serde_json::to_string_pretty(&describe(kind, &value))?);
    } else {
        print_summary(kind, &value);
    }

    Ok(())
}

/// Build the machine-readable description of a classified value.
fn describe(kind: Option<ValueKind>, value: &str) -> serde_json::Value {
    match kind {
        Some(ValueKind::LightDark) => match parse_light_dark(value) {
            Some(pair) => json!({
                "kind": "light-dark",
                "light": pair.light,
                "dark": pair.dark,
                "css": pair.to_css(),
            }),
            // Classified by prefix but not decomposable (e.g. unbalanced).
            None => json!({ "kind": "light-dark", "error": "malformed arguments" }),
        },
        // Classification is the same strict match as the parse, so the
        // decomposition cannot fail here.
        Some(ValueKind::CubicBezier) => match parse_cubic_bezier(value) {
            Some(curve) => json!({
                "kind": "cubic-bezier",
                "points": curve.to_array(),
                "css": curve.to_css(),
            }),
            None => json!({ "kind": "cubic-bezier", "error": "malformed arguments" }),
        },
        Some(ValueKind::Color) => match parse_color(value) {
            Some(color) => json!({
                "kind": "color",
                "hex": color.to_hex_string(),
                "rgba": [color.r, color.g, color.b, color.a],
            }),
            None => json!({ "kind": "color", "error": "unsupported color space" }),
        },
        None => match parse_number_or_original(value) {
            CssNumber::Number(number) => json!({
                "kind": "number",
                "number": number,
                "unit": leading_number_unit(value).unwrap_or(""),
            }),
            CssNumber::Literal(text) => json!({ "kind": "text", "text": text }),
        },
    }
}

/// Print the human-readable summary of a classified value.
fn print_summary(kind: Option<ValueKind>, value: &str) {
    match kind {
        Some(kind) => println!("kind: {}", kind.green()),
        None => println!("kind: {}", "unrecognized".yellow()),
    }

    match kind {
        Some(ValueKind::LightDark) => match parse_light_dark(value) {
            Some(pair) => {
                println!("light: {}", pair.light);
                println!("dark:  {}", pair.dark);
                println!("css:   {}", pair.to_css());
            }
            None => println!("malformed light-dark() arguments"),
        },
        Some(ValueKind::CubicBezier) => {
            if let Some(curve) = parse_cubic_bezier(value) {
                println!("points: {:?}", curve.to_array());
                println!("css:    {}", curve.to_css());
            }
        }
        Some(ValueKind::Color) => match parse_color(value) {
            Some(color) => println!("hex: {}", color.to_hex_string()),
            None => println!("recognized color space, channels not decomposed"),
        },
        None => match parse_number_or_original(value) {
            CssNumber::Number(number) => {
                let unit = leading_number_unit(value).unwrap_or("");
                println!("number: {number} (unit: {unit:?})");
            }
            CssNumber::Literal(text) => println!("text: {text}"),
        },
    }
}

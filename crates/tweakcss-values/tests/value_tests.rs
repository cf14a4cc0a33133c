//! Integration tests for value classification, decomposition, and
//! reconstruction round-trips.

use tweakcss_values::{
    CubicBezier, LightDark, RawValue, ValueKind, classify, is_color_string,
    is_cubic_bezier_string, is_light_dark_value, parse_cubic_bezier, parse_light_dark,
};

/// Reconstructing a light-dark() pair and re-parsing it yields the trimmed
/// components back, for any components without a paren imbalance.
#[test]
fn test_light_dark_roundtrip() {
    let pairs = [
        ("white", "black"),
        ("#ffffff", "#1a1a1a"),
        ("oklch(100% 0 0deg)", "oklch(16.84% 0 0deg)"),
        ("color-mix(in srgb, red, blue)", "rgb(0, 0, 0)"),
        (" white ", "  black"),
        ("var(--fg, #fff)", "var(--fg-dark, #000)"),
    ];

    for (light, dark) in pairs {
        let rebuilt = LightDark {
            light: light.to_string(),
            dark: dark.to_string(),
        }
        .to_css();
        assert_eq!(
            parse_light_dark(&rebuilt),
            Some(LightDark {
                light: light.trim().to_string(),
                dark: dark.trim().to_string(),
            }),
            "round-trip failed for ({light}, {dark})"
        );
    }
}

/// Reconstructing a 4-tuple and re-parsing it yields numerically equal
/// coordinates, with no fixed precision imposed.
#[test]
fn test_cubic_bezier_roundtrip() {
    let curves = [
        [0.25, 0.1, 0.25, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.68, -0.55, 0.27, 1.55],
        [0.333_333_333_333_333_3, 0.5, 0.000_001, 100_000.0],
        [-0.0, 0.0, 1.0, 1.0],
    ];

    for coords in curves {
        let curve = CubicBezier::from(coords);
        assert_eq!(
            parse_cubic_bezier(&curve.to_css()),
            Some(curve),
            "round-trip failed for {curve}"
        );
    }
}

/// Spec'd nesting example from CSS Color 5: both arguments are oklch()
/// calls.
#[test]
fn test_light_dark_nested_functions() {
    assert_eq!(
        parse_light_dark("light-dark(oklch(100% 0 0deg), oklch(16.84% 0 0deg))"),
        Some(LightDark {
            light: "oklch(100% 0 0deg)".to_string(),
            dark: "oklch(16.84% 0 0deg)".to_string(),
        })
    );
}

/// Commas inside a nested function call are not argument separators.
#[test]
fn test_light_dark_nested_commas() {
    assert_eq!(
        parse_light_dark("light-dark(color-mix(in srgb, red, blue), black)"),
        Some(LightDark {
            light: "color-mix(in srgb, red, blue)".to_string(),
            dark: "black".to_string(),
        })
    );
}

#[test]
fn test_light_dark_negative_cases() {
    assert_eq!(parse_light_dark("not-light-dark(a, b)"), None);
    assert!(is_light_dark_value("  light-dark(a,b)  "));
    assert!(!is_light_dark_value("not-light-dark(a, b)"));
}

#[test]
fn test_cubic_bezier_classification() {
    assert_eq!(
        parse_cubic_bezier("cubic-bezier(0.25, 0.1, 0.25, 1)"),
        Some(CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0
        })
    );
    assert!(is_cubic_bezier_string(&RawValue::from(
        "cubic-bezier(0.25, 0.1, 0.25, 1)"
    )));
    assert!(!is_cubic_bezier_string(&RawValue::from(
        "cubic-bezier(0.25, 0.1, 0.25)"
    )));
}

/// Classify, decompose, reconstruct, re-decompose: the second decomposition
/// equals the first, for every value that classifies in the first place.
#[test]
fn test_classify_decompose_reconstruct_idempotence() {
    let values = [
        "light-dark(white, black)",
        "  light-dark( oklch(100% 0 0deg) , color-mix(in srgb, red, blue) )",
        "cubic-bezier(0.25, 0.1, 0.25, 1)",
        "cubic-bezier(0.68,-0.55,0.27,1.55)",
    ];

    for value in values {
        match classify(&RawValue::from(value)).expect("value should classify") {
            ValueKind::LightDark => {
                let first = parse_light_dark(value).expect("classified value should parse");
                let second = parse_light_dark(&first.to_css()).unwrap();
                assert_eq!(first, second, "idempotence failed for {value}");
            }
            ValueKind::CubicBezier => {
                let first = parse_cubic_bezier(value).expect("classified value should parse");
                let second = parse_cubic_bezier(&first.to_css()).unwrap();
                assert_eq!(first, second, "idempotence failed for {value}");
            }
            ValueKind::Color => panic!("unexpected color classification for {value}"),
        }
    }
}

#[test]
fn test_color_classification_over_raw_values() {
    assert!(is_color_string(&RawValue::from("#336699")));
    assert!(is_color_string(&RawValue::from("rgb(50, 100, 150)")));
    assert!(!is_color_string(&RawValue::from("1.5rem")));
    assert!(!is_color_string(&RawValue::Number(0.5)));
    assert!(!is_color_string(&RawValue::Bool(false)));
}

/// Whitespace-only and empty inputs fail every classification and
/// decomposition without panicking.
#[test]
fn test_degenerate_inputs() {
    for value in ["", "   ", "\t\n", "(", ")", ",", "light-dark", "cubic-bezier"] {
        assert_eq!(parse_light_dark(value), None);
        assert_eq!(parse_cubic_bezier(value), None);
        assert_eq!(classify(&RawValue::from(value)), None);
    }
}

//! Custom property name formatting.
//!
//! [CSS Custom Properties for Cascading Variables Module Level 1 § 2](https://www.w3.org/TR/css-variables-1/#defining-variables)
//!
//! "A custom property is any property whose name starts with two dashes
//! (U+002D HYPHEN-MINUS), like --foo."
//!
//! The panel displays custom property names as human-readable labels, and
//! groups them by a leading folder token. These helpers implement both
//! transformations.

/// [§ 2 Defining Custom Properties](https://www.w3.org/TR/css-variables-1/#defining-variables)
///
/// Turn a custom property name into a panel label: drop the first `--`
/// marker, replace every hyphen with a space, and title-case each
/// whitespace-delimited word (first letter uppercase, the rest lowercase).
///
/// Whitespace runs are preserved, so consecutive hyphens become consecutive
/// spaces rather than collapsing.
///
/// # Example
/// ```
/// use tweakcss_common::name::clean_name;
///
/// assert_eq!(clean_name("--my-variable-name"), "My Variable Name");
/// ```
#[must_use]
pub fn clean_name(name: &str) -> String {
    // Only the first `--` is the custom-property marker; any later
    // double-hyphen is part of the author's naming.
    let spaced = name.replacen("--", "", 1).replace('-', " ");

    let mut label = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            label.push(c);
        } else if at_word_start {
            label.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            label.extend(c.to_lowercase());
        }
    }
    label
}

/// Drop the leading folder token from a panel label.
///
/// Labels are grouped by their first space-delimited word (e.g.
/// `"Color Background Primary"` lives in the `Color` folder and displays as
/// `"Background Primary"`). Splitting is on single spaces so empty tokens
/// from double spaces survive, matching the label format produced by
/// [`clean_name`].
///
/// Returns an empty string when there is nothing after the first token.
#[must_use]
pub fn strip_prefix(name: &str) -> String {
    name.split(' ').skip(1).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_basic() {
        assert_eq!(clean_name("--my-variable-name"), "My Variable Name");
    }

    #[test]
    fn test_clean_name_no_marker() {
        // Names without the `--` marker still get hyphen replacement and
        // title-casing.
        assert_eq!(clean_name("font-size"), "Font Size");
    }

    #[test]
    fn test_clean_name_lowercases_rest() {
        assert_eq!(clean_name("--COLOR-BACKGROUND"), "Color Background");
    }

    #[test]
    fn test_clean_name_only_first_marker_removed() {
        // A second `--` is author naming; each hyphen becomes a space.
        assert_eq!(clean_name("--color--primary"), "Color  Primary");
    }

    #[test]
    fn test_clean_name_single_word() {
        assert_eq!(clean_name("--spacing"), "Spacing");
    }

    #[test]
    fn test_strip_prefix_basic() {
        assert_eq!(strip_prefix("Color Background Primary"), "Background Primary");
    }

    #[test]
    fn test_strip_prefix_single_token() {
        assert_eq!(strip_prefix("Spacing"), "");
    }

    #[test]
    fn test_strip_prefix_empty() {
        assert_eq!(strip_prefix(""), "");
    }
}

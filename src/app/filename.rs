//! Turns raw equation text into a filesystem-safe basename.
//!
//! The mapping is lossy on purpose: TeX markup carries far more structure
//! than a filename can, so this is a best-effort flattening, not an
//! escaping scheme.

use regex_lite::Regex;

/// Longest basename we will produce, in characters.
const MAX_BASENAME_LEN: usize = 80;

/// Name used when nothing survives sanitization.
pub const FALLBACK_BASENAME: &str = "equation";

/// Map raw equation text to a safe file basename.
///
/// `\command{content}` becomes `command_content`, whitespace becomes a
/// single underscore, and anything that is not `[A-Za-z0-9._-]` is
/// dropped. The result is capped at 80 characters and never starts or
/// ends with an underscore; fully unusable input yields
/// [`FALLBACK_BASENAME`].
pub fn sanitize(raw: &str) -> String {
    let text = raw.replace("\\displaystyle", "");

    let ws = Regex::new(r"\s+").unwrap();
    let mut text = ws.replace_all(&text, "_").into_owned();

    // \frac{a}{b} -> frac_a_b, applied until nested braces are gone
    let command = Regex::new(r"\\([A-Za-z]+)\{([^{}]*)\}").unwrap();
    loop {
        let replaced = command.replace_all(&text, "${1}_${2}").into_owned();
        if replaced == text {
            break;
        }
        text = replaced;
    }

    let mut name = String::with_capacity(text.len());
    let mut last_underscore = false;
    for c in text.chars() {
        let keep = match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' => Some(c),
            '_' => Some('_'),
            _ => None,
        };
        if let Some(c) = keep {
            if c == '_' {
                if last_underscore {
                    continue;
                }
                last_underscore = true;
            } else {
                last_underscore = false;
            }
            name.push(c);
        }
    }

    let name: String = name
        .trim_matches('_')
        .chars()
        .take(MAX_BASENAME_LEN)
        .collect();
    // Truncation can expose a new trailing underscore
    let name = name.trim_end_matches('_');

    if name.is_empty() {
        FALLBACK_BASENAME.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_expression() {
        assert_eq!(sanitize("E = mc^2"), "E_mc2");
    }

    #[test]
    fn test_command_with_content() {
        assert_eq!(sanitize(r"\sqrt{x}"), "sqrt_x");
    }

    #[test]
    fn test_nested_commands() {
        assert_eq!(sanitize(r"\frac{\pi}{2}"), "frac_pi_2");
    }

    #[test]
    fn test_displaystyle_stripped() {
        assert_eq!(sanitize(r"\displaystyle x + y"), "x_y");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(sanitize("a   b\n\nc\td"), "a_b_c_d");
    }

    #[test]
    fn test_only_illegal_characters() {
        assert_eq!(sanitize(r"$^{}|:;*?<>"), FALLBACK_BASENAME);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), FALLBACK_BASENAME);
        assert_eq!(sanitize("   \n  "), FALLBACK_BASENAME);
    }

    #[test]
    fn test_length_cap() {
        let long = "x + ".repeat(100);
        let name = sanitize(&long);
        assert!(name.chars().count() <= 80);
        assert!(!name.starts_with('_'));
        assert!(!name.ends_with('_'));
    }

    #[test]
    fn test_no_edge_underscores() {
        let name = sanitize("  = x =  ");
        assert!(!name.starts_with('_'));
        assert!(!name.ends_with('_'));
    }

    #[test]
    fn test_repeated_underscores_collapsed() {
        assert_eq!(sanitize("a = = b"), "a_b");
    }

    #[test]
    fn test_backslashes_removed() {
        assert_eq!(sanitize(r"\alpha + \beta"), "alpha_beta");
    }
}

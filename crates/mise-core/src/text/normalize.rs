//! Line normalization for pasted recipe text.
//!
//! Rules:
//! - convert CRLF and CR to LF
//! - remove a leading UTF-8 BOM
//! - trim every line
//! - drop lines that are empty after trimming
//!
//! Purely in-memory; identical logical text yields identical lines regardless
//! of the platform it was pasted from.

use std::sync::LazyLock;

use regex::Regex;

static LIST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•]\s*|\d+[.)](?:\s+|$))").expect("list prefix regex is valid"));

/// Split text into trimmed, non-empty lines.
pub fn normalize_lines(input: &str) -> Vec<String> {
    let s = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let s = s.replace("\r\n", "\n").replace('\r', "\n");

    s.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remove a leading bullet (`-`, `*`, `•`) or numbered marker (`1.`, `1)`)
/// and the whitespace after it, then trim.
///
/// A numbered marker must be followed by whitespace (or end the line) so
/// decimal quantities such as `1.5 cups` keep their leading digits.
pub fn strip_list_prefix(line: &str) -> String {
    LIST_PREFIX.replace(line, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unifies_line_endings_and_drops_blanks() {
        let lines = normalize_lines("a \r\n\r\n  b\rc\n\n");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn removes_bom() {
        assert_eq!(normalize_lines("\u{FEFF}Soup\n"), vec!["Soup"]);
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(normalize_lines(" \t\n \r\n ").is_empty());
    }

    #[test]
    fn strips_bullets_and_numbers() {
        assert_eq!(strip_list_prefix("- 2 cups flour"), "2 cups flour");
        assert_eq!(strip_list_prefix("* 2 cups flour"), "2 cups flour");
        assert_eq!(strip_list_prefix("• 2 cups flour"), "2 cups flour");
        assert_eq!(strip_list_prefix("1. 2 cups flour"), "2 cups flour");
        assert_eq!(strip_list_prefix("12) Bake"), "Bake");
    }

    #[test]
    fn strips_only_one_prefix() {
        assert_eq!(strip_list_prefix("- - nested"), "- nested");
    }

    #[test]
    fn keeps_decimal_quantities() {
        assert_eq!(strip_list_prefix("1.5 cups sugar"), "1.5 cups sugar");
        assert_eq!(strip_list_prefix("2. 1.5 cups sugar"), "1.5 cups sugar");
    }

    #[test]
    fn number_marker_needs_following_whitespace() {
        assert_eq!(strip_list_prefix("1.Mix dry"), "1.Mix dry");
        assert_eq!(strip_list_prefix("3)Bake"), "3)Bake");
        assert_eq!(strip_list_prefix("1.  Mix dry"), "Mix dry");
        assert_eq!(strip_list_prefix("4."), "");
        assert_eq!(strip_list_prefix("-Mix dry"), "Mix dry");
    }

    #[test]
    fn leaves_plain_lines_alone() {
        assert_eq!(strip_list_prefix("Mix well"), "Mix well");
        assert_eq!(strip_list_prefix("350F oven"), "350F oven");
        assert_eq!(strip_list_prefix("-"), "");
    }
}

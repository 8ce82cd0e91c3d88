//! Line classification rules used by the freeform parser.
//!
//! Everything here is a pure predicate over a single trimmed line. Patterns
//! are compiled once and shared process-wide.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::strip_list_prefix;

static INGREDIENTS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:ingredients?|ingredient list):?$").expect("ingredients header regex is valid")
});

static INSTRUCTIONS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:instructions?|directions?|method|steps?):?$")
        .expect("instructions header regex is valid")
});

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s").expect("numbered line regex is valid"));

/// Leading quantity: `1/2`, `1 1/2`, `1.5`, or an integer followed by a space.
static LEADING_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+/\d+|\d+\s+\d+/\d+|\d+\.\d+|\d+\s)").expect("quantity regex is valid")
});

static UNIT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:cup|tbsp|tsp|oz|lb|g|kg|ml|l|clove|pieces?|slices?|cans?|packages?)\b",
    )
    .expect("unit regex is valid")
});

/// A recognized section header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionHeader {
    Ingredients,
    Instructions,
}

/// Classify a trimmed line as a section header. The whole line must match.
pub fn classify_header(line: &str) -> Option<SectionHeader> {
    if INGREDIENTS_HEADER.is_match(line) {
        Some(SectionHeader::Ingredients)
    } else if INSTRUCTIONS_HEADER.is_match(line) {
        Some(SectionHeader::Instructions)
    } else {
        None
    }
}

/// True when the line looks like a numbered step (`1. `, `2) `).
pub fn is_numbered(line: &str) -> bool {
    NUMBERED_LINE.is_match(line)
}

/// Decide whether a line reads like an ingredient.
///
/// Numbered lines never qualify through a leading quantity (the number is a
/// step index), but can still qualify through a unit token. Bulleted lines
/// always qualify.
pub fn is_ingredient_like(line: &str) -> bool {
    let stripped = strip_list_prefix(line);
    if stripped.is_empty() {
        return false;
    }

    if !is_numbered(line)
        && (LEADING_QUANTITY.is_match(&stripped) || LEADING_QUANTITY.is_match(line))
    {
        return true;
    }

    if UNIT_TOKEN.is_match(line) || UNIT_TOKEN.is_match(&stripped) {
        return true;
    }

    line.starts_with(['-', '*', '•'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_variants() {
        for h in ["Ingredients", "ingredient:", "INGREDIENT LIST:", "Ingredients:"] {
            assert_eq!(classify_header(h), Some(SectionHeader::Ingredients), "{h}");
        }
        for h in ["Instructions:", "instruction", "Directions", "direction:", "Method", "Steps:", "step"] {
            assert_eq!(classify_header(h), Some(SectionHeader::Instructions), "{h}");
        }
    }

    #[test]
    fn header_must_match_whole_line() {
        assert_eq!(classify_header("Ingredients for the sauce:"), None);
        assert_eq!(classify_header("Follow these steps"), None);
        assert_eq!(classify_header("Ingredients::"), None);
    }

    #[test]
    fn quantities_qualify() {
        assert!(is_ingredient_like("1/2 onion"));
        assert!(is_ingredient_like("1 1/2 onions"));
        assert!(is_ingredient_like("2.5 pounds beef"));
        assert!(is_ingredient_like("3 eggs"));
    }

    #[test]
    fn units_qualify_anywhere() {
        assert!(is_ingredient_like("Flour, 1 cup"));
        assert!(is_ingredient_like("salt to taste (1 TSP)"));
        assert!(is_ingredient_like("garlic clove, minced"));
        assert!(is_ingredient_like("2 cans tomatoes"));
    }

    #[test]
    fn units_need_word_boundaries() {
        assert!(!is_ingredient_like("Golden brown"));
        assert!(!is_ingredient_like("Preheat the oven"));
    }

    #[test]
    fn bullets_qualify_numbers_do_not() {
        assert!(is_ingredient_like("- salt"));
        assert!(is_ingredient_like("• pepper"));
        assert!(!is_ingredient_like("1. Mix everything"));
        assert!(!is_ingredient_like("2) Stir"));
    }

    #[test]
    fn numbered_line_with_unit_still_qualifies() {
        assert!(is_ingredient_like("1. 2 tbsp butter"));
    }

    #[test]
    fn blank_after_stripping_is_not_an_ingredient() {
        assert!(!is_ingredient_like("-"));
        assert!(!is_ingredient_like("*"));
    }

    #[test]
    fn plain_prose_is_not_an_ingredient() {
        assert!(!is_ingredient_like("Mix everything"));
        assert!(!is_ingredient_like("Bake at 350F"));
    }
}

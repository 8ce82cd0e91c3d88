//! Freeform recipe text segmentation.
//!
//! Turns pasted text into a title, ingredient lines and instruction lines.
//! Decisions are made in a fixed order so the outcome is explainable:
//!
//! 1. explicit section headers (`Ingredients:`, `Method`, ...) win whenever
//!    one appears anywhere in the text
//! 2. otherwise the first few lines are scored for ingredient-likeness
//! 3. empty input falls back to an empty result with low confidence
//!
//! Parsing never fails and is safe to call on every keystroke.

use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::pipeline::classify::{classify_header, is_ingredient_like, SectionHeader};
use crate::text::{normalize_lines, strip_list_prefix};

/// How the parser arrived at its sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    ExplicitSections,
    Heuristic,
    Fallback,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExplicitSections => "explicit-sections",
            Self::Heuristic => "heuristic",
            Self::Fallback => "fallback",
        }
    }
}

/// Parser output. Built fresh per call and handed straight to the compiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub title: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub confidence: f64,
    pub mode: ParseMode,
}

impl ParseResult {
    fn fallback(cfg: &ParserConfig) -> Self {
        Self {
            title: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            confidence: cfg.fallback_confidence,
            mode: ParseMode::Fallback,
        }
    }
}

/// Last line index of each header kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HeaderScan {
    ingredients: Option<usize>,
    instructions: Option<usize>,
}

impl HeaderScan {
    fn run(lines: &[String]) -> Self {
        let mut scan = Self::default();
        for (idx, line) in lines.iter().enumerate() {
            match classify_header(line) {
                Some(SectionHeader::Ingredients) => scan.ingredients = Some(idx),
                Some(SectionHeader::Instructions) => scan.instructions = Some(idx),
                None => {}
            }
        }
        scan
    }

    fn any(&self) -> bool {
        self.ingredients.is_some() || self.instructions.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Ingredients,
    Instructions,
}

/// Parse with the default configuration.
pub fn parse_freeform(text: &str) -> ParseResult {
    parse_freeform_with(text, &ParserConfig::default())
}

/// Parse with explicit tuning.
pub fn parse_freeform_with(text: &str, cfg: &ParserConfig) -> ParseResult {
    let lines = normalize_lines(text);
    if lines.is_empty() {
        tracing::debug!(mode = ParseMode::Fallback.as_str(), "no content lines");
        return ParseResult::fallback(cfg);
    }

    let headers = HeaderScan::run(&lines);
    let result = if headers.any() {
        parse_explicit(&lines, headers, cfg)
    } else {
        parse_heuristic(&lines, cfg)
    };

    tracing::debug!(
        mode = result.mode.as_str(),
        confidence = result.confidence,
        lines = lines.len(),
        ingredients = result.ingredients.len(),
        instructions = result.instructions.len(),
        "parsed freeform text"
    );
    result
}

fn parse_explicit(lines: &[String], headers: HeaderScan, cfg: &ParserConfig) -> ParseResult {
    // Without an instructions header, the ingredient list ends at the first
    // line that stops looking like an ingredient.
    let implicit_boundary = headers.ingredients.is_some() && headers.instructions.is_none();

    let mut section = Section::Title;
    let mut titles: Vec<&str> = Vec::new();
    let mut ingredients = Vec::new();
    let mut instructions = Vec::new();

    for line in lines {
        match classify_header(line) {
            Some(SectionHeader::Ingredients) => {
                section = Section::Ingredients;
                continue;
            }
            Some(SectionHeader::Instructions) => {
                section = Section::Instructions;
                continue;
            }
            None => {}
        }

        if implicit_boundary
            && section == Section::Ingredients
            && !ingredients.is_empty()
            && !is_ingredient_like(line)
        {
            tracing::trace!(line = %line, "implicit switch to instructions");
            section = Section::Instructions;
        }

        match section {
            Section::Title => titles.push(line),
            Section::Ingredients => ingredients.push(strip_list_prefix(line)),
            Section::Instructions => instructions.push(strip_list_prefix(line)),
        }
    }

    ParseResult {
        title: titles.first().map(|t| t.to_string()),
        ingredients,
        instructions,
        confidence: cfg.explicit_confidence,
        mode: ParseMode::ExplicitSections,
    }
}

fn parse_heuristic(lines: &[String], cfg: &ParserConfig) -> ParseResult {
    let window = cfg.heuristic_window.min(lines.len());
    let score = lines[..window]
        .iter()
        .filter(|line| is_ingredient_like(line))
        .count();

    let mut ingredients = Vec::new();
    let mut instructions = Vec::new();

    if score >= cfg.min_ingredient_lines {
        let split = lines
            .iter()
            .position(|line| !is_ingredient_like(line))
            .unwrap_or(lines.len());
        ingredients.extend(lines[..split].iter().map(|l| strip_list_prefix(l)));
        instructions.extend(lines[split..].iter().map(|l| strip_list_prefix(l)));
    } else {
        instructions.extend(lines.iter().map(|l| strip_list_prefix(l)));
    }

    tracing::trace!(score, window, "heuristic ingredient score");

    // The first line doubles as the title and is still classified above.
    ParseResult {
        title: lines.first().cloned(),
        ingredients,
        instructions,
        confidence: cfg.heuristic_confidence,
        mode: ParseMode::Heuristic,
    }
}

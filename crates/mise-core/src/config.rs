//! Configuration structures for mise-core.
//!
//! The core crate itself does not read environment variables or files. All
//! tuning is passed explicitly by the caller; `Default` reproduces the
//! reference behavior of the freeform parser.

use serde::{Deserialize, Serialize};

use crate::errors::{MiseError, MiseResult};

/// Parser tuning knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    /// Confidence reported when at least one section header was found.
    pub explicit_confidence: f64,
    /// Confidence reported when sections were guessed from line shapes.
    pub heuristic_confidence: f64,
    /// Confidence reported for empty or whitespace-only input.
    pub fallback_confidence: f64,
    /// Number of leading lines inspected by the heuristic branch.
    pub heuristic_window: usize,
    /// Ingredient-like lines needed inside the window to treat the text as
    /// ingredient-first.
    pub min_ingredient_lines: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            explicit_confidence: 0.85,
            heuristic_confidence: 0.55,
            fallback_confidence: 0.1,
            heuristic_window: 5,
            min_ingredient_lines: 2,
        }
    }
}

/// Validate a parser configuration.
pub fn validate_config(cfg: &ParserConfig) -> MiseResult<()> {
    for (field, value) in [
        ("explicitConfidence", cfg.explicit_confidence),
        ("heuristicConfidence", cfg.heuristic_confidence),
        ("fallbackConfidence", cfg.fallback_confidence),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(MiseError::invalid_argument(format!(
                "{field} must be within [0, 1], got {value}"
            )));
        }
    }

    if cfg.heuristic_window == 0 {
        return Err(MiseError::invalid_argument(
            "heuristicWindow must be greater than zero",
        ));
    }

    if cfg.min_ingredient_lines > cfg.heuristic_window {
        return Err(MiseError::invalid_argument(
            "minIngredientLines must not exceed heuristicWindow",
        ));
    }

    Ok(())
}

//! Canonical recipe compilation.
//!
//! Every producer (the freeform parser, manual entry, the external AI
//! converter) funnels through [`compile_lite_recipe`], so downstream consumers
//! see one recipe shape regardless of origin.
//!
//! Contract:
//! - never fails; degenerate input yields placeholders
//! - name is trimmed, `"Untitled Recipe"` when blank
//! - description is trimmed and omitted when blank
//! - list entries are trimmed, blank entries dropped, an empty list becomes
//!   `["(not provided)"]`
//! - stacks are always empty; inference is not the compiler's job
//! - `x-mise` provenance only when `meta` was supplied

use serde_json::Value;

use crate::model::recipe::{Ingredient, Instruction, ParseProvenance, Provenance, Recipe};
use crate::pipeline::parse::ParseResult;
use crate::stacks::StacksMap;
use crate::version::{Profile, SCHEMA_URL};

pub const PLACEHOLDER_NAME: &str = "Untitled Recipe";
pub const PLACEHOLDER_ENTRY: &str = "(not provided)";
pub const UNKNOWN_MODE: &str = "unknown";

/// Loosely-filled compiler input. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub meta: Option<CompileMeta>,
}

/// Parse metadata; its presence alone turns on provenance output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileMeta {
    pub confidence: Option<f64>,
    pub mode: Option<String>,
}

impl CompileInput {
    /// Input for a freeform parse result, carrying its confidence and mode.
    pub fn from_parse(parsed: &ParseResult) -> Self {
        Self {
            name: parsed.title.clone(),
            description: None,
            ingredients: Some(parsed.ingredients.clone()),
            instructions: Some(parsed.instructions.clone()),
            meta: Some(CompileMeta {
                confidence: Some(parsed.confidence),
                mode: Some(parsed.mode.as_str().to_string()),
            }),
        }
    }

    /// Input for the AI converter's loosely-typed object
    /// `{name?, description?, servings?, ingredients?, instructions?}`.
    ///
    /// Strings and numbers inside the lists are kept, anything else is
    /// skipped. `servings` is not part of the lite profile and is ignored.
    /// A non-object value yields an empty input.
    pub fn from_loose_json(v: &Value) -> Self {
        let Some(obj) = v.as_object() else {
            tracing::debug!("loose recipe payload is not an object");
            return Self::default();
        };

        Self {
            name: obj.get("name").and_then(loose_string),
            description: obj.get("description").and_then(loose_string),
            ingredients: obj.get("ingredients").and_then(loose_list),
            instructions: obj.get("instructions").and_then(loose_list),
            meta: None,
        }
    }
}

fn loose_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn loose_list(v: &Value) -> Option<Vec<String>> {
    match v {
        Value::Array(items) => {
            let kept: Vec<String> = items.iter().filter_map(loose_string).collect();
            if kept.len() < items.len() {
                tracing::debug!(
                    skipped = items.len() - kept.len(),
                    "skipped non-text list entries"
                );
            }
            Some(kept)
        }
        // A single string is treated as a one-entry list.
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}

/// Compile input into an always-valid lite recipe.
pub fn compile_lite_recipe(input: CompileInput) -> Recipe {
    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER_NAME)
        .to_string();

    let description = input
        .description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let provenance = input.meta.map(|meta| Provenance {
        parse: ParseProvenance {
            confidence: meta.confidence.unwrap_or(0.0),
            mode: meta.mode.unwrap_or_else(|| UNKNOWN_MODE.to_string()),
        },
    });

    Recipe {
        schema_url: SCHEMA_URL.to_string(),
        profile: Profile::Lite,
        stacks: StacksMap::new(),
        name,
        description,
        ingredients: clean_entries(input.ingredients)
            .into_iter()
            .map(Ingredient::Text)
            .collect(),
        instructions: clean_entries(input.instructions)
            .into_iter()
            .map(Instruction::Text)
            .collect(),
        provenance,
    }
}

fn clean_entries(entries: Option<Vec<String>>) -> Vec<String> {
    let kept: Vec<String> = entries
        .unwrap_or_default()
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if kept.is_empty() {
        vec![PLACEHOLDER_ENTRY.to_string()]
    } else {
        kept
    }
}

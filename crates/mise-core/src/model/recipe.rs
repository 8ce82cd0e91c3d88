//! Canonical recipe artifact.
//!
//! Field names and presence rules here are the wire contract: absent optional
//! fields are omitted, never written as `null` or `""`.

use serde::{Deserialize, Serialize};

use crate::stacks::StacksMap;
use crate::version::Profile;

/// A recipe conforming to the soustack schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "$schema")]
    pub schema_url: String,
    pub profile: Profile,
    #[serde(default)]
    pub stacks: StacksMap,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    #[serde(rename = "x-mise", default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

/// Bookkeeping about how a recipe was derived from text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub parse: ParseProvenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseProvenance {
    pub confidence: f64,
    pub mode: String,
}

/// One ingredient entry.
///
/// On the wire: a bare string, an object with `items` (section) or an object
/// with `name` (structured). Variant order matters for decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    Text(String),
    Section {
        name: String,
        items: Vec<Ingredient>,
    },
    Structured(StructuredIngredient),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredIngredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_taste: Option<bool>,
}

impl Ingredient {
    /// Display label; sections yield their heading.
    pub fn label(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Section { name, .. } => name,
            Self::Structured(s) => &s.name,
        }
    }
}

/// One instruction entry. Same wire shape rules as [`Ingredient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instruction {
    Text(String),
    Section {
        name: String,
        items: Vec<Instruction>,
    },
    Structured {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
}

impl Instruction {
    pub fn label(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Section { name, .. } => name,
            Self::Structured { text, .. } => text,
        }
    }
}

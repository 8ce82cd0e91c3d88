//! Structural validation for recipes and documents that come from outside
//! the compiler (stored blobs, CLI input, collaborator payloads).
//!
//! Compiler output always passes. These checks do not judge content quality;
//! they enforce the shape downstream consumers rely on.

use crate::errors::{MiseError, MiseResult};
use crate::model::document::WorkbenchDoc;
use crate::model::recipe::{Ingredient, Instruction, Recipe};
use crate::stacks::validate_stacks;
use crate::version::require_schema_url;

/// Validate the invariants every canonical recipe holds:
/// - `$schema` is the canonical URL
/// - name is not blank
/// - ingredients and instructions are non-empty with no blank entries
///   (sections must contain items; nested entries are checked too)
/// - stacks are migrated registry keys
pub fn validate_recipe(recipe: &Recipe) -> MiseResult<()> {
    require_schema_url(&recipe.schema_url)?;

    if recipe.name.trim().is_empty() {
        return Err(MiseError::invariant("recipe.name must not be empty"));
    }

    if recipe.ingredients.is_empty() {
        return Err(MiseError::invariant(
            "recipe.ingredients must not be empty",
        ));
    }
    for (idx, item) in recipe.ingredients.iter().enumerate() {
        check_ingredient(item, &format!("recipe.ingredients[{idx}]"))?;
    }

    if recipe.instructions.is_empty() {
        return Err(MiseError::invariant(
            "recipe.instructions must not be empty",
        ));
    }
    for (idx, step) in recipe.instructions.iter().enumerate() {
        check_instruction(step, &format!("recipe.instructions[{idx}]"))?;
    }

    validate_stacks(&recipe.stacks)
}

/// Validate a document: its recipe plus the import bookkeeping.
pub fn validate_document(doc: &WorkbenchDoc) -> MiseResult<()> {
    validate_recipe(&doc.recipe)?;

    if let Some(last) = &doc.draft.last_import {
        if !(0.0..=1.0).contains(&last.confidence) {
            return Err(MiseError::invariant(format!(
                "draft.lastImport.confidence must be within [0, 1], got {}",
                last.confidence
            )));
        }
    }

    Ok(())
}

fn check_ingredient(item: &Ingredient, path: &str) -> MiseResult<()> {
    match item {
        Ingredient::Text(s) => require_text(s, path),
        Ingredient::Structured(s) => require_text(&s.name, &format!("{path}.name")),
        Ingredient::Section { name, items } => {
            require_text(name, &format!("{path}.name"))?;
            if items.is_empty() {
                return Err(MiseError::invariant(format!(
                    "{path}.items must not be empty"
                )));
            }
            for (idx, inner) in items.iter().enumerate() {
                check_ingredient(inner, &format!("{path}.items[{idx}]"))?;
            }
            Ok(())
        }
    }
}

fn check_instruction(step: &Instruction, path: &str) -> MiseResult<()> {
    match step {
        Instruction::Text(s) => require_text(s, path),
        Instruction::Structured { text, .. } => require_text(text, &format!("{path}.text")),
        Instruction::Section { name, items } => {
            require_text(name, &format!("{path}.name"))?;
            if items.is_empty() {
                return Err(MiseError::invariant(format!(
                    "{path}.items must not be empty"
                )));
            }
            for (idx, inner) in items.iter().enumerate() {
                check_instruction(inner, &format!("{path}.items[{idx}]"))?;
            }
            Ok(())
        }
    }
}

fn require_text(s: &str, path: &str) -> MiseResult<()> {
    if s.trim().is_empty() {
        Err(MiseError::invariant(format!("{path} must not be blank")))
    } else {
        Ok(())
    }
}

//! mise data models.
//!
//! - `recipe`: the canonical recipe artifact and its ingredient/instruction
//!   variants
//! - `document`: the workbench envelope persisted by the editor
//! - `validate`: structural checks for recipes and documents loaded from
//!   outside the compiler
//!
//! Models are mostly plain data. Policy (placeholders, trimming, stack
//! migration) lives in the pipeline and `stacks` modules.

pub mod document;
pub mod recipe;
pub mod validate;

pub use document::{
    now, DocMeta, Draft, DraftMode, Extensions, ImportSource, LastImport, Prose, ProseFormat,
    WorkbenchDoc,
};
pub use recipe::{
    Ingredient, Instruction, ParseProvenance, Provenance, Recipe, StructuredIngredient,
};
pub use validate::{validate_document, validate_recipe};

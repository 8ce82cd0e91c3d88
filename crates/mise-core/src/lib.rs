//! mise-core
//!
//! Core of the mise recipe workbench:
//! - freeform recipe text parsing (header detection, heuristics, fallback)
//! - compilation into an always-valid soustack "lite" recipe
//! - the stack registry and legacy stack-key migration
//! - the workbench document envelope and its validation
//!
//! Everything here is synchronous and pure: no I/O, no environment reads,
//! no shared mutable state. Timestamps come from an injected clock or
//! [`model::now`].

pub mod config;
pub mod errors;
pub mod model;
pub mod pipeline;
pub mod stacks;
pub mod text;
pub mod version;

pub use crate::errors::{MiseError, MiseResult};
pub use crate::version::{MEDIA_TYPE, SCHEMA_URL};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{validate_config, ParserConfig};
    pub use crate::model::{
        now, validate_document, validate_recipe, Ingredient, Instruction, Recipe, WorkbenchDoc,
    };
    pub use crate::pipeline::compile::{compile_lite_recipe, CompileInput, CompileMeta};
    pub use crate::pipeline::import::{import_compiled, import_freeform, import_loose_json};
    pub use crate::pipeline::parse::{parse_freeform, parse_freeform_with, ParseMode, ParseResult};
    pub use crate::pipeline::{text_to_recipe, Clock, PipelineContext};
    pub use crate::stacks::{
        disable, enable, is_enabled, migrate_versioned_keys, sanitize_stacks, StackKey, StacksMap,
    };
    pub use crate::version::Profile;
    pub use crate::{MiseError, MiseResult};
}

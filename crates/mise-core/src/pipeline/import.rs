//! Folding compiled recipes into a workbench document.
//!
//! These helpers implement the editor-side bookkeeping rule: every change to
//! the recipe or draft produces a new document with `revision + 1` and a fresh
//! `updatedAt`. The input document is never mutated.
//!
//! Text typed or pasted by the user goes through [`import_freeform`]. The AI
//! converter's loosely-typed payload goes through [`import_loose_json`]; both
//! land in [`import_compiled`].

use serde_json::Value;

use crate::errors::{MiseError, MiseResult};
use crate::model::document::{DraftMode, ImportSource, LastImport, WorkbenchDoc};
use crate::model::recipe::Recipe;
use crate::pipeline::compile::{compile_lite_recipe, CompileInput};
use crate::pipeline::{text_to_recipe, PipelineContext};

/// Mode recorded for recipes taken from the AI converter's payload.
pub const LOOSE_JSON_MODE: &str = "loose-json";

/// Confidence recorded for converter payloads.
pub const LOOSE_JSON_CONFIDENCE: f64 = 1.0;

/// Parse and compile `text`, then install the result into a copy of `doc`.
///
/// The draft switches to raw mode with `text` as its content and
/// `lastImport` records the parse outcome. Only local sources are accepted;
/// AI output must come through [`import_loose_json`].
pub fn import_freeform(
    doc: &WorkbenchDoc,
    text: &str,
    source: ImportSource,
    ctx: &mut PipelineContext,
) -> MiseResult<WorkbenchDoc> {
    if source == ImportSource::Ai {
        return Err(MiseError::invalid_argument(
            "AI output is imported from its JSON payload, not parsed as text",
        ));
    }

    let (parsed, recipe) = text_to_recipe(text, ctx);

    let mut next = import_compiled(
        doc,
        recipe,
        source,
        parsed.confidence,
        parsed.mode.as_str(),
        ctx,
    );
    next.draft.mode = DraftMode::Raw;
    next.draft.raw_text = text.to_string();
    Ok(next)
}

/// Canonicalize the AI converter's payload and install it into a copy of
/// `doc`. The draft text is left as it was.
pub fn import_loose_json(
    doc: &WorkbenchDoc,
    payload: &Value,
    ctx: &PipelineContext,
) -> WorkbenchDoc {
    let recipe = compile_lite_recipe(CompileInput::from_loose_json(payload));
    import_compiled(
        doc,
        recipe,
        ImportSource::Ai,
        LOOSE_JSON_CONFIDENCE,
        LOOSE_JSON_MODE,
        ctx,
    )
}

/// Install an already compiled recipe, recording where it came from.
///
/// The draft switches to structured mode; callers that keep raw text
/// override it afterwards.
pub fn import_compiled(
    doc: &WorkbenchDoc,
    recipe: Recipe,
    source: ImportSource,
    confidence: f64,
    mode: &str,
    ctx: &PipelineContext,
) -> WorkbenchDoc {
    let mut next = revise(doc, recipe, ctx);
    next.draft.mode = DraftMode::Structured;
    next.draft.last_import = Some(LastImport {
        source,
        confidence,
        mode: mode.to_string(),
        at: ctx.clock.now_rfc3339.clone(),
    });

    tracing::debug!(
        revision = next.meta.revision,
        source = source.as_str(),
        mode,
        "imported recipe"
    );
    next
}

/// Replace the recipe of a copy of `doc`, bumping revision metadata.
pub fn revise(doc: &WorkbenchDoc, recipe: Recipe, ctx: &PipelineContext) -> WorkbenchDoc {
    let mut next = doc.clone();
    next.recipe = recipe;
    next.meta.revision = doc.meta.revision.saturating_add(1);
    next.meta.updated_at = ctx.clock.now_rfc3339.clone();
    next
}

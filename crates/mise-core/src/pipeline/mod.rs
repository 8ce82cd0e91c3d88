//! Text → recipe pipeline.
//!
//! Stages:
//! - `parse`: freeform text segmentation (title / ingredients / instructions)
//! - `compile`: canonicalization into an always-valid lite recipe
//! - `import`: folding a compiled recipe into a workbench document
//!
//! `classify` holds the line predicates `parse` relies on.
//!
//! Every stage is a pure function. Anything that would otherwise read ambient
//! state (the clock, tuning knobs) comes from `PipelineContext`, and the
//! context collects diagnostics describing what the pipeline decided.

use std::collections::BTreeMap;

use crate::config::ParserConfig;
use crate::model::document::now;
use crate::model::recipe::{Ingredient, Instruction, Recipe};

pub mod classify;
pub mod compile;
pub mod import;
pub mod parse;

use compile::{compile_lite_recipe, CompileInput, PLACEHOLDER_ENTRY};
use parse::{parse_freeform_with, ParseResult};

/// A structured diagnostic emitted while running the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineDiagnostic {
    pub level: DiagnosticLevel,
    pub code: String,
    pub message: String,
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

/// Clock value injected by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    /// RFC 3339 timestamp.
    pub now_rfc3339: String,
}

impl Clock {
    pub fn fixed(ts: impl Into<String>) -> Self {
        Self {
            now_rfc3339: ts.into(),
        }
    }

    pub fn system() -> Self {
        Self::fixed(now())
    }
}

/// Shared state for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub clock: Clock,
    pub parser: ParserConfig,
    pub diagnostics: Vec<PipelineDiagnostic>,
}

impl PipelineContext {
    pub fn new(clock: Clock, parser: ParserConfig) -> Self {
        Self {
            clock,
            parser,
            diagnostics: Vec::new(),
        }
    }

    pub fn push_info(
        &mut self,
        code: impl Into<String>,
        message: impl Into<String>,
        data: BTreeMap<String, String>,
    ) {
        self.diagnostics.push(PipelineDiagnostic {
            level: DiagnosticLevel::Info,
            code: code.into(),
            message: message.into(),
            data,
        });
    }

    pub fn push_warning(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(PipelineDiagnostic {
            level: DiagnosticLevel::Warning,
            code: code.into(),
            message: message.into(),
            data: BTreeMap::new(),
        });
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warning)
            .count()
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::new(Clock::system(), ParserConfig::default())
    }
}

/// Parse freeform text and compile it, recording the parse decision.
pub fn text_to_recipe(text: &str, ctx: &mut PipelineContext) -> (ParseResult, Recipe) {
    let parsed = parse_freeform_with(text, &ctx.parser);

    let mut data = BTreeMap::new();
    data.insert("mode".to_string(), parsed.mode.as_str().to_string());
    data.insert("confidence".to_string(), parsed.confidence.to_string());
    data.insert("ingredients".to_string(), parsed.ingredients.len().to_string());
    data.insert("instructions".to_string(), parsed.instructions.len().to_string());
    ctx.push_info("parse.decided", "freeform text segmented", data);

    let recipe = compile_lite_recipe(CompileInput::from_parse(&parsed));

    if is_placeholder(recipe.ingredients.iter().map(Ingredient::label)) {
        ctx.push_warning("compile.placeholder.ingredients", "no ingredients recognized");
    }
    if is_placeholder(recipe.instructions.iter().map(Instruction::label)) {
        ctx.push_warning("compile.placeholder.instructions", "no instructions recognized");
    }

    (parsed, recipe)
}

fn is_placeholder<'a>(mut labels: impl Iterator<Item = &'a str>) -> bool {
    labels.next() == Some(PLACEHOLDER_ENTRY) && labels.next().is_none()
}

use anyhow::{Context, Result};

use mise_core::config::ParserConfig;
use mise_core::model::{ImportSource, WorkbenchDoc};
use mise_core::pipeline::import::{import_freeform, import_loose_json};
use mise_core::pipeline::{Clock, PipelineContext};

use crate::io::{export, input};
use crate::output;

pub fn new() -> Result<()> {
    output::print(&WorkbenchDoc::create_empty())
}

pub fn import(
    input_arg: Option<&str>,
    doc_path: Option<&str>,
    source: ImportSource,
    max_bytes: usize,
    parser: &ParserConfig,
    out: Option<&str>,
) -> Result<()> {
    let doc = match doc_path {
        Some(path) => {
            let raw = input::read_text(Some(path), max_bytes)?;
            WorkbenchDoc::from_json_slice(raw.as_bytes())
                .with_context(|| format!("failed to load document {path}"))?
        }
        None => WorkbenchDoc::create_empty(),
    };

    let mut ctx = PipelineContext::new(Clock::system(), parser.clone());
    let next = match source {
        ImportSource::Ai => {
            let payload = input::read_json(input_arg, max_bytes)?;
            import_loose_json(&doc, &payload, &ctx)
        }
        ImportSource::Freeform | ImportSource::Manual => {
            let text = input::read_text(input_arg, max_bytes)?;
            import_freeform(&doc, &text, source, &mut ctx)?
        }
    };

    export::emit(&next, out)
}

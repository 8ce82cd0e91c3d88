use anyhow::Result;

use mise_core::config::ParserConfig;
use mise_core::pipeline::compile::{compile_lite_recipe, CompileInput};
use mise_core::pipeline::{text_to_recipe, Clock, PipelineContext};

use crate::io::{export, input};

pub fn run(
    input_arg: Option<&str>,
    max_bytes: usize,
    parser: &ParserConfig,
    loose_json: bool,
    out: Option<&str>,
) -> Result<()> {
    let recipe = if loose_json {
        let v = input::read_json(input_arg, max_bytes)?;
        compile_lite_recipe(CompileInput::from_loose_json(&v))
    } else {
        let text = input::read_text(input_arg, max_bytes)?;
        let mut ctx = PipelineContext::new(Clock::system(), parser.clone());
        let (_, recipe) = text_to_recipe(&text, &mut ctx);
        for d in &ctx.diagnostics {
            tracing::debug!(code = %d.code, level = ?d.level, data = ?d.data, "{}", d.message);
        }
        if ctx.warnings() > 0 {
            tracing::warn!(
                count = ctx.warnings(),
                "recipe sections filled with placeholders"
            );
        }
        recipe
    };

    export::emit(&recipe, out)
}

use anyhow::Result;

use mise_core::config::ParserConfig;
use mise_core::pipeline::parse::parse_freeform_with;

use crate::io::input;
use crate::output;

pub fn run(input_arg: Option<&str>, max_bytes: usize, parser: &ParserConfig) -> Result<()> {
    let text = input::read_text(input_arg, max_bytes)?;
    let parsed = parse_freeform_with(&text, parser);
    output::print(&parsed)
}

use anyhow::{Context, Result};

use mise_core::config::{validate_config, ParserConfig};

use crate::args::{Cli, Command, SourceArg, StacksCommand};
use crate::io::input;

mod compile;
mod document;
mod parse;
mod stacks;
mod validate;

pub fn dispatch(cli: Cli) -> Result<()> {
    let parser = load_parser_config(cli.parser_config.as_deref(), cli.max_bytes)?;
    let max = cli.max_bytes;

    match cli.command {
        Command::Parse { input } => parse::run(input.as_deref(), max, &parser),
        Command::Compile { input, loose_json, out } => {
            compile::run(input.as_deref(), max, &parser, loose_json, out.as_deref())
        }
        Command::New => document::new(),
        Command::Import {
            input,
            doc,
            source,
            loose_json,
            out,
        } => {
            let source = if loose_json { SourceArg::Ai } else { source };
            document::import(
                input.as_deref(),
                doc.as_deref(),
                source.into(),
                max,
                &parser,
                out.as_deref(),
            )
        }
        Command::Validate { input, document } => validate::run(input.as_deref(), max, document),
        Command::Stacks { command } => match command {
            StacksCommand::List => stacks::list(),
            StacksCommand::Migrate { input } => stacks::migrate(input.as_deref(), max),
        },
    }
}

fn load_parser_config(path: Option<&str>, max_bytes: usize) -> Result<ParserConfig> {
    let Some(path) = path else {
        return Ok(ParserConfig::default());
    };

    let v = input::read_json(Some(path), max_bytes)?;
    let cfg: ParserConfig =
        serde_json::from_value(v).with_context(|| format!("invalid parser config {path}"))?;
    validate_config(&cfg).with_context(|| format!("invalid parser config {path}"))?;
    tracing::debug!(?cfg, "loaded parser config");
    Ok(cfg)
}

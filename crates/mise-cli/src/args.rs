use clap::{Parser, Subcommand, ValueEnum};

use mise_core::model::ImportSource;

/// Default input size limit (1 MiB).
pub const DEFAULT_MAX_BYTES: usize = 1024 * 1024;

#[derive(Parser, Debug, Clone)]
#[command(name = "mise", version, about = "Freeform recipe text to canonical recipe JSON")]
pub struct Cli {
    /// Emit single-line JSON instead of pretty-printed JSON.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Maximum accepted input size in bytes.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_BYTES)]
    pub max_bytes: usize,

    /// Parser tuning as a JSON file (missing fields keep their defaults).
    #[arg(long, global = true)]
    pub parser_config: Option<String>,

    /// Log pipeline decisions to stderr (overridden by MISE_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Segment freeform recipe text into title, ingredients and instructions.
    Parse {
        /// Input file; stdin when absent or `-`.
        input: Option<String>,
    },

    /// Compile text (or AI-style JSON) into a canonical recipe.
    Compile {
        /// Input file; stdin when absent or `-`.
        input: Option<String>,

        /// Treat input as a loosely-typed JSON object
        /// `{name, description, servings, ingredients, instructions}`.
        #[arg(long)]
        loose_json: bool,

        /// Write the recipe to this file instead of stdout.
        #[arg(long)]
        out: Option<String>,
    },

    /// Print an empty workbench document.
    New,

    /// Import text into a workbench document (new, or loaded with --doc).
    Import {
        /// Input file; stdin when absent or `-`.
        input: Option<String>,

        /// Existing document to import into.
        #[arg(long)]
        doc: Option<String>,

        /// Recorded origin of the input. `ai` reads the converter's JSON
        /// payload instead of parsing text.
        #[arg(long, value_enum, default_value_t = SourceArg::Freeform)]
        source: SourceArg,

        /// Treat input as the AI converter's JSON payload (same as `--source ai`).
        #[arg(long)]
        loose_json: bool,

        /// Write the document to this file instead of stdout.
        #[arg(long)]
        out: Option<String>,
    },

    /// Validate a recipe (or, with --document, a workbench document).
    Validate {
        /// Input file; stdin when absent or `-`.
        input: Option<String>,

        #[arg(long)]
        document: bool,
    },

    /// Stack registry utilities.
    Stacks {
        #[command(subcommand)]
        command: StacksCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum StacksCommand {
    /// List recognized stack keys.
    List,

    /// Migrate legacy versioned keys in a JSON stacks map.
    Migrate {
        /// Input file; stdin when absent or `-`.
        input: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArg {
    Freeform,
    Ai,
    Manual,
}

impl From<SourceArg> for ImportSource {
    fn from(s: SourceArg) -> Self {
        match s {
            SourceArg::Freeform => ImportSource::Freeform,
            SourceArg::Ai => ImportSource::Ai,
            SourceArg::Manual => ImportSource::Manual,
        }
    }
}

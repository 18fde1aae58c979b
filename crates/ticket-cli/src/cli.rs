//! CLI argument definitions for the ticket normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ticket_model::EntityClass;

#[derive(Parser)]
#[command(
    name = "ticket-normalizer",
    version,
    about = "Normalize company names, support categories and subject templates",
    long_about = "Map noisy labels extracted from support tickets onto canonical forms.\n\n\
                  Close variants are mapped automatically, borderline ones are queued\n\
                  for review and everything else becomes a new canonical entity.\n\
                  Mapping tables are kept as JSON files, one per entity class."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub normalizer: NormalizerArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Options shared by every command. Flags override the config file.
#[derive(Args, Debug, Default)]
pub struct NormalizerArgs {
    /// TOML config file.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the mapping files.
    #[arg(long = "mappings-dir", value_name = "DIR", global = true)]
    pub mappings_dir: Option<PathBuf>,

    /// Minimum score for automatic mapping.
    #[arg(long = "auto-threshold", value_name = "SCORE", global = true)]
    pub auto_threshold: Option<f64>,

    /// Minimum score for a review suggestion.
    #[arg(long = "suggest-threshold", value_name = "SCORE", global = true)]
    pub suggest_threshold: Option<f64>,

    /// Do not merge the built-in vocabularies into the standardized sets.
    #[arg(long = "no-seed", global = true)]
    pub no_seed: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize values given on the command line.
    Normalize(NormalizeArgs),

    /// Normalize the labelled fields of a JSON file of ticket records.
    Ingest(IngestArgs),

    /// Show the mapping table and standardized entities.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Entity class of the values.
    #[arg(long = "class", value_enum)]
    pub class: ClassArg,

    /// Raw values to normalize.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Skip the plausibility check and resolve every value.
    #[arg(long = "unchecked")]
    pub unchecked: bool,

    /// Review queued suggestions interactively before saving.
    #[arg(long = "review")]
    pub review: bool,

    /// Resolve without saving the mapping files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print resolutions as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct IngestArgs {
    /// JSON file holding an array of records, a single record, or an object
    /// with arrays of records.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Where to write the normalized document (default: overwrite FILE).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Review queued suggestions interactively before saving.
    #[arg(long = "review")]
    pub review: bool,

    /// Normalize and report without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Limit output to one entity class.
    #[arg(long = "class", value_enum)]
    pub class: Option<ClassArg>,

    /// Print as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ClassArg {
    Company,
    Category,
    Template,
}

impl From<ClassArg> for EntityClass {
    fn from(value: ClassArg) -> Self {
        match value {
            ClassArg::Company => EntityClass::Company,
            ClassArg::Category => EntityClass::Category,
            ClassArg::Template => EntityClass::Template,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

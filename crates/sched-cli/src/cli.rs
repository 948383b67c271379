//! CLI argument definitions for the schedule ingester.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sched",
    version,
    about = "Normalize raw schedule feeds into rooms, teachers, subjects and lessons",
    long_about = "Normalize an already-fetched schedule feed into a relational model.\n\n\
                  Reads raw entries from a JSON or CSV file, deduplicates rooms, teachers\n\
                  and subjects, and materializes one lesson per entry."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a feed file into a fresh store and print the summary.
    Ingest(IngestArgs),

    /// Show how each raw entry classifies, without ingesting anything.
    Entries(EntriesArgs),
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Feed file with raw entries (.json or .csv).
    #[arg(value_name = "FEED")]
    pub feed: PathBuf,

    /// JSON seed file with the course, semester and study groups.
    ///
    /// Defaults to a placeholder course and semester with groups M3201..M3212.
    #[arg(long = "seed", value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Semester the generated semester subjects belong to
    /// (default: the seed's semester).
    #[arg(long = "semester", value_name = "NAME")]
    pub semester: Option<String>,

    /// Stop each reference pass at the first entry whose entity already exists.
    ///
    /// Reproduces the historical importer. Later entries usually fail to
    /// resolve during lesson materialization.
    #[arg(long = "stop-on-duplicate")]
    pub stop_on_duplicate: bool,

    /// Skip entries that fail to resolve instead of aborting.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Write the normalized entities to this JSON file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct EntriesArgs {
    /// Feed file with raw entries (.json or .csv).
    #[arg(value_name = "FEED")]
    pub feed: PathBuf,

    /// Only list entries with at least one classification error.
    #[arg(long = "errors-only")]
    pub errors_only: bool,
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

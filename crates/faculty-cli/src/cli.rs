//! CLI argument definitions for the faculty resolver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "faculty-resolve",
    version,
    about = "Resolve scraped presenter names to canonical faculty records",
    long_about = "Resolve scraped presenter names to canonical faculty records.\n\n\
                  Normalizes accents, hyphenation, titles and name order, then scores\n\
                  each mention against the roster with tiered confidence."
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
    /// Resolve a list of presenter mentions against a faculty roster.
    Resolve(ResolveArgs),

    /// Print the normalized form and variants of one or more names.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Faculty roster: a JSON array of identities or `{"faculty": [...]}`.
    #[arg(long = "roster", value_name = "FILE")]
    pub roster: PathBuf,

    /// Presenter mentions: a JSON array of strings or one mention per line.
    #[arg(long = "mentions", value_name = "FILE")]
    pub mentions: PathBuf,

    /// Matcher configuration JSON (defaults apply to missing fields).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra manual overrides: a JSON array of `{normalizedKey, facultyId}`.
    #[arg(long = "overrides", value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Acceptance threshold (overrides the config file).
    #[arg(long = "threshold", value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Built-in settings used when no config file is given.
    #[arg(long = "preset", value_enum, default_value = "default")]
    pub preset: PresetArg,

    /// Write match results to this file instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the resolution report JSON to this file.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Split mentions naming several presenters ("A & B") before resolving.
    #[arg(long = "split-multiple")]
    pub split_multiple: bool,

    /// Resolve placeholder mentions such as "Workshop Team" instead of
    /// skipping them.
    #[arg(long = "keep-placeholders")]
    pub keep_placeholders: bool,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Names to normalize.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Matcher configuration JSON for honorifics and fallback letters.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Built-in matcher presets.
#[derive(Clone, Copy, ValueEnum)]
pub enum PresetArg {
    Default,
    Strict,
    Relaxed,
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

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sidecar",
    version,
    about = "Metadata sidecars for data files and spell-checker dictionaries from dependencies",
    long_about = "Describe CSV and JSON data files in `<name>_metadata.json` sidecars,\n\
                  and harvest public names from a project's dependencies into an\n\
                  editor spell-checker word list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: ./sidecar.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
    /// Write a metadata sidecar for a CSV file.
    Csv(FileArgs),

    /// Write a metadata sidecar for a JSON array-of-objects file.
    Json(FileArgs),

    /// Write sidecars for several files or every data file in folders.
    Metadata(MetadataArgs),

    /// Extract dependency terms into a spell-checker dictionary.
    Terms(TermsArgs),
}

#[derive(Parser)]
pub struct FileArgs {
    /// Data file to describe.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the sidecar into this existing directory instead of next to FILE.
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Print the metadata to stdout instead of writing a sidecar.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Parser)]
pub struct MetadataArgs {
    /// Data files (.csv, .json) or folders containing them.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Write sidecars into this existing directory instead of next to each file.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TermsArgs {
    /// Project manifest (default: pyproject.toml).
    #[arg(long = "manifest", value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Word list to write (default: .vscode/dictionaries/data-science-en.txt).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory of `<library>.json` symbol catalogs.
    #[arg(long = "catalog-dir", value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Directory searched for `<library>-<version>` source trees. Repeatable.
    ///
    /// Defaults to the Cargo registry source cache.
    #[arg(long = "source-root", value_name = "DIR")]
    pub source_roots: Vec<PathBuf>,
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

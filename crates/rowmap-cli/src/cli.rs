//! CLI argument definitions for rowmap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rowmap",
    version,
    about = "Translate flat records between external and internal shapes",
    long_about = "Translate flat records between an external representation\n\
                  (arbitrary keys, loosely typed values) and an internal one\n\
                  (declared field names and semantic types), driven by a\n\
                  static JSON mapping file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Decode external records into the internal shape.
    Decode(DecodeArgs),

    /// Encode internal records back into the external shape.
    Encode(EncodeArgs),

    /// Show a mapping file as a table.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Path to the JSON mapping file (a list of field descriptors).
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: PathBuf,

    /// Input file with external records (default: stdin).
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: InputFormatArg,

    /// Accept only real booleans and "true"/"false" strings instead of the
    /// lossy truthiness rule.
    #[arg(long = "strict-booleans")]
    pub strict_booleans: bool,

    /// Fail when a mapped external key is absent instead of producing a
    /// null field.
    #[arg(long = "fail-on-missing")]
    pub fail_on_missing: bool,
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Path to the JSON mapping file (a list of field descriptors).
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: PathBuf,

    /// Input file with internal records as JSON Lines (default: stdin).
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the JSON mapping file (a list of field descriptors).
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: PathBuf,
}

/// Record input format for decode.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    /// One JSON object per line.
    Json,
    /// CSV with a header row of external keys.
    Csv,
}

/// Explicit log level values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Log format values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn decode_flags_parse() {
        let cli = Cli::try_parse_from([
            "rowmap",
            "decode",
            "--mapping",
            "fields.json",
            "--format",
            "csv",
            "--strict-booleans",
        ])
        .expect("valid args");
        let Command::Decode(args) = cli.command else {
            panic!("expected decode command");
        };
        assert!(args.strict_booleans);
        assert!(!args.fail_on_missing);
        assert!(matches!(args.format, InputFormatArg::Csv));
    }
}

//! CLI argument definitions for the IJE transcoder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ije",
    version,
    about = "IJE mortality transcoder - Convert between IJE fixed-width lines and JSON death records",
    long_about = "Convert between NCHS IJE mortality records (5000-character fixed-width lines)\n\
                  and structured death records in JSON.\n\n\
                  Geographic codes are resolved against built-in reference data\n\
                  unless --geo-data points at a JSON reference table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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

    /// Include record values in log output.
    ///
    /// Death records carry personal data; values are redacted from logs
    /// unless this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// JSON geographic reference table (states, countries, counties, places).
    #[arg(long = "geo-data", value_name = "PATH", global = true)]
    pub geo_data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode IJE lines into JSON death records.
    Decode(DecodeArgs),

    /// Encode JSON death records into IJE lines.
    Encode(EncodeArgs),

    /// Print a summary table of decoded IJE records.
    Inspect(InspectArgs),

    /// List the IJE field layout.
    Fields(FieldsArgs),

    /// Decode and re-encode IJE lines, reporting fields that change.
    Roundtrip(RoundtripArgs),
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// File with one IJE record per line.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write JSON here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// JSON file holding one death record or an array of records.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write IJE lines here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// File with one IJE record per line.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Show only the field with this key (e.g. DSTATE).
    #[arg(long = "key", value_name = "KEY")]
    pub key: Option<String>,
}

#[derive(Parser)]
pub struct RoundtripArgs {
    /// File with one IJE record per line.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
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

//! IJE mortality transcoder CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use ije_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    build_codec, run_decode, run_encode, run_fields, run_inspect, run_roundtrip,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let codec = build_codec(cli.geo_data.as_deref())?;
    match &cli.command {
        Command::Decode(args) => run_decode(&codec, args)?,
        Command::Encode(args) => run_encode(&codec, args)?,
        Command::Inspect(args) => run_inspect(&codec, args)?,
        Command::Fields(args) => run_fields(&codec, args)?,
        Command::Roundtrip(args) => {
            let changed = run_roundtrip(&codec, args)?;
            return Ok(i32::from(changed));
        }
    }
    Ok(0)
}

/// Logging options from the global flags. `--log-level` wins over `-v`/`-q`,
/// and either one disables the `RUST_LOG` override.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level,
        env_override: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        format,
        ansi,
        file: cli.log_file.clone(),
        log_data: cli.log_data,
    }
}

//! Orders checker CLI.

use clap::{ColorChoice, Parser};
use orders_cli::check::{CheckOptions, run_check};
use orders_cli::logging::{LogConfig, LogFormat, init_logging};
use orders_cli::summary::print_profile;
use orders_stats::NullPolicy;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = CheckOptions {
        path: cli.file.clone(),
        column: cli.column.clone(),
        null_policy: if cli.include_nulls {
            NullPolicy::Include
        } else {
            NullPolicy::Exclude
        },
        profile_top: cli.summary.then_some(cli.top),
    };
    let exit_code = match run_check(&options) {
        Ok(result) => {
            println!("{}", result.report);
            if let Some(profile) = &result.profile {
                println!();
                print_profile(profile, stdout_styled(&cli));
            }
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn stdout_styled(cli: &Cli) -> bool {
    match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

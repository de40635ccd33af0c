//! Command-line runner for the practice exercises
//!
//! ## Module Organization
//!
//! - `cli`: argument definitions
//! - `commands/`: subcommand handlers (thin wrappers over the library crates)
//! - `config/`: configuration loading
//! - `types/`: error types

pub mod cli;
pub mod commands;
pub mod config;
pub mod types;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};

use cli::{App, Commands};
use types::error::Result;

/// Parse arguments, run the requested command and map the outcome to an exit code
pub fn run() -> ExitCode {
    let app = App::parse();

    match execute(&app, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run `app` against an already-parsed command line, writing results to `out`
pub fn execute<W: Write>(app: &App, out: &mut W) -> Result<()> {
    let config = match &app.config {
        // An explicitly requested file has to load
        Some(path) => config::init_config_from_path(path)?,
        None => match config::init_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not load config, using defaults: {}", e);
                config::reset_config()?
            }
        },
    };

    match &app.cmd {
        Commands::UniqueEmails(arg) => {
            commands::unique_emails(arg, &config.normalization, config.output.format, out)
        }
        Commands::DifferenceOfSums(arg) => {
            commands::difference_of_sums(arg, config.output.format, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn run_with(args: &[&str]) -> Result<String> {
        let app = App::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        execute(&app, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test_log::test]
    fn test_execute_with_explicit_config() {
        let mut config = tempfile::NamedTempFile::new().unwrap();
        writeln!(config, "[output]\nformat = \"json\"").unwrap();
        let path = config.path().to_string_lossy().into_owned();

        let output = run_with(&["practice", "--config", path.as_str(), "difference-of-sums", "10", "3"]).unwrap();
        assert_eq!(output, "{\"n\":10,\"m\":3,\"difference\":19}\n");

        let output = run_with(&[
            "practice",
            "--config",
            path.as_str(),
            "difference-of-sums",
            "10",
            "3",
            "--format",
            "text",
        ])
        .unwrap();
        assert_eq!(output, "19\n");
    }

    #[test_log::test]
    fn test_execute_rejects_broken_explicit_config() {
        let mut config = tempfile::NamedTempFile::new().unwrap();
        writeln!(config, "[normalization]\nstrip_dots = \"yes\"").unwrap();
        let path = config.path().to_string_lossy().into_owned();

        let err = run_with(&["practice", "--config", path.as_str(), "ds", "1", "2"]).unwrap_err();
        assert!(matches!(err, types::error::PracticeError::Config(_)));
    }
}

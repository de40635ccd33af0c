use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{DifferenceOfSumsArg, UniqueEmailsArg};

#[derive(Debug, Parser)]
#[command(name = "practice", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "ue", name = "unique-emails", about = "Count distinct effective email addresses")]
    UniqueEmails(UniqueEmailsArg),
    #[command(alias = "ds", name = "difference-of-sums", about = "Non-divisible sum minus divisible sum of 1..=N")]
    DifferenceOfSums(DifferenceOfSumsArg),
}

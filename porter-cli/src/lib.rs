//! Porter CLI library
//!
//! This library provides the command-line interface for the Porter
//! stemmer.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Porter stemming from the command line
#[derive(Debug, Parser)]
#[command(name = "porter", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: commands::Commands,
}

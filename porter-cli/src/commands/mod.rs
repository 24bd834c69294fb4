//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use porter_core::STEPS;
use std::io::{self, Write};

pub mod explain;
pub mod generate_config;
pub mod stem;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stem words given on the command line or read from files
    Stem(stem::StemArgs),

    /// Show the word after each step of the algorithm
    Explain(explain::ExplainArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List the rule table of every step
    Steps,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Stem(args) => args.execute(),
            Commands::Explain(args) => args.execute(),
            Commands::List { subcommand } => {
                let mut stdout = io::stdout().lock();
                subcommand.write_to(&mut stdout)?;
                stdout.flush()?;
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Write the listing
    pub fn write_to<W: Write>(self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Steps => {
                for step in STEPS {
                    writeln!(out, "Step {}", step.id)?;
                    for rule in step.rules() {
                        let replacement = if rule.replacement.is_empty() {
                            "-"
                        } else {
                            rule.replacement
                        };
                        writeln!(
                            out,
                            "  {:>8} -> {:<6} if {}",
                            rule.suffix, replacement, rule.condition
                        )?;
                    }
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for (format, description) in OutputFormat::all() {
                    writeln!(out, "  {:<6} {}", format.name(), description)?;
                }
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A second init in the same process keeps the first logger
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration written to {}", self.output.display());
        println!("Use it with: porter stem -c {} ...", self.output.display());

        Ok(())
    }
}

/// Default configuration as commented TOML
pub fn generate_template() -> Result<String> {
    let body = CliConfig::default().to_toml()?;
    Ok(format!(
        "# porter configuration\n\
         # processing.threads = 0 uses one worker per CPU\n\
         # output.default_format is \"text\" or \"json\"\n\n{body}"
    ))
}

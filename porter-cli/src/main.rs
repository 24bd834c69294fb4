use clap::Parser;
use porter_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}

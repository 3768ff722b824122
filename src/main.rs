//! CLI entry point for kolam pattern generation and analysis

use clap::Parser;
use kolam::io::cli::{Cli, CommandRunner};

fn main() -> kolam::Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;
    let mut runner = CommandRunner::new(cli);
    runner.run()
}

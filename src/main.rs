use anyhow::Result;
use clap::Parser;
use purse::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}

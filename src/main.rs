use anyhow::Result;
use clap::Parser;
use sitesource::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}

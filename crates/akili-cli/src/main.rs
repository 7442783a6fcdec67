mod cli;

use anyhow::Error;
use clap::Parser;
use cli::opt::Cli;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    cli::exec(cli.command).await
}

use anyhow::Result;
use clap::Parser;

mod checker;
mod cli;
mod utils;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run().await
}

use anyhow::Result;
use clap::Parser;
use weathervane::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weathervane::run(cli).await
}

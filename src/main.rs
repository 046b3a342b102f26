use anyhow::Context;
use clap::Parser;
use ghcnd_fetcher::cli::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).await.context("station download aborted")?;
    Ok(())
}

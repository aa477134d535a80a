use anyhow::Result;
use clap::Parser;
use market_watchlist::chart;
use market_watchlist::cli::{self, Cli};
use market_watchlist::dashboard;

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse().command() {
        cli::Command::Run(args) => dashboard::run(args).await,
        cli::Command::Chart(args) => chart::run(args).await,
    }
}

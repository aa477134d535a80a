use clap::{Args, Parser, Subcommand};

use crate::chart::ChartArgs;

#[derive(Debug, Parser)]
#[command(author, version, about = "Market watchlist dashboard")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn command(self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Refresh the watchlist and stream each snapshot to stdout
    Run(RunArgs),
    /// Generate and render a synthetic intraday chart for one symbol
    Chart(ChartArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Run(RunArgs::default())
    }
}

#[derive(Debug, Args, Clone, Default)]
pub struct RunArgs {
    /// Emit each snapshot as a JSON line instead of table rows
    #[arg(long)]
    pub json: bool,

    /// Override the inter-item pacing delay in milliseconds
    #[arg(long)]
    pub pacing_ms: Option<u64>,
}

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::json;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::cli::RunArgs;
use crate::config::DashboardConfig;
use crate::logging;
use crate::model::{default_watchlist, Snapshot};
use crate::refresh::Refresher;

pub async fn run(args: RunArgs) -> Result<()> {
    let mut config = DashboardConfig::from_env();
    if let Some(pacing_ms) = args.pacing_ms {
        config.pacing = Duration::from_millis(pacing_ms);
    }

    let mut items = default_watchlist();
    let refresher = Refresher::new(&config);
    let renderer = spawn_renderer(refresher.subscribe(), args.json);

    let outcome = refresher.refresh(&mut items).await?;

    // Dropping the refresher closes the snapshot channel, letting the
    // renderer drain whatever is buffered and exit.
    drop(refresher);
    renderer.await.context("snapshot renderer task failed")??;

    println!(
        "Refreshed {} instruments in {} snapshots (completed at {} ms since epoch)",
        items.len(),
        outcome.snapshots_published,
        outcome.completed_at_ms
    );
    Ok(())
}

fn spawn_renderer(
    mut snapshots: broadcast::Receiver<Snapshot>,
    json: bool,
) -> JoinHandle<Result<()>> {
    tokio::spawn(async move {
        let mut sequence = 0usize;
        loop {
            match snapshots.recv().await {
                Ok(snapshot) => {
                    sequence += 1;
                    if json {
                        println!("{}", serde_json::to_string(&snapshot)?);
                    } else {
                        render_table(sequence, &snapshot);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    logging::warn(
                        "render.lagged",
                        "Snapshot renderer lagged behind refresh",
                        json!({ "skipped": skipped }),
                    );
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        Ok(())
    })
}

fn render_table(sequence: usize, snapshot: &Snapshot) {
    println!("--- snapshot {sequence} ---");
    for item in &snapshot.items {
        let rating = item
            .rating
            .map(|rating| rating.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>6} | {:>8} | {:<20} | {:>10} | {:>+7.2}% | {:>4}",
            item.id, item.symbol, item.name, item.price, item.change_percent, rating
        );
    }
}

use std::time::Duration;

use anyhow::{bail, Result};
use serde_json::json;
use tokio::sync::{broadcast, watch};
use tokio::time;

use crate::config::DashboardConfig;
use crate::constants::SNAPSHOT_CAPACITY;
use crate::logging;
use crate::model::{InstrumentKind, Snapshot, WatchlistItem};
use crate::quote::QuoteClient;
use crate::rating::AdvisorClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy)]
pub struct RefreshOutcome {
    pub snapshots_published: usize,
    pub completed_at_ms: u128,
}

/// Walks the watchlist in order, one provider call at a time, publishing a
/// full-list snapshot after each item. Provider calls are never issued in
/// parallel; the per-minute quote allowance is shared across all items.
pub struct Refresher {
    quotes: QuoteClient,
    advisor: AdvisorClient,
    pacing: Duration,
    phase: watch::Sender<RefreshPhase>,
    snapshots: broadcast::Sender<Snapshot>,
}

impl Refresher {
    pub fn new(config: &DashboardConfig) -> Self {
        let (phase, _) = watch::channel(RefreshPhase::Idle);
        let (snapshots, _) = broadcast::channel(SNAPSHOT_CAPACITY);
        Self {
            quotes: QuoteClient::with_base_url(
                config.quote_api_key.clone(),
                config.quote_base_url.clone(),
            ),
            advisor: AdvisorClient::new(config.advisor_api_key.clone()),
            pacing: config.pacing,
            phase,
            snapshots,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    pub fn phase(&self) -> watch::Receiver<RefreshPhase> {
        self.phase.subscribe()
    }

    /// One full pass over the list. Items are mutated field-wise in place;
    /// the list itself is never re-ordered, grown, or shrunk. A pass that
    /// cannot reach any provider completes anyway and changes nothing but
    /// the completion timestamp.
    pub async fn refresh(&self, items: &mut Vec<WatchlistItem>) -> Result<RefreshOutcome> {
        if *self.phase.borrow() == RefreshPhase::Running {
            bail!("a refresh pass is already running");
        }
        let _ = self.phase.send(RefreshPhase::Running);

        logging::info(
            "refresh.start",
            "Refresh pass started",
            json!({
                "items": items.len(),
                "quotes_configured": self.quotes.is_configured(),
                "pacing_ms": self.pacing.as_millis() as u64,
            }),
        );

        let mut snapshots_published = 0usize;
        for index in 0..items.len() {
            self.refresh_item(&mut items[index]).await;
            time::sleep(self.pacing).await;
            let _ = self.snapshots.send(Snapshot::of(items));
            snapshots_published += 1;
        }

        let completed_at_ms = logging::current_timestamp_ms();
        let _ = self.phase.send(RefreshPhase::Idle);

        logging::info(
            "refresh.complete",
            "Refresh pass finished",
            json!({
                "snapshots": snapshots_published,
                "completed_at_ms": completed_at_ms as u64,
            }),
        );

        Ok(RefreshOutcome {
            snapshots_published,
            completed_at_ms,
        })
    }

    async fn refresh_item(&self, item: &mut WatchlistItem) {
        match self.quotes.fetch(&item.id).await {
            Ok(Some(update)) => {
                item.price = update.price;
                item.change_percent = update.change_percent;
            }
            Ok(None) => {
                // No provider key configured; the values on hand stand.
            }
            Err(err) => {
                logging::warn(
                    "quote.fetch_failed",
                    "Quote fetch failed; keeping previous values",
                    json!({
                        "symbol": item.id,
                        "error": err.to_string(),
                    }),
                );
            }
        }

        if item.kind == InstrumentKind::Stock {
            item.rating = Some(self.advisor.fetch(&item.symbol).await);
        }
    }
}

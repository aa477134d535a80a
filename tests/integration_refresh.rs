use std::sync::Arc;
use std::time::Duration;

use market_watchlist::config::DashboardConfig;
use market_watchlist::model::{default_watchlist, InstrumentKind, Rating};
use market_watchlist::refresh::{RefreshPhase, Refresher};

fn offline_config() -> DashboardConfig {
    DashboardConfig {
        pacing: Duration::from_millis(1),
        ..DashboardConfig::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn unconfigured_pass_keeps_prices_and_rates_stocks() {
    let refresher = Refresher::new(&offline_config());
    let mut receiver = refresher.subscribe();

    let mut items = default_watchlist();
    let before = items.clone();

    let outcome = refresher.refresh(&mut items).await.expect("refresh pass");
    assert_eq!(outcome.snapshots_published, before.len());
    assert!(outcome.completed_at_ms > 0);

    let ids_before: Vec<&str> = before.iter().map(|item| item.id.as_str()).collect();
    let ids_after: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids_before, ids_after, "ids and order must survive a pass");

    for (seed, refreshed) in before.iter().zip(&items) {
        assert_eq!(
            seed.price, refreshed.price,
            "{}: no provider key, price must stand",
            seed.id
        );
        assert_eq!(seed.change_percent, refreshed.change_percent);
        match refreshed.kind {
            InstrumentKind::Index => {
                assert!(refreshed.rating.is_none(), "{} must stay unrated", seed.id)
            }
            InstrumentKind::Stock => {
                assert!(refreshed.rating.is_some(), "{} must be rated", seed.id)
            }
        }
    }

    let aapl = items.iter().find(|item| item.id == "AAPL").expect("AAPL");
    assert_eq!(aapl.price, "192.42");
    assert_eq!(aapl.rating, Some(Rating::Hold));
    let nvda = items.iter().find(|item| item.id == "NVDA").expect("NVDA");
    assert_eq!(nvda.rating, Some(Rating::Buy));

    let mut snapshots = Vec::new();
    while let Ok(snapshot) = receiver.try_recv() {
        snapshots.push(snapshot);
    }
    assert_eq!(
        snapshots.len(),
        items.len(),
        "one snapshot published per item"
    );
    let last = snapshots.last().expect("at least one snapshot");
    assert_eq!(last.items, items, "final snapshot mirrors the final list");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn unreachable_provider_failures_are_absorbed() {
    // A configured key pointed at a dead endpoint: every fetch fails with a
    // transport error, and the pass must complete with nothing changed.
    let config = DashboardConfig {
        quote_api_key: Some("test-key".to_string()),
        quote_base_url: "http://127.0.0.1:9".to_string(),
        pacing: Duration::from_millis(1),
        ..DashboardConfig::default()
    };
    let refresher = Refresher::new(&config);

    let mut items = default_watchlist();
    let before = items.clone();

    let outcome = refresher
        .refresh(&mut items)
        .await
        .expect("pass survives a provider outage");
    assert_eq!(outcome.snapshots_published, before.len());

    for (seed, refreshed) in before.iter().zip(&items) {
        assert_eq!(seed.price, refreshed.price, "{}: price retained", seed.id);
        assert_eq!(seed.change_percent, refreshed.change_percent);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn overlapping_refresh_is_rejected() {
    let config = DashboardConfig {
        pacing: Duration::from_millis(100),
        ..DashboardConfig::default()
    };
    let refresher = Arc::new(Refresher::new(&config));

    let background = {
        let refresher = Arc::clone(&refresher);
        tokio::spawn(async move {
            let mut items = default_watchlist();
            refresher.refresh(&mut items).await
        })
    };

    let mut phase = refresher.phase();
    while *phase.borrow() != RefreshPhase::Running {
        phase.changed().await.expect("phase channel open");
    }

    let mut items = default_watchlist();
    let second = refresher.refresh(&mut items).await;
    assert!(
        second.is_err(),
        "second pass must be rejected while one is running"
    );

    let first = background.await.expect("join first pass");
    assert!(first.is_ok(), "first pass completes normally");
}

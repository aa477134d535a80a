use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstrumentKind {
    Index,
    Stock,
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstrumentKind::Index => "INDEX",
            InstrumentKind::Stock => "STOCK",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rating {
    Buy,
    Hold,
    Sell,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Buy => "BUY",
            Rating::Hold => "HOLD",
            Rating::Sell => "SELL",
        };
        f.write_str(label)
    }
}

/// One tracked instrument. `id` doubles as the quote-provider fetch symbol,
/// so index entries carry tradable ETF proxies (SPY, QQQ, DIA) rather than
/// raw index tickers, which restricted provider tiers cannot resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub kind: InstrumentKind,
}

pub const SNAPSHOT_VERSION: u32 = 1;

/// Full copy of the watchlist, published after each per-item update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub items: Vec<WatchlistItem>,
}

impl Snapshot {
    pub fn of(items: &[WatchlistItem]) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            items: items.to_vec(),
        }
    }
}

pub fn default_watchlist() -> Vec<WatchlistItem> {
    let items = vec![
        index("SPY", "S&P 500", "SPDR S&P 500 ETF", "489.09", 0.58),
        index("QQQ", "NASDAQ", "Invesco QQQ", "425.12", -0.22),
        index("DIA", "DOW", "SPDR Dow Jones", "381.50", 1.05),
        stock("AAPL", "Apple Inc.", "192.42", -0.90, Rating::Hold),
        stock("NVDA", "NVIDIA Corp", "610.31", 2.50, Rating::Buy),
        stock("AMZN", "Amazon.com", "159.12", 0.87, Rating::Buy),
    ];

    let unique_ids: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(
        unique_ids.len(),
        items.len(),
        "watchlist seed ids must be unique"
    );

    items
}

fn index(id: &str, symbol: &str, name: &str, price: &str, change_percent: f64) -> WatchlistItem {
    WatchlistItem {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        change_percent,
        rating: None,
        kind: InstrumentKind::Index,
    }
}

fn stock(id: &str, name: &str, price: &str, change_percent: f64, rating: Rating) -> WatchlistItem {
    WatchlistItem {
        id: id.to_string(),
        symbol: id.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        change_percent,
        rating: Some(rating),
        kind: InstrumentKind::Stock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_ordered() {
        let items = default_watchlist();
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["SPY", "QQQ", "DIA", "AAPL", "NVDA", "AMZN"]);
    }

    #[test]
    fn seed_indexes_carry_no_rating() {
        for item in default_watchlist() {
            if item.kind == InstrumentKind::Index {
                assert!(item.rating.is_none(), "{} must not be rated", item.id);
            }
        }
    }

    #[test]
    fn absent_rating_is_skipped_in_serialization() {
        let items = default_watchlist();
        let spy = serde_json::to_value(&items[0]).expect("serialize index item");
        assert!(spy.get("rating").is_none());
        assert_eq!(spy["kind"], "INDEX");

        let aapl = serde_json::to_value(&items[3]).expect("serialize stock item");
        assert_eq!(aapl["rating"], "HOLD");
        assert_eq!(aapl["kind"], "STOCK");
    }

    #[test]
    fn snapshot_copies_the_full_list() {
        let items = default_watchlist();
        let snapshot = Snapshot::of(&items);
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.items, items);
    }
}

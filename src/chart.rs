use anyhow::{anyhow, Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use textplots::{Chart, Plot, Shape};

use crate::model::{default_watchlist, WatchlistItem};
use crate::series::{self, ChartPoint, Trend};

#[derive(Debug, Args, Clone)]
pub struct ChartArgs {
    /// Watchlist symbol to chart (defaults to the first entry)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Chart width in characters
    #[arg(long, default_value_t = 120)]
    pub width: u32,

    /// Chart height in characters
    #[arg(long, default_value_t = 30)]
    pub height: u32,
}

pub async fn run(args: ChartArgs) -> Result<()> {
    let items = default_watchlist();
    let item = select_item(&items, args.symbol.as_deref())?;

    let base_price: f64 = item.price.parse().with_context(|| {
        format!("unparseable seed price {:?} for {}", item.price, item.id)
    })?;
    let trend = Trend::from_change_percent(item.change_percent);

    let mut rng = StdRng::from_entropy();
    let points = series::generate(base_price, trend, &mut rng);

    render(item, trend, &points, args.width, args.height);
    Ok(())
}

fn select_item<'a>(
    items: &'a [WatchlistItem],
    symbol: Option<&str>,
) -> Result<&'a WatchlistItem> {
    match symbol {
        Some(wanted) => items
            .iter()
            .find(|item| {
                item.symbol.eq_ignore_ascii_case(wanted) || item.id.eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                let known: Vec<&str> = items.iter().map(|item| item.symbol.as_str()).collect();
                anyhow!("unknown symbol {wanted}; watchlist has: {}", known.join(", "))
            }),
        None => items.first().context("watchlist seed is empty"),
    }
}

fn render(item: &WatchlistItem, trend: Trend, points: &[ChartPoint], width: u32, height: u32) {
    let min_price = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max_price = points
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);

    println!(
        "{} ({}) | synthetic intraday walk, trend {}",
        item.symbol, item.name, trend
    );
    println!(
        "Session {} → {} | price range: {:.2} → {:.2}",
        points.first().map(|p| p.time.as_str()).unwrap_or("?"),
        points.last().map(|p| p.time.as_str()).unwrap_or("?"),
        min_price,
        max_price
    );

    let samples: Vec<(f32, f32)> = points
        .iter()
        .enumerate()
        .map(|(index, point)| (index as f32, point.price as f32))
        .collect();

    let plot_width = width.max(40);
    let plot_height = height.max(10);

    Chart::new(plot_width, plot_height, 0.0, (points.len() - 1) as f32)
        .lineplot(&Shape::Lines(&samples))
        .display();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_lookup_matches_proxy_id_and_display_label() {
        let items = default_watchlist();

        let by_label = select_item(&items, Some("NASDAQ")).expect("display label");
        assert_eq!(by_label.id, "QQQ");

        let by_id = select_item(&items, Some("qqq")).expect("case-insensitive id");
        assert_eq!(by_id.id, "QQQ");

        assert!(select_item(&items, Some("XXXX")).is_err());
        assert_eq!(select_item(&items, None).expect("default").id, "SPY");
    }
}

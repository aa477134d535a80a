use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::constants::{
    SERIES_POINTS, SERIES_VOLATILITY, SESSION_MINUTES, SESSION_OPEN_HOUR, SESSION_OPEN_MINUTE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn from_change_percent(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            Trend::Up
        } else if change_percent < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time: String,
    pub price: f64,
}

/// Synthetic intraday random walk: `SERIES_POINTS` points from `base_price`,
/// each step perturbed within ±`SERIES_VOLATILITY` of the running price and
/// nudged by half the draw's magnitude in the trend direction. Callers seed
/// the RNG: entropy in production, a fixed seed in tests.
pub fn generate<R: Rng>(base_price: f64, trend: Trend, rng: &mut R) -> Vec<ChartPoint> {
    let mut price = base_price.max(0.01);
    let mut points = Vec::with_capacity(SERIES_POINTS);

    for step in 0..SERIES_POINTS {
        let swing = price * SERIES_VOLATILITY;
        let perturbation = rng.gen_range(-swing..swing);
        let bias = perturbation.abs() * 0.5;
        let delta = match trend {
            Trend::Up => perturbation + bias,
            Trend::Down => perturbation - bias,
            Trend::Neutral => perturbation,
        };

        price = ((price + delta).max(0.01) * 100.0).round() / 100.0;
        points.push(ChartPoint {
            time: session_label(step),
            price,
        });
    }

    points
}

fn session_label(step: usize) -> String {
    let offset = step * SESSION_MINUTES / SERIES_POINTS;
    let minute_of_day = SESSION_OPEN_HOUR * 60 + SESSION_OPEN_MINUTE + offset;
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

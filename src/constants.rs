pub const QUOTE_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const PACING_MS: u64 = 500;
pub const SNAPSHOT_CAPACITY: usize = 64;
pub const SERIES_POINTS: usize = 50;
pub const SERIES_VOLATILITY: f64 = 0.005;
pub const SESSION_OPEN_HOUR: usize = 9;
pub const SESSION_OPEN_MINUTE: usize = 30;
pub const SESSION_MINUTES: usize = 390;

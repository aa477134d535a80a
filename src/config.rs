use std::env;
use std::time::Duration;

use crate::constants::{PACING_MS, QUOTE_BASE_URL};

#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub quote_api_key: Option<String>,
    pub advisor_api_key: Option<String>,
    pub quote_base_url: String,
    pub pacing: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            quote_api_key: None,
            advisor_api_key: None,
            quote_base_url: QUOTE_BASE_URL.to_string(),
            pacing: Duration::from_millis(PACING_MS),
        }
    }
}

impl DashboardConfig {
    /// Credentials come from the environment (or a `.env` file). A missing
    /// or blank key degrades that provider to its fallback path.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            quote_api_key: env_key("ALPHA_VANTAGE_KEY"),
            advisor_api_key: env_key("ADVISOR_KEY"),
            ..Self::default()
        }
    }
}

fn env_key(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

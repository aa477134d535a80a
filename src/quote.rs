use serde::Deserialize;
use thiserror::Error;

use crate::constants::QUOTE_BASE_URL;

/// Normalized quote fields merged into a watchlist item on success.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteUpdate {
    pub price: String,
    pub change_percent: f64,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote provider throttled the request: {0}")]
    RateLimited(String),
    #[error("quote request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected quote payload: {0}")]
    Payload(String),
}

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "Global Quote")]
    quote: Option<RawQuote>,
    #[serde(rename = "Note")]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawQuote {
    #[serde(rename = "05. price")]
    price: String,
    #[serde(rename = "10. change percent")]
    change_percent: String,
}

pub struct QuoteClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl QuoteClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, QUOTE_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch one GLOBAL_QUOTE. `Ok(None)` means no key is configured and no
    /// request went out; the caller keeps whatever values it already holds.
    pub async fn fetch(&self, symbol: &str) -> Result<Option<QuoteUpdate>, QuoteError> {
        let Some(api_key) = &self.api_key else {
            return Ok(None);
        };

        let url = format!(
            "{base}?function=GLOBAL_QUOTE&symbol={symbol}&apikey={api_key}",
            base = self.base_url
        );
        let envelope: QuoteEnvelope = self.http.get(&url).send().await?.json().await?;
        normalize(envelope).map(Some)
    }
}

fn normalize(envelope: QuoteEnvelope) -> Result<QuoteUpdate, QuoteError> {
    if let Some(raw) = envelope.quote {
        let price: f64 = raw
            .price
            .trim()
            .parse()
            .map_err(|_| QuoteError::Payload(format!("unparseable price {:?}", raw.price)))?;
        let change_percent: f64 = raw
            .change_percent
            .trim()
            .trim_end_matches('%')
            .parse()
            .map_err(|_| {
                QuoteError::Payload(format!(
                    "unparseable change percent {:?}",
                    raw.change_percent
                ))
            })?;

        return Ok(QuoteUpdate {
            price: format!("{price:.2}"),
            change_percent,
        });
    }

    if let Some(note) = envelope.note {
        return Err(QuoteError::RateLimited(note));
    }

    Err(QuoteError::Payload(
        "response carried neither a quote nor a throttle note".to_string(),
    ))
}

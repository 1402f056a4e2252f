use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::Config;
use crate::external::quote_provider::{QuoteError, QuoteProvider};
use crate::models::PriceQuote;

/// Ticker client for a Kraken-style public API.
///
/// The pair id is appended to `base_url` as-is, so the base URL must already
/// end in whatever the upstream expects (`...Ticker?pair=` for Kraken).
pub struct KrakenProvider {
    client: reqwest::Client,
    base_url: String,
}

impl KrakenProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone())
    }
}

#[derive(Debug, Deserialize)]
struct TickerEnvelope {
    #[serde(default)]
    result: HashMap<String, TickerEntry>,
}

#[derive(Debug, Deserialize)]
struct TickerEntry {
    // First element is the last-traded price.
    #[serde(rename = "a", default)]
    price: Vec<String>,
}

#[async_trait]
impl QuoteProvider for KrakenProvider {
    async fn fetch_last_traded(&self, pair: &str) -> Result<PriceQuote, QuoteError> {
        let url = format!("{}{}", self.base_url, pair);
        debug!("Sending request to {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                error!("Error sending request to upstream for {}: {}", pair, e);
                QuoteError::Transport(e.to_string())
            })?;

        let body = resp.text().await.map_err(|e| {
            error!("Error reading upstream response for {}: {}", pair, e);
            QuoteError::Transport(e.to_string())
        })?;

        extract_quote(pair, &body).map_err(|e| {
            error!("Failed to extract price for {}: {}", pair, e);
            e
        })
    }
}

fn extract_quote(pair: &str, body: &str) -> Result<PriceQuote, QuoteError> {
    let envelope: TickerEnvelope =
        serde_json::from_str(body).map_err(|e| QuoteError::Decode(e.to_string()))?;

    let entry = envelope.result.get(pair).ok_or(QuoteError::NotFound)?;

    let raw = entry
        .price
        .first()
        .ok_or_else(|| QuoteError::Decode(format!("empty price list for {}", pair)))?;

    let amount = raw
        .parse::<f64>()
        .map_err(|e| QuoteError::Parse(format!("{:?}: {}", raw, e)))?;

    Ok(PriceQuote::new(pair, amount))
}

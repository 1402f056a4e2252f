use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::external::quote_provider::{QuoteError, QuoteProvider};
use crate::models::PriceQuote;

/// In-memory provider: known pairs succeed, anything else is `NotFound`.
pub struct FakeProvider {
    prices: HashMap<String, f64>,
    delays: HashMap<String, Duration>,
    completed: AtomicUsize,
}

impl FakeProvider {
    pub fn new(prices: &[(&str, f64)]) -> Self {
        Self {
            prices: prices.iter().map(|(p, a)| (p.to_string(), *a)).collect(),
            delays: HashMap::new(),
            completed: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, pair: &str, delay: Duration) -> Self {
        self.delays.insert(pair.to_string(), delay);
        self
    }

    /// Number of fetches that ran to completion, success or failure.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteProvider for FakeProvider {
    async fn fetch_last_traded(&self, pair: &str) -> Result<PriceQuote, QuoteError> {
        if let Some(delay) = self.delays.get(pair) {
            tokio::time::sleep(*delay).await;
        }

        let result = self
            .prices
            .get(pair)
            .map(|amount| PriceQuote::new(pair, *amount))
            .ok_or(QuoteError::NotFound);

        self.completed.fetch_add(1, Ordering::SeqCst);
        result
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::models::PriceQuote;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    // Callers match on this exact message.
    #[error("pair not found")]
    NotFound,

    #[error("parse error: {0}")]
    Parse(String),
}

/// Source of last-traded prices for a single pair.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_last_traded(&self, pair: &str) -> Result<PriceQuote, QuoteError>;
}

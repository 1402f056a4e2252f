use serde::{Deserialize, Serialize};

// Last-traded price for one pair, as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub pair: String,
    pub amount: f64,
}

impl PriceQuote {
    pub fn new(pair: impl Into<String>, amount: f64) -> Self {
        Self {
            pair: pair.into(),
            amount,
        }
    }
}

/// Body of a successful `GET /api/v1/ltp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LtpResponse {
    pub ltp: Vec<PriceQuote>,
}

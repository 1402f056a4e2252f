use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;
use tracing::{error, info};

use crate::errors::AppError;
use crate::external::quote_provider::QuoteProvider;
use crate::models::PriceQuote;

/// Pairs quoted when the caller asks for none: BTC/USD, BTC/CHF, BTC/EUR.
pub const DEFAULT_PAIRS: [&str; 3] = ["XXBTZUSD", "XBTCHF", "XXBTZEUR"];

/// Fetch the last-traded price of every pair concurrently.
///
/// One task per pair, all of them joined before returning even when some
/// fail. Results come back in completion order. If any fetch failed the whole
/// call fails with the first error drained and the successful quotes are
/// dropped.
pub async fn fetch_last_traded_prices(
    provider: Arc<dyn QuoteProvider>,
    pairs: Vec<String>,
) -> Result<Vec<PriceQuote>, AppError> {
    let pairs = if pairs.is_empty() {
        DEFAULT_PAIRS.iter().map(|p| p.to_string()).collect()
    } else {
        pairs
    };

    let started = Instant::now();
    let requested = pairs.len();

    let mut tasks = JoinSet::new();
    for pair in pairs {
        let provider = provider.clone();
        tasks.spawn(async move {
            let result = provider.fetch_last_traded(&pair).await;
            (pair, result)
        });
    }

    let mut quotes = Vec::with_capacity(requested);
    let mut first_error: Option<AppError> = None;

    while let Some(joined) = tasks.join_next().await {
        let outcome = match joined {
            Ok((_, Ok(quote))) => Ok(quote),
            Ok((pair, Err(e))) => {
                error!("Error fetching LTP for {}: {}", pair, e);
                Err(AppError::from(e))
            }
            Err(e) => {
                error!("LTP fetch task did not complete: {}", e);
                Err(AppError::from(e))
            }
        };

        match outcome {
            Ok(quote) => quotes.push(quote),
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }

    info!("Fetched {} LTP quotes in {:?}", quotes.len(), started.elapsed());
    Ok(quotes)
}

pub mod kraken;
pub mod quote_provider;

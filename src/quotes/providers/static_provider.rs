use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::quotes::quotes_errors::QuoteError;
use crate::quotes::quotes_model::Quote;
use crate::quotes::quotes_traits::QuoteGateway;

/// In-memory quote gateway with programmable prices, for tests and offline use.
#[derive(Default)]
pub struct StaticQuoteProvider {
    quotes: DashMap<String, Quote>,
    offline: AtomicBool,
}

impl StaticQuoteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces the live price for a symbol
    pub fn set_quote(&self, symbol: &str, price: Decimal) {
        let symbol = symbol.to_uppercase();
        self.quotes.insert(
            symbol.clone(),
            Quote {
                symbol,
                price,
                timestamp: Utc::now(),
            },
        );
    }

    /// Forgets a symbol; subsequent lookups return absence
    pub fn remove_quote(&self, symbol: &str) {
        self.quotes.remove(&symbol.to_uppercase());
    }

    /// When offline, every lookup fails the way a dead gateway would
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl QuoteGateway for StaticQuoteProvider {
    async fn lookup(&self, symbol: &str) -> Result<Option<Quote>, QuoteError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(QuoteError::ProviderError(
                "Quote gateway is offline".to_string(),
            ));
        }
        Ok(self
            .quotes
            .get(&symbol.to_uppercase())
            .map(|entry| entry.clone()))
    }
}

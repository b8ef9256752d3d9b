use async_trait::async_trait;

use super::quotes_errors::QuoteError;
use super::quotes_model::Quote;

/// Contract of the external price-lookup collaborator.
///
/// `Ok(Some(quote))` — the symbol resolved to a live price.
/// `Ok(None)` — the gateway does not recognize the symbol.
/// `Err(_)` — the gateway itself failed (network, timeout, bad payload).
#[async_trait]
pub trait QuoteGateway: Send + Sync {
    async fn lookup(&self, symbol: &str) -> Result<Option<Quote>, QuoteError>;
}

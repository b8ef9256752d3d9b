use async_trait::async_trait;
use std::collections::HashMap;

use super::positions_model::PortfolioSummary;
use crate::errors::Result;

/// Trait defining the contract for Position aggregation.
/// All reads are side-effect free and reflect the latest committed ledger
/// state at call time; there is no cached share counter anywhere.
#[async_trait]
pub trait PositionServiceTrait: Send + Sync {
    /// Net shares per symbol for an account. Symbols whose history nets to
    /// exactly zero are omitted: they are not held.
    fn positions(&self, account_id: &str) -> Result<HashMap<String, i64>>;

    /// Net shares of one symbol for an account (zero when never traded).
    fn position(&self, account_id: &str, symbol: &str) -> Result<i64>;

    /// Cash plus every non-zero position priced at the live quote.
    async fn portfolio(&self, account_id: &str) -> Result<PortfolioSummary>;
}

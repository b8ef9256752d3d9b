use async_trait::async_trait;

use super::trading_model::TradeReceipt;
use crate::errors::Result;

/// Trait defining the contract for trade execution.
///
/// Both operations take the requested share count as the raw string the
/// presentation layer collected; parsing it is part of validation.
#[async_trait]
pub trait TradeExecutorTrait: Send + Sync {
    async fn buy(&self, account_id: &str, symbol: &str, shares: &str) -> Result<TradeReceipt>;
    async fn sell(&self, account_id: &str, symbol: &str, shares: &str) -> Result<TradeReceipt>;
}

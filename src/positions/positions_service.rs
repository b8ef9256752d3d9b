use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::positions_model::{Holding, PortfolioSummary};
use super::positions_traits::PositionServiceTrait;
use crate::accounts::AccountRepositoryTrait;
use crate::errors::Result;
use crate::ledger::LedgerRepositoryTrait;
use crate::quotes::{QuoteError, QuoteGateway};

/// Derives positions and portfolio value by folding the trade ledger.
/// Holdings are never stored; every read recomputes from history.
pub struct PositionService {
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    quote_gateway: Arc<dyn QuoteGateway>,
}

impl PositionService {
    /// Creates a new PositionService instance
    pub fn new(
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        quote_gateway: Arc<dyn QuoteGateway>,
    ) -> Self {
        Self {
            ledger_repository,
            account_repository,
            quote_gateway,
        }
    }
}

#[async_trait]
impl PositionServiceTrait for PositionService {
    fn positions(&self, account_id: &str) -> Result<HashMap<String, i64>> {
        let rows = self.ledger_repository.net_shares_by_symbol(account_id)?;
        Ok(rows
            .into_iter()
            .filter(|(_, net)| *net != 0)
            .collect())
    }

    fn position(&self, account_id: &str, symbol: &str) -> Result<i64> {
        let symbol = symbol.trim().to_uppercase();
        Ok(self.ledger_repository.net_shares(account_id, &symbol)?)
    }

    async fn portfolio(&self, account_id: &str) -> Result<PortfolioSummary> {
        let account = self.account_repository.get_by_id(account_id)?;

        let mut entries: Vec<(String, i64)> =
            self.positions(account_id)?.into_iter().collect();
        entries.sort();

        let mut holdings = Vec::with_capacity(entries.len());
        let mut total_value = account.cash;

        for (symbol, shares) in entries {
            // A held symbol the gateway no longer resolves is a consistency
            // anomaly, not a skippable row.
            let quote = self
                .quote_gateway
                .lookup(&symbol)
                .await?
                .ok_or_else(|| QuoteError::NotFound(symbol.clone()))?;

            let market_value = quote.price * Decimal::from(shares);
            total_value += market_value;
            holdings.push(Holding {
                symbol,
                shares,
                price: quote.price,
                market_value,
            });
        }

        debug!(
            "Valued portfolio for account {}: cash {}, total {}",
            account_id, account.cash, total_value
        );

        Ok(PortfolioSummary {
            account_id: account.id,
            cash: account.cash,
            holdings,
            total_value,
        })
    }
}

use std::sync::Arc;

use super::ledger_model::Trade;
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::ledger::Result;

/// Read-side service over the trade ledger
pub struct LedgerService {
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    /// Creates a new LedgerService instance
    pub fn new(ledger_repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        Self { ledger_repository }
    }
}

impl LedgerServiceTrait for LedgerService {
    /// Full trade history for an account, oldest first
    fn get_history(&self, account_id: &str) -> Result<Vec<Trade>> {
        self.ledger_repository.get_trades_by_account(account_id, None)
    }

    /// Trades for an account, optionally restricted to one symbol
    fn get_trades(&self, account_id: &str, symbol: Option<&str>) -> Result<Vec<Trade>> {
        self.ledger_repository.get_trades_by_account(account_id, symbol)
    }
}

use diesel::sqlite::SqliteConnection;

use super::ledger_errors::Result;
use super::ledger_model::{NewTrade, Trade};

/// Trait defining the contract for Ledger repository operations.
/// The ledger is append-only: there are no update or delete operations.
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Appends one ledger entry on an open transaction and returns it with
    /// its assigned id.
    fn append_in_tx(&self, conn: &mut SqliteConnection, new_trade: NewTrade) -> Result<Trade>;

    /// All trades for an account, optionally filtered by symbol, ordered by
    /// timestamp ascending (insertion order within an account).
    fn get_trades_by_account(
        &self,
        account_id: &str,
        symbol: Option<&str>,
    ) -> Result<Vec<Trade>>;

    /// Net share count for one account/symbol pair.
    fn net_shares(&self, account_id: &str, symbol: &str) -> Result<i64>;

    /// Net share count per symbol for an account. Symbols with history that
    /// nets to zero are still present here; callers decide whether to drop them.
    fn net_shares_by_symbol(&self, account_id: &str) -> Result<Vec<(String, i64)>>;
}

/// Trait defining the contract for Ledger service operations.
pub trait LedgerServiceTrait: Send + Sync {
    fn get_history(&self, account_id: &str) -> Result<Vec<Trade>>;
    fn get_trades(&self, account_id: &str, symbol: Option<&str>) -> Result<Vec<Trade>>;
}

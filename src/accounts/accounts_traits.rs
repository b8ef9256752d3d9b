use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;

use super::accounts_model::{Account, NewAccount};
use super::accounts_errors::Result;

/// Trait defining the contract for Account repository operations.
pub trait AccountRepositoryTrait: Send + Sync {
    fn create(&self, new_account: NewAccount) -> Result<Account>;
    fn get_by_id(&self, account_id: &str) -> Result<Account>;
    fn find_by_name(&self, name: &str) -> Result<Option<Account>>;
    fn list(&self) -> Result<Vec<Account>>;

    /// Reads the current cash balance on an open transaction.
    fn cash_in_tx(&self, conn: &mut SqliteConnection, account_id: &str) -> Result<Decimal>;

    /// Applies a signed delta to the cash balance and returns the new value.
    /// Sole mutator of `cash`; only ever called from the trade executor's
    /// atomic apply step.
    fn adjust_cash_in_tx(
        &self,
        conn: &mut SqliteConnection,
        account_id: &str,
        delta: Decimal,
    ) -> Result<Decimal>;
}

/// Trait defining the contract for Account service operations.
pub trait AccountServiceTrait: Send + Sync {
    fn create_account(&self, new_account: NewAccount) -> Result<Account>;
    fn get_account(&self, account_id: &str) -> Result<Account>;
    fn get_cash(&self, account_id: &str) -> Result<Decimal>;
    fn list_accounts(&self) -> Result<Vec<Account>>;
}

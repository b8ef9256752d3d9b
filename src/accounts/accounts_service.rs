use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::accounts_model::{Account, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::accounts::Result;

/// Service for managing accounts
pub struct AccountService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(account_repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { account_repository }
    }
}

impl AccountServiceTrait for AccountService {
    /// Registers a new account; the starting cash balance is granted here,
    /// never adjusted afterwards except through trades.
    fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        debug!("Creating account '{}'", new_account.name);
        self.account_repository.create(new_account)
    }

    /// Retrieves an account by its ID
    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.account_repository.get_by_id(account_id)
    }

    /// Reads the current cash balance for an account
    fn get_cash(&self, account_id: &str) -> Result<Decimal> {
        Ok(self.account_repository.get_by_id(account_id)?.cash)
    }

    /// Lists all registered accounts
    fn list_accounts(&self) -> Result<Vec<Account>> {
        self.account_repository.list()
    }
}

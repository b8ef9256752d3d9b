use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use super::accounts_model::{Account, AccountDB, NewAccount};
use super::accounts_traits::AccountRepositoryTrait;
use crate::accounts::{AccountError, Result};
use crate::db::{get_connection, DbPool};
use crate::schema::accounts;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl AccountRepositoryTrait for AccountRepository {
    /// Creates a new account with the starting cash balance
    fn create(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;

        let mut conn =
            get_connection(&self.pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        if self.find_by_name(&new_account.name)?.is_some() {
            return Err(AccountError::AlreadyExists(format!(
                "Account name '{}' is already taken",
                new_account.name
            )));
        }

        let mut account_db: AccountDB = new_account.into();
        if account_db.id.is_empty() {
            account_db.id = uuid::Uuid::new_v4().to_string();
        }

        diesel::insert_into(accounts::table)
            .values(&account_db)
            .execute(&mut conn)
            .map_err(AccountError::from)?;

        account_db.try_into()
    }

    /// Retrieves an account by its ID
    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        let account = accounts::table
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AccountError::NotFound(format!("Account with id {} not found", account_id))
                }
                _ => AccountError::DatabaseError(e.to_string()),
            })?;

        account.try_into()
    }

    /// Looks an account up by its unique name
    fn find_by_name(&self, account_name: &str) -> Result<Option<Account>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        let found = accounts::table
            .filter(accounts::name.eq(account_name))
            .first::<AccountDB>(&mut conn)
            .optional()
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        found.map(Account::try_from).transpose()
    }

    /// Lists all accounts, ordered by name
    fn list(&self) -> Result<Vec<Account>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        accounts::table
            .order(accounts::name.asc())
            .load::<AccountDB>(&mut conn)
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Account::try_from)
            .collect()
    }

    fn cash_in_tx(&self, conn: &mut SqliteConnection, account_id: &str) -> Result<Decimal> {
        let raw: String = accounts::table
            .find(account_id)
            .select(accounts::cash)
            .first(conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AccountError::NotFound(format!("Account with id {} not found", account_id))
                }
                _ => AccountError::DatabaseError(e.to_string()),
            })?;

        Decimal::from_str(&raw).map_err(|e| {
            AccountError::InvalidData(format!(
                "Stored cash for account {} is not a decimal: {}",
                account_id, e
            ))
        })
    }

    fn adjust_cash_in_tx(
        &self,
        conn: &mut SqliteConnection,
        account_id: &str,
        delta: Decimal,
    ) -> Result<Decimal> {
        let new_cash = self.cash_in_tx(conn, account_id)? + delta;

        diesel::update(accounts::table.find(account_id))
            .set((
                accounts::cash.eq(new_cash.to_string()),
                accounts::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(conn)
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        Ok(new_cash)
    }
}

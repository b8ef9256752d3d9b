use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::ledger_model::{NewTrade, NewTradeDB, Trade, TradeDB};
use super::ledger_traits::LedgerRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::ledger::{LedgerError, Result};
use crate::schema::trades;

/// Repository over the append-only trades table
pub struct LedgerRepository {
    pool: Arc<DbPool>,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl LedgerRepositoryTrait for LedgerRepository {
    fn append_in_tx(&self, conn: &mut SqliteConnection, new_trade: NewTrade) -> Result<Trade> {
        new_trade.validate()?;

        let row: NewTradeDB = new_trade.into();
        let inserted: TradeDB = diesel::insert_into(trades::table)
            .values(&row)
            .returning(TradeDB::as_returning())
            .get_result(conn)
            .map_err(LedgerError::from)?;

        inserted.try_into()
    }

    fn get_trades_by_account(
        &self,
        account_id: &str,
        symbol: Option<&str>,
    ) -> Result<Vec<Trade>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| LedgerError::DatabaseError(e.to_string()))?;

        let mut query = trades::table
            .filter(trades::account_id.eq(account_id))
            .into_boxed();

        if let Some(sym) = symbol {
            query = query.filter(trades::symbol.eq(sym));
        }

        query
            .order((trades::created_at.asc(), trades::id.asc()))
            .load::<TradeDB>(&mut conn)
            .map_err(LedgerError::from)?
            .into_iter()
            .map(Trade::try_from)
            .collect()
    }

    fn net_shares(&self, account_id: &str, symbol: &str) -> Result<i64> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| LedgerError::DatabaseError(e.to_string()))?;

        // SUM over a BigInt column is explicitly typed; shares fit i64.
        let total: Option<i64> = trades::table
            .filter(trades::account_id.eq(account_id))
            .filter(trades::symbol.eq(symbol))
            .select(sql::<Nullable<BigInt>>("SUM(shares)"))
            .first(&mut conn)
            .map_err(LedgerError::from)?;

        Ok(total.unwrap_or(0))
    }

    fn net_shares_by_symbol(&self, account_id: &str) -> Result<Vec<(String, i64)>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| LedgerError::DatabaseError(e.to_string()))?;

        let rows: Vec<(String, Option<i64>)> = trades::table
            .filter(trades::account_id.eq(account_id))
            .group_by(trades::symbol)
            .select((trades::symbol, sql::<Nullable<BigInt>>("SUM(shares)")))
            .load(&mut conn)
            .map_err(LedgerError::from)?;

        Ok(rows
            .into_iter()
            .map(|(symbol, net)| (symbol, net.unwrap_or(0)))
            .collect())
    }
}

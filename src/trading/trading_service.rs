use dashmap::DashMap;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::trading_errors::TradeError;
use super::trading_model::TradeReceipt;
use super::trading_traits::TradeExecutorTrait;
use crate::accounts::AccountRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::ledger::{LedgerRepositoryTrait, NewTrade};
use crate::quotes::{Quote, QuoteGateway};

/// Validates and applies buy/sell requests.
///
/// Each request runs under its account's entry in the lock map, so the
/// read-check-then-write sequence is serialized per account while trades on
/// different accounts proceed in parallel. The cash mutation and the ledger
/// append commit in one immediate transaction.
pub struct TradeExecutor {
    pool: Arc<DbPool>,
    quote_gateway: Arc<dyn QuoteGateway>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    account_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl TradeExecutor {
    /// Creates a new TradeExecutor instance
    pub fn new(
        pool: Arc<DbPool>,
        quote_gateway: Arc<dyn QuoteGateway>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    ) -> Self {
        Self {
            pool,
            quote_gateway,
            account_repository,
            ledger_repository,
            account_locks: DashMap::new(),
        }
    }

    fn account_lock(&self, account_id: &str) -> Arc<Mutex<()>> {
        self.account_locks
            .entry(account_id.to_string())
            .or_default()
            .clone()
    }

    async fn lookup_quote(&self, symbol: &str) -> Result<Quote> {
        match self.quote_gateway.lookup(symbol).await {
            Ok(Some(quote)) => Ok(quote),
            Ok(None) => Err(TradeError::UnknownSymbol(symbol.to_string()).into()),
            Err(e) => Err(TradeError::QuoteUnavailable(e.to_string()).into()),
        }
    }
}

/// Normalizes a raw symbol the way it is stored: trimmed and uppercased.
fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Parses a requested share count. Non-numeric, zero, and negative input are
/// rejected identically.
fn parse_share_count(raw: &str) -> std::result::Result<i64, TradeError> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TradeError::InvalidShareCount(raw.trim().to_string())),
    }
}

/// Total money moved by a trade. Overflow is a rejection, never a panic.
fn trade_total(price: Decimal, shares: i64) -> std::result::Result<Decimal, TradeError> {
    price.checked_mul(Decimal::from(shares)).ok_or_else(|| {
        TradeError::InvalidInput(format!(
            "Total for {} shares at {} is out of range",
            shares, price
        ))
    })
}

#[async_trait::async_trait]
impl TradeExecutorTrait for TradeExecutor {
    async fn buy(&self, account_id: &str, symbol: &str, shares: &str) -> Result<TradeReceipt> {
        let symbol = normalize_symbol(symbol);

        let lock = self.account_lock(account_id);
        let _guard = lock.lock().await;

        if symbol.is_empty() {
            return Err(TradeError::InvalidInput("Symbol must not be empty".to_string()).into());
        }

        let quote = self.lookup_quote(&symbol).await?;
        let requested = parse_share_count(shares)?;
        let total = trade_total(quote.price, requested)?;

        let mut conn = get_connection(&self.pool)?;
        let receipt = conn.immediate_transaction::<_, Error, _>(|conn| {
            let cash = self.account_repository.cash_in_tx(conn, account_id)?;
            if total > cash {
                return Err(TradeError::InsufficientFunds {
                    required: total,
                    available: cash,
                }
                .into());
            }

            let new_cash = self
                .account_repository
                .adjust_cash_in_tx(conn, account_id, -total)?;
            let trade = self.ledger_repository.append_in_tx(
                conn,
                NewTrade {
                    account_id: account_id.to_string(),
                    symbol: symbol.clone(),
                    shares: requested,
                    price: quote.price,
                },
            )?;

            Ok(TradeReceipt { trade, new_cash })
        })?;

        debug!(
            "Bought {} {} at {} for account {}; cash now {}",
            requested, symbol, quote.price, account_id, receipt.new_cash
        );
        Ok(receipt)
    }

    async fn sell(&self, account_id: &str, symbol: &str, shares: &str) -> Result<TradeReceipt> {
        let symbol = normalize_symbol(symbol);

        let lock = self.account_lock(account_id);
        let _guard = lock.lock().await;

        // The holding check runs before the share count is even parsed; the
        // check order here is a compatibility contract.
        let held = self.ledger_repository.net_shares(account_id, &symbol)?;

        if symbol.is_empty() {
            return Err(TradeError::InvalidInput("Symbol must not be empty".to_string()).into());
        }
        if held == 0 {
            return Err(TradeError::NotHeld(symbol).into());
        }

        let requested = parse_share_count(shares)?;
        if requested > held {
            return Err(TradeError::InsufficientShares { requested, held }.into());
        }

        let quote = self.lookup_quote(&symbol).await?;
        let earnings = trade_total(quote.price, requested)?;

        let mut conn = get_connection(&self.pool)?;
        let receipt = conn.immediate_transaction::<_, Error, _>(|conn| {
            let new_cash = self
                .account_repository
                .adjust_cash_in_tx(conn, account_id, earnings)?;
            let trade = self.ledger_repository.append_in_tx(
                conn,
                NewTrade {
                    account_id: account_id.to_string(),
                    symbol: symbol.clone(),
                    shares: -requested,
                    price: quote.price,
                },
            )?;

            Ok(TradeReceipt { trade, new_cash })
        })?;

        debug!(
            "Sold {} {} at {} for account {}; cash now {}",
            requested, symbol, quote.price, account_id, receipt.new_cash
        );
        Ok(receipt)
    }
}

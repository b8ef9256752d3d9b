use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ledger_errors::LedgerError;

/// Domain model for one immutable ledger entry.
/// Positive `shares` means acquired (buy), negative means disposed (sell);
/// never zero. `price` is the execution price captured at trade time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: i64,
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input model for appending a ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
    pub price: Decimal,
}

impl NewTrade {
    /// Validates the new trade data
    pub fn validate(&self) -> super::Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(LedgerError::InvalidData(
                "Account ID cannot be empty".to_string(),
            ));
        }
        if self.symbol.trim().is_empty() {
            return Err(LedgerError::InvalidData(
                "Symbol cannot be empty".to_string(),
            ));
        }
        if self.shares == 0 {
            return Err(LedgerError::InvalidData(
                "Share count cannot be zero".to_string(),
            ));
        }
        if self.price <= Decimal::ZERO {
            return Err(LedgerError::InvalidData(
                "Price must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for trades
#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeDB {
    pub id: i64,
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
    pub price: String,
    pub created_at: NaiveDateTime,
}

/// Insert model for trades; the id is assigned by the database at insertion
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::trades)]
pub struct NewTradeDB {
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
    pub price: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<TradeDB> for Trade {
    type Error = LedgerError;

    fn try_from(db: TradeDB) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&db.price).map_err(|e| {
            LedgerError::InvalidData(format!(
                "Stored price for trade {} is not a decimal: {}",
                db.id, e
            ))
        })?;
        Ok(Self {
            id: db.id,
            account_id: db.account_id,
            symbol: db.symbol,
            shares: db.shares,
            price,
            created_at: DateTime::from_naive_utc_and_offset(db.created_at, Utc),
        })
    }
}

impl From<NewTrade> for NewTradeDB {
    fn from(domain: NewTrade) -> Self {
        Self {
            account_id: domain.account_id,
            symbol: domain.symbol,
            shares: domain.shares,
            price: domain.price.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_trade(shares: i64, price: Decimal) -> NewTrade {
        NewTrade {
            account_id: "acct-1".to_string(),
            symbol: "AAPL".to_string(),
            shares,
            price,
        }
    }

    #[test]
    fn rejects_zero_shares() {
        assert!(matches!(
            new_trade(0, dec!(150)).validate(),
            Err(LedgerError::InvalidData(_))
        ));
    }

    #[test]
    fn rejects_non_positive_price() {
        assert!(new_trade(10, dec!(0)).validate().is_err());
        assert!(new_trade(10, dec!(-1.50)).validate().is_err());
    }

    #[test]
    fn accepts_negative_shares_for_sells() {
        assert!(new_trade(-10, dec!(150)).validate().is_ok());
    }

    #[test]
    fn price_survives_db_round_trip_exactly() {
        let db = NewTradeDB::from(new_trade(3, dec!(123.45)));
        assert_eq!(db.price, "123.45");
        let trade = Trade::try_from(TradeDB {
            id: 1,
            account_id: db.account_id,
            symbol: db.symbol,
            shares: db.shares,
            price: db.price,
            created_at: db.created_at,
        })
        .unwrap();
        assert_eq!(trade.price, dec!(123.45));
    }
}

use rust_decimal::Decimal;
use thiserror::Error;

/// Business-rule rejections of a buy or sell request. Every variant leaves
/// cash and ledger completely untouched.
#[derive(Debug, Error)]
pub enum TradeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Invalid share count: {0:?}")]
    InvalidShareCount(String),

    #[error("Insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("No shares of {0} held")]
    NotHeld(String),

    #[error("Insufficient shares: requested {requested}, held {held}")]
    InsufficientShares { requested: i64, held: i64 },

    #[error("Quote gateway unavailable: {0}")]
    QuoteUnavailable(String),
}

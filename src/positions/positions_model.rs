use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One held symbol priced at the live quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub shares: i64,
    pub price: Decimal,
    pub market_value: Decimal,
}

/// Point-in-time portfolio valuation: cash plus every non-zero position
/// priced at the live quote. Not reproducible from the ledger alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub account_id: String,
    pub cash: Decimal,
    pub holdings: Vec<Holding>,
    pub total_value: Decimal,
}

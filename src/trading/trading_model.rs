use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::Trade;

/// Result of a successful buy or sell: the appended ledger entry and the
/// cash balance after the trade cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeReceipt {
    pub trade: Trade,
    pub new_cash: Decimal,
}

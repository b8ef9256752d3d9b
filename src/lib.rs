pub mod db;

pub mod accounts;
pub mod ledger;
pub mod positions;
pub mod quotes;
pub mod trading;

pub mod constants;
pub mod errors;
pub mod schema;

pub use accounts::{Account, AccountRepository, AccountService, NewAccount};
pub use errors::{Error, Result};
pub use ledger::{LedgerRepository, LedgerService, NewTrade, Trade};
pub use positions::{Holding, PortfolioSummary, PositionService};
pub use quotes::{Quote, QuoteGateway};
pub use trading::{TradeError, TradeExecutor, TradeReceipt};

// Module declarations
pub(crate) mod ledger_errors;
pub(crate) mod ledger_model;
pub(crate) mod ledger_repository;
pub(crate) mod ledger_service;
pub(crate) mod ledger_traits;

// Re-export the public interface
pub use ledger_model::{NewTrade, NewTradeDB, Trade, TradeDB};
pub use ledger_repository::LedgerRepository;
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};

// Re-export error types for convenience
pub use ledger_errors::{LedgerError, Result};

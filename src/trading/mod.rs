// Module declarations
pub(crate) mod trading_errors;
pub(crate) mod trading_model;
pub(crate) mod trading_service;
pub(crate) mod trading_traits;

// Re-export the public interface
pub use trading_model::TradeReceipt;
pub use trading_service::TradeExecutor;
pub use trading_traits::TradeExecutorTrait;

// Re-export error types for convenience
pub use trading_errors::TradeError;

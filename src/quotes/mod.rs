// Module declarations
pub(crate) mod quotes_errors;
pub(crate) mod quotes_model;
pub(crate) mod quotes_traits;
pub mod providers;

// Re-export the public interface
pub use providers::{IexProvider, StaticQuoteProvider};
pub use quotes_model::Quote;
pub use quotes_traits::QuoteGateway;

// Re-export error types for convenience
pub use quotes_errors::QuoteError;

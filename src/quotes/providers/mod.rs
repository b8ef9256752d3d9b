pub(crate) mod iex_provider;
pub(crate) mod static_provider;

pub use iex_provider::IexProvider;
pub use static_provider::StaticQuoteProvider;

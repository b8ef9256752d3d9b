// Module declarations
pub(crate) mod positions_model;
pub(crate) mod positions_service;
pub(crate) mod positions_traits;

// Re-export the public interface
pub use positions_model::{Holding, PortfolioSummary};
pub use positions_service::PositionService;
pub use positions_traits::PositionServiceTrait;

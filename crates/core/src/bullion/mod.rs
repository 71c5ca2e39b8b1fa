pub mod bullion_model;
pub mod bullion_service;
pub mod bullion_traits;

pub use bullion_model::BullionReport;
pub use bullion_service::BullionService;
pub use bullion_traits::BullionServiceTrait;

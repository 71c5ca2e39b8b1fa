pub mod convert_model;
pub mod convert_service;
pub mod convert_traits;

pub use convert_model::ConversionReceipt;
pub use convert_service::ConversionService;
pub use convert_traits::ConversionServiceTrait;

pub mod forex_model;
pub mod forex_service;
pub mod forex_traits;

pub use forex_model::{ForexLookup, ForexRate, ForexTable};
pub use forex_service::ForexService;
pub use forex_traits::ForexServiceTrait;

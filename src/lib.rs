pub mod config;
pub mod error;
pub mod fetch;
pub mod grade;
pub mod model;
pub mod output;
pub mod providers;
pub mod router;
pub mod service;
pub mod stats;

pub use error::{AirQualityError, Result};
pub use grade::{Grade, grade_for};
pub use model::{Region, RegionSnapshot, SubRegionReading};
pub use providers::ProviderAdapter;
pub use router::RegionRouter;
pub use service::AirQualityService;

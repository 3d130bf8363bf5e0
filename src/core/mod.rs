pub mod cargo_module;
pub mod report;
pub mod tracking;

pub use crate::domain::model::{CargoSummary, Item, ItemView};
pub use crate::domain::ports::TrackingSource;
pub use crate::utils::error::Result;

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::Manifest;
pub use core::{cargo_module::CargoModule, tracking::TrackingCounter};
pub use domain::model::{CargoSummary, Item, ItemView};
pub use domain::ports::TrackingSource;
pub use utils::error::{CargoError, Result};

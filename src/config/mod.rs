pub mod manifest;

#[cfg(feature = "cli")]
pub mod cli;

pub use manifest::Manifest;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

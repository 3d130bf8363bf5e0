use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cargo-module")]
#[command(about = "Load a cargo manifest and report weights and capacity")]
pub struct CliConfig {
    #[arg(long, default_value = "./manifest.toml")]
    pub manifest: String,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Override the capacity from the manifest"
    )]
    pub max_weight: Option<i32>,

    #[arg(long = "name", help = "List items with this name (repeatable)")]
    pub names: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "List items with these tracking numbers")]
    pub tracking: Option<Vec<u64>>,

    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("manifest", &self.manifest)?;
        for name in &self.names {
            validation::validate_non_empty_string("name", name)?;
        }
        Ok(())
    }
}

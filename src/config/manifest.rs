use crate::core::cargo_module::CargoModule;
use crate::domain::model::Item;
use crate::domain::ports::TrackingSource;
use crate::utils::error::{CargoError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub module: ModuleConfig,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    pub logging: Option<LoggingConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub max_weight: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    pub weight: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Weights are accepted as-is unless this is set.
    pub reject_negative_weights: Option<bool>,
}

impl Manifest {
    /// 從 TOML 檔案載入清單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CargoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析清單
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CargoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_WEIGHT})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn rejects_negative_weights(&self) -> bool {
        self.validation
            .as_ref()
            .and_then(|v| v.reject_negative_weights)
            .unwrap_or(false)
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.as_ref().map(|l| l.format).unwrap_or_default()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// 建立模組並依序載入所有項目
    pub fn build_module<S: TrackingSource + ?Sized>(&self, source: &S) -> CargoModule {
        self.build_module_with_capacity(source, self.module.max_weight)
    }

    pub fn build_module_with_capacity<S: TrackingSource + ?Sized>(
        &self,
        source: &S,
        max_weight: i32,
    ) -> CargoModule {
        let mut module = CargoModule::new(max_weight);
        for entry in &self.items {
            module.add(Item::with_source(source, entry.name.as_str(), entry.weight));
        }
        tracing::debug!(
            "Loaded {} items into module (capacity {})",
            module.item_count(),
            max_weight
        );
        module
    }
}

impl Validate for Manifest {
    fn validate(&self) -> Result<()> {
        for (index, entry) in self.items.iter().enumerate() {
            validation::validate_non_empty_string(&format!("items[{}].name", index), &entry.name)?;
            if self.rejects_negative_weights() {
                validation::validate_non_negative(&format!("items[{}].weight", index), entry.weight)?;
            } else if entry.weight < 0 {
                tracing::warn!(
                    "items[{}] '{}' has negative weight {}",
                    index,
                    entry.name,
                    entry.weight
                );
            }
        }

        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}

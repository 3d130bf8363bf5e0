use thiserror::Error;

#[derive(Error, Debug)]
pub enum CargoError {
    #[error("Item with tracking number {tracking} is already stored")]
    DuplicateTracking { tracking: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CargoError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CargoError::DuplicateTracking { tracking } => {
                format!("Item #{} is already loaded in the module", tracking)
            }
            CargoError::IoError(e) => format!("Could not read or write a file: {}", e),
            CargoError::SerializationError(e) => format!("Could not serialize output: {}", e),
            CargoError::ConfigValidationError { field, .. } => {
                format!("The manifest could not be parsed ({})", field)
            }
            CargoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CargoError::DuplicateTracking { .. } => {
                "Create a new Item instead of adding a clone of a stored one"
            }
            CargoError::IoError(_) => "Check that the manifest path exists and is readable",
            CargoError::SerializationError(_) => "Retry without --json to get the text report",
            CargoError::ConfigValidationError { .. } => {
                "Check the manifest TOML syntax and section names"
            }
            CargoError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the manifest and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CargoError>;

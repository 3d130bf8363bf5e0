use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// 依 verbose 旗標決定預設的過濾規則，RUST_LOG 優先
pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        filter_for_level("debug")
    } else {
        filter_for_level("info")
    }
}

pub fn filter_for_level(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cargo_module={},warn", level)))
}

pub fn init_logger(filter: EnvFilter, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(filter);

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let result = match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Logger already initialised: {}", e);
    }
}

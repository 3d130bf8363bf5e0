use anyhow::Context;
use clap::Parser;
use cargo_module::core::{report, tracking};
use cargo_module::utils::{logger, validation::Validate};
use cargo_module::{CliConfig, Manifest};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證參數
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let manifest = match Manifest::from_file(&config.manifest) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌：--verbose 優先於清單設定
    let filter = match manifest.log_level() {
        Some(level) if !config.verbose => logger::filter_for_level(level),
        _ => logger::default_filter(config.verbose),
    };
    logger::init_logger(filter, manifest.log_format());

    tracing::info!("Loaded manifest {}", config.manifest);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = manifest.validate() {
        tracing::error!("Manifest validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let max_weight = config.max_weight.unwrap_or(manifest.module.max_weight);
    let module = manifest.build_module_with_capacity(tracking::global(), max_weight);
    let summary = module.summary();

    if summary.is_over_weight {
        tracing::warn!(
            "Module is overweight: {} > {}",
            summary.total_weight,
            summary.max_weight
        );
    }

    if config.json {
        let json = summary.to_json().context("serializing summary")?;
        println!("{}", json);
    } else {
        print!("{}", report::render_summary(&summary));
    }

    if !config.names.is_empty() {
        let groups = module
            .items_by_names(Some(config.names.as_slice()))
            .unwrap_or_default();
        print!("{}", report::render_by_name(&config.names, &groups));
    }

    if let Some(found) = module.items_by_tracking_numbers(config.tracking.as_deref()) {
        println!("[tracking]");
        print!("{}", report::render_items(&found));
    }

    Ok(())
}

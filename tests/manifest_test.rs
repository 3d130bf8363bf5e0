use anyhow::Result;
use cargo_module::utils::validation::Validate;
use cargo_module::{CargoError, Manifest, TrackingCounter};
use tempfile::TempDir;

/// 從檔案載入清單並建立模組
#[test]
fn test_manifest_file_to_module() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let manifest_path = temp_dir.path().join("hold.toml");

    std::fs::write(
        &manifest_path,
        r#"
[module]
max_weight = 50

[[items]]
name = "crate"
weight = 20

[[items]]
name = "crate"
weight = 25

[[items]]
name = "drum"
weight = 10

[logging]
level = "debug"
"#,
    )?;

    let manifest = Manifest::from_file(&manifest_path)?;
    manifest.validate()?;

    let counter = TrackingCounter::starting_at(1000);
    let module = manifest.build_module(&counter);

    assert_eq!(module.item_count(), 3);
    assert_eq!(module.total_weight(), 55);
    assert!(module.is_over_weight());
    assert_eq!(module.items_by_name("crate").len(), 2);
    assert_eq!(module.heaviest_named("crate").unwrap().tracking(), 1001);
    assert_eq!(module.average_weight_named("crate"), 22.5);

    let summary = module.summary();
    let json = serde_json::to_value(&summary)?;
    assert_eq!(json["item_count"], 3);
    assert_eq!(json["is_over_weight"], true);
    assert_eq!(json["heaviest"]["name"], "crate");
    Ok(())
}

#[test]
fn test_capacity_override() -> Result<()> {
    let manifest = Manifest::from_toml_str(
        r#"
[module]
max_weight = 5

[[items]]
name = "crate"
weight = 8
"#,
    )?;

    let counter = TrackingCounter::new();
    assert!(manifest.build_module(&counter).is_over_weight());
    assert!(!manifest
        .build_module_with_capacity(&counter, 8)
        .is_over_weight());
    Ok(())
}

#[test]
fn test_missing_manifest_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Manifest::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, CargoError::IoError(_)));
}

#[test]
fn test_blank_item_name_fails_validation() -> Result<()> {
    let manifest = Manifest::from_toml_str(
        r#"
[module]
max_weight = 5

[[items]]
name = "  "
weight = 1
"#,
    )?;
    assert!(manifest.validate().is_err());
    Ok(())
}

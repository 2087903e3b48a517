//! Config load/save round trips through real files

use shapekit_settings::{Config, SettingsError, SettingsManager};

#[test]
fn test_save_and_load_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::new();
    config.canvas.width = 1024.0;
    config.style.selection_color = "#ff0000".to_string();
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_save_and_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::new();
    config.canvas.grid_size = 20.0;
    config.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"grid_size\": 20.0"));
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[style]\nfill_opacity = 3.0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));

    let mut bad = Config::new();
    bad.canvas.height = 0.0;
    assert!(bad.save_to_file(&path).is_err());
}

#[test]
fn test_tiny_grid_size_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[canvas]\ngrid_size = 1e-9\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::InvalidSetting { ref key, .. } if key == "canvas.grid_size"
    ));

    let mut manager = SettingsManager::with_path(&path);
    assert_eq!(manager.load_or_default().canvas.grid_size, 5.0);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let err = Config::new().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

#[test]
fn test_manager_creates_directory_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("shapekit").join("config.toml");

    let mut manager = SettingsManager::with_path(&path);
    manager.config_mut().style.fill_opacity = 0.25;
    manager.save().unwrap();
    assert!(path.exists());

    let mut reloaded = SettingsManager::with_path(&path);
    assert_eq!(reloaded.load_or_default().style.fill_opacity, 0.25);
}

#[test]
fn test_manager_falls_back_on_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();

    let mut manager = SettingsManager::with_path(&path);
    assert_eq!(manager.load_or_default(), &Config::default());
}

//! Configuration loading tests

use std::fs;

use capreg_domain::error::Error;
use capreg_infrastructure::config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert!(config.registry.disabled_providers.is_empty());
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("capreg.toml");
    fs::write(
        &config_path,
        r#"
[logging]
level = "debug"
json_format = true

[registry]
disabled_providers = ["local-host"]
"#,
    )
    .expect("Failed to write config");

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .expect("Failed to load config");

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert_eq!(config.registry.disabled_providers, vec!["local-host"]);
    assert!(config.registry.is_disabled("local-host"));
    assert!(!config.registry.is_disabled("system-clock"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("capreg.toml");
    fs::write(&config_path, "[logging]\njson_format = true\n").expect("Failed to write config");

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .expect("Failed to load config");

    assert_eq!(config.logging.level, "info");
    assert!(config.logging.json_format);
    assert_eq!(config.registry, RegistryConfig::default());
}

#[test]
fn test_missing_explicit_file_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("typo.toml");

    let result = ConfigLoader::new().with_config_path(&missing).load();

    match result {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains("not found"));
            assert!(message.contains("typo.toml"));
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn test_invalid_log_level_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("capreg.toml");
    fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").expect("Failed to write config");

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_empty_disabled_provider_name_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("capreg.toml");
    fs::write(&config_path, "[registry]\ndisabled_providers = [\" \"]\n")
        .expect("Failed to write config");

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    match result {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("empty")),
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("capreg.toml");
    fs::write(&config_path, "[logging\nlevel = ").expect("Failed to write config");

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.starts_with("Failed to extract configuration"));
            assert!(source.is_some());
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("saved.toml");
    let config = AppConfig {
        logging: LoggingConfig {
            level: "warn".to_string(),
            json_format: false,
        },
        registry: RegistryConfig {
            disabled_providers: vec!["uuid-v4".to_string()],
        },
    };

    let loader = ConfigLoader::new().with_config_path(&config_path);
    loader
        .save_to_file(&config, &config_path)
        .expect("Failed to save config");
    let reloaded = loader.load().expect("Failed to reload config");

    assert_eq!(reloaded, config);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing").join("capreg.toml");

    let result = ConfigLoader::new().save_to_file(&AppConfig::default(), &path);

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::str::FromStr;

use lexibridge::app_config::{Config, LogLevel};
use log::LevelFilter;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "es");
    assert_eq!(config.target_language, "he");
    assert_eq!(config.bridge_languages, vec!["en", "fr", "de"]);
    assert!(config.alignment.enable_triangulation);
    assert!(config.alignment.enable_fuzzy);
    assert_eq!(config.alignment.fuzzy_threshold, 80);
    assert_eq!(config.alignment.progress_interval, 1000);
    assert_eq!(config.clustering.similarity_threshold, 70);
    assert_eq!(config.clustering.max_senses, 10);
    assert!(config.validation.enabled);
    assert!(config.cleaning.filter_proper_nouns);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.source_language = "xx".to_string();
    assert!(config.validate().is_err());
    config.source_language = "spa".to_string();
    assert!(config.validate().is_ok());

    // Same language on both sides
    config.target_language = "es".to_string();
    assert!(config.validate().is_err());
    config.target_language = "he".to_string();

    config.bridge_languages.push("".to_string());
    assert!(config.validate().is_err());
    config.bridge_languages.pop();

    config.alignment.fuzzy_threshold = 101;
    assert!(config.validate().is_err());
    config.alignment.fuzzy_threshold = 80;

    config.clustering.max_senses = 0;
    assert!(config.validate().is_err());
    config.clustering.max_senses = 10;

    config.validation.min_ipa_coverage = 1.5;
    assert!(config.validate().is_err());
}

/// Test that a partial config file picks up defaults for the rest
#[test]
fn test_from_file_withPartialConfig_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "lexibridge.json",
        r#"{"alignment": {"fuzzy_threshold": 90}, "log_level": "debug"}"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.alignment.fuzzy_threshold, 90);
    assert!(config.alignment.enable_fuzzy);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.target_language, "he");

    Ok(())
}

/// Test that load_or_create writes a default file once
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf").join("lexibridge.json");

    let created = Config::load_or_create(&path)?;
    assert!(path.exists());

    let loaded = Config::load_or_create(&path)?;
    assert_eq!(created, loaded);

    Ok(())
}

/// Test that bridge languages flow into the alignment settings
#[test]
fn test_pipeline_config_withCustomBridgeLanguages_shouldCopyThem() {
    let config = Config {
        bridge_languages: vec!["fr".to_string()],
        ..Config::default()
    };

    let pipeline = config.pipeline_config();

    assert_eq!(pipeline.alignment_config.bridge_languages, vec!["fr"]);
    assert_eq!(pipeline.source_language, "es");
    assert!(pipeline.enable_cleaning);
}

#[test]
fn test_log_level_fromStr_shouldAcceptAliases() {
    assert_eq!(LogLevel::from_str("WARNING").unwrap(), LogLevel::Warn);
    assert_eq!(LogLevel::from_str("trace").unwrap().to_level_filter(), LevelFilter::Trace);
    assert!(LogLevel::from_str("verbose").is_err());
}

use anyhow::{Context, Result, anyhow};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::alignment::AlignmentConfig;
use crate::alignment::engine::default_bridge_languages;
use crate::clustering::ClusteringConfig;
use crate::file_utils::FileManager;
use crate::language_utils::{language_codes_match, validate_language_code};
use crate::pipeline::PipelineConfig;
use crate::validation::ValidationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "lexibridge.json";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Headword language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Translation language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Bridge languages used for triangulation, in lookup order
    #[serde(default = "default_bridge_languages")]
    pub bridge_languages: Vec<String>,

    /// Alignment config
    #[serde(default)]
    pub alignment: AlignmentConfig,

    /// Polysemy clustering config
    #[serde(default)]
    pub clustering: ClusteringConfig,

    /// Data validation config
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Source cleaning config
    #[serde(default)]
    pub cleaning: CleaningConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Source record cleaning
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CleaningConfig {
    // @field: Drop proper nouns before alignment
    #[serde(default = "default_true")]
    pub filter_proper_nouns: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            filter_proper_nouns: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching `log` level filter
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

// Implement FromStr trait for LogLevel
impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(anyhow!("Invalid log level: {}", s)),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_source_language() -> String {
    "es".to_string()
}

fn default_target_language() -> String {
    "he".to_string()
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Load a configuration file, writing the default one first when it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if FileManager::file_exists(path) {
            return Self::from_file(path);
        }

        info!("Config file not found, creating default at {}", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        FileManager::write_to_file(path, &json)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        for code in std::iter::once(&self.source_language)
            .chain(std::iter::once(&self.target_language))
            .chain(self.bridge_languages.iter())
        {
            validate_language_code(code)?;
        }
        if language_codes_match(&self.source_language, &self.target_language) {
            return Err(anyhow!(
                "Source and target languages must differ (both are '{}')",
                self.source_language
            ));
        }

        if self.alignment.fuzzy_threshold > 100 {
            return Err(anyhow!(
                "Fuzzy threshold must be between 0 and 100, got {}",
                self.alignment.fuzzy_threshold
            ));
        }
        if self.clustering.similarity_threshold > 100 {
            return Err(anyhow!(
                "Clustering threshold must be between 0 and 100, got {}",
                self.clustering.similarity_threshold
            ));
        }
        if self.clustering.max_senses < 1 {
            return Err(anyhow!("Clustering max_senses must be at least 1"));
        }

        for (name, value) in [
            ("max_missing_pos_rate", self.validation.max_missing_pos_rate),
            ("max_empty_definition_rate", self.validation.max_empty_definition_rate),
            ("max_non_hebrew_rate", self.validation.max_non_hebrew_rate),
            ("min_ipa_coverage", self.validation.min_ipa_coverage),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(anyhow!("Validation {} must be between 0 and 1, got {}", name, value));
            }
        }

        Ok(())
    }

    /// Pipeline settings derived from this configuration
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(&self.source_language, &self.target_language)
            .with_cleaning(self.cleaning.filter_proper_nouns)
            .with_validation(self.validation.enabled)
            .with_alignment_config(AlignmentConfig {
                bridge_languages: self.bridge_languages.clone(),
                ..self.alignment.clone()
            })
            .with_clustering_config(self.clustering.clone())
            .with_validation_config(self.validation.clone())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            bridge_languages: default_bridge_languages(),
            alignment: AlignmentConfig::default(),
            clustering: ClusteringConfig::default(),
            validation: ValidationConfig::default(),
            cleaning: CleaningConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

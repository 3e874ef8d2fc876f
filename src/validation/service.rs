/*!
 * Validation service that orchestrates all validators.
 *
 * This module provides the shared issue/report types and a unified
 * interface the pipeline calls before and after the alignment engine.
 */

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;
use crate::dictionary::EntryRecord;
use crate::enrichment::EnrichedAlignment;
use crate::errors::QualityError;
use crate::lexicon::WordEntry;

use super::alignments::{validate_alignments, validate_enriched};
use super::dictionary::validate_dictionary;
use super::records::validate_word_entries;

/// Maximum number of issues written to the log per report
const MAX_LOGGED_ISSUES: usize = 20;

/// Configuration for the validation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Whether validation is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether critical issues abort the run
    #[serde(default = "default_true")]
    pub fail_on_critical: bool,

    /// Highest tolerated share of records without a POS tag
    #[serde(default = "default_max_missing_pos_rate")]
    pub max_missing_pos_rate: f64,

    /// Highest tolerated share of records without definitions
    #[serde(default = "default_max_empty_definition_rate")]
    pub max_empty_definition_rate: f64,

    /// Highest tolerated share of Hebrew records without Hebrew script
    #[serde(default = "default_max_non_hebrew_rate")]
    pub max_non_hebrew_rate: f64,

    /// Lowest acceptable IPA coverage
    #[serde(default = "default_min_ipa_coverage")]
    pub min_ipa_coverage: f64,
}

fn default_true() -> bool {
    true
}

fn default_max_missing_pos_rate() -> f64 {
    0.2
}

fn default_max_empty_definition_rate() -> f64 {
    0.1
}

fn default_max_non_hebrew_rate() -> f64 {
    0.05
}

fn default_min_ipa_coverage() -> f64 {
    0.8
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fail_on_critical: true,
            max_missing_pos_rate: default_max_missing_pos_rate(),
            max_empty_definition_rate: default_max_empty_definition_rate(),
            max_non_hebrew_rate: default_max_non_hebrew_rate(),
            min_ipa_coverage: default_min_ipa_coverage(),
        }
    }
}

/// A validation issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Check that found the issue
    pub validation_type: String,
    /// Severity of the issue
    pub severity: IssueSeverity,
    /// Description of the issue
    pub message: String,
}

impl ValidationIssue {
    /// Create a warning issue
    pub fn warning(validation_type: &str, message: String) -> Self {
        Self {
            validation_type: validation_type.to_string(),
            severity: IssueSeverity::Warning,
            message,
        }
    }

    /// Create an error issue
    pub fn error(validation_type: &str, message: String) -> Self {
        Self {
            validation_type: validation_type.to_string(),
            severity: IssueSeverity::Error,
            message,
        }
    }
}

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Data is usable but worth a look
    Warning,
    /// Data is unusable downstream
    Error,
}

/// Issues found by one validator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// What was validated (e.g. "es entries")
    pub subject: String,
    /// Number of items inspected
    pub total: usize,
    /// Issues found
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(subject: &str, total: usize) -> Self {
        Self {
            subject: subject.to_string(),
            total,
            issues: Vec::new(),
        }
    }

    pub fn warn(&mut self, validation_type: &str, message: String) {
        self.issues.push(ValidationIssue::warning(validation_type, message));
    }

    pub fn error(&mut self, validation_type: &str, message: String) {
        self.issues.push(ValidationIssue::error(validation_type, message));
    }

    /// Whether no issues were found
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.count(IssueSeverity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.count(IssueSeverity::Error)
    }

    fn count(&self, severity: IssueSeverity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Messages of the error-level issues
    pub fn error_messages(&self) -> Vec<String> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .map(|i| i.message.clone())
            .collect()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Validation of {}: {} checked, {} warnings, {} errors",
            self.subject,
            self.total,
            self.warning_count(),
            self.error_count()
        )
    }

    /// Write the issues (capped) and the summary to the log
    pub fn log(&self) {
        if self.passed() {
            info!("✓ Validation passed for {} ({} checked)", self.subject, self.total);
            return;
        }

        warn!("Data quality issues in {} ({} found):", self.subject, self.issues.len());
        for issue in self.issues.iter().take(MAX_LOGGED_ISSUES) {
            warn!("  - [{}] {}", issue.validation_type, issue.message);
        }
        if self.issues.len() > MAX_LOGGED_ISSUES {
            warn!("  ... and {} more", self.issues.len() - MAX_LOGGED_ISSUES);
        }
    }
}

/// Share of `count` in `total`, 0.0 for an empty total
pub(crate) fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Validation service for dictionary data
#[derive(Debug, Clone, Default)]
pub struct ValidationService {
    config: ValidationConfig,
}

impl ValidationService {
    /// Create a new validation service with default configuration
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Create a new validation service with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Check if validation is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one source collection
    pub fn validate_records(&self, entries: &[WordEntry], lang_code: &str) -> Result<ValidationReport, QualityError> {
        self.run(|| validate_word_entries(entries, lang_code, &self.config), lang_code, entries.len())
    }

    /// Validate the engine output
    pub fn validate_alignments(&self, alignments: &[Alignment]) -> Result<ValidationReport, QualityError> {
        self.run(|| validate_alignments(alignments, &self.config), "alignments", alignments.len())
    }

    /// Validate enriched alignments
    pub fn validate_enriched(&self, enriched: &[EnrichedAlignment]) -> Result<ValidationReport, QualityError> {
        self.run(|| validate_enriched(enriched, &self.config), "enriched entries", enriched.len())
    }

    /// Validate the structured dictionary
    pub fn validate_dictionary(&self, entries: &[EntryRecord]) -> Result<ValidationReport, QualityError> {
        self.run(|| validate_dictionary(entries, &self.config), "dictionary", entries.len())
    }

    fn run<F>(&self, validator: F, subject: &str, total: usize) -> Result<ValidationReport, QualityError>
    where
        F: FnOnce() -> Result<ValidationReport, QualityError>,
    {
        if !self.config.enabled {
            return Ok(ValidationReport::new(subject, total));
        }
        let report = validator()?;
        report.log();
        Ok(report)
    }
}

/*!
 * Validation module for dictionary data quality.
 *
 * This module checks data at the boundaries of the alignment engine:
 * - Source records (headwords, POS tags, definitions, Hebrew script)
 * - Alignment rows (critical fields, duplicates, confidence, IPA coverage)
 * - Enriched rows (example shape)
 * - The structured dictionary (ids, senses, languages)
 *
 * Hard violations come back as `QualityError`; everything else is collected
 * as issues in a `ValidationReport`. The engine never calls these checks.
 *
 * # Architecture
 *
 * - `records`: Validates per-language source collections
 * - `alignments`: Validates alignment and enriched rows
 * - `dictionary`: Validates the final entry structure
 * - `report`: Overall quality score and verdict
 * - `service`: Orchestrates all validators
 */

pub mod alignments;
pub mod dictionary;
pub mod records;
pub mod report;
pub mod service;

// Re-export main types
pub use report::{PolysemyMetrics, QualityReport, Verdict};
pub use service::{IssueSeverity, ValidationConfig, ValidationIssue, ValidationReport, ValidationService};

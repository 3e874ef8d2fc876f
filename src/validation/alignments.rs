/*!
 * Validation of alignment output.
 */

use std::collections::HashMap;

use super::service::{ValidationConfig, ValidationReport, rate};
use crate::alignment::Alignment;
use crate::enrichment::EnrichedAlignment;
use crate::errors::QualityError;
use crate::language_utils::contains_hebrew;

/// Number of rows sharing an `(es_word, he_word, sense_id)` triple with another row.
pub fn duplicate_count<'a>(alignments: impl Iterator<Item = &'a Alignment>) -> usize {
    let mut counts: HashMap<(&str, &str, u32), usize> = HashMap::new();
    for alignment in alignments {
        *counts.entry(alignment.triple()).or_insert(0) += 1;
    }
    counts.values().filter(|&&n| n > 1).sum()
}

/// Check alignment rows.
///
/// Empty `es_word` / `he_word` are critical. Invalid sense ids, duplicate
/// triples, fuzzy confidence outside `[0, 1]`, Hebrew words without Hebrew
/// script and low IPA coverage are warnings.
pub fn validate_alignments(
    alignments: &[Alignment],
    config: &ValidationConfig,
) -> Result<ValidationReport, QualityError> {
    let total = alignments.len();
    let mut report = ValidationReport::new("alignments", total);

    for (field, count) in [
        ("es_word", alignments.iter().filter(|a| a.es_word.is_empty()).count()),
        ("he_word", alignments.iter().filter(|a| a.he_word.is_empty()).count()),
    ] {
        if count > 0 {
            report.error("fields", format!("Found {} empty values in critical field '{}'", count, field));
        }
    }

    let invalid_ids = alignments.iter().filter(|a| a.sense_id < 1).count();
    if invalid_ids > 0 {
        report.warn("sense_id", format!("Found {} invalid sense_ids (< 1)", invalid_ids));
    }

    let duplicates = duplicate_count(alignments.iter());
    if duplicates > 0 {
        report.warn("duplicates", format!("Found {} duplicate alignments", duplicates));
    }

    let bad_confidence = alignments
        .iter()
        .filter(|a| a.match_type.is_fuzzy())
        .filter(|a| a.confidence.is_none_or(|c| !(0.0..=1.0).contains(&c)))
        .count();
    if bad_confidence > 0 {
        report.warn("confidence", format!("Found {} invalid confidence scores", bad_confidence));
    }

    let non_hebrew = alignments.iter().filter(|a| !contains_hebrew(&a.he_word)).count();
    if non_hebrew > 0 {
        report.warn(
            "script",
            format!("Found {} entries without Hebrew characters in he_word", non_hebrew),
        );
    }

    let max_missing = 1.0 - config.min_ipa_coverage;
    let missing_es_ipa = alignments.iter().filter(|a| a.es_ipa.is_empty()).count();
    if rate(missing_es_ipa, total) > max_missing {
        report.warn(
            "ipa",
            format!("Low Spanish IPA coverage: {}/{}", total - missing_es_ipa, total),
        );
    }
    let missing_he_ipa = alignments.iter().filter(|a| a.he_ipa.is_empty()).count();
    if rate(missing_he_ipa, total) > max_missing {
        report.warn(
            "ipa",
            format!("Low Hebrew IPA coverage: {}/{}", total - missing_he_ipa, total),
        );
    }

    if report.error_count() > 0 && config.fail_on_critical {
        report.log();
        return Err(QualityError::CriticalIssues(report.error_messages()));
    }

    Ok(report)
}

/// Check enriched alignments: the alignment checks plus example shape.
pub fn validate_enriched(
    enriched: &[EnrichedAlignment],
    config: &ValidationConfig,
) -> Result<ValidationReport, QualityError> {
    let alignments: Vec<Alignment> = enriched.iter().map(|e| e.alignment.clone()).collect();
    let mut report = validate_alignments(&alignments, config)?;
    report.subject = "enriched entries".to_string();

    let invalid_examples = enriched
        .iter()
        .flat_map(|e| e.examples.iter())
        .filter(|ex| ex.es.trim().is_empty() || ex.he.trim().is_empty())
        .count();
    if invalid_examples > 0 {
        report.warn(
            "examples",
            format!("Found {} examples missing 'es' or 'he' text", invalid_examples),
        );
    }

    let bad_clusters = enriched.iter().filter(|e| e.semantic_cluster < 1).count();
    if bad_clusters > 0 {
        report.warn("cluster", format!("Found {} invalid semantic clusters (< 1)", bad_clusters));
    }

    Ok(report)
}

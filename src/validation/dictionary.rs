/*!
 * Validation of the structured dictionary.
 */

use log::info;

use super::service::{ValidationConfig, ValidationReport, rate};
use crate::dictionary::EntryRecord;
use crate::errors::QualityError;

/// Languages an entry may be tagged with
const ENTRY_LANGUAGES: &[&str] = &["es", "he"];

/// Share of entries with structural issues tolerated before failing
const MAX_STRUCTURAL_RATE: f64 = 0.01;

/// Check the final entry list.
///
/// Entries without an id or headword are structural issues; more than 1% of
/// them fails the check. Empty sense lists, sense ids below 1, unknown entry
/// languages and low Hebrew IPA coverage are reported.
pub fn validate_dictionary(
    entries: &[EntryRecord],
    config: &ValidationConfig,
) -> Result<ValidationReport, QualityError> {
    info!("Validating final dictionary structure ({} entries)...", entries.len());
    let mut report = ValidationReport::new("dictionary", entries.len());
    let mut structural = 0;

    for (idx, record) in entries.iter().enumerate() {
        if record.id.trim().is_empty() {
            structural += 1;
            report.error("structure", format!("Entry {}: missing 'id'", idx));
        }
        let entry = &record.entry;
        if entry.word.trim().is_empty() {
            structural += 1;
            report.error("structure", format!("Entry {} ({}): missing 'word'", idx, record.id));
        }
        if entry.senses.is_empty() {
            report.warn("senses", format!("Entry {} ({}): empty senses", idx, record.id));
        }
        for (sense_idx, sense) in entry.senses.iter().enumerate() {
            if sense.sense_id < 1 {
                report.warn("senses", format!("Entry {}, sense {}: invalid sense_id", idx, sense_idx));
            }
        }
        if !ENTRY_LANGUAGES.contains(&entry.language.as_str()) {
            report.warn("language", format!("Entry {}: invalid language '{}'", idx, entry.language));
        }
    }

    let senses: Vec<_> = entries.iter().flat_map(|r| r.entry.senses.iter()).collect();
    let with_ipa = senses
        .iter()
        .filter(|s| !s.ipa_hebrew.is_empty() && s.ipa_hebrew != "None")
        .count();
    let coverage = rate(with_ipa, senses.len());
    info!(
        "Dictionary: {} entries, {} senses, Hebrew IPA coverage {:.1}%",
        entries.len(),
        senses.len(),
        coverage * 100.0
    );
    if coverage < config.min_ipa_coverage {
        report.warn(
            "ipa",
            format!(
                "Low IPA coverage: {:.1}% (expected >= {:.0}%)",
                coverage * 100.0,
                config.min_ipa_coverage * 100.0
            ),
        );
    }

    let limit = (entries.len() as f64 * MAX_STRUCTURAL_RATE) as usize;
    if structural > limit && config.fail_on_critical {
        report.log();
        return Err(QualityError::StructuralIssues {
            count: structural,
            limit,
        });
    }

    Ok(report)
}

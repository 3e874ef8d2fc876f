/*!
 * Validation of per-language source records.
 */

use log::info;

use super::service::{ValidationConfig, ValidationReport, rate};
use crate::errors::QualityError;
use crate::language_utils::{contains_hebrew, language_codes_match, validate_language_code};
use crate::lexicon::WordEntry;

/// Check a source collection before it reaches the engine.
///
/// Empty headwords are critical. High rates of missing POS tags, missing
/// definitions and (for Hebrew) headwords without Hebrew script are
/// warnings.
pub fn validate_word_entries(
    entries: &[WordEntry],
    lang_code: &str,
    config: &ValidationConfig,
) -> Result<ValidationReport, QualityError> {
    validate_language_code(lang_code).map_err(|_| QualityError::InvalidLanguage(lang_code.to_string()))?;
    info!("Validating {} entries ({} rows)...", lang_code, entries.len());

    let total = entries.len();
    let mut report = ValidationReport::new(&format!("{} entries", lang_code), total);

    let empty_words = entries.iter().filter(|e| e.word.trim().is_empty()).count();
    if empty_words > 0 {
        report.error("word", format!("Found {} entries with empty 'word' field", empty_words));
    }

    let missing_pos = entries
        .iter()
        .filter(|e| e.pos.is_empty() || e.pos == "unknown")
        .count();
    if rate(missing_pos, total) > config.max_missing_pos_rate {
        report.warn(
            "pos",
            format!(
                "High rate of missing POS tags: {}/{} ({:.1}%)",
                missing_pos,
                total,
                rate(missing_pos, total) * 100.0
            ),
        );
    }

    let empty_defs = entries.iter().filter(|e| e.definitions.is_empty()).count();
    if rate(empty_defs, total) > config.max_empty_definition_rate {
        report.warn(
            "definitions",
            format!(
                "High rate of empty definitions: {}/{} ({:.1}%)",
                empty_defs,
                total,
                rate(empty_defs, total) * 100.0
            ),
        );
    }

    if language_codes_match(lang_code, "he") {
        let non_hebrew = entries.iter().filter(|e| !contains_hebrew(&e.word)).count();
        if rate(non_hebrew, total) > config.max_non_hebrew_rate {
            report.warn(
                "script",
                format!("High rate of non-Hebrew words in Hebrew dataset: {}/{}", non_hebrew, total),
            );
        }
    }

    if empty_words > 0 && config.fail_on_critical {
        report.log();
        return Err(QualityError::EmptyHeadword {
            lang: lang_code.to_string(),
            count: empty_words,
        });
    }

    Ok(report)
}

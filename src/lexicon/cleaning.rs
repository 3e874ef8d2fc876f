/*!
 * Removal of proper nouns (names, places) from source collections.
 */

use log::info;

use super::model::WordEntry;

/// POS tags marking proper nouns
const PROPER_NOUN_TAGS: &[&str] = &["name", "proper noun", "propn", "proper_noun"];

/// Capitalised headwords that are ordinary vocabulary
const COMMON_ABBREVIATIONS: &[&str] = &[
    "ISBN", "USA", "UK", "TV", "PC", "CD", "DVD", "GPS", "SMS", "HTTP", "HTML", "CSS", "PDF",
    "API", "URL", "USB", "RAM",
];

/// Drop entries tagged as proper nouns or whose headword looks like one.
pub fn filter_proper_nouns(entries: Vec<WordEntry>) -> Vec<WordEntry> {
    let total = entries.len();

    let by_pos: Vec<WordEntry> = entries
        .into_iter()
        .filter(|e| !PROPER_NOUN_TAGS.contains(&e.pos.to_lowercase().as_str()))
        .collect();
    info!("Removed {} entries with proper noun POS tags", total - by_pos.len());

    let before_caps = by_pos.len();
    let kept: Vec<WordEntry> = by_pos
        .into_iter()
        .filter(|e| !is_likely_proper_noun(&e.word))
        .collect();
    info!("Removed {} additional entries with capitalization", before_caps - kept.len());

    if total > 0 {
        info!(
            "Total kept: {} / {} ({:.1}%)",
            kept.len(),
            total,
            100.0 * kept.len() as f64 / total as f64
        );
    }

    kept
}

/// Capitalised headword that is not a known abbreviation.
pub fn is_likely_proper_noun(word: &str) -> bool {
    if COMMON_ABBREVIATIONS.contains(&word) {
        return false;
    }
    word.chars().next().is_some_and(char::is_uppercase)
}

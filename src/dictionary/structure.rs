use log::info;
use std::collections::HashMap;

use super::model::{DictionaryEntry, EntryRecord, Sense};
use crate::enrichment::EnrichedAlignment;

/// Language tag of the headwords in the structured dictionary
pub const ENTRY_LANGUAGE: &str = "es";

/// Group enriched alignments into one entry per Spanish headword.
///
/// Entries follow the order in which each headword first appears; senses
/// keep alignment order. The entry IPA comes from the first alignment of
/// the word.
pub fn structure_senses(enriched: &[EnrichedAlignment]) -> Vec<EntryRecord> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<DictionaryEntry> = Vec::new();

    for item in enriched {
        let word = item.alignment.es_word.as_str();
        let pos = *positions.entry(word).or_insert_with(|| {
            entries.push(DictionaryEntry {
                word: word.to_string(),
                ipa: item.alignment.es_ipa.clone(),
                language: ENTRY_LANGUAGE.to_string(),
                etymology: None,
                senses: Vec::new(),
            });
            entries.len() - 1
        });
        entries[pos].senses.push(Sense::from(item));
    }

    info!(
        "Structured {} dictionary entries with {} total senses",
        entries.len(),
        enriched.len()
    );
    entries.into_iter().map(EntryRecord::new).collect()
}

/*!
 * The dictionary document written to disk.
 */

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::model::EntryRecord;

pub const LANGUAGE_DIRECTION: &str = "es-he | he-es";
pub const FORMAT_VERSION: &str = "1.0";
pub const DATA_SOURCE: &str = "custom (Wiktionary + Tatoeba)";

/// Document header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryMetadata {
    pub language_direction: String,
    pub version: String,
    pub source: String,
    /// `YYYY-MM-DD`
    pub generated_at: String,
    pub entry_count: usize,
    pub sense_count: usize,
    /// SHA-256 of the serialized entries
    pub checksum: String,
}

/// The full dictionary document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryDocument {
    pub metadata: DictionaryMetadata,
    pub entries: Vec<EntryRecord>,
}

impl DictionaryDocument {
    /// Pretty-printed JSON, non-ASCII text kept verbatim.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize dictionary")
    }
}

/// Wrap entries with metadata dated today.
pub fn format_dictionary(entries: Vec<EntryRecord>) -> Result<DictionaryDocument> {
    format_dictionary_at(entries, Local::now().date_naive())
}

/// Wrap entries with metadata for a given generation date.
pub fn format_dictionary_at(entries: Vec<EntryRecord>, date: NaiveDate) -> Result<DictionaryDocument> {
    let sense_count = entries.iter().map(|r| r.entry.senses.len()).sum();
    let checksum = entries_checksum(&entries)?;

    info!(
        "Final dictionary contains {} unique words with {} total senses",
        entries.len(),
        sense_count
    );

    Ok(DictionaryDocument {
        metadata: DictionaryMetadata {
            language_direction: LANGUAGE_DIRECTION.to_string(),
            version: FORMAT_VERSION.to_string(),
            source: DATA_SOURCE.to_string(),
            generated_at: date.format("%Y-%m-%d").to_string(),
            entry_count: entries.len(),
            sense_count,
            checksum,
        },
        entries,
    })
}

/// Compute the SHA-256 hex digest of the serialized entries
pub fn entries_checksum(entries: &[EntryRecord]) -> Result<String> {
    let bytes = serde_json::to_vec(entries).context("Failed to serialize entries for checksum")?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

/*!
 * Final dictionary entries.
 */

use serde::{Deserialize, Serialize};

use crate::enrichment::{EnrichedAlignment, ExampleSentence};

/// One meaning of a Spanish headword with its Hebrew equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub sense_id: u32,
    /// Spanish definition
    pub definition: String,
    pub ipa_hebrew: String,
    pub hebrew: String,
    pub pos: String,
    #[serde(default)]
    pub examples: Vec<ExampleSentence>,
    /// Polysemy cluster; kept in memory only
    #[serde(skip, default = "first_cluster")]
    pub semantic_cluster: u32,
}

fn first_cluster() -> u32 {
    1
}

impl From<&EnrichedAlignment> for Sense {
    fn from(enriched: &EnrichedAlignment) -> Self {
        let alignment = &enriched.alignment;
        Self {
            sense_id: alignment.sense_id,
            definition: alignment.es_definition.clone(),
            ipa_hebrew: alignment.he_ipa.clone(),
            hebrew: alignment.he_word.clone(),
            pos: alignment.es_pos.clone(),
            examples: enriched.examples.clone(),
            semantic_cluster: enriched.semantic_cluster,
        }
    }
}

/// All senses of one Spanish headword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub ipa: String,
    pub language: String,
    pub etymology: Option<String>,
    pub senses: Vec<Sense>,
}

impl DictionaryEntry {
    /// Number of distinct polysemy clusters among the senses
    pub fn cluster_count(&self) -> usize {
        let mut clusters: Vec<u32> = self.senses.iter().map(|s| s.semantic_cluster).collect();
        clusters.sort_unstable();
        clusters.dedup();
        clusters.len()
    }
}

/// An entry as written to the dictionary file: `{"id": "es: <word>", "entry": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: String,
    pub entry: DictionaryEntry,
}

impl EntryRecord {
    pub fn new(entry: DictionaryEntry) -> Self {
        Self {
            id: format!("{}: {}", entry.language, entry.word),
            entry,
        }
    }
}

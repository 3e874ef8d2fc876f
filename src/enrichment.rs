/*!
 * Example-sentence enrichment.
 *
 * Attaches to each alignment every corpus pair whose Spanish tokens contain
 * `es_word` and whose Hebrew tokens contain `he_word` (exact token
 * membership). Lookups go through an inverted token index built once over
 * the corpus.
 */

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::alignment::Alignment;
use crate::corpus::SentencePair;

/// Example sentence attached to a sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub es: String,
    pub he: String,
}

/// An alignment with its examples and polysemy cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedAlignment {
    #[serde(flatten)]
    pub alignment: Alignment,
    #[serde(default)]
    pub examples: Vec<ExampleSentence>,
    #[serde(default = "default_cluster")]
    pub semantic_cluster: u32,
}

fn default_cluster() -> u32 {
    1
}

impl EnrichedAlignment {
    /// Wrap an alignment with no examples, in cluster 1.
    pub fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            examples: Vec::new(),
            semantic_cluster: default_cluster(),
        }
    }
}

/// Token -> corpus positions, for both languages.
#[derive(Debug, Clone, Default)]
pub struct ExampleIndex {
    spanish: HashMap<String, Vec<usize>>,
    hebrew: HashMap<String, HashSet<usize>>,
}

impl ExampleIndex {
    pub fn build(corpus: &[SentencePair]) -> Self {
        let mut index = Self::default();
        for (pos, pair) in corpus.iter().enumerate() {
            for token in &pair.es_words {
                let positions = index.spanish.entry(token.clone()).or_default();
                // A token repeated inside one sentence is recorded once
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
            for token in &pair.he_words {
                index.hebrew.entry(token.clone()).or_default().insert(pos);
            }
        }
        index
    }

    /// Corpus positions containing both tokens, in corpus order.
    pub fn lookup(&self, es_word: &str, he_word: &str) -> Vec<usize> {
        let (Some(spanish), Some(hebrew)) = (self.spanish.get(es_word), self.hebrew.get(he_word)) else {
            return Vec::new();
        };
        spanish.iter().copied().filter(|pos| hebrew.contains(pos)).collect()
    }
}

/// Attach examples to every alignment, keeping alignment order.
pub fn enrich_alignments(alignments: Vec<Alignment>, corpus: &[SentencePair]) -> Vec<EnrichedAlignment> {
    let index = ExampleIndex::build(corpus);

    let enriched: Vec<EnrichedAlignment> = alignments
        .into_iter()
        .map(|alignment| {
            let examples = index
                .lookup(&alignment.es_word, &alignment.he_word)
                .into_iter()
                .map(|pos| ExampleSentence {
                    es: corpus[pos].es.clone(),
                    he: corpus[pos].he.clone(),
                })
                .collect();
            EnrichedAlignment {
                examples,
                ..EnrichedAlignment::new(alignment)
            }
        })
        .collect();

    let with_examples = enriched.iter().filter(|e| !e.examples.is_empty()).count();
    info!(
        "Enriched {} alignments with examples ({} have at least one)",
        enriched.len(),
        with_examples
    );
    enriched
}

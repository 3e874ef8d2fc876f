/*!
 * The alignment engine.
 *
 * Runs the enabled strategies in priority order (direct, triangulation,
 * fuzzy) as a fold over the Spanish collection: each strategy only sees the
 * Spanish headwords no earlier strategy aligned. The collected rows then go
 * through a final pass that drops duplicate `(es_word, he_word, sense_id)`
 * triples and renumbers senses for words whose numbering is ambiguous.
 *
 * The engine never fails: a word without a match is simply absent from the
 * output.
 */

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::model::Alignment;
use super::stats::AlignmentStats;
use super::strategy::{AlignmentContext, ProgressFn, Strategy};
use crate::lexicon::{BridgeLexicon, Lexicon, WordEntry};
use crate::scoring::TextNormalizer;

/// Alignment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentConfig {
    // @field: Run bridge-language triangulation
    #[serde(default = "default_true")]
    pub enable_triangulation: bool,

    // @field: Run fuzzy definition matching
    #[serde(default = "default_true")]
    pub enable_fuzzy: bool,

    // @field: Minimum fuzzy score (0-100)
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: u8,

    // @field: Bridge languages, in lookup order (set from the top-level config)
    #[serde(skip, default = "default_bridge_languages")]
    pub bridge_languages: Vec<String>,

    // @field: Fuzzy words between progress reports
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,

    // @field: Additional words ignored when comparing definitions
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_fuzzy_threshold() -> u8 {
    80
}

pub(crate) fn default_bridge_languages() -> Vec<String> {
    vec!["en".to_string(), "fr".to_string(), "de".to_string()]
}

fn default_progress_interval() -> usize {
    1000
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            enable_triangulation: true,
            enable_fuzzy: true,
            fuzzy_threshold: default_fuzzy_threshold(),
            bridge_languages: default_bridge_languages(),
            progress_interval: default_progress_interval(),
            extra_stop_words: Vec::new(),
        }
    }
}

/// Result of one alignment run.
#[derive(Debug, Clone, Default)]
pub struct AlignmentOutcome {
    pub alignments: Vec<Alignment>,
    pub stats: AlignmentStats,
}

/// Multi-strategy Spanish-to-Hebrew aligner.
pub struct AlignmentEngine {
    config: AlignmentConfig,
    normalizer: TextNormalizer,
    progress: Option<Box<ProgressFn>>,
}

impl AlignmentEngine {
    pub fn new(config: AlignmentConfig) -> Self {
        let normalizer = TextNormalizer::default().with_stop_words(&config.extra_stop_words);
        Self {
            config,
            normalizer,
            progress: None,
        }
    }

    /// Receive fuzzy-pass progress as `(processed, total, matches)`.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize, usize, usize) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    /// Enabled strategies in priority order.
    pub fn strategies(&self) -> Vec<Strategy> {
        Strategy::ALL
            .into_iter()
            .filter(|s| match s {
                Strategy::Direct => true,
                Strategy::Triangulation => self.config.enable_triangulation,
                Strategy::Fuzzy => self.config.enable_fuzzy,
            })
            .collect()
    }

    /// Align the Spanish collection against the Hebrew one.
    pub fn align(&self, spanish: &Lexicon, hebrew: &Lexicon, bridge: Option<&BridgeLexicon>) -> AlignmentOutcome {
        info!(
            "Aligning {} Spanish entries with {} Hebrew entries ({} bridge records)",
            spanish.len(),
            hebrew.len(),
            bridge.map_or(0, BridgeLexicon::len)
        );

        let ctx = AlignmentContext {
            hebrew,
            bridge,
            normalizer: &self.normalizer,
            config: &self.config,
            progress: self.progress.as_deref(),
        };

        let mut aligned: HashSet<String> = HashSet::new();
        let mut alignments: Vec<Alignment> = Vec::new();

        for strategy in self.strategies() {
            let remaining: Vec<&WordEntry> = spanish.iter().filter(|e| !aligned.contains(&e.word)).collect();
            if remaining.is_empty() {
                debug!("Skipping {} alignment: no remaining words", strategy);
                continue;
            }

            let output = strategy.run(&remaining, &ctx);
            info!(
                "{} alignments: {} ({} words)",
                capitalize(strategy.name()),
                output.alignments.len(),
                output.aligned.len()
            );

            aligned.extend(output.aligned);
            alignments.extend(output.alignments);
        }

        let alignments = finalize(alignments);

        let spanish_words: HashSet<&str> = spanish.iter().map(|e| e.word.as_str()).collect();
        let stats = AlignmentStats::from_alignments(&alignments, &spanish_words, hebrew.len());
        info!("{}", stats.summary());

        AlignmentOutcome { alignments, stats }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Drop duplicate triples, then renumber words with ambiguous sense ids.
///
/// A word is renumbered `1..k` in emission order when its rows come from
/// more than one strategy, or when two of its rows share a `sense_id`.
/// Otherwise the strategy's own numbering is kept.
pub fn finalize(alignments: Vec<Alignment>) -> Vec<Alignment> {
    let before = alignments.len();
    let mut seen: HashSet<(String, String, u32)> = HashSet::new();
    let mut alignments: Vec<Alignment> = alignments
        .into_iter()
        .filter(|a| seen.insert((a.es_word.clone(), a.he_word.clone(), a.sense_id)))
        .collect();
    if alignments.len() < before {
        debug!("Dropped {} duplicate alignments", before - alignments.len());
    }

    let mut families: HashMap<&str, HashSet<&'static str>> = HashMap::new();
    let mut sense_ids: HashMap<&str, HashSet<u32>> = HashMap::new();
    let mut ambiguous: HashSet<String> = HashSet::new();
    for alignment in &alignments {
        families
            .entry(&alignment.es_word)
            .or_default()
            .insert(alignment.match_type.family());
        if !sense_ids
            .entry(&alignment.es_word)
            .or_default()
            .insert(alignment.sense_id)
        {
            ambiguous.insert(alignment.es_word.clone());
        }
    }
    ambiguous.extend(
        families
            .into_iter()
            .filter(|(_, f)| f.len() > 1)
            .map(|(word, _)| word.to_string()),
    );

    if !ambiguous.is_empty() {
        debug!("Renumbering senses for {} words", ambiguous.len());
        let mut next: HashMap<String, u32> = HashMap::new();
        for alignment in alignments.iter_mut().filter(|a| ambiguous.contains(&a.es_word)) {
            let counter = next.entry(alignment.es_word.clone()).or_insert(0);
            *counter += 1;
            alignment.sense_id = *counter;
        }
    }

    alignments
}

/*!
 * Polysemy clustering.
 *
 * For every Spanish word with more than one sense (and at most
 * `max_senses`), senses are grouped greedily: each sense not yet assigned
 * seeds a new cluster and absorbs every later unassigned sense whose Spanish
 * definition scores above the threshold against the seed. A sense is never
 * re-evaluated once absorbed, so the grouping depends on sense order and is
 * not transitive.
 */

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::enrichment::EnrichedAlignment;
use crate::scoring::ratio;

/// Clustering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringConfig {
    // @field: Definitions scoring strictly above this share a cluster (0-100)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: u8,

    // @field: Words with more senses are left unclustered
    #[serde(default = "default_max_senses")]
    pub max_senses: usize,
}

fn default_similarity_threshold() -> u8 {
    70
}

fn default_max_senses() -> usize {
    10
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            max_senses: default_max_senses(),
        }
    }
}

/// What a clustering pass did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusteringSummary {
    /// Words with more than one sense
    pub polysemic_words: usize,
    /// Polysemic words whose senses ended up in more than one cluster
    pub multi_cluster_words: usize,
    /// Polysemic words skipped for having too many senses
    pub skipped_words: usize,
}

/// Greedy seed-then-absorb clustering of definitions.
///
/// Returns one cluster id (1-based, in formation order) per definition.
pub fn cluster_definitions<S: AsRef<str>>(definitions: &[S], threshold: f64) -> Vec<u32> {
    let mut clusters: Vec<u32> = vec![0; definitions.len()];
    let mut next_id = 0;

    for i in 0..definitions.len() {
        if clusters[i] != 0 {
            continue;
        }
        next_id += 1;
        clusters[i] = next_id;

        for j in (i + 1)..definitions.len() {
            if clusters[j] == 0 && ratio(definitions[i].as_ref(), definitions[j].as_ref()) > threshold {
                clusters[j] = next_id;
            }
        }
    }

    clusters
}

/// Assign `semantic_cluster` on every polysemic word's senses.
///
/// Senses of monosemous and over-polysemous words keep cluster 1.
pub fn cluster_senses(enriched: &mut [EnrichedAlignment], config: &ClusteringConfig) -> ClusteringSummary {
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for (idx, entry) in enriched.iter_mut().enumerate() {
        entry.semantic_cluster = 1;
        let word = &entry.alignment.es_word;
        groups
            .entry(word.clone())
            .or_insert_with(|| {
                order.push(word.clone());
                Vec::new()
            })
            .push(idx);
    }

    let threshold = f64::from(config.similarity_threshold);
    let mut summary = ClusteringSummary::default();

    for word in &order {
        let indices = &groups[word];
        if indices.len() <= 1 {
            continue;
        }
        summary.polysemic_words += 1;
        if indices.len() > config.max_senses {
            debug!("Skipping clustering for '{}' ({} senses)", word, indices.len());
            summary.skipped_words += 1;
            continue;
        }

        let definitions: Vec<&str> = indices
            .iter()
            .map(|&idx| enriched[idx].alignment.es_definition.as_str())
            .collect();
        let clusters = cluster_definitions(&definitions, threshold);
        if clusters.iter().any(|&c| c > 1) {
            summary.multi_cluster_words += 1;
        }
        for (&idx, cluster) in indices.iter().zip(clusters) {
            enriched[idx].semantic_cluster = cluster;
        }
    }

    info!(
        "Clustered senses for {} polysemic words ({} with several clusters, {} skipped)",
        summary.polysemic_words, summary.multi_cluster_words, summary.skipped_words
    );
    summary
}

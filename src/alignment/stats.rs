/*!
 * Counters describing one alignment run.
 */

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::model::{Alignment, MatchType};

/// Alignment counts per strategy and Spanish coverage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub direct: usize,
    pub triangulation: usize,
    pub fuzzy: usize,
    /// Distinct Spanish headwords that received no alignment
    pub unaligned: usize,
    /// Distinct Spanish headwords in the input
    pub spanish_total: usize,
    /// Hebrew entries in the input
    pub hebrew_total: usize,
}

impl AlignmentStats {
    /// Count a finished alignment set against its inputs.
    pub fn from_alignments(alignments: &[Alignment], spanish_words: &HashSet<&str>, hebrew_total: usize) -> Self {
        let mut stats = Self {
            spanish_total: spanish_words.len(),
            hebrew_total,
            ..Self::default()
        };

        for alignment in alignments {
            match alignment.match_type {
                MatchType::Direct => stats.direct += 1,
                MatchType::Triangulation => stats.triangulation += 1,
                MatchType::Fuzzy(_) => stats.fuzzy += 1,
            }
        }

        let aligned: HashSet<&str> = alignments
            .iter()
            .map(|a| a.es_word.as_str())
            .filter(|w| spanish_words.contains(w))
            .collect();
        stats.unaligned = stats.spanish_total - aligned.len();
        stats
    }

    pub fn total(&self) -> usize {
        self.direct + self.triangulation + self.fuzzy
    }

    pub fn aligned_words(&self) -> usize {
        self.spanish_total - self.unaligned
    }

    /// Share of Spanish headwords with at least one alignment (0.0-1.0)
    pub fn coverage(&self) -> f64 {
        if self.spanish_total == 0 {
            return 0.0;
        }
        self.aligned_words() as f64 / self.spanish_total as f64
    }

    pub fn summary(&self) -> String {
        format!(
            "Total alignments: {} (direct: {}, triangulation: {}, fuzzy: {}); coverage {:.1}% of {} Spanish words",
            self.total(),
            self.direct,
            self.triangulation,
            self.fuzzy,
            self.coverage() * 100.0,
            self.spanish_total
        )
    }
}

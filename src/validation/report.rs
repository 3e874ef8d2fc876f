/*!
 * Overall data-quality report for a finished run.
 */

use chrono::Local;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::alignments::duplicate_count;
use crate::enrichment::EnrichedAlignment;

/// Hebrew IPA shorter than this is treated as missing
const MIN_IPA_LEN: usize = 3;

/// Direct-match share below which the translation links look weak
const MIN_DIRECT_RATE: f64 = 0.5;

/// Lowest acceptable Hebrew IPA coverage
const MIN_IPA_COVERAGE: f64 = 0.8;

/// Quality verdict derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Excellent,
    Good,
    Acceptable,
    NeedsImprovement,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 75.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::Acceptable
        } else {
            Self::NeedsImprovement
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Acceptable => "ACCEPTABLE",
            Self::NeedsImprovement => "NEEDS_IMPROVEMENT",
        };
        write!(f, "{}", label)
    }
}

/// Sense-count statistics per Spanish headword
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolysemyMetrics {
    pub polysemic_words: usize,
    pub max_senses: usize,
    pub avg_senses: f64,
}

/// Quality metrics, issues and recommendations for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_entries: usize,
    pub timestamp: String,
    /// Alignment count per `match_type` label
    pub match_type_distribution: BTreeMap<String, usize>,
    pub hebrew_ipa_coverage: f64,
    pub polysemy: PolysemyMetrics,
    pub duplicates: usize,
    pub overall_quality_score: f64,
    pub verdict: Verdict,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl QualityReport {
    /// Build the report from the enriched alignments.
    pub fn generate(enriched: &[EnrichedAlignment]) -> Self {
        let total = enriched.len();
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();

        let mut match_type_distribution: BTreeMap<String, usize> = BTreeMap::new();
        for item in enriched {
            *match_type_distribution
                .entry(item.alignment.match_type.label())
                .or_insert(0) += 1;
        }

        if total == 0 {
            issues.push("No alignments were produced".to_string());
            recommendations.push("Check that the source collections are not empty".to_string());
            return Self {
                total_entries: 0,
                timestamp: Local::now().to_rfc3339(),
                match_type_distribution,
                hebrew_ipa_coverage: 0.0,
                polysemy: PolysemyMetrics::default(),
                duplicates: 0,
                overall_quality_score: 0.0,
                verdict: Verdict::NeedsImprovement,
                issues,
                recommendations,
            };
        }

        let direct = match_type_distribution.get("direct").copied().unwrap_or(0);
        let direct_rate = direct as f64 / total as f64;
        if direct_rate < MIN_DIRECT_RATE {
            issues.push(format!("Low direct match rate: {:.1}%", direct_rate * 100.0));
            recommendations.push("Review Wiktionary translation links quality".to_string());
        }

        let with_ipa = enriched
            .iter()
            .filter(|e| e.alignment.he_ipa.chars().count() >= MIN_IPA_LEN)
            .count();
        let hebrew_ipa_coverage = with_ipa as f64 / total as f64;
        if hebrew_ipa_coverage < MIN_IPA_COVERAGE {
            issues.push(format!("Low IPA coverage: {:.1}%", hebrew_ipa_coverage * 100.0));
            recommendations.push("Generate Hebrew IPA for the Hebrew collection".to_string());
        }

        let mut senses_per_word: HashMap<&str, usize> = HashMap::new();
        for item in enriched {
            *senses_per_word.entry(&item.alignment.es_word).or_insert(0) += 1;
        }
        let polysemy = PolysemyMetrics {
            polysemic_words: senses_per_word.values().filter(|&&n| n > 1).count(),
            max_senses: senses_per_word.values().copied().max().unwrap_or(0),
            avg_senses: total as f64 / senses_per_word.len() as f64,
        };

        let duplicates = duplicate_count(enriched.iter().map(|e| &e.alignment));
        if duplicates > 0 {
            issues.push(format!("Found {} duplicate alignments", duplicates));
            recommendations.push("Run deduplication step in pipeline".to_string());
        }

        let mut score = 100.0 - (1.0 - hebrew_ipa_coverage) * 30.0;
        if duplicates > 0 {
            score -= (duplicates as f64 / total as f64 * 50.0).min(20.0);
        }
        let overall_quality_score = score.max(0.0);
        let verdict = Verdict::from_score(overall_quality_score);

        info!("Data quality score: {:.1}/100 ({})", overall_quality_score, verdict);
        info!("Found {} issues", issues.len());

        Self {
            total_entries: total,
            timestamp: Local::now().to_rfc3339(),
            match_type_distribution,
            hebrew_ipa_coverage,
            polysemy,
            duplicates,
            overall_quality_score,
            verdict,
            issues,
            recommendations,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Quality: {:.1}/100 ({}), Hebrew IPA coverage {:.1}%, {} polysemic words, {} issues",
            self.overall_quality_score,
            self.verdict,
            self.hebrew_ipa_coverage * 100.0,
            self.polysemy.polysemic_words,
            self.issues.len()
        )
    }
}

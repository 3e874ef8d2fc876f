/*!
 * Strategy 3: fuzzy matching on definition text.
 */

use log::{debug, info};

use super::model::{Alignment, MatchType};
use super::strategy::{AlignmentContext, StrategyOutput};
use crate::lexicon::WordEntry;
use crate::scoring::{CandidateIndex, score_to_int};

/// Match each remaining Spanish word to the Hebrew entry whose definitions
/// are most similar to its own, when the score reaches the threshold.
///
/// Words are processed by ascending `frequency_rank` (unranked last, source
/// order otherwise) and alignments are emitted in that order.
pub fn align_fuzzy(remaining: &[&WordEntry], ctx: &AlignmentContext<'_>) -> StrategyOutput {
    let mut output = StrategyOutput::default();
    if remaining.is_empty() || ctx.hebrew.is_empty() {
        return output;
    }

    let index = CandidateIndex::build(ctx.hebrew, ctx.normalizer);
    info!(
        "Fuzzy matching {} Spanish words against {} Hebrew definitions",
        remaining.len(),
        index.len()
    );
    if index.is_empty() {
        return output;
    }

    let ordered = by_frequency(remaining);
    let total = ordered.len();
    let cutoff = f64::from(ctx.config.fuzzy_threshold);
    let interval = ctx.config.progress_interval.max(1);

    for (i, es) in ordered.into_iter().enumerate() {
        if i > 0 && i % interval == 0 {
            info!(
                "Fuzzy matching progress: {}/{} ({} matches found)",
                i,
                total,
                output.alignments.len()
            );
            if let Some(progress) = ctx.progress {
                progress(i, total, output.alignments.len());
            }
        }

        if es.definitions.is_empty() || output.has_aligned(&es.word) {
            continue;
        }
        let query = ctx.normalizer.normalize(&es.joined_definitions());
        let Some(best) = index.best_match(&query, cutoff) else {
            continue;
        };

        let he = &ctx.hebrew.entries()[best.entry_idx];
        let score = score_to_int(best.score);
        debug!("Fuzzy match '{}' -> '{}' ({:.2})", es.word, he.word, best.score);
        output.push(Alignment::link(
            es,
            es.first_definition(),
            he,
            1,
            MatchType::Fuzzy(score),
        ));
    }

    if let Some(progress) = ctx.progress {
        progress(total, total, output.alignments.len());
    }

    output
}

fn by_frequency<'a>(remaining: &[&'a WordEntry]) -> Vec<&'a WordEntry> {
    let mut ordered = remaining.to_vec();
    ordered.sort_by_key(|e| (e.frequency_rank.is_none(), e.frequency_rank));
    ordered
}

/*!
 * Strategy 1: direct translation links.
 */

use super::model::{Alignment, MatchType};
use super::strategy::{AlignmentContext, StrategyOutput};
use crate::lexicon::WordEntry;

/// Emit one alignment per Hebrew translation that exists as a Hebrew headword.
///
/// Translation `i` becomes sense `i + 1` and takes the Spanish definition at
/// index `i` (or the first definition when there are fewer definitions).
pub fn align_direct(remaining: &[&WordEntry], ctx: &AlignmentContext<'_>) -> StrategyOutput {
    let mut output = StrategyOutput::default();
    let target = ctx.target_lang();

    for es in remaining {
        for (i, he_word) in es.translations_for(target).iter().enumerate() {
            let Some(he) = ctx.hebrew.get(he_word) else {
                continue;
            };
            output.push(Alignment::link(
                es,
                es.definition_at(i),
                he,
                (i + 1) as u32,
                MatchType::Direct,
            ));
        }
    }

    output
}

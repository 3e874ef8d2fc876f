/*!
 * Strategy 2: triangulation through bridge-language records.
 *
 * A Spanish word is routed to the bridge records by trying, in order:
 *
 * 1. the Spanish headword itself;
 * 2. its translations into each bridge language (in configured order);
 * 3. any bridge record listing the Spanish word among its Spanish
 *    translations.
 *
 * Routes 1 and 2 only consider records triangulating from Spanish. The
 * first Hebrew translation that exists as a Hebrew headword wins, and the
 * word gets exactly one alignment (sense 1).
 */

use log::debug;

use super::model::{Alignment, MatchType};
use super::strategy::{AlignmentContext, StrategyOutput};
use crate::lexicon::{BridgeEntry, BridgeLexicon, Lexicon, WordEntry};

pub fn align_triangulated(remaining: &[&WordEntry], ctx: &AlignmentContext<'_>) -> StrategyOutput {
    let mut output = StrategyOutput::default();
    let Some(bridge) = ctx.bridge.filter(|b| !b.is_empty()) else {
        return output;
    };

    for es in remaining {
        if output.has_aligned(&es.word) {
            continue;
        }
        if let Some((he, route)) = find_hebrew(es, bridge, ctx) {
            debug!("Triangulated '{}' -> '{}' via '{}'", es.word, he.word, route);
            output.push(Alignment::link(
                es,
                es.first_definition(),
                he,
                1,
                MatchType::Triangulation,
            ));
        }
    }

    output
}

/// First Hebrew entry reachable from `es`, with the bridge key that reached it.
fn find_hebrew<'a>(
    es: &'a WordEntry,
    bridge: &'a BridgeLexicon,
    ctx: &AlignmentContext<'a>,
) -> Option<(&'a WordEntry, &'a str)> {
    let keys = std::iter::once(es.word.as_str()).chain(
        ctx.config
            .bridge_languages
            .iter()
            .flat_map(|lang| es.translations_for(lang))
            .map(String::as_str),
    );

    for key in keys {
        if let Some(he) = first_hebrew(bridge.spanish_rows(key), ctx.hebrew) {
            return Some((he, key));
        }
    }

    first_hebrew(bridge.rows_translating(&es.word), ctx.hebrew).map(|he| (he, es.word.as_str()))
}

fn first_hebrew<'a>(
    rows: impl Iterator<Item = &'a BridgeEntry>,
    hebrew: &'a Lexicon,
) -> Option<&'a WordEntry> {
    rows.flat_map(|row| row.translations_he.iter())
        .find_map(|he_word| hebrew.get(he_word))
}

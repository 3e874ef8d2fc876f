/*!
 * Combination of several bridge-language sources into one triangulation set.
 */

use log::info;
use std::collections::HashSet;

use super::collection::BridgeLexicon;
use super::model::{BridgeEntry, SourceLang};

/// Merge bridge sources in the given order (e.g. English, French, German).
///
/// Every record is tagged with its bridge language. Records repeating an
/// earlier `(source_lang, word, pos)` key are dropped.
pub fn combine_bridge_sources(sources: Vec<(String, Vec<BridgeEntry>)>) -> BridgeLexicon {
    let counts: Vec<String> = sources
        .iter()
        .map(|(lang, entries)| format!("{} {}", entries.len(), lang))
        .collect();
    info!("Combining bridge language data: {}", counts.join(", "));

    let mut seen: HashSet<(SourceLang, String, String)> = HashSet::new();
    let mut combined = Vec::new();
    let mut total = 0usize;

    for (lang, entries) in sources {
        for mut entry in entries {
            total += 1;
            let key = (entry.source_lang, entry.word.clone(), entry.pos.clone());
            if !seen.insert(key) {
                continue;
            }
            entry.bridge_source = Some(lang.clone());
            combined.push(entry);
        }
    }

    info!(
        "Combined {} total bridge entries, {} after deduplication ({} removed)",
        total,
        combined.len(),
        total - combined.len()
    );

    let lexicon = BridgeLexicon::new(combined);
    info!(
        "Final bridge data: {} Spanish entries, {} Hebrew entries",
        lexicon.count_for(SourceLang::Es),
        lexicon.count_for(SourceLang::He)
    );
    lexicon
}

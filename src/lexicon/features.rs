/*!
 * Derived features for source records.
 *
 * Wiktionary extractions rarely carry corpus frequencies, so a rank is
 * estimated from how much the source says about a word: translation
 * counts, number of senses and headword length.
 */

use log::info;

use super::model::WordEntry;

/// Translation columns counted by the estimate, with their weights
const TRANSLATION_WEIGHTS: &[(&str, f64)] = &[("he", 0.4), ("es", 0.4), ("en", 0.2), ("fr", 0.1)];

/// Weight of each definition
const DEFINITION_WEIGHT: f64 = 0.3;

/// Weight of the short-headword bonus
const LENGTH_WEIGHT: f64 = 0.3;

/// Headwords at least this long get no length bonus
const LENGTH_CEILING: f64 = 10.0;

/// Estimated commonness of `entry`; higher is more common.
pub fn frequency_score(entry: &WordEntry) -> f64 {
    let translations: f64 = TRANSLATION_WEIGHTS
        .iter()
        .map(|(lang, weight)| entry.translations_for(lang).len() as f64 * weight)
        .sum();
    let definitions = entry.definitions.len() as f64 * DEFINITION_WEIGHT;

    let length = entry.word.chars().count() as f64;
    let length_score = ((LENGTH_CEILING - length) / LENGTH_CEILING).max(0.0) * LENGTH_WEIGHT;

    translations + definitions + length_score
}

/// Fill `frequency_rank` for every entry that has none.
///
/// Ranks are dense over descending [`frequency_score`] (equal scores share
/// a rank) and start after the largest rank already present, so source
/// ranks keep their priority. Returns the number of entries ranked.
pub fn add_frequency_ranks(entries: &mut [WordEntry]) -> usize {
    let mut unranked: Vec<(f64, usize)> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.frequency_rank.is_none())
        .map(|(idx, e)| (frequency_score(e), idx))
        .collect();
    if unranked.is_empty() {
        return 0;
    }
    unranked.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));

    let offset = entries.iter().filter_map(|e| e.frequency_rank).max().unwrap_or(0);
    let mut rank = offset;
    let mut previous: Option<f64> = None;
    for &(score, idx) in &unranked {
        if previous != Some(score) {
            rank += 1;
            previous = Some(score);
        }
        entries[idx].frequency_rank = Some(rank);
    }

    info!(
        "Assigned frequency ranks to {} entries ({}-{})",
        unranked.len(),
        offset + 1,
        rank
    );
    unranked.len()
}

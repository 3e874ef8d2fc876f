/*!
 * Candidate index for best-match search against many definitions.
 *
 * The index is built once per run over the Hebrew lexicon and then queried
 * once per unaligned Spanish word. A query never compares characters
 * against every candidate:
 *
 * 1. an exact-text table answers identical definitions directly;
 * 2. an inverted index of character bigrams yields the only candidates
 *    that can reach the cutoff (prefix filtering, see below);
 * 3. a length window, a bigram-overlap bound and a character-histogram
 *    bound reject candidates whose best possible score is too low;
 * 4. the survivors are scored with the bit-parallel LCS, and the cutoff is
 *    raised to each new best score.
 *
 * Prefix filtering: for an LCS of length `L` between `a` and `b`, at least
 * `3L - |a| - |b| - 1` bigrams of `a` survive in `b` (each unmatched
 * character of `a` breaks at most two bigrams, each unmatched character of
 * `b` splits at most one). With a ratio cutoff `c` this gives a minimum
 * bigram overlap `t`. A candidate sharing `t` bigram occurrences with the
 * query must share one of the query's `n - t + 1` rarest occurrences, so
 * only those posting lists are read. Below a cutoff of 200/3 the bound is
 * vacuous and the length window is scanned instead.
 *
 * Ties go to the candidate that comes first in source order.
 */

use std::collections::HashMap;
use std::ops::Range;

use super::normalize::TextNormalizer;
use super::similarity::{Pattern, ratio_from_lcs};
use crate::lexicon::Lexicon;

/// One searchable definition text.
#[derive(Debug, Clone)]
struct Candidate {
    /// Index of the owning entry in the lexicon
    entry_idx: usize,
    chars: Vec<char>,
    histogram: Vec<(char, u32)>,
    bigrams: Vec<(Bigram, u32)>,
}

type Bigram = (char, char);

/// One occurrence of a bigram: the `n`th `(a, b)` in a text.
type BigramToken = (Bigram, u32);

/// Result of a best-match query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    /// Index of the matched entry in the indexed lexicon
    pub entry_idx: usize,
    /// Similarity score (0.0-100.0)
    pub score: f64,
}

/// Read-only index over the concatenated definitions of a lexicon.
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    /// Candidates in source order
    candidates: Vec<Candidate>,
    /// Candidate positions sorted by (length, position)
    by_len: Vec<usize>,
    /// Normalized text -> first candidate position
    exact: HashMap<String, usize>,
    /// Bigram occurrence -> candidate positions, ascending
    postings: HashMap<BigramToken, Vec<usize>>,
}

impl CandidateIndex {
    /// Index every entry with at least one definition.
    ///
    /// Entries sharing the same concatenated definitions are indexed once,
    /// for the first entry; entries whose text normalizes to nothing are
    /// not searchable.
    pub fn build(lexicon: &Lexicon, normalizer: &TextNormalizer) -> Self {
        let mut candidates = Vec::new();
        let mut exact = HashMap::new();
        let mut seen_raw: HashMap<String, usize> = HashMap::new();
        let mut postings: HashMap<BigramToken, Vec<usize>> = HashMap::new();

        for (entry_idx, entry) in lexicon.iter().enumerate() {
            if entry.definitions.is_empty() {
                continue;
            }
            let raw = entry.joined_definitions();
            if seen_raw.contains_key(&raw) {
                continue;
            }
            seen_raw.insert(raw.clone(), entry_idx);

            let normalized = normalizer.normalize(&raw);
            if normalized.is_empty() {
                continue;
            }

            let position = candidates.len();
            exact.entry(normalized.clone()).or_insert(position);
            let chars: Vec<char> = normalized.chars().collect();
            let bigrams = bigram_counts(&chars);
            for token in tokens(&bigrams) {
                postings.entry(token).or_insert_with(Vec::new).push(position);
            }
            candidates.push(Candidate {
                entry_idx,
                histogram: histogram(&chars),
                bigrams,
                chars,
            });
        }

        let mut by_len: Vec<usize> = (0..candidates.len()).collect();
        by_len.sort_by_key(|&pos| (candidates[pos].chars.len(), pos));

        Self {
            candidates,
            by_len,
            exact,
            postings,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Best candidate scoring at least `cutoff` against an already
    /// normalized `query`.
    pub fn best_match(&self, query: &str, cutoff: f64) -> Option<BestMatch> {
        if query.is_empty() || self.candidates.is_empty() {
            return None;
        }

        if let Some(&position) = self.exact.get(query) {
            return Some(BestMatch {
                entry_idx: self.candidates[position].entry_idx,
                score: 100.0,
            });
        }

        let query = Query::new(query);
        let (min_len, max_len) = length_window(query.chars.len(), cutoff);

        let mut search = Search::new(&query, cutoff);
        match min_overlap(query.chars.len() + min_len, cutoff) {
            Some(required) => {
                for pos in self.filtered_candidates(&query, required) {
                    let len = self.candidates[pos].chars.len();
                    if (min_len..=max_len).contains(&len) {
                        search.consider(pos, &self.candidates[pos]);
                    }
                }
            }
            None => {
                for &pos in &self.by_len[self.length_range(min_len, max_len)] {
                    search.consider(pos, &self.candidates[pos]);
                }
            }
        }

        search.best.map(|(score, pos)| BestMatch {
            entry_idx: self.candidates[pos].entry_idx,
            score,
        })
    }

    /// Candidates sharing at least one of the query's rarest bigram
    /// occurrences, in source order.
    fn filtered_candidates(&self, query: &Query, required: usize) -> Vec<usize> {
        // Rarest first
        let mut ranked: Vec<(usize, BigramToken)> = tokens(&query.bigrams)
            .map(|token| (self.postings.get(&token).map_or(0, Vec::len), token))
            .collect();
        if ranked.len() < required {
            return Vec::new();
        }
        ranked.sort_unstable();

        let prefix = ranked.len() - required + 1;
        let mut found: Vec<usize> = ranked[..prefix]
            .iter()
            .filter_map(|(_, token)| self.postings.get(token))
            .flatten()
            .copied()
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Positions in `by_len` whose candidate length lies in `min..=max`.
    fn length_range(&self, min_len: usize, max_len: usize) -> Range<usize> {
        let start = self
            .by_len
            .partition_point(|&pos| self.candidates[pos].chars.len() < min_len);
        let end = self
            .by_len
            .partition_point(|&pos| self.candidates[pos].chars.len() <= max_len);
        start..end.max(start)
    }
}

/// A normalized query prepared for scoring.
struct Query {
    chars: Vec<char>,
    histogram: Vec<(char, u32)>,
    bigrams: Vec<(Bigram, u32)>,
    pattern: Pattern,
}

impl Query {
    fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self {
            histogram: histogram(&chars),
            bigrams: bigram_counts(&chars),
            pattern: Pattern::new(&chars),
            chars,
        }
    }
}

/// Running best match of one query.
struct Search<'q> {
    query: &'q Query,
    cutoff: f64,
    current_cutoff: f64,
    best: Option<(f64, usize)>,
}

impl<'q> Search<'q> {
    fn new(query: &'q Query, cutoff: f64) -> Self {
        Self {
            query,
            cutoff,
            current_cutoff: cutoff,
            best: None,
        }
    }

    /// Score `candidate` unless a bound shows it cannot replace the best.
    fn consider(&mut self, pos: usize, candidate: &Candidate) {
        let query_len = self.query.chars.len();
        let cand_len = candidate.chars.len();

        let length_bound = ratio_from_lcs(query_len.min(cand_len), query_len, cand_len);
        if !can_improve(length_bound, pos, self.current_cutoff, self.best) {
            return;
        }

        let enough_bigrams = min_overlap(query_len + cand_len, self.current_cutoff)
            .is_none_or(|required| count_overlap(&self.query.bigrams, &candidate.bigrams) >= required);
        if !enough_bigrams {
            return;
        }

        let overlap = count_overlap(&self.query.histogram, &candidate.histogram);
        let overlap_bound = ratio_from_lcs(overlap, query_len, cand_len);
        if !can_improve(overlap_bound, pos, self.current_cutoff, self.best) {
            return;
        }

        let score = self.query.pattern.ratio(&candidate.chars);
        if score >= self.cutoff && can_improve(score, pos, self.current_cutoff, self.best) {
            self.best = Some((score, pos));
            self.current_cutoff = score;
        }
    }
}

/// Whether a candidate at `pos` with score (or upper bound) `score` could
/// replace the current best.
fn can_improve(score: f64, pos: usize, cutoff: f64, best: Option<(f64, usize)>) -> bool {
    match best {
        None => score >= cutoff,
        Some((best_score, best_pos)) => score > best_score || (score == best_score && pos < best_pos),
    }
}

/// Candidate lengths that can reach `cutoff` against a query of `query_len`.
///
/// From `200 * min(a, b) / (a + b) >= cutoff`.
fn length_window(query_len: usize, cutoff: f64) -> (usize, usize) {
    if cutoff <= 0.0 {
        return (0, usize::MAX);
    }
    if cutoff >= 200.0 {
        return (query_len, query_len);
    }
    let q = query_len as f64;
    let min_len = (q * cutoff / (200.0 - cutoff)).floor() as usize;
    let max_len = (q * (200.0 - cutoff) / cutoff).ceil() as usize;
    (min_len, max_len)
}

/// Minimum number of shared bigram occurrences for two texts of combined
/// length `total_len` to reach `cutoff`, or `None` when the bound is vacuous.
///
/// From `3L - total_len - 1` with `L >= cutoff * total_len / 200`.
fn min_overlap(total_len: usize, cutoff: f64) -> Option<usize> {
    let bound = total_len as f64 * (3.0 * cutoff / 200.0 - 1.0) - 1.0;
    let required = (bound - 1e-9).ceil();
    (required >= 1.0).then_some(required as usize)
}

/// Sorted counts of the items of `items`.
fn counts<T: Ord + Copy>(items: impl Iterator<Item = T>) -> Vec<(T, u32)> {
    let mut sorted: Vec<T> = items.collect();
    sorted.sort_unstable();

    let mut counts: Vec<(T, u32)> = Vec::new();
    for item in sorted {
        match counts.last_mut() {
            Some((last, n)) if *last == item => *n += 1,
            _ => counts.push((item, 1)),
        }
    }
    counts
}

/// Sorted character counts.
fn histogram(chars: &[char]) -> Vec<(char, u32)> {
    counts(chars.iter().copied())
}

/// Sorted counts of adjacent character pairs.
fn bigram_counts(chars: &[char]) -> Vec<(Bigram, u32)> {
    counts(chars.windows(2).map(|w| (w[0], w[1])))
}

/// Every bigram occurrence as a distinct token.
fn tokens(bigrams: &[(Bigram, u32)]) -> impl Iterator<Item = BigramToken> + '_ {
    bigrams
        .iter()
        .flat_map(|&(bigram, n)| (1..=n).map(move |occurrence| (bigram, occurrence)))
}

/// Size of the multiset intersection of two sorted count lists.
///
/// On character histograms this is an upper bound on the LCS.
fn count_overlap<T: Ord>(a: &[(T, u32)], b: &[(T, u32)]) -> usize {
    let (mut i, mut j) = (0, 0);
    let mut total = 0usize;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                total += a[i].1.min(b[j].1) as usize;
                i += 1;
                j += 1;
            }
        }
    }
    total
}

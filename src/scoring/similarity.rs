/*!
 * String similarity on a 0-100 scale.
 *
 * Provides the normalized Indel similarity (`2 * LCS / (|a| + |b|)`), the
 * same quantity as the classic fuzzy "ratio". The LCS length is computed
 * with a bit-parallel algorithm (Hyyrö), 64 characters of the first string
 * per machine word, so comparing one query against many candidates costs
 * O(|candidate| * ceil(|query| / 64)) word operations per candidate.
 */

use std::collections::HashMap;

/// Similarity score between two strings (0.0-100.0).
///
/// Two empty strings are identical (100); one empty string scores 0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    Pattern::new(&a_chars).ratio(&b_chars)
}

/// Round a score to the integer reported in match labels.
pub fn score_to_int(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Ratio from an LCS length and the two string lengths.
pub(crate) fn ratio_from_lcs(lcs: usize, len_a: usize, len_b: usize) -> f64 {
    if len_a + len_b == 0 {
        return 100.0;
    }
    200.0 * lcs as f64 / (len_a + len_b) as f64
}

/// A query string preprocessed for repeated comparisons.
///
/// Holds one bit mask per distinct character: bit `i` of the mask for `c`
/// is set when `query[i] == c`.
#[derive(Debug, Clone)]
pub struct Pattern {
    len: usize,
    words: usize,
    masks: HashMap<char, Vec<u64>>,
}

impl Pattern {
    /// Precompute the character masks for `query`.
    pub fn new(query: &[char]) -> Self {
        let words = query.len().div_ceil(64);
        let mut masks: HashMap<char, Vec<u64>> = HashMap::new();

        for (i, &c) in query.iter().enumerate() {
            let mask = masks.entry(c).or_insert_with(|| vec![0u64; words]);
            mask[i / 64] |= 1u64 << (i % 64);
        }

        Self {
            len: query.len(),
            words,
            masks,
        }
    }

    /// Length of the query in characters
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the longest common subsequence between the query and `other`.
    pub fn lcs_len(&self, other: &[char]) -> usize {
        if self.len == 0 || other.is_empty() {
            return 0;
        }

        // Zero bits of `s` mark query positions matched so far.
        let mut s = vec![u64::MAX; self.words];

        for c in other {
            let Some(mask) = self.masks.get(c) else {
                continue;
            };

            let mut carry = 0u64;
            for w in 0..self.words {
                let u = s[w] & mask[w];
                let (sum, c1) = s[w].overflowing_add(u);
                let (sum, c2) = sum.overflowing_add(carry);
                carry = u64::from(c1 || c2);
                // u is a subset of s[w], so the subtraction never borrows
                s[w] = sum | (s[w] - u);
            }
        }

        let mut matched = 0usize;
        for (w, word) in s.iter().enumerate() {
            let bits_in_word = (self.len - w * 64).min(64);
            let valid = if bits_in_word == 64 {
                u64::MAX
            } else {
                (1u64 << bits_in_word) - 1
            };
            matched += (!word & valid).count_ones() as usize;
        }
        matched
    }

    /// Similarity between the query and `other` (0.0-100.0).
    pub fn ratio(&self, other: &[char]) -> f64 {
        ratio_from_lcs(self.lcs_len(other), self.len, other.len())
    }
}

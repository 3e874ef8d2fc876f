/*!
 * Text normalization for definition matching.
 *
 * Definitions from independent dictionaries differ mostly in punctuation,
 * case, vowel points and function words ("de la", "של"). The normalizer
 * folds those away so the similarity score reflects content words.
 */

use std::collections::HashSet;

use crate::language_utils::is_hebrew_mark;

/// Spanish function words ignored when comparing definitions
const SPANISH_STOP_WORDS: &[&str] = &[
    "a", "al", "con", "de", "del", "e", "el", "en", "la", "las", "lo", "los", "o", "para",
    "por", "que", "se", "su", "sus", "u", "un", "una", "unas", "unos", "y",
];

/// Hebrew function words ignored when comparing definitions
const HEBREW_STOP_WORDS: &[&str] = &[
    "של", "את", "על", "עם", "או", "גם", "כי", "אשר", "זה", "זו", "הוא", "היא",
];

/// Immutable stop-word lookup plus folding rules.
///
/// Built once per run and shared by reference.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stop_words: HashSet<String>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        let stop_words = SPANISH_STOP_WORDS
            .iter()
            .chain(HEBREW_STOP_WORDS)
            .map(|w| w.to_string())
            .collect();
        Self { stop_words }
    }
}

impl TextNormalizer {
    /// A normalizer that keeps every word (case and punctuation folding only).
    pub fn without_stop_words() -> Self {
        Self {
            stop_words: HashSet::new(),
        }
    }

    /// Add extra stop words (compared after lowercasing).
    pub fn with_stop_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        for word in words {
            self.stop_words.insert(word.as_ref().to_lowercase());
        }
        self
    }

    /// Check whether `word` (already lowercased) is ignored.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Lowercase, drop vowel points, turn punctuation into spaces, remove
    /// stop words and collapse whitespace.
    pub fn normalize(&self, text: &str) -> String {
        let mut folded = String::with_capacity(text.len());
        for c in text.chars() {
            if is_hebrew_mark(c) {
                continue;
            }
            if c.is_alphanumeric() {
                folded.extend(c.to_lowercase());
            } else {
                folded.push(' ');
            }
        }

        folded
            .split_whitespace()
            .filter(|word| !self.is_stop_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

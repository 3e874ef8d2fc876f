/*!
 * Bilingual sentence corpus used for example enrichment.
 *
 * Sentence pairs may arrive pre-tokenized (`es_words` / `he_words`) or as raw
 * text, in which case they are tokenized here. Raw per-language sentence
 * lists (`{id, lang, text}` rows) are paired by position.
 */

use log::info;
use serde::{Deserialize, Serialize};

/// Characters stripped from both ends of every token
const TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '"', '\''];

/// One Spanish sentence with its Hebrew translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentencePair {
    pub es: String,
    pub he: String,
    #[serde(default)]
    pub es_words: Vec<String>,
    #[serde(default)]
    pub he_words: Vec<String>,
}

impl SentencePair {
    /// Build a pair from raw text, tokenizing both sides.
    pub fn from_texts(es: &str, he: &str) -> Self {
        Self {
            es: es.to_string(),
            he: he.to_string(),
            es_words: tokenize_spanish(es),
            he_words: tokenize_hebrew(he),
        }
    }

    /// Tokenize any side that arrived without tokens.
    pub fn ensure_tokens(&mut self) {
        if self.es_words.is_empty() {
            self.es_words = tokenize_spanish(&self.es);
        }
        if self.he_words.is_empty() {
            self.he_words = tokenize_hebrew(&self.he);
        }
    }

    pub fn has_spanish_token(&self, word: &str) -> bool {
        self.es_words.iter().any(|w| w == word)
    }

    pub fn has_hebrew_token(&self, word: &str) -> bool {
        self.he_words.iter().any(|w| w == word)
    }
}

/// A raw single-language sentence row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(default)]
    pub id: Option<u64>,
    pub lang: String,
    pub text: String,
}

/// Pair Spanish and Hebrew sentences by their position in each language.
///
/// Extra sentences in the longer language are dropped.
pub fn pair_sentences(sentences: &[Sentence], es_lang: &str, he_lang: &str) -> Vec<SentencePair> {
    let spanish = sentences.iter().filter(|s| s.lang == es_lang);
    let hebrew = sentences.iter().filter(|s| s.lang == he_lang);

    let pairs: Vec<SentencePair> = spanish
        .zip(hebrew)
        .map(|(es, he)| SentencePair::from_texts(&es.text, &he.text))
        .collect();

    info!("Paired {} {}-{} sentences", pairs.len(), es_lang, he_lang);
    pairs
}

/// Lowercased Spanish tokens; raw tokens of 2 characters or fewer are dropped.
pub fn tokenize_spanish(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .map(|w| w.trim_matches(TOKEN_PUNCTUATION).to_lowercase())
        .collect()
}

/// Hebrew tokens; raw tokens of a single character are dropped.
pub fn tokenize_hebrew(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .map(|w| w.trim_matches(TOKEN_PUNCTUATION).to_string())
        .collect()
}

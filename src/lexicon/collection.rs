/*!
 * Per-language record collections with headword lookup.
 */

use std::collections::HashMap;

use super::model::{BridgeEntry, SourceLang, WordEntry};

/// A single-language collection of `WordEntry` records.
///
/// Keeps the source order; exact headword lookup resolves to the first
/// record carrying that headword.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    lang: String,
    entries: Vec<WordEntry>,
    by_word: HashMap<String, usize>,
}

impl Lexicon {
    /// Build a collection for `lang` from records in source order.
    pub fn new(lang: &str, entries: Vec<WordEntry>) -> Self {
        let mut by_word = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            by_word.entry(entry.word.clone()).or_insert(idx);
        }

        Self {
            lang: lang.to_string(),
            entries,
            by_word,
        }
    }

    /// Language code of the collection
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Exact headword lookup.
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.by_word.get(word).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the collection, returning the records.
    pub fn into_entries(self) -> Vec<WordEntry> {
        self.entries
    }
}

/// Bridge-language records indexed for triangulation.
#[derive(Debug, Clone, Default)]
pub struct BridgeLexicon {
    entries: Vec<BridgeEntry>,
    es_by_word: HashMap<String, Vec<usize>>,
    by_spanish_translation: HashMap<String, Vec<usize>>,
}

impl BridgeLexicon {
    /// Index bridge records, preserving their order.
    pub fn new(entries: Vec<BridgeEntry>) -> Self {
        let mut es_by_word: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_spanish_translation: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            if entry.source_lang == SourceLang::Es {
                es_by_word.entry(entry.word.clone()).or_default().push(idx);
            }
            for es_word in &entry.translations_es {
                by_spanish_translation.entry(es_word.clone()).or_default().push(idx);
            }
        }

        Self {
            entries,
            es_by_word,
            by_spanish_translation,
        }
    }

    /// `source_lang == "es"` records whose headword is exactly `word`.
    pub fn spanish_rows<'a>(&'a self, word: &str) -> impl Iterator<Item = &'a BridgeEntry> + 'a {
        self.rows(self.es_by_word.get(word))
    }

    /// Records (either source language) listing `es_word` among their Spanish translations.
    pub fn rows_translating<'a>(&'a self, es_word: &str) -> impl Iterator<Item = &'a BridgeEntry> + 'a {
        self.rows(self.by_spanish_translation.get(es_word))
    }

    fn rows<'a>(&'a self, indices: Option<&'a Vec<usize>>) -> impl Iterator<Item = &'a BridgeEntry> + 'a {
        indices
            .into_iter()
            .flatten()
            .map(move |&idx| &self.entries[idx])
    }

    /// Number of records triangulating from `lang`.
    pub fn count_for(&self, lang: SourceLang) -> usize {
        self.entries.iter().filter(|e| e.source_lang == lang).count()
    }

    pub fn entries(&self) -> &[BridgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

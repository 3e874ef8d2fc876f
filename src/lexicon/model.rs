/*!
 * Source record types produced by the Wiktionary extraction step.
 *
 * - `WordEntry`: one lexeme as reported by a single-language source
 * - `BridgeEntry`: a third-language record used only for triangulation
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Prefix of the flat per-language translation columns (`translations_he`, ...)
const TRANSLATIONS_PREFIX: &str = "translations_";

fn default_pos() -> String {
    "unknown".to_string()
}

/// One lexeme as reported by a single-language source.
///
/// Immutable after construction. `definitions[i]` is sense `i` of the word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWordEntry", into = "RawWordEntry")]
pub struct WordEntry {
    /// Headword, possibly with niqqud, spaces or hyphens
    pub word: String,

    /// Part-of-speech tag, "unknown" when the source has none
    pub pos: String,

    /// Source-reported transcription, may be empty
    pub ipa: String,

    /// Ordered glosses; index == sense index
    pub definitions: Vec<String>,

    /// Translations keyed by language code, de-duplicated, first-seen order
    pub translations: BTreeMap<String, Vec<String>>,

    /// 1 = most frequent
    pub frequency_rank: Option<u32>,
}

impl WordEntry {
    /// Create an entry with no translations.
    pub fn new(word: &str, pos: &str, ipa: &str, definitions: Vec<String>) -> Self {
        Self {
            word: word.to_string(),
            pos: if pos.is_empty() { default_pos() } else { pos.to_string() },
            ipa: ipa.to_string(),
            definitions,
            translations: BTreeMap::new(),
            frequency_rank: None,
        }
    }

    /// Set the translations into `lang`, dropping repeats while keeping first-seen order.
    pub fn with_translations<S: AsRef<str>>(mut self, lang: &str, words: &[S]) -> Self {
        self.translations.insert(lang.to_string(), dedup_in_order(words));
        self
    }

    /// Set the frequency rank.
    pub fn with_frequency_rank(mut self, rank: u32) -> Self {
        self.frequency_rank = Some(rank);
        self
    }

    /// Translations into `lang`, empty when the source listed none.
    pub fn translations_for(&self, lang: &str) -> &[String] {
        self.translations.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Definition for sense `index`, falling back to the first definition.
    pub fn definition_at(&self, index: usize) -> &str {
        self.definitions
            .get(index)
            .or_else(|| self.definitions.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// First definition or the empty string.
    pub fn first_definition(&self) -> &str {
        self.definition_at(0)
    }

    /// All definitions joined by single spaces.
    pub fn joined_definitions(&self) -> String {
        self.definitions.join(" ")
    }
}

/// Flat on-disk shape of a `WordEntry` (`translations_<lang>` columns).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawWordEntry {
    word: String,
    #[serde(default = "default_pos")]
    pos: String,
    #[serde(default)]
    ipa: Option<String>,
    #[serde(default)]
    definitions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frequency_rank: Option<u32>,
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl TryFrom<RawWordEntry> for WordEntry {
    type Error = String;

    fn try_from(raw: RawWordEntry) -> Result<Self, Self::Error> {
        let mut translations = BTreeMap::new();

        for (key, value) in raw.extra {
            let Some(lang) = key.strip_prefix(TRANSLATIONS_PREFIX) else {
                continue;
            };
            let words: Vec<String> = match value {
                Value::Null => Vec::new(),
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s),
                        other => Err(format!("non-string translation in '{}': {}", key, other)),
                    })
                    .collect::<Result<_, _>>()?,
                other => return Err(format!("'{}' must be a list, got {}", key, other)),
            };
            translations.insert(lang.to_string(), dedup_in_order(&words));
        }

        // Headword stands in for a missing gloss
        let definitions = if raw.definitions.is_empty() {
            vec![raw.word.clone()]
        } else {
            raw.definitions
        };

        Ok(Self {
            word: raw.word,
            pos: if raw.pos.is_empty() { default_pos() } else { raw.pos },
            ipa: raw.ipa.unwrap_or_default(),
            definitions,
            translations,
            frequency_rank: raw.frequency_rank,
        })
    }
}

impl From<WordEntry> for RawWordEntry {
    fn from(entry: WordEntry) -> Self {
        let extra = entry
            .translations
            .into_iter()
            .map(|(lang, words)| {
                let values = words.into_iter().map(Value::String).collect();
                (format!("{}{}", TRANSLATIONS_PREFIX, lang), Value::Array(values))
            })
            .collect();

        Self {
            word: entry.word,
            pos: entry.pos,
            ipa: Some(entry.ipa),
            definitions: entry.definitions,
            frequency_rank: entry.frequency_rank,
            extra,
        }
    }
}

/// The primary language a bridge record triangulates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLang {
    Es,
    He,
}

impl SourceLang {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::He => "he",
        }
    }
}

impl fmt::Display for SourceLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A record from a bridge-language Wiktionary.
///
/// `source_lang` names the primary language being triangulated, not the
/// bridge language; `bridge_source` names the bridge language once the
/// sources have been combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeEntry {
    pub source_lang: SourceLang,
    pub word: String,
    #[serde(default)]
    pub ipa: String,
    #[serde(default = "default_pos")]
    pub pos: String,
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub translations_es: Vec<String>,
    #[serde(default)]
    pub translations_he: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_source: Option<String>,
}

impl BridgeEntry {
    /// Create a bridge record with no definitions.
    pub fn new(source_lang: SourceLang, word: &str) -> Self {
        Self {
            source_lang,
            word: word.to_string(),
            ipa: String::new(),
            pos: default_pos(),
            definitions: Vec::new(),
            translations_es: Vec::new(),
            translations_he: Vec::new(),
            bridge_source: None,
        }
    }

    pub fn with_pos(mut self, pos: &str) -> Self {
        self.pos = pos.to_string();
        self
    }

    pub fn with_spanish<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.translations_es = dedup_in_order(words);
        self
    }

    pub fn with_hebrew<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.translations_he = dedup_in_order(words);
        self
    }
}

/// Drop repeated strings, keeping the first occurrence of each.
pub(crate) fn dedup_in_order<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| seen.insert(*w))
        .map(str::to_string)
        .collect()
}

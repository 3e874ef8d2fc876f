/*!
 * Alignment records linking a Spanish sense to a Hebrew sense.
 */

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::lexicon::WordEntry;

/// How an alignment was found.
///
/// Serialized as `"direct"`, `"triangulation"` or `"fuzzy_<score>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// Listed as a translation in the Spanish entry
    Direct,
    /// Linked through a bridge-language record
    Triangulation,
    /// Definition similarity, with the integer score (0-100)
    Fuzzy(u8),
}

impl MatchType {
    /// Label used in output records
    pub fn label(&self) -> String {
        match self {
            Self::Direct => "direct".to_string(),
            Self::Triangulation => "triangulation".to_string(),
            Self::Fuzzy(score) => format!("fuzzy_{}", score),
        }
    }

    /// Label with the fuzzy score dropped, for distributions
    pub fn family(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Triangulation => "triangulation",
            Self::Fuzzy(_) => "fuzzy",
        }
    }

    pub fn is_fuzzy(&self) -> bool {
        matches!(self, Self::Fuzzy(_))
    }

    /// Confidence attached to the match; only fuzzy matches carry one.
    pub fn confidence(&self) -> Option<f64> {
        match self {
            Self::Fuzzy(score) => Some(f64::from(*score) / 100.0),
            _ => None,
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "triangulation" => Ok(Self::Triangulation),
            _ => {
                let score = s
                    .strip_prefix("fuzzy_")
                    .and_then(|n| n.parse::<u8>().ok())
                    .filter(|n| *n <= 100)
                    .ok_or_else(|| format!("Invalid match type: {}", s))?;
                Ok(Self::Fuzzy(score))
            }
        }
    }
}

impl Serialize for MatchType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for MatchType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// One Spanish-sense-to-Hebrew-sense link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub es_word: String,
    pub es_ipa: String,
    pub es_pos: String,
    pub es_definition: String,
    pub he_word: String,
    pub he_ipa: String,
    pub he_definition: String,
    /// 1-based sense number within `es_word`
    pub sense_id: u32,
    pub match_type: MatchType,
    /// Present for fuzzy matches only, `score / 100`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Alignment {
    /// Link a Spanish entry (with the definition chosen for this sense) to a
    /// Hebrew entry. The Hebrew side always uses its first definition.
    pub fn link(
        es: &WordEntry,
        es_definition: &str,
        he: &WordEntry,
        sense_id: u32,
        match_type: MatchType,
    ) -> Self {
        Self {
            es_word: es.word.clone(),
            es_ipa: es.ipa.clone(),
            es_pos: es.pos.clone(),
            es_definition: es_definition.to_string(),
            he_word: he.word.clone(),
            he_ipa: he.ipa.clone(),
            he_definition: he.first_definition().to_string(),
            sense_id,
            match_type,
            confidence: match_type.confidence(),
        }
    }

    /// Key that must be unique across an alignment set
    pub fn triple(&self) -> (&str, &str, u32) {
        (&self.es_word, &self.he_word, self.sense_id)
    }
}

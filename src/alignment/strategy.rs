/*!
 * Strategy dispatch for the alignment engine.
 *
 * Each strategy is a plain function from the still-unaligned Spanish
 * entries and a shared read-only context to the alignments it produced and
 * the headwords it aligned. The engine folds the strategies in priority
 * order, threading the "already aligned" set between them.
 */

use std::collections::HashSet;
use std::fmt;

use super::engine::AlignmentConfig;
use super::model::Alignment;
use super::{direct, fuzzy, triangulation};
use crate::lexicon::{BridgeLexicon, Lexicon, WordEntry};
use crate::scoring::TextNormalizer;

/// Progress of a long-running strategy: (processed, total, matches so far)
pub type ProgressFn = dyn Fn(usize, usize, usize) + Send + Sync;

/// Read-only inputs shared by all strategies of one run.
pub struct AlignmentContext<'a> {
    pub hebrew: &'a Lexicon,
    pub bridge: Option<&'a BridgeLexicon>,
    pub normalizer: &'a TextNormalizer,
    pub config: &'a AlignmentConfig,
    pub progress: Option<&'a ProgressFn>,
}

impl AlignmentContext<'_> {
    /// Language code the Spanish entries list Hebrew translations under
    pub fn target_lang(&self) -> &str {
        self.hebrew.lang()
    }
}

/// What one strategy produced.
#[derive(Debug, Clone, Default)]
pub struct StrategyOutput {
    pub alignments: Vec<Alignment>,
    pub aligned: HashSet<String>,
}

impl StrategyOutput {
    pub fn push(&mut self, alignment: Alignment) {
        self.aligned.insert(alignment.es_word.clone());
        self.alignments.push(alignment);
    }

    /// Whether `word` was already aligned earlier in this pass
    pub fn has_aligned(&self, word: &str) -> bool {
        self.aligned.contains(word)
    }
}

/// The alignment strategies, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Direct,
    Triangulation,
    Fuzzy,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Direct, Strategy::Triangulation, Strategy::Fuzzy];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Triangulation => "triangulation",
            Self::Fuzzy => "fuzzy",
        }
    }

    /// Run the strategy over the remaining Spanish entries.
    pub fn run(&self, remaining: &[&WordEntry], ctx: &AlignmentContext<'_>) -> StrategyOutput {
        match self {
            Self::Direct => direct::align_direct(remaining, ctx),
            Self::Triangulation => triangulation::align_triangulated(remaining, ctx),
            Self::Fuzzy => fuzzy::align_fuzzy(remaining, ctx),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

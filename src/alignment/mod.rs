/*!
 * Cross-lingual alignment of Spanish senses to Hebrew senses.
 *
 * - `model`: `Alignment` records and `MatchType`
 * - `strategy`: strategy dispatch and the shared run context
 * - `direct`, `triangulation`, `fuzzy`: the three strategies
 * - `engine`: the priority fold and the final sense-numbering pass
 * - `stats`: per-run counters
 */

pub mod direct;
pub mod engine;
pub mod fuzzy;
pub mod model;
pub mod stats;
pub mod strategy;
pub mod triangulation;

pub use engine::{AlignmentConfig, AlignmentEngine, AlignmentOutcome};
pub use model::{Alignment, MatchType};
pub use stats::AlignmentStats;
pub use strategy::{AlignmentContext, Strategy, StrategyOutput};

/*!
 * Shared scoring utilities.
 *
 * - `similarity`: 0-100 similarity ratio with bit-parallel LCS
 * - `normalize`: definition text folding and stop words
 * - `index`: best-match search over many candidate definitions
 */

pub mod index;
pub mod normalize;
pub mod similarity;

pub use index::{BestMatch, CandidateIndex};
pub use normalize::TextNormalizer;
pub use similarity::{Pattern, ratio, score_to_int};

/*!
 * Source lexicons consumed by the alignment engine.
 *
 * - `model`: `WordEntry` / `BridgeEntry` records as produced by extraction
 * - `collection`: indexed per-language collections
 * - `bridge`: merging of English/French/German bridge sources
 * - `cleaning`: proper-noun filtering
 * - `features`: estimated frequency ranks
 */

pub mod bridge;
pub mod cleaning;
pub mod collection;
pub mod features;
pub mod model;

pub use bridge::combine_bridge_sources;
pub use cleaning::filter_proper_nouns;
pub use collection::{BridgeLexicon, Lexicon};
pub use features::add_frequency_ranks;
pub use model::{BridgeEntry, SourceLang, WordEntry};

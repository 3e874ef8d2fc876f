/*!
 * Dictionary structuring and output.
 *
 * - `model`: `DictionaryEntry`, `Sense` and the `EntryRecord` wrapper
 * - `structure`: grouping enriched alignments by Spanish headword
 * - `format`: the final document with metadata and checksum
 */

pub mod format;
pub mod model;
pub mod structure;

pub use format::{DictionaryDocument, DictionaryMetadata, format_dictionary, format_dictionary_at};
pub use model::{DictionaryEntry, EntryRecord, Sense};
pub use structure::structure_senses;

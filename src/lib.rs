/*!
 * # LexiBridge - Spanish-Hebrew dictionary builder
 *
 * A Rust library that aligns Spanish and Hebrew lexical records and turns
 * the aligned pairs into a structured bilingual dictionary.
 *
 * ## Features
 *
 * - Load Spanish, Hebrew and bridge-language (en/fr/de) records from JSON
 *   or JSON lines files
 * - Align headwords with three strategies, in priority order:
 *   - direct translations listed on the Spanish entry
 *   - triangulation through bridge languages
 *   - fuzzy matching of definitions
 * - Attach example sentence pairs from a parallel corpus
 * - Cluster the senses of polysemic words by definition similarity
 * - Validate inputs and outputs and score the final dictionary
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `lexicon`: Source records and the collections built from them
 * - `scoring`: Definition normalization and similarity scoring
 * - `alignment`: The multi-strategy alignment engine
 * - `corpus`: Sentence pairs and tokenization
 * - `enrichment`: Example sentence attachment
 * - `clustering`: Polysemy clustering
 * - `dictionary`: Entry structuring and the output document
 * - `validation`: Data validation and the quality report
 * - `pipeline`: The phase-by-phase build orchestrator
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code and Hebrew script utilities
 * - `errors`: Custom error types for the application
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod app_config;
pub mod app_controller;
pub mod clustering;
pub mod corpus;
pub mod dictionary;
pub mod enrichment;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod lexicon;
pub mod pipeline;
pub mod scoring;
pub mod validation;

// Re-export main types for easier usage
pub use alignment::{Alignment, AlignmentConfig, AlignmentEngine, MatchType};
pub use app_config::Config;
pub use dictionary::{DictionaryDocument, DictionaryEntry, EntryRecord, Sense, format_dictionary};
pub use enrichment::{EnrichedAlignment, enrich_alignments};
pub use errors::{AppError, QualityError};
pub use language_utils::{get_language_name, language_codes_match};
pub use lexicon::{BridgeEntry, BridgeLexicon, Lexicon, WordEntry};
pub use pipeline::{DictionaryPipeline, PipelineConfig, PipelineInputs, PipelineResult};

/*!
 * Common test utilities for the lexibridge test suite
 */

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use lexibridge::lexicon::{BridgeEntry, BridgeLexicon, Lexicon, SourceLang, WordEntry};

/// Route library logs through env_logger (RUST_LOG) for the running test
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Writes records as JSON lines
pub fn write_jsonl<T: Serialize>(dir: &Path, filename: &str, records: &[T]) -> Result<PathBuf> {
    let lines: Vec<String> = records
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<_, _>>()?;
    create_test_file(dir, filename, &(lines.join("\n") + "\n"))
}

/// Shorthand for a single-definition entry
pub fn entry(word: &str, ipa: &str, definition: &str) -> WordEntry {
    WordEntry::new(word, "noun", ipa, vec![definition.to_string()])
}

/// Spanish side shared by the alignment tests
pub fn sample_spanish() -> Vec<WordEntry> {
    vec![
        // One direct translation
        entry("casa", "ˈka.sa", "Edificio para habitar").with_translations("he", &["בית"]),
        // Two direct translations
        WordEntry::new(
            "banco",
            "noun",
            "ˈbaŋ.ko",
            vec!["Asiento largo".to_string(), "Entidad financiera".to_string()],
        )
        .with_translations("he", &["ספסל", "בנק"]),
        // Reachable only through English
        entry("libro", "ˈli.βɾo", "Conjunto de hojas encuadernadas").with_translations("en", &["book"]),
        // Reachable only through its definition
        entry("perro", "ˈpe.ro", "Animal doméstico canino"),
    ]
}

/// Hebrew side shared by the alignment tests
pub fn sample_hebrew() -> Vec<WordEntry> {
    vec![
        entry("בית", "/ba.jit/", "Edificio"),
        entry("ספסל", "/sap.sal/", "Asiento"),
        entry("בנק", "/bank/", "Institución financiera"),
        entry("ספר", "/se.fer/", "Obra escrita"),
        entry("כלב", "/ke.lev/", "Animal doméstico de la familia canina"),
    ]
}

/// English bridge records for the sample words
pub fn sample_bridge_records() -> Vec<BridgeEntry> {
    vec![BridgeEntry::new(SourceLang::Es, "book").with_hebrew(&["ספר"])]
}

pub fn sample_bridge() -> BridgeLexicon {
    BridgeLexicon::new(sample_bridge_records())
}

pub fn spanish_lexicon(entries: Vec<WordEntry>) -> Lexicon {
    Lexicon::new("es", entries)
}

pub fn hebrew_lexicon(entries: Vec<WordEntry>) -> Lexicon {
    Lexicon::new("he", entries)
}

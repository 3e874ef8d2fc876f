use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::QualityError;

// @module: File and directory utilities

/// Extensions recognised as record files
const RECORD_EXTENSIONS: &[&str] = &["json", "jsonl", "ndjson"];

/// Layout of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// A single JSON array of records
    JsonArray,
    /// One JSON record per line
    JsonLines,
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext))
            {
                result.push(path.to_path_buf());
            }
        }

        Ok(result)
    }

    /// Record files behind a path: the file itself, or every record file under a directory
    pub fn collect_record_files<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
        let path = path.as_ref();
        if Self::file_exists(path) {
            return Ok(vec![path.to_path_buf()]);
        }
        if !Self::dir_exists(path) {
            return Err(anyhow!("Input path does not exist: {:?}", path));
        }

        let mut files = Vec::new();
        for ext in RECORD_EXTENSIONS {
            files.extend(Self::find_files(path, ext)?);
        }
        files.sort();
        Ok(files)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path).with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content).with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Write a value as pretty-printed JSON
    pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize JSON for {:?}", path.as_ref()))?;
        Self::write_to_file(path, &json)
    }

    /// Detect whether a record file is a JSON array or JSON lines
    pub fn detect_record_format<P: AsRef<Path>>(path: P, content: &str) -> RecordFormat {
        let by_extension = path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());

        match by_extension.as_deref() {
            Some("jsonl") | Some("ndjson") => RecordFormat::JsonLines,
            _ if content.trim_start().starts_with('[') => RecordFormat::JsonArray,
            _ => RecordFormat::JsonLines,
        }
    }

    /// Read every record of a JSON array or JSON lines file.
    ///
    /// Each record must carry the `required` fields; a missing one is a
    /// `QualityError::MissingField`.
    pub fn read_records<P: AsRef<Path>, T: DeserializeOwned>(path: P, required: &[&str]) -> Result<Vec<T>> {
        let path = path.as_ref();
        let content = Self::read_to_string(path)?;

        let values: Vec<(usize, Value)> = match Self::detect_record_format(path, &content) {
            RecordFormat::JsonArray => {
                let values: Vec<Value> = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse JSON array: {:?}", path))?;
                values.into_iter().enumerate().map(|(i, v)| (i + 1, v)).collect()
            }
            RecordFormat::JsonLines => content
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(i, line)| {
                    serde_json::from_str::<Value>(line)
                        .map(|v| (i + 1, v))
                        .with_context(|| format!("Failed to parse line {} of {:?}", i + 1, path))
                })
                .collect::<Result<_>>()?,
        };

        values
            .into_iter()
            .map(|(record, value)| {
                if let Some(field) = required.iter().find(|f| value.get(**f).is_none()) {
                    return Err(QualityError::MissingField {
                        field: field.to_string(),
                        context: format!("record {} of {}", record, path.display()),
                    }
                    .into());
                }
                serde_json::from_value(value)
                    .with_context(|| format!("Invalid record {} in {:?}", record, path))
            })
            .collect()
    }

    /// Read records from a file or from every record file under a directory
    pub fn read_records_from<P: AsRef<Path>, T: DeserializeOwned>(path: P, required: &[&str]) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for file in Self::collect_record_files(path)? {
            records.extend(Self::read_records(&file, required)?);
        }
        Ok(records)
    }
}

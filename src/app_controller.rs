use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use crate::app_config::Config;
use crate::corpus::{SentencePair, Sentence, pair_sentences};
use crate::dictionary::format_dictionary;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::lexicon::{BridgeEntry, BridgeLexicon, WordEntry, combine_bridge_sources};
use crate::pipeline::{DictionaryPipeline, PipelineInputs, PipelineProgress, PipelineResult};

// @module: Application controller for dictionary builds

/// Fields every source record must carry
const WORD_ENTRY_FIELDS: &[&str] = &["word"];

/// Fields every bridge record must carry
const BRIDGE_ENTRY_FIELDS: &[&str] = &["source_lang", "word"];

/// One bridge-language input: `LANG=PATH`, or a bare path named after its language
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeInput {
    pub lang: String,
    pub path: PathBuf,
}

impl FromStr for BridgeInput {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some((lang, path)) = s.split_once('=') {
            language_utils::validate_language_code(lang)?;
            return Ok(Self {
                lang: language_utils::normalize_code(lang)?,
                path: PathBuf::from(path),
            });
        }

        let path = PathBuf::from(s);
        let lang = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .and_then(|stem| {
                stem.split(['_', '-', '.'])
                    .find_map(|part| language_utils::normalize_code(part).ok())
            })
            .ok_or_else(|| anyhow!("Cannot infer bridge language from {:?}; use LANG=PATH", path))?;
        Ok(Self { lang, path })
    }
}

/// Everything a build reads and writes
#[derive(Debug, Clone, PartialEq)]
pub struct BuildRequest {
    /// Spanish records (file or directory)
    pub spanish: PathBuf,
    /// Hebrew records (file or directory)
    pub hebrew: PathBuf,
    /// Bridge-language records, in lookup order
    pub bridge: Vec<BridgeInput>,
    /// Sentence corpus
    pub examples: Option<PathBuf>,
    /// Dictionary output file
    pub output: PathBuf,
    /// Quality report output file
    pub report: Option<PathBuf>,
    /// Overwrite an existing dictionary
    pub force_overwrite: bool,
    /// Draw a progress bar
    pub show_progress: bool,
}

impl BuildRequest {
    pub fn new<P: AsRef<Path>>(spanish: P, hebrew: P, output: P) -> Self {
        Self {
            spanish: spanish.as_ref().to_path_buf(),
            hebrew: hebrew.as_ref().to_path_buf(),
            bridge: Vec::new(),
            examples: None,
            output: output.as_ref().to_path_buf(),
            report: None,
            force_overwrite: false,
            show_progress: false,
        }
    }
}

/// Main application controller for dictionary builds
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Invalid configuration")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the dictionary described by `request`.
    ///
    /// Returns `None` when the output exists and overwriting was not forced.
    pub fn run(&self, request: &BuildRequest) -> Result<Option<PipelineResult>> {
        if FileManager::file_exists(&request.output) && !request.force_overwrite {
            warn!(
                "Skipping build, dictionary already exists at {} (use -f to force overwrite)",
                request.output.display()
            );
            return Ok(None);
        }

        let inputs = self.load_inputs(request)?;

        let progress_bar = if request.show_progress {
            let bar = ProgressBar::new(100);
            let style = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            bar.set_style(style.progress_chars("█▓▒░"));
            Some(bar)
        } else {
            None
        };

        let mut pipeline = DictionaryPipeline::new(self.config.pipeline_config());
        if let Some(ref bar) = progress_bar {
            let pb = bar.clone();
            pipeline = pipeline.with_progress(Arc::new(move |progress: PipelineProgress| {
                pb.set_position((progress.overall_progress * 100.0) as u64);
                pb.set_message(progress.status);
            }));
        }

        info!("Building dictionary, please wait…");
        let result = pipeline.run(inputs);
        if let Some(bar) = progress_bar {
            bar.finish_and_clear();
        }
        let result = result?;

        let document = format_dictionary(result.entries.clone())?;
        FileManager::write_to_file(&request.output, &document.to_json()?)?;
        info!("Dictionary written to {}", request.output.display());

        if let (Some(path), Some(report)) = (&request.report, &result.quality_report) {
            FileManager::write_json(path, report)?;
            info!("Quality report written to {}", path.display());
        }

        info!("{}", result.summary());
        Ok(Some(result))
    }

    /// Read every input file of a build
    pub fn load_inputs(&self, request: &BuildRequest) -> Result<PipelineInputs> {
        let spanish: Vec<WordEntry> = FileManager::read_records_from(&request.spanish, WORD_ENTRY_FIELDS)
            .with_context(|| format!("Failed to load Spanish records from {:?}", request.spanish))?;
        let hebrew: Vec<WordEntry> = FileManager::read_records_from(&request.hebrew, WORD_ENTRY_FIELDS)
            .with_context(|| format!("Failed to load Hebrew records from {:?}", request.hebrew))?;
        info!("Loaded {} Spanish and {} Hebrew records", spanish.len(), hebrew.len());

        let bridge = self.load_bridge(&request.bridge)?;
        let corpus = match request.examples {
            Some(ref path) => load_corpus(path, &self.config.source_language, &self.config.target_language)?,
            None => Vec::new(),
        };

        Ok(PipelineInputs {
            spanish,
            hebrew,
            bridge,
            corpus,
        })
    }

    fn load_bridge(&self, inputs: &[BridgeInput]) -> Result<Option<BridgeLexicon>> {
        if inputs.is_empty() {
            return Ok(None);
        }

        let mut sources: Vec<(String, Vec<BridgeEntry>)> = Vec::new();
        for input in inputs {
            if !self.config.bridge_languages.iter().any(|l| language_utils::language_codes_match(l, &input.lang)) {
                warn!("Bridge language '{}' is not listed in the configuration", input.lang);
            }
            let entries: Vec<BridgeEntry> = FileManager::read_records_from(&input.path, BRIDGE_ENTRY_FIELDS)
                .with_context(|| format!("Failed to load {} bridge records from {:?}", input.lang, input.path))?;
            sources.push((input.lang.clone(), entries));
        }

        Ok(Some(combine_bridge_sources(sources)))
    }
}

/// Read sentence pairs, or raw `{lang, text}` rows paired by position
fn load_corpus(path: &Path, es_lang: &str, he_lang: &str) -> Result<Vec<SentencePair>> {
    let values: Vec<Value> = FileManager::read_records_from(path, &[])
        .with_context(|| format!("Failed to load sentence corpus from {:?}", path))?;

    let raw_rows = values.first().is_some_and(|v| v.get("lang").is_some());
    let pairs = if raw_rows {
        let sentences: Vec<Sentence> = values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()
            .context("Invalid sentence row")?;
        pair_sentences(&sentences, es_lang, he_lang)
    } else {
        let mut pairs: Vec<SentencePair> = values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()
            .context("Invalid sentence pair")?;
        pairs.iter_mut().for_each(SentencePair::ensure_tokens);
        pairs
    };

    info!("Loaded {} sentence pairs", pairs.len());
    Ok(pairs)
}

/*!
 * Pipeline orchestrator for building the dictionary.
 *
 * The orchestrator runs the phases in dependency order:
 * 1. Cleaning: proper-noun filtering of the source collections
 * 2. Input validation: quality checks on the source records
 * 3. Ranking: estimated frequency ranks for unranked records
 * 4. Alignment: the multi-strategy alignment engine
 * 5. Enrichment: example sentences from the corpus
 * 6. Clustering: polysemy clusters per Spanish headword
 * 7. Structuring: one entry per Spanish headword
 * 8. Output validation: alignment/dictionary checks and the quality report
 */

use anyhow::Result;
use log::info;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::alignment::{AlignmentConfig, AlignmentEngine, AlignmentStats};
use crate::clustering::{ClusteringConfig, ClusteringSummary, cluster_senses};
use crate::corpus::SentencePair;
use crate::dictionary::{EntryRecord, structure_senses};
use crate::enrichment::{EnrichedAlignment, enrich_alignments};
use crate::lexicon::{BridgeLexicon, Lexicon, WordEntry, add_frequency_ranks, filter_proper_nouns};
use crate::validation::{QualityReport, ValidationConfig, ValidationReport, ValidationService};

/// Callback receiving pipeline progress.
pub type ProgressCallback = Arc<dyn Fn(PipelineProgress) + Send + Sync>;

/// Configuration for the dictionary pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Whether to drop proper nouns from the source collections
    pub enable_cleaning: bool,

    /// Whether to run the validation phases
    pub enable_validation: bool,

    /// Configuration for the alignment engine
    pub alignment_config: AlignmentConfig,

    /// Configuration for polysemy clustering
    pub clustering_config: ClusteringConfig,

    /// Configuration for the validators
    pub validation_config: ValidationConfig,

    /// Source language (headwords)
    pub source_language: String,

    /// Target language
    pub target_language: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            enable_cleaning: true,
            enable_validation: true,
            alignment_config: AlignmentConfig::default(),
            clustering_config: ClusteringConfig::default(),
            validation_config: ValidationConfig::default(),
            source_language: "es".to_string(),
            target_language: "he".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a new pipeline configuration.
    pub fn new(source_language: &str, target_language: &str) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            ..Default::default()
        }
    }

    /// Create a fast configuration: no cleaning, no validation, direct links only.
    pub fn fast(source_language: &str, target_language: &str) -> Self {
        Self {
            enable_cleaning: false,
            enable_validation: false,
            alignment_config: AlignmentConfig {
                enable_triangulation: false,
                enable_fuzzy: false,
                ..AlignmentConfig::default()
            },
            ..Self::new(source_language, target_language)
        }
    }

    /// Enable or disable proper-noun cleaning.
    pub fn with_cleaning(mut self, enabled: bool) -> Self {
        self.enable_cleaning = enabled;
        self
    }

    /// Enable or disable validation.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.enable_validation = enabled;
        self
    }

    /// Set custom alignment configuration.
    pub fn with_alignment_config(mut self, config: AlignmentConfig) -> Self {
        self.alignment_config = config;
        self
    }

    /// Set custom clustering configuration.
    pub fn with_clustering_config(mut self, config: ClusteringConfig) -> Self {
        self.clustering_config = config;
        self
    }

    /// Set custom validation configuration.
    pub fn with_validation_config(mut self, config: ValidationConfig) -> Self {
        self.validation_config = config;
        self
    }
}

/// Everything the pipeline consumes.
#[derive(Debug, Clone, Default)]
pub struct PipelineInputs {
    pub spanish: Vec<WordEntry>,
    pub hebrew: Vec<WordEntry>,
    pub bridge: Option<BridgeLexicon>,
    pub corpus: Vec<SentencePair>,
}

/// Phases of the dictionary pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    /// Proper-noun filtering
    Cleaning,
    /// Source record checks
    InputValidation,
    /// Frequency rank estimation
    Ranking,
    /// Multi-strategy alignment
    Alignment,
    /// Example sentence attachment
    Enrichment,
    /// Polysemy clustering
    Clustering,
    /// Grouping into entries
    Structuring,
    /// Output checks and quality report
    OutputValidation,
}

impl PipelinePhase {
    /// Share of the overall run before this phase starts, and the phase's own share.
    fn span(&self) -> (f32, f32) {
        match self {
            Self::Cleaning => (0.0, 0.02),
            Self::InputValidation => (0.02, 0.02),
            Self::Ranking => (0.04, 0.01),
            Self::Alignment => (0.05, 0.75),
            Self::Enrichment => (0.80, 0.08),
            Self::Clustering => (0.88, 0.05),
            Self::Structuring => (0.93, 0.02),
            Self::OutputValidation => (0.95, 0.05),
        }
    }
}

/// Progress information during pipeline execution.
#[derive(Debug, Clone)]
pub struct PipelineProgress {
    /// Current phase
    pub phase: PipelinePhase,

    /// Progress within current phase (0.0 - 1.0)
    pub phase_progress: f32,

    /// Overall progress (0.0 - 1.0)
    pub overall_progress: f32,

    /// Current status message
    pub status: String,
}

impl PipelineProgress {
    /// Create a new progress indicator.
    pub fn new(phase: PipelinePhase) -> Self {
        Self {
            phase,
            phase_progress: 0.0,
            overall_progress: phase.span().0,
            status: String::new(),
        }
    }

    /// Update progress for current phase.
    pub fn update(&mut self, phase_progress: f32, status: &str) {
        let (start, share) = self.phase.span();
        self.phase_progress = phase_progress.clamp(0.0, 1.0);
        self.overall_progress = start + self.phase_progress * share;
        self.status = status.to_string();
    }

    /// Transition to next phase.
    pub fn next_phase(&mut self, phase: PipelinePhase) {
        self.phase = phase;
        self.update(0.0, &format!("Starting {:?} phase", phase));
    }
}

/// Result of the complete pipeline execution.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Structured dictionary entries
    pub entries: Vec<EntryRecord>,

    /// Enriched and clustered alignments the entries were built from
    pub enriched: Vec<EnrichedAlignment>,

    /// Alignment statistics
    pub alignment_stats: AlignmentStats,

    /// Clustering summary
    pub clustering: ClusteringSummary,

    /// Validator reports (if validation was enabled)
    pub validation_reports: Vec<ValidationReport>,

    /// Quality report (if validation was enabled)
    pub quality_report: Option<QualityReport>,

    /// Total duration of pipeline execution
    pub duration: Duration,
}

impl PipelineResult {
    /// Number of senses across all entries
    pub fn sense_count(&self) -> usize {
        self.entries.iter().map(|r| r.entry.senses.len()).sum()
    }

    /// Get a summary of the pipeline result.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        parts.push(format!("Duration: {:.2}s", self.duration.as_secs_f32()));
        parts.push(self.alignment_stats.summary());
        parts.push(format!(
            "Dictionary: {} entries with {} senses ({} polysemic words)",
            self.entries.len(),
            self.sense_count(),
            self.clustering.polysemic_words
        ));

        if let Some(ref report) = self.quality_report {
            parts.push(report.summary());
        }

        parts.join("\n")
    }
}

/// The dictionary pipeline orchestrator.
pub struct DictionaryPipeline {
    config: PipelineConfig,
    validator: ValidationService,
    progress_callback: Option<ProgressCallback>,
}

impl DictionaryPipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        let validator = ValidationService::with_config(ValidationConfig {
            enabled: config.enable_validation && config.validation_config.enabled,
            ..config.validation_config.clone()
        });

        Self {
            config,
            validator,
            progress_callback: None,
        }
    }

    /// Receive progress updates while running.
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn report(&self, progress: &PipelineProgress) {
        if let Some(ref callback) = self.progress_callback {
            callback(progress.clone());
        }
    }

    /// Run every phase over the inputs.
    pub fn run(&self, inputs: PipelineInputs) -> Result<PipelineResult> {
        let start_time = Instant::now();
        let PipelineInputs {
            spanish,
            hebrew,
            bridge,
            mut corpus,
        } = inputs;
        let mut validation_reports = Vec::new();

        // Phase 1: Cleaning
        let mut progress = PipelineProgress::new(PipelinePhase::Cleaning);
        self.report(&progress);
        let (mut spanish, mut hebrew) = if self.config.enable_cleaning {
            (filter_proper_nouns(spanish), filter_proper_nouns(hebrew))
        } else {
            (spanish, hebrew)
        };
        progress.update(1.0, "Cleaning complete");
        self.report(&progress);

        // Phase 2: Input validation
        if self.validator.is_enabled() {
            progress.next_phase(PipelinePhase::InputValidation);
            self.report(&progress);
            validation_reports.push(self.validator.validate_records(&spanish, &self.config.source_language)?);
            validation_reports.push(self.validator.validate_records(&hebrew, &self.config.target_language)?);
        }

        // Phase 3: Ranking
        progress.next_phase(PipelinePhase::Ranking);
        self.report(&progress);
        add_frequency_ranks(&mut spanish);
        add_frequency_ranks(&mut hebrew);

        let spanish = Lexicon::new(&self.config.source_language, spanish);
        let hebrew = Lexicon::new(&self.config.target_language, hebrew);

        // Phase 4: Alignment
        progress.next_phase(PipelinePhase::Alignment);
        self.report(&progress);
        let outcome = self.engine().align(&spanish, &hebrew, bridge.as_ref());
        progress.update(1.0, &outcome.stats.summary());
        self.report(&progress);

        if self.validator.is_enabled() {
            validation_reports.push(self.validator.validate_alignments(&outcome.alignments)?);
        }

        // Phase 5: Enrichment
        progress.next_phase(PipelinePhase::Enrichment);
        self.report(&progress);
        corpus.iter_mut().for_each(SentencePair::ensure_tokens);
        let mut enriched = enrich_alignments(outcome.alignments, &corpus);

        // Phase 6: Clustering
        progress.next_phase(PipelinePhase::Clustering);
        self.report(&progress);
        let clustering = cluster_senses(&mut enriched, &self.config.clustering_config);

        // Phase 7: Structuring
        progress.next_phase(PipelinePhase::Structuring);
        self.report(&progress);
        let entries = structure_senses(&enriched);

        // Phase 8: Output validation
        let quality_report = if self.validator.is_enabled() {
            progress.next_phase(PipelinePhase::OutputValidation);
            self.report(&progress);
            validation_reports.push(self.validator.validate_enriched(&enriched)?);
            validation_reports.push(self.validator.validate_dictionary(&entries)?);
            let report = QualityReport::generate(&enriched);
            progress.update(1.0, &report.summary());
            self.report(&progress);
            Some(report)
        } else {
            None
        };

        let result = PipelineResult {
            entries,
            enriched,
            alignment_stats: outcome.stats,
            clustering,
            validation_reports,
            quality_report,
            duration: start_time.elapsed(),
        };
        info!("Pipeline finished in {:.2}s", result.duration.as_secs_f32());
        Ok(result)
    }

    /// Alignment engine forwarding fuzzy progress to the pipeline callback.
    fn engine(&self) -> AlignmentEngine {
        let engine = AlignmentEngine::new(self.config.alignment_config.clone());
        let Some(callback) = self.progress_callback.clone() else {
            return engine;
        };

        engine.with_progress(move |processed, total, matches| {
            let mut progress = PipelineProgress::new(PipelinePhase::Alignment);
            let fraction = if total == 0 { 1.0 } else { processed as f32 / total as f32 };
            progress.update(
                fraction,
                &format!("Fuzzy matching {}/{} ({} matches)", processed, total, matches),
            );
            callback(progress);
        })
    }
}

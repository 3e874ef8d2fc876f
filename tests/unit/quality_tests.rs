/*!
 * Tests for data validation and the quality report
 */

use lexibridge::alignment::{Alignment, AlignmentConfig, AlignmentEngine, MatchType};
use lexibridge::enrichment::EnrichedAlignment;
use lexibridge::errors::QualityError;
use lexibridge::lexicon::WordEntry;
use lexibridge::validation::{QualityReport, ValidationConfig, ValidationService, Verdict};

use crate::common::{entry, hebrew_lexicon, sample_bridge, sample_hebrew, sample_spanish, spanish_lexicon};

fn enriched_sample() -> Vec<EnrichedAlignment> {
    let outcome = AlignmentEngine::new(AlignmentConfig::default()).align(
        &spanish_lexicon(sample_spanish()),
        &hebrew_lexicon(sample_hebrew()),
        Some(&sample_bridge()),
    );
    outcome.alignments.into_iter().map(EnrichedAlignment::new).collect()
}

#[test]
fn test_validateRecords_cleanHebrew_shouldPass() {
    let service = ValidationService::new();

    let report = service.validate_records(&sample_hebrew(), "he").unwrap();

    assert!(report.passed(), "{:?}", report.issues);
    assert_eq!(report.total, 5);
}

#[test]
fn test_validateRecords_emptyHeadword_shouldBeCritical() {
    let service = ValidationService::new();
    let entries = vec![entry("casa", "", "Edificio"), entry(" ", "", "Nada")];

    let error = service.validate_records(&entries, "es").unwrap_err();

    assert_eq!(
        error,
        QualityError::EmptyHeadword {
            lang: "es".to_string(),
            count: 1
        }
    );
}

#[test]
fn test_validateRecords_emptyHeadwordWithoutFailing_shouldReportError() {
    let service = ValidationService::with_config(ValidationConfig {
        fail_on_critical: false,
        ..ValidationConfig::default()
    });
    let entries = vec![entry("", "", "Nada")];

    let report = service.validate_records(&entries, "es").unwrap();

    assert_eq!(report.error_count(), 1);
}

#[test]
fn test_validateRecords_latinWordsInHebrew_shouldWarnAboutScript() {
    let service = ValidationService::new();
    let entries = vec![entry("בית", "", "Casa"), entry("casa", "", "Casa")];

    let report = service.validate_records(&entries, "he").unwrap();

    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.issues[0].validation_type, "script");
}

#[test]
fn test_validateRecords_unknownLanguage_shouldFail() {
    let service = ValidationService::new();

    let error = service.validate_records(&[], "zz").unwrap_err();

    assert_eq!(error, QualityError::InvalidLanguage("zz".to_string()));
}

#[test]
fn test_validateAlignments_engineOutput_shouldHaveNoErrors() {
    let service = ValidationService::new();
    let alignments: Vec<Alignment> = enriched_sample().into_iter().map(|e| e.alignment).collect();

    let report = service.validate_alignments(&alignments).unwrap();

    assert_eq!(report.error_count(), 0);
}

#[test]
fn test_qualityReport_engineOutput_shouldScoreExcellent() {
    let report = QualityReport::generate(&enriched_sample());

    assert_eq!(report.total_entries, 5);
    assert_eq!(report.match_type_distribution.get("direct"), Some(&3));
    assert_eq!(report.match_type_distribution.get("triangulation"), Some(&1));
    assert_eq!(report.duplicates, 0);
    assert_eq!(report.hebrew_ipa_coverage, 1.0);
    assert_eq!(report.polysemy.polysemic_words, 1);
    assert_eq!(report.polysemy.max_senses, 2);
    assert_eq!(report.verdict, Verdict::Excellent);
}

#[test]
fn test_qualityReport_emptyInput_shouldNeedImprovement() {
    let report = QualityReport::generate(&[]);

    assert_eq!(report.overall_quality_score, 0.0);
    assert_eq!(report.verdict, Verdict::NeedsImprovement);
    assert_eq!(report.issues, vec!["No alignments were produced".to_string()]);
}

#[test]
fn test_qualityReport_missingIpa_shouldLowerScore() {
    let es = WordEntry::new("casa", "noun", "", vec!["Edificio".to_string()]);
    let he = WordEntry::new("בית", "noun", "", vec!["Casa".to_string()]);
    let enriched = vec![EnrichedAlignment::new(Alignment::link(&es, "Edificio", &he, 1, MatchType::Direct))];

    let report = QualityReport::generate(&enriched);

    assert_eq!(report.overall_quality_score, 70.0);
    assert_eq!(report.verdict, Verdict::Acceptable);
    assert!(report.issues.iter().any(|i| i.contains("IPA coverage")));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["verdict"], "ACCEPTABLE");
}

/*!
 * Tests for the multi-strategy alignment engine
 */

use std::collections::HashSet;
use std::time::{Duration, Instant};

use lexibridge::alignment::{AlignmentConfig, AlignmentEngine, MatchType, Strategy};
use lexibridge::lexicon::{BridgeEntry, BridgeLexicon, Lexicon, SourceLang, WordEntry};

use crate::common::{
    entry, hebrew_lexicon, sample_bridge, sample_hebrew, sample_spanish, spanish_lexicon,
};

fn engine() -> AlignmentEngine {
    AlignmentEngine::new(AlignmentConfig::default())
}

/// A single direct translation
#[test]
fn test_align_directTranslation_shouldProduceOneDirectSense() {
    let spanish = spanish_lexicon(vec![entry("casa", "", "Edificio").with_translations("he", &["בית"])]);
    let hebrew = hebrew_lexicon(vec![entry("בית", "/ba.jit/", "Edificio")]);

    let outcome = engine().align(&spanish, &hebrew, None);

    assert_eq!(outcome.alignments.len(), 1);
    let alignment = &outcome.alignments[0];
    assert_eq!(alignment.match_type, MatchType::Direct);
    assert_eq!(alignment.sense_id, 1);
    assert_eq!(alignment.he_word, "בית");
    assert_eq!(alignment.he_ipa, "/ba.jit/");
    assert!(alignment.confidence.is_none());
}

/// One sense per direct translation
#[test]
fn test_align_twoDirectTranslations_shouldNumberSensesByPosition() {
    let spanish = spanish_lexicon(vec![
        WordEntry::new(
            "banco",
            "noun",
            "",
            vec!["Asiento largo".to_string(), "Entidad financiera".to_string()],
        )
        .with_translations("he", &["ספסל", "בנק"]),
    ]);
    let hebrew = hebrew_lexicon(vec![entry("ספסל", "", "Asiento"), entry("בנק", "", "Institución")]);

    let outcome = engine().align(&spanish, &hebrew, None);

    assert_eq!(outcome.alignments.len(), 2);
    let ids: HashSet<u32> = outcome.alignments.iter().map(|a| a.sense_id).collect();
    let words: HashSet<&str> = outcome.alignments.iter().map(|a| a.he_word.as_str()).collect();
    assert_eq!(ids, HashSet::from([1, 2]));
    assert_eq!(words, HashSet::from(["ספסל", "בנק"]));
    assert_eq!(outcome.alignments[1].es_definition, "Entidad financiera");
}

/// Triangulation through an English bridge word
#[test]
fn test_align_englishBridge_shouldTriangulate() {
    let spanish = spanish_lexicon(vec![entry("libro", "", "Conjunto de hojas").with_translations("en", &["book"])]);
    let hebrew = hebrew_lexicon(vec![entry("ספר", "/se.fer/", "Obra escrita")]);

    let outcome = engine().align(&spanish, &hebrew, Some(&sample_bridge()));

    assert_eq!(outcome.alignments.len(), 1);
    assert_eq!(outcome.alignments[0].match_type, MatchType::Triangulation);
    assert_eq!(outcome.alignments[0].he_word, "ספר");
    assert_eq!(outcome.alignments[0].sense_id, 1);
}

#[test]
fn test_align_bridgeRowWithTwoKnownWords_shouldAlignFirstOnce() {
    let spanish = spanish_lexicon(vec![entry("libro", "", "Conjunto de hojas").with_translations("en", &["book"])]);
    let hebrew = hebrew_lexicon(vec![entry("ספר", "/se.fer/", "Obra escrita"), entry("כרך", "/ke.rex/", "Tomo")]);
    let bridge = BridgeLexicon::new(vec![BridgeEntry::new(SourceLang::Es, "book").with_hebrew(&["ספר", "כרך"])]);

    let outcome = engine().align(&spanish, &hebrew, Some(&bridge));

    assert_eq!(outcome.alignments.len(), 1);
    assert_eq!(outcome.alignments[0].he_word, "ספר");
    assert_eq!(outcome.alignments[0].match_type, MatchType::Triangulation);
    assert_eq!(outcome.stats.triangulation, 1);
}

#[test]
fn test_align_bridgeFirstWordMissing_shouldUseSecond() {
    let spanish = spanish_lexicon(vec![entry("libro", "", "Conjunto de hojas").with_translations("en", &["book"])]);
    let hebrew = hebrew_lexicon(vec![entry("כרך", "/ke.rex/", "Tomo")]);
    let bridge = BridgeLexicon::new(vec![BridgeEntry::new(SourceLang::Es, "book").with_hebrew(&["ספר", "כרך"])]);

    let outcome = engine().align(&spanish, &hebrew, Some(&bridge));

    assert_eq!(outcome.alignments.len(), 1);
    assert_eq!(outcome.alignments[0].he_word, "כרך");
    assert_eq!(outcome.alignments[0].sense_id, 1);
}

#[test]
fn test_align_loadedRecordWithoutDefinitions_shouldUseHeadwordAsDefinition() {
    let es: WordEntry = serde_json::from_str(r#"{"word": "casa", "translations_he": ["בית"]}"#).unwrap();
    let spanish = spanish_lexicon(vec![es]);
    let hebrew = hebrew_lexicon(vec![entry("בית", "/ba.jit/", "Edificio")]);

    let outcome = engine().align(&spanish, &hebrew, None);

    assert_eq!(outcome.alignments.len(), 1);
    assert_eq!(outcome.alignments[0].es_definition, "casa");
}

/// Fuzzy definition matching
#[test]
fn test_align_similarDefinitions_shouldFuzzyMatchWithHighConfidence() {
    let spanish = spanish_lexicon(vec![entry("perro", "", "Animal doméstico canino")]);
    let hebrew = hebrew_lexicon(vec![entry("כלב", "", "Animal doméstico de la familia canina")]);

    let outcome = engine().align(&spanish, &hebrew, None);

    assert_eq!(outcome.alignments.len(), 1);
    let alignment = &outcome.alignments[0];
    assert!(alignment.match_type.is_fuzzy());
    let confidence = alignment.confidence.expect("fuzzy rows carry a confidence");
    assert!((0.8..=1.0).contains(&confidence));
    assert_eq!(confidence, alignment.match_type.confidence().unwrap());
}

/// Empty collections
#[test]
fn test_align_emptyCollections_shouldReturnNothing() {
    let outcome = engine().align(&spanish_lexicon(Vec::new()), &hebrew_lexicon(Vec::new()), None);

    assert!(outcome.alignments.is_empty());
    assert_eq!(outcome.stats.total(), 0);
    assert_eq!(outcome.stats.coverage(), 0.0);
}

#[test]
fn test_align_mixedSources_shouldHonourStrategyPriority() {
    let outcome = engine().align(
        &spanish_lexicon(sample_spanish()),
        &hebrew_lexicon(sample_hebrew()),
        Some(&sample_bridge()),
    );

    let kind = |word: &str| -> Vec<&'static str> {
        outcome
            .alignments
            .iter()
            .filter(|a| a.es_word == word)
            .map(|a| a.match_type.family())
            .collect()
    };
    assert_eq!(kind("casa"), vec!["direct"]);
    assert_eq!(kind("banco"), vec!["direct", "direct"]);
    assert_eq!(kind("libro"), vec!["triangulation"]);
    assert_eq!(kind("perro"), vec!["fuzzy"]);
    assert_eq!(outcome.stats.direct, 3);
    assert_eq!(outcome.stats.triangulation, 1);
    assert_eq!(outcome.stats.fuzzy, 1);
    assert_eq!(outcome.stats.unaligned, 0);
}

#[test]
fn test_align_sameInputTwice_shouldBeIdentical() {
    let spanish = spanish_lexicon(sample_spanish());
    let hebrew = hebrew_lexicon(sample_hebrew());
    let bridge = sample_bridge();

    let first = engine().align(&spanish, &hebrew, Some(&bridge));
    let second = engine().align(&spanish, &hebrew, Some(&bridge));

    assert_eq!(first.alignments, second.alignments);
}

#[test]
fn test_align_duplicateSpanishHeadwords_shouldNotRepeatTriples() {
    let spanish = spanish_lexicon(vec![
        entry("casa", "", "Edificio").with_translations("he", &["בית"]),
        entry("casa", "", "Hogar").with_translations("he", &["בית", "מעון"]),
    ]);
    let hebrew = hebrew_lexicon(vec![entry("בית", "", "Edificio"), entry("מעון", "", "Residencia")]);

    let outcome = engine().align(&spanish, &hebrew, None);

    let triples: HashSet<(&str, &str, u32)> = outcome.alignments.iter().map(|a| a.triple()).collect();
    assert_eq!(triples.len(), outcome.alignments.len());
    let ids: HashSet<(&str, u32)> = outcome
        .alignments
        .iter()
        .map(|a| (a.es_word.as_str(), a.sense_id))
        .collect();
    assert_eq!(ids.len(), outcome.alignments.len());
}

#[test]
fn test_align_triangulationDisabled_shouldFallBackToFuzzyOrNothing() {
    let config = AlignmentConfig {
        enable_triangulation: false,
        ..AlignmentConfig::default()
    };
    let spanish = spanish_lexicon(vec![entry("libro", "", "Conjunto de hojas").with_translations("en", &["book"])]);
    let hebrew = hebrew_lexicon(vec![entry("ספר", "", "Obra escrita")]);

    let engine = AlignmentEngine::new(config);
    let outcome = engine.align(&spanish, &hebrew, Some(&sample_bridge()));

    assert_eq!(engine.strategies(), vec![Strategy::Direct, Strategy::Fuzzy]);
    assert!(outcome.alignments.is_empty());
}

#[test]
fn test_align_fuzzyThresholdRaised_shouldRejectNearMatches() {
    let config = AlignmentConfig {
        fuzzy_threshold: 95,
        ..AlignmentConfig::default()
    };
    let spanish = spanish_lexicon(vec![entry("perro", "", "Animal doméstico canino")]);
    let hebrew = hebrew_lexicon(vec![entry("כלב", "", "Animal doméstico de la familia canina")]);

    let outcome = AlignmentEngine::new(config).align(&spanish, &hebrew, None);

    assert!(outcome.alignments.is_empty());
    assert_eq!(outcome.stats.unaligned, 1);
}

#[test]
fn test_align_withoutBridge_shouldSkipTriangulationQuietly() {
    let spanish = spanish_lexicon(vec![entry("libro", "", "Conjunto de hojas").with_translations("en", &["book"])]);
    let hebrew = hebrew_lexicon(vec![entry("ספר", "", "Obra escrita")]);

    let outcome = engine().align(&spanish, &hebrew, Some(&BridgeLexicon::default()));

    assert!(outcome.alignments.is_empty());
}

/// Spanish and Hebrew collections of `n` unrelated words each, plus one
/// pair whose definitions are close enough to fuzzy match.
fn sized_collections(n: usize) -> (Lexicon, Lexicon) {
    let spanish = std::iter::once(entry("perro", "", "Animal doméstico canino"))
        .chain((0..n).map(|i| entry(&format!("palabra{}", i), "", &format!("Definición {} con algo de texto", i))))
        .collect();
    let hebrew = std::iter::once(entry("כלב", "", "Animal doméstico de la familia canina"))
        .chain((0..n).map(|i| entry(&format!("מילה{}", i), "", &format!("הגדרה {} עם טקסט", i))))
        .collect();
    (spanish_lexicon(spanish), hebrew_lexicon(hebrew))
}

/// Fastest of three fuzzy-only runs, with the number of fuzzy rows.
fn time_fuzzy_pass(n: usize) -> (Duration, usize) {
    let (spanish, hebrew) = sized_collections(n);
    let engine = AlignmentEngine::new(AlignmentConfig {
        enable_triangulation: false,
        ..AlignmentConfig::default()
    });

    let mut fastest = Duration::MAX;
    let mut matches = 0;
    for _ in 0..3 {
        let start = Instant::now();
        let outcome = engine.align(&spanish, &hebrew, None);
        fastest = fastest.min(start.elapsed());
        matches = outcome.stats.fuzzy;
    }
    (fastest, matches)
}

#[test]
fn test_align_doubledInput_shouldNotQuadrupleFuzzyTime() {
    let (small, small_matches) = time_fuzzy_pass(1_000);
    let (large, large_matches) = time_fuzzy_pass(2_000);

    assert_eq!(small_matches, 1);
    assert_eq!(large_matches, 1);
    let ratio = large.as_secs_f64() / small.as_secs_f64().max(1e-6);
    assert!(
        ratio < 3.0,
        "fuzzy pass took {:?} for 1000 words and {:?} for 2000 ({:.2}x)",
        small,
        large,
        ratio
    );
}

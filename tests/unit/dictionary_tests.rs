/*!
 * Tests for enrichment, clustering and dictionary structuring
 */

use chrono::NaiveDate;
use serde_json::Value;

use lexibridge::alignment::{Alignment, MatchType};
use lexibridge::clustering::{ClusteringConfig, cluster_senses};
use lexibridge::corpus::SentencePair;
use lexibridge::dictionary::{format_dictionary_at, structure_senses};
use lexibridge::enrichment::{EnrichedAlignment, enrich_alignments};

use crate::common::entry;

fn link(es: &str, definition: &str, he: &str, sense_id: u32) -> Alignment {
    Alignment::link(
        &entry(es, "ˈes", definition),
        definition,
        &entry(he, "/he/", "def"),
        sense_id,
        MatchType::Direct,
    )
}

/// Two senses of one headword
#[test]
fn test_structureSenses_sharedHeadword_shouldYieldOneEntryWithTwoSenses() {
    let enriched = vec![
        EnrichedAlignment::new(link("banco", "Asiento largo", "ספסל", 1)),
        EnrichedAlignment::new(link("banco", "Entidad financiera", "בנק", 2)),
    ];

    let records = structure_senses(&enriched);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "es: banco");
    let senses = &records[0].entry.senses;
    assert_eq!(senses.len(), 2);
    assert_eq!(senses[0].hebrew, "ספסל");
    assert_eq!(senses[1].hebrew, "בנק");
    assert_eq!(senses[1].definition, "Entidad financiera");
}

#[test]
fn test_enrichAlignments_shouldAttachMatchingPairsInCorpusOrder() {
    let corpus = vec![
        SentencePair::from_texts("El banco está cerrado.", "הבנק סגור"),
        SentencePair::from_texts("Me senté en el banco.", "ישבתי על ספסל"),
        SentencePair::from_texts("Banco nuevo en la plaza", "ספסל חדש"),
    ];

    let enriched = enrich_alignments(vec![link("banco", "Asiento largo", "ספסל", 1)], &corpus);

    let examples: Vec<&str> = enriched[0].examples.iter().map(|e| e.es.as_str()).collect();
    assert_eq!(examples, vec!["Me senté en el banco.", "Banco nuevo en la plaza"]);
}

#[test]
fn test_enrichAlignments_emptyCorpus_shouldKeepRowsWithoutExamples() {
    let enriched = enrich_alignments(vec![link("casa", "Edificio", "בית", 1)], &[]);

    assert_eq!(enriched.len(), 1);
    assert!(enriched[0].examples.is_empty());
    assert_eq!(enriched[0].semantic_cluster, 1);
}

#[test]
fn test_clusterSenses_nearIdenticalDefinitions_shouldShareCluster() {
    let mut enriched = vec![
        EnrichedAlignment::new(link("banco", "Asiento largo para varias personas", "ספסל", 1)),
        EnrichedAlignment::new(link("banco", "Entidad financiera", "בנק", 2)),
        EnrichedAlignment::new(link("banco", "Asiento largo para muchas personas", "ספסל ארוך", 3)),
    ];

    let summary = cluster_senses(&mut enriched, &ClusteringConfig::default());

    let clusters: Vec<u32> = enriched.iter().map(|e| e.semantic_cluster).collect();
    assert_eq!(clusters, vec![1, 2, 1]);
    assert_eq!(summary.polysemic_words, 1);
    assert_eq!(summary.multi_cluster_words, 1);

    let records = structure_senses(&enriched);
    assert_eq!(records[0].entry.cluster_count(), 2);
}

#[test]
fn test_formatDictionary_json_shouldMatchOutputLayout() {
    let enriched = vec![EnrichedAlignment::new(link("casa", "Edificio", "בית", 1))];
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

    let document = format_dictionary_at(structure_senses(&enriched), date).unwrap();
    let json: Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();

    assert_eq!(json["metadata"]["language_direction"], "es-he | he-es");
    assert_eq!(json["metadata"]["generated_at"], "2026-01-15");
    assert_eq!(json["metadata"]["entry_count"], 1);
    let entry = &json["entries"][0];
    assert_eq!(entry["id"], "es: casa");
    assert_eq!(entry["entry"]["language"], "es");
    assert!(entry["entry"]["etymology"].is_null());
    let sense = &entry["entry"]["senses"][0];
    assert_eq!(sense["hebrew"], "בית");
    assert_eq!(sense["ipa_hebrew"], "/he/");
    assert!(sense.get("semantic_cluster").is_none());
}

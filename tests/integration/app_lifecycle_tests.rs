/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use serde_json::{Value, json};
use std::path::Path;

use lexibridge::app_config::Config;
use lexibridge::app_controller::{BridgeInput, BuildRequest, Controller};
use lexibridge::file_utils::FileManager;

use crate::common;

/// Write the sample inputs and return a request reading them
fn write_inputs(dir: &Path) -> Result<BuildRequest> {
    common::init_test_logging();
    let spanish = common::write_jsonl(dir, "es.jsonl", &common::sample_spanish())?;
    let hebrew = common::write_jsonl(dir, "he.jsonl", &common::sample_hebrew())?;
    let bridge = common::write_jsonl(dir, "wiktionary_en.jsonl", &common::sample_bridge_records())?;
    let corpus = common::write_jsonl(
        dir,
        "tatoeba.jsonl",
        &[
            json!({"es": "Mi casa es tu casa", "he": "הבית שלי הוא בית שלך"}),
            json!({"es": "El perro duerme", "he": "הכלב ישן"}),
        ],
    )?;

    let mut request = BuildRequest::new(spanish, hebrew, dir.join("out").join("dictionary.json"));
    request.bridge = vec![bridge.to_string_lossy().parse::<BridgeInput>()?];
    request.examples = Some(corpus);
    request.report = Some(dir.join("out").join("report.json"));
    Ok(request)
}

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert_eq!(controller.config().target_language, "he");
    Ok(())
}

/// Test that an invalid configuration is rejected up front
#[test]
fn test_controller_withInvalidConfig_shouldFail() {
    let config = Config {
        target_language: "es".to_string(),
        ..Config::default()
    };
    assert!(Controller::with_config(config).is_err());
}

/// Test a full build from files to the written dictionary and report
#[test]
fn test_run_withSampleFiles_shouldWriteDictionaryAndReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let request = write_inputs(temp_dir.path())?;
    let controller = Controller::new_for_test()?;

    let result = controller.run(&request)?.expect("a fresh output is built");

    assert_eq!(result.entries.len(), 4);
    assert_eq!(result.sense_count(), 5);

    let document: Value = serde_json::from_str(&FileManager::read_to_string(&request.output)?)?;
    assert_eq!(document["metadata"]["entry_count"], 4);
    assert_eq!(document["metadata"]["sense_count"], 5);
    let entries = document["entries"].as_array().unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["es: casa", "es: banco", "es: libro", "es: perro"]);
    assert_eq!(entries[0]["entry"]["senses"][0]["examples"].as_array().unwrap().len(), 1);

    let report: Value = serde_json::from_str(&FileManager::read_to_string(request.report.as_ref().unwrap())?)?;
    assert_eq!(report["total_entries"], 5);
    assert_eq!(report["verdict"], "EXCELLENT");

    Ok(())
}

/// Test that an existing dictionary is left alone without force
#[test]
fn test_run_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut request = write_inputs(temp_dir.path())?;
    FileManager::write_to_file(&request.output, "{}")?;
    let controller = Controller::new_for_test()?;

    assert!(controller.run(&request)?.is_none());
    assert_eq!(FileManager::read_to_string(&request.output)?, "{}");

    request.force_overwrite = true;
    assert!(controller.run(&request)?.is_some());
    assert_ne!(FileManager::read_to_string(&request.output)?, "{}");

    Ok(())
}

/// Test that raw single-language sentence rows are paired by position
#[test]
fn test_load_inputs_withRawSentenceRows_shouldPairThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut request = write_inputs(temp_dir.path())?;
    let rows = common::write_jsonl(
        temp_dir.path(),
        "sentences.jsonl",
        &[
            json!({"id": 1, "lang": "es", "text": "El banco abre"}),
            json!({"id": 2, "lang": "he", "text": "הבנק נפתח"}),
            json!({"id": 3, "lang": "es", "text": "Sin pareja"}),
        ],
    )?;
    request.examples = Some(rows);

    let inputs = Controller::new_for_test()?.load_inputs(&request)?;

    assert_eq!(inputs.corpus.len(), 1);
    assert_eq!(inputs.corpus[0].es_words, vec!["banco", "abre"]);
    assert_eq!(inputs.bridge.as_ref().map(|b| b.len()), Some(1));

    Ok(())
}

/// Test that a broken input file stops the build
#[test]
fn test_run_withMissingRequiredField_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut request = write_inputs(temp_dir.path())?;
    request.hebrew = common::create_test_file(temp_dir.path(), "broken.jsonl", "{\"pos\":\"noun\"}\n")?;

    let result = Controller::new_for_test()?.run(&request);

    assert!(result.is_err());
    assert!(!request.output.exists());

    Ok(())
}

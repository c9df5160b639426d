//! Loading engines from configuration files and running CLI commands
//! against word lists on disk.

use std::fs;
use std::sync::Arc;

use orthodist::cli::args::{ClusterArgs, MatrixArgs, RankArgs};
use orthodist::cli::commands::{read_words, run_cluster, run_matrix, run_rank};
use orthodist::prelude::*;
use tempfile::TempDir;

const TOY_CONFIG: &str = r#"{
    "costs": [
        [0, 1, 1, 0.25, 0.5, 1, 0.5],
        [0, 1, 1, 0.25, 0.5, 1, 1],
        [0, 1, 1, 0.25, 0.5, 1, 0.5]
    ],
    "alphabet": {
        "prefixLetters": [],
        "suffixLetters": ["B"],
        "vocalicEquivalence": {"a": ["c"], "c": ["a"]},
        "caseFoldOffset": 32,
        "alphabetRange": [65, 90]
    }
}"#;

#[test]
fn test_engine_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("toy.json");
    fs::write(&path, TOY_CONFIG).unwrap();

    let engine = DistanceConfig::load_from_file(&path)?.build_engine()?;

    // Suffix letters are stored folded, so "B" configures 'b'.
    assert!(engine.alphabet().is_suffix_letter('b'));
    assert_eq!(engine.distance("a", "A"), 0.25);
    assert_eq!(engine.distance("a", "c"), 0.5);
    assert_eq!(engine.distance("ab", "a"), 0.5);
    assert_eq!(engine.distance("", "abc"), 3.0);
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = DistanceConfig::load_from_file(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, OrthodistError::Io(_)));
}

#[test]
fn test_malformed_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, r#"{"costs": "cheap"}"#).unwrap();
    let err = DistanceConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, OrthodistError::Json(_)));

    fs::write(&path, r#"{"alphabet": {"caseFoldOffset": 32, "alphabetRange": [90, 65]}}"#)
        .unwrap();
    let err = DistanceConfig::load_from_file(&path)
        .and_then(|config| config.build_engine())
        .unwrap_err();
    assert!(err.is_invalid_config());
}

fn cyrillic_engine() -> DistanceEngine {
    DistanceEngine::new(CostTables::default(), Arc::new(Alphabet::cyrillic()))
}

fn write_words(dir: &TempDir, words: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("words.txt");
    let mut content = words.join("\n");
    content.push_str("\n\n");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_read_words_skips_blank_lines() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = write_words(&temp_dir, &["вода", "  ", " огонь "]);
    assert_eq!(read_words(&path)?, vec!["вода", "огонь"]);
    Ok(())
}

#[test]
fn test_rank_command_with_default_alphabet() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = write_words(&temp_dir, &["հուր", "ջուրն", "Ջուր", "ջուր"]);
    let args = RankArgs {
        source: "ջուր".to_string(),
        candidates: path,
        max_distance: Some(0.5),
        limit: None,
    };
    let results = run_rank(&DistanceEngine::default(), &args)?;
    let targets: Vec<&str> = results.matches.iter().map(|m| m.target.as_str()).collect();
    assert_eq!(targets, vec!["ջուր", "Ջուր", "ջուրն"]);
    Ok(())
}

#[test]
fn test_rank_command() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = write_words(&temp_dir, &["огонь", "Вода", "вода", "вады"]);
    let engine = cyrillic_engine();

    let args = RankArgs {
        source: "вода".to_string(),
        candidates: path,
        max_distance: Some(1.0),
        limit: None,
    };
    let results = run_rank(&engine, &args)?;
    let targets: Vec<&str> = results.matches.iter().map(|m| m.target.as_str()).collect();
    assert_eq!(targets, vec!["вода", "Вода"]);
    Ok(())
}

#[test]
fn test_matrix_and_cluster_commands() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = write_words(&temp_dir, &["вода", "огонь", "ВОДА", "огѣнь"]);
    let engine = cyrillic_engine();

    let matrix = run_matrix(
        &engine,
        &MatrixArgs {
            words_file: path.clone(),
        },
    )?;
    assert_eq!(matrix.words.len(), 4);
    assert_eq!(matrix.distances[0][2], 1.0);

    let clusters = run_cluster(
        &engine,
        &ClusterArgs {
            words_file: path,
            threshold: 1.0,
        },
    )?;
    assert_eq!(
        clusters.clusters,
        vec![vec!["вода", "ВОДА"], vec!["огонь", "огѣнь"]]
    );
    Ok(())
}

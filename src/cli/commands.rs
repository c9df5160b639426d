//! Command implementations for the orthodist CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::alphabet::Symbol;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DistanceConfig;
use crate::cost::Position;
use crate::distance::DistanceEngine;
use crate::error::{OrthodistError, Result};
use crate::matching::{self, MatchConfig};

/// Execute a CLI command.
pub fn execute_command(args: OrthodistArgs) -> Result<()> {
    let engine = load_engine(&args)?;

    match &args.command {
        Command::Distance(distance_args) => {
            output_result(&run_distance(&engine, distance_args)?, &args)
        }
        Command::Classify(classify_args) => {
            output_result(&run_classify(&engine, classify_args)?, &args)
        }
        Command::Rank(rank_args) => output_result(&run_rank(&engine, rank_args)?, &args),
        Command::Matrix(matrix_args) => output_result(&run_matrix(&engine, matrix_args)?, &args),
        Command::Cluster(cluster_args) => {
            output_result(&run_cluster(&engine, cluster_args)?, &args)
        }
    }
}

/// Build the engine from `--config` and `--alphabet`.
///
/// An alphabet defined in the configuration file takes precedence over
/// `--alphabet`.
pub fn load_engine(args: &OrthodistArgs) -> Result<DistanceEngine> {
    let config = match &args.config {
        Some(path) => {
            log::info!("using configuration {}", path.display());
            DistanceConfig::load_from_file(path)?
        }
        None => DistanceConfig::default(),
    };
    config.build_engine_with_alphabet(Arc::new(args.alphabet.build()))
}

/// Compute distances from the source to every target.
pub fn run_distance(engine: &DistanceEngine, args: &DistanceArgs) -> Result<DistanceResults> {
    let distances = if args.parallel {
        engine.par_distances(&args.source, &args.targets)?
    } else {
        engine.distances(&args.source, &args.targets)?
    };

    Ok(DistanceResults {
        source: args.source.clone(),
        results: args
            .targets
            .iter()
            .zip(distances)
            .map(|(target, distance)| TargetDistance {
                target: target.clone(),
                distance,
            })
            .collect(),
    })
}

/// Classify one aligned pair.
pub fn run_classify(engine: &DistanceEngine, args: &ClassifyArgs) -> Result<ClassificationResult> {
    let x = parse_symbol(&args.x)?;
    let y = parse_symbol(&args.y)?;
    let position = Position::from(args.position);
    let classifier = engine.classifier();
    let category = classifier.classify(x, y);

    Ok(ClassificationResult {
        x: x.to_string(),
        y: y.to_string(),
        position,
        category,
        cost: engine.tables().get(position).cost(category),
    })
}

/// Rank the candidates in a word file.
pub fn run_rank(engine: &DistanceEngine, args: &RankArgs) -> Result<RankResults> {
    let candidates = read_words(&args.candidates)?;
    let config = MatchConfig {
        max_distance: args.max_distance,
        max_results: args.limit,
    };

    Ok(RankResults {
        source: args.source.clone(),
        matches: matching::rank(engine, &args.source, &candidates, &config)?,
    })
}

/// Pairwise distances of a word file.
pub fn run_matrix(engine: &DistanceEngine, args: &MatrixArgs) -> Result<MatrixResults> {
    let words = read_words(&args.words_file)?;
    let distances = matching::distance_matrix(engine, &words);
    Ok(MatrixResults { words, distances })
}

/// Cluster a word file.
pub fn run_cluster(engine: &DistanceEngine, args: &ClusterArgs) -> Result<ClusterResults> {
    let words = read_words(&args.words_file)?;
    let clusters = matching::cluster(engine, &words, args.threshold)
        .into_iter()
        .map(|members| members.into_iter().map(|i| words[i].clone()).collect())
        .collect();

    Ok(ClusterResults {
        threshold: args.threshold,
        clusters,
    })
}

/// Parse a single letter, or `-` for the gap.
pub fn parse_symbol(s: &str) -> Result<Symbol> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some('-'), None) => Ok(Symbol::Gap),
        (Some(c), None) => Ok(Symbol::Letter(c)),
        _ => Err(OrthodistError::invalid_argument(format!(
            "'{s}' is not a single letter or '-'"
        ))),
    }
}

/// Read one word per line, skipping blank lines.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    log::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostCategory;
    use clap::Parser;

    #[test]
    fn test_parse_symbol() {
        assert_eq!(parse_symbol("-").unwrap(), Symbol::Gap);
        assert_eq!(parse_symbol("ѣ").unwrap(), Symbol::Letter('ѣ'));
        assert!(parse_symbol("").is_err());
        assert!(parse_symbol("аб").is_err());
    }

    #[test]
    fn test_run_classify() {
        let engine = DistanceEngine::default();
        let args = ClassifyArgs {
            x: "-".to_string(),
            y: "Զ".to_string(),
            position: PositionArg::Start,
        };
        let result = run_classify(&engine, &args).unwrap();
        assert_eq!(result.category, CostCategory::Prefix);
        assert_eq!(result.cost, 0.5);
        assert_eq!(result.x, "-");
    }

    #[test]
    fn test_load_engine_uses_selected_alphabet() {
        let args = OrthodistArgs::try_parse_from(["orthodist", "distance", "Ա", "ա"]).unwrap();
        let engine = load_engine(&args).unwrap();
        assert_eq!(engine.distance("Ա", "ա"), 0.25);
        assert_eq!(engine.distance("Б", "б"), 1.0);

        let args =
            OrthodistArgs::try_parse_from(["orthodist", "-a", "cyrillic", "distance", "Б", "б"])
                .unwrap();
        let engine = load_engine(&args).unwrap();
        assert_eq!(engine.distance("Б", "б"), 0.25);
    }

    #[test]
    fn test_run_distance_keeps_target_order() {
        let engine = DistanceEngine::default();
        let args = DistanceArgs {
            source: "ջուր".to_string(),
            targets: vec!["հուր".to_string(), "ջուր".to_string(), "Ջուր".to_string()],
            parallel: true,
        };
        let result = run_distance(&engine, &args).unwrap();
        let targets: Vec<&str> = result.results.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(targets, vec!["հուր", "ջուր", "Ջուր"]);
        assert_eq!(result.results[1].distance, 0.0);
        assert_eq!(result.results[2].distance, 0.25);
    }
}

//! Ranking and clustering of word forms by weighted distance.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceEngine;
use crate::error::Result;

/// One candidate and its distance from the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The candidate string.
    pub target: String,
    /// Position of the candidate in the input list.
    pub index: usize,
    /// Distance from the source to the candidate.
    pub distance: f64,
}

/// Limits applied when ranking candidates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Drop candidates farther than this.
    pub max_distance: Option<f64>,
    /// Keep at most this many matches.
    pub max_results: Option<usize>,
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the distance cut-off.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Set the result limit.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// Rank `candidates` by distance from `source`, nearest first.
///
/// Ties keep the order in which candidates were given.
pub fn rank<S: AsRef<str> + Sync>(
    engine: &DistanceEngine,
    source: &str,
    candidates: &[S],
    config: &MatchConfig,
) -> Result<Vec<Match>> {
    let distances = engine.par_distances(source, candidates)?;

    let mut matches: Vec<Match> = candidates
        .iter()
        .zip(distances)
        .enumerate()
        .filter(|(_, (_, distance))| config.max_distance.is_none_or(|max| *distance <= max))
        .map(|(index, (target, distance))| Match {
            target: target.as_ref().to_string(),
            index,
            distance,
        })
        .collect();

    // Stable sort, so equal distances stay in input order.
    matches.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
    });
    if let Some(limit) = config.max_results {
        matches.truncate(limit);
    }

    log::debug!(
        "ranked {} of {} candidates for '{source}'",
        matches.len(),
        candidates.len()
    );
    Ok(matches)
}

/// Row `i` holds the distance from `words[i]` to every word.
///
/// The matrix is generally not symmetric: boundary costs and the end-table
/// switch both depend on which string is the source.
pub fn distance_matrix<S: AsRef<str> + Sync>(
    engine: &DistanceEngine,
    words: &[S],
) -> Vec<Vec<f64>> {
    words
        .par_iter()
        .map(|source| {
            words
                .iter()
                .map(|target| engine.distance(source.as_ref(), target.as_ref()))
                .collect()
        })
        .collect()
}

/// Single-linkage clusters of `words`.
///
/// Two words are linked when the distance in either direction is at most
/// `threshold`. Each cluster lists word indices in ascending order, and
/// clusters are ordered by their first member.
pub fn cluster<S: AsRef<str> + Sync>(
    engine: &DistanceEngine,
    words: &[S],
    threshold: f64,
) -> Vec<Vec<usize>> {
    let matrix = distance_matrix(engine, words);
    let mut sets = DisjointSets::new(words.len());

    for i in 0..words.len() {
        for j in (i + 1)..words.len() {
            if matrix[i][j].min(matrix[j][i]) <= threshold {
                sets.union(i, j);
            }
        }
    }

    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut slot_of_root = vec![usize::MAX; words.len()];
    for i in 0..words.len() {
        let root = sets.find(i);
        if slot_of_root[root] == usize::MAX {
            slot_of_root[root] = clusters.len();
            clusters.push(Vec::new());
        }
        clusters[slot_of_root[root]].push(i);
    }

    log::debug!(
        "clustered {} words into {} groups at threshold {threshold}",
        words.len(),
        clusters.len()
    );
    clusters
}

struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        DisjointSets {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let a = self.find(a);
        let b = self.find(b);
        if a != b {
            // Lower index becomes the root.
            let (root, child) = if a < b { (a, b) } else { (b, a) };
            self.parent[child] = root;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_and_filters() {
        let engine = DistanceEngine::default();
        let candidates = ["հուր", "ջուր", "Ջուր", "ջուրս"];
        let matches = rank(&engine, "ջուր", &candidates, &MatchConfig::new()).unwrap();

        assert_eq!(matches.len(), 4);
        assert_eq!(matches[0].target, "ջուր");
        assert_eq!(matches[0].distance, 0.0);
        assert_eq!(matches[1].target, "Ջուր");
        assert_eq!(matches[1].index, 2);
        assert_eq!(matches[2].target, "ջուրս");
        assert_eq!(matches[2].distance, 0.5);
        assert_eq!(matches[3].target, "հուր");
        assert!(matches.windows(2).all(|w| w[0].distance <= w[1].distance));

        let config = MatchConfig::new().with_max_distance(0.25).with_max_results(5);
        let close = rank(&engine, "ջուր", &candidates, &config).unwrap();
        let targets: Vec<&str> = close.iter().map(|m| m.target.as_str()).collect();
        assert_eq!(targets, vec!["ջուր", "Ջուր"]);

        let config = MatchConfig::new().with_max_results(1);
        assert_eq!(rank(&engine, "ջուր", &candidates, &config).unwrap().len(), 1);
    }

    #[test]
    fn test_rank_keeps_input_order_on_ties() {
        let engine = DistanceEngine::default();
        // None of these letters is an affix or has an equivalent.
        let candidates = ["բբ", "ժժ", "գգ"];
        let matches = rank(&engine, "թթ", &candidates, &MatchConfig::new()).unwrap();
        let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_rank_requires_candidates() {
        let engine = DistanceEngine::default();
        assert!(rank::<&str>(&engine, "ջուր", &[], &MatchConfig::new()).is_err());
    }

    #[test]
    fn test_matrix_diagonal_is_zero() {
        let engine = DistanceEngine::default();
        let words = ["ջուր", "ջոր", "հուր"];
        let matrix = distance_matrix(&engine, &words);
        assert_eq!(matrix.len(), 3);
        for (i, row) in matrix.iter().enumerate() {
            assert_eq!(row.len(), 3);
            assert_eq!(row[i], 0.0);
        }
    }

    #[test]
    fn test_cluster_groups_variants() {
        let engine = DistanceEngine::default();
        let words = ["ջուր", "հաց", "Ջուր", "ՋՈՒՐ", "հայց"];
        let clusters = cluster(&engine, &words, 1.0);
        assert_eq!(clusters, vec![vec![0, 2, 3], vec![1, 4]]);

        let singletons = cluster(&engine, &words, -1.0);
        assert_eq!(singletons.len(), words.len());
    }
}

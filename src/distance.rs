//! Weighted, position-dependent edit distance.
//!
//! The engine fills a `(n + 1) × (m + 1)` grid for each source/target pair,
//! pricing every aligned pair with the [`Classifier`]. Three cost tables are
//! in play:
//!
//! - the **start** table prices the first row and column of the grid;
//! - the **middle** table prices inner cells until the fill first reaches the
//!   last row or the last column;
//! - the **end** table prices that cell and every cell filled after it.
//!
//! The switch to the end table is sticky for the rest of the pair: in
//! row-major order the last cell of the first row flips it, so most of the
//! grid is priced with the end table. This is legacy behavior kept for output
//! compatibility, as is the boundary initialization, which multiplies the
//! cost of the *first* letter by the row or column index instead of
//! accumulating a cost per letter.
//!
//! # Examples
//!
//! ```
//! use orthodist::distance::{weighted_distance, DistanceEngine};
//!
//! assert_eq!(weighted_distance("բարեւ", "բարեւ"), 0.0);
//! assert_eq!(weighted_distance("բարեւ", "Բարեւ"), 0.25);
//!
//! let engine = DistanceEngine::default();
//! let distances = engine.distances("ջուր", &["ջուր", "ջոր", "հուր"]).unwrap();
//! assert_eq!(distances.len(), 3);
//! assert_eq!(distances[0], 0.0);
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::alphabet::{Alphabet, DEFAULT_ALPHABET, Symbol};
use crate::classifier::Classifier;
use crate::cost::{CostCategory, CostSpec, CostTables, Position};
use crate::error::{OrthodistError, Result};

/// Computes distances under fixed cost tables and a fixed alphabet.
///
/// The engine holds only immutable data, so one instance can serve any number
/// of threads.
#[derive(Debug, Clone)]
pub struct DistanceEngine {
    tables: CostTables,
    alphabet: Arc<Alphabet>,
}

impl Default for DistanceEngine {
    fn default() -> Self {
        DistanceEngine::new(CostTables::default(), DEFAULT_ALPHABET.clone())
    }
}

impl DistanceEngine {
    pub fn new(tables: CostTables, alphabet: Arc<Alphabet>) -> Self {
        DistanceEngine { tables, alphabet }
    }

    /// Engine over the built-in alphabet with the given tables.
    pub fn with_tables(tables: CostTables) -> Self {
        DistanceEngine::new(tables, DEFAULT_ALPHABET.clone())
    }

    /// Engine over the built-in alphabet, resolving `spec` if given and using
    /// the built-in tables otherwise.
    pub fn from_spec(spec: Option<&CostSpec>) -> Result<Self> {
        let tables = match spec {
            Some(spec) => spec.resolve()?,
            None => CostTables::default(),
        };
        Ok(DistanceEngine::with_tables(tables))
    }

    pub fn tables(&self) -> &CostTables {
        &self.tables
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.alphabet)
    }

    /// Distance from `source` to `target`.
    pub fn distance(&self, source: &str, target: &str) -> f64 {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();

        if source.is_empty() || target.is_empty() {
            // No position context: plain insertions under the middle table.
            let len = source.len().max(target.len());
            return len as f64 * self.tables.middle[CostCategory::InsertDelete];
        }

        self.fill_grid(&source, &target).distance()
    }

    /// Distances from `source` to each of `targets`, in order.
    pub fn distances<S: AsRef<str>>(&self, source: &str, targets: &[S]) -> Result<Vec<f64>> {
        check_targets(source, targets.len())?;
        log::debug!("comparing '{source}' against {} targets", targets.len());

        Ok(targets
            .iter()
            .map(|target| self.distance(source, target.as_ref()))
            .collect())
    }

    /// Same as [`distances`](Self::distances), computing targets in parallel.
    pub fn par_distances<S: AsRef<str> + Sync>(
        &self,
        source: &str,
        targets: &[S],
    ) -> Result<Vec<f64>> {
        check_targets(source, targets.len())?;
        log::debug!(
            "comparing '{source}' against {} targets in parallel",
            targets.len()
        );

        Ok(targets
            .par_iter()
            .map(|target| self.distance(source, target.as_ref()))
            .collect())
    }

    /// The filled grid for a pair, or `None` when either string is empty
    /// (those cases are answered without a grid).
    pub fn grid(&self, source: &str, target: &str) -> Option<DistanceGrid> {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        if source.is_empty() || target.is_empty() {
            return None;
        }
        Some(self.fill_grid(&source, &target))
    }

    /// Both slices must be non-empty.
    #[allow(clippy::needless_range_loop)]
    fn fill_grid(&self, source: &[char], target: &[char]) -> DistanceGrid {
        let n = source.len();
        let m = target.len();
        let classifier = self.classifier();
        let start = &self.tables.start;

        let mut matrix = vec![vec![0.0; m + 1]; n + 1];

        let row_step = classifier.cost(Symbol::Gap, Symbol::Letter(source[0]), start);
        for i in 1..=n {
            matrix[i][0] = i as f64 * row_step;
        }
        let col_step = classifier.cost(Symbol::Letter(target[0]), Symbol::Gap, start);
        for j in 1..=m {
            matrix[0][j] = j as f64 * col_step;
        }

        let mut active = Position::Middle;
        let mut end_from = None;

        for i in 1..=n {
            let x = Symbol::Letter(source[i - 1]);
            for j in 1..=m {
                if active == Position::Middle && (i == n || j == m) {
                    active = Position::End;
                    end_from = Some((i, j));
                    log::trace!("end table active from cell ({i}, {j})");
                }
                let table = self.tables.get(active);
                let y = Symbol::Letter(target[j - 1]);

                let deletion = matrix[i - 1][j] + classifier.cost(x, Symbol::Gap, table);
                let insertion = matrix[i][j - 1] + classifier.cost(Symbol::Gap, y, table);
                let substitution = matrix[i - 1][j - 1] + classifier.cost(x, y, table);

                matrix[i][j] = deletion.min(insertion).min(substitution);
            }
        }

        DistanceGrid { matrix, end_from }
    }
}

fn check_targets(source: &str, count: usize) -> Result<()> {
    if count == 0 {
        return Err(OrthodistError::missing_target(format!(
            "no target strings to compare with '{source}'"
        )));
    }
    Ok(())
}

/// A filled cost grid for one source/target pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceGrid {
    matrix: Vec<Vec<f64>>,
    end_from: Option<(usize, usize)>,
}

impl DistanceGrid {
    /// Accumulated cost of aligning the first `i` source letters with the
    /// first `j` target letters.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.matrix.get(i)?.get(j).copied()
    }

    /// `n + 1`.
    pub fn rows(&self) -> usize {
        self.matrix.len()
    }

    /// `m + 1`.
    pub fn cols(&self) -> usize {
        self.matrix.first().map_or(0, Vec::len)
    }

    /// The bottom-right cell.
    pub fn distance(&self) -> f64 {
        self.matrix
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(0.0)
    }

    /// The first cell, in fill order, priced with the end table.
    pub fn end_from(&self) -> Option<(usize, usize)> {
        self.end_from
    }

    /// The position regime that priced cell `(i, j)`.
    pub fn position_of(&self, i: usize, j: usize) -> Position {
        if i == 0 || j == 0 {
            return Position::Start;
        }
        match self.end_from {
            Some(first) if (i, j) >= first => Position::End,
            _ => Position::Middle,
        }
    }
}

/// Distances from `source` to each target, using `spec` or the built-in
/// tables, over the built-in alphabet.
///
/// Fails with an invalid-configuration error before any string is compared
/// if `spec` is malformed, and with a missing-target error if `targets` is
/// empty.
pub fn distance<S: AsRef<str>>(
    spec: Option<&CostSpec>,
    source: &str,
    targets: &[S],
) -> Result<Vec<f64>> {
    DistanceEngine::from_spec(spec)?.distances(source, targets)
}

/// Distance between two strings with the built-in tables and alphabet.
pub fn weighted_distance(source: &str, target: &str) -> f64 {
    DistanceEngine::default().distance(source, target)
}

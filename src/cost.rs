//! Cost categories, cost tables and the three position regimes.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{OrthodistError, Result};

/// Number of cost categories, and therefore of weights in a [`CostTable`].
pub const CATEGORY_COUNT: usize = 7;

/// Why two aligned positions differ. The discriminant is the table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostCategory {
    Equal = 0,
    InsertDelete = 1,
    Mismatch = 2,
    CaseMismatch = 3,
    VocalicEquivalence = 4,
    Prefix = 5,
    Suffix = 6,
}

impl CostCategory {
    pub const ALL: [CostCategory; CATEGORY_COUNT] = [
        CostCategory::Equal,
        CostCategory::InsertDelete,
        CostCategory::Mismatch,
        CostCategory::CaseMismatch,
        CostCategory::VocalicEquivalence,
        CostCategory::Prefix,
        CostCategory::Suffix,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            CostCategory::Equal => "equal",
            CostCategory::InsertDelete => "insert-delete",
            CostCategory::Mismatch => "mismatch",
            CostCategory::CaseMismatch => "case-mismatch",
            CostCategory::VocalicEquivalence => "vocalic-equivalence",
            CostCategory::Prefix => "prefix",
            CostCategory::Suffix => "suffix",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Seven non-negative weights, indexed by [`CostCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Vec<f64>")]
pub struct CostTable([f64; CATEGORY_COUNT]);

impl CostTable {
    /// Validate and wrap seven weights.
    pub fn new(weights: [f64; CATEGORY_COUNT]) -> Result<Self> {
        for (category, &w) in CostCategory::ALL.iter().zip(&weights) {
            if !w.is_finite() || w < 0.0 {
                return Err(OrthodistError::invalid_config(format!(
                    "weight for '{category}' must be a finite non-negative number, got {w}"
                )));
            }
        }
        Ok(CostTable(weights))
    }

    /// Validate a weight slice of arbitrary length.
    pub fn from_slice(weights: &[f64]) -> Result<Self> {
        let weights: [f64; CATEGORY_COUNT] = weights.try_into().map_err(|_| {
            OrthodistError::invalid_config(format!(
                "cost table must have {CATEGORY_COUNT} entries, got {}",
                weights.len()
            ))
        })?;
        Self::new(weights)
    }

    pub fn cost(&self, category: CostCategory) -> f64 {
        self.0[category.index()]
    }

    pub fn weights(&self) -> &[f64; CATEGORY_COUNT] {
        &self.0
    }
}

impl Index<CostCategory> for CostTable {
    type Output = f64;

    fn index(&self, category: CostCategory) -> &f64 {
        &self.0[category.index()]
    }
}

impl From<CostTable> for Vec<f64> {
    fn from(table: CostTable) -> Self {
        table.weights().to_vec()
    }
}

/// Built-in start-of-word weights.
pub const DEFAULT_START: CostTable = CostTable([0.0, 1.0, 1.0, 0.25, 0.5, 0.5, 1.0]);
/// Built-in middle-of-word weights.
pub const DEFAULT_MIDDLE: CostTable = CostTable([0.0, 1.0, 1.0, 0.25, 0.5, 1.0, 1.0]);
/// Built-in end-of-word weights.
pub const DEFAULT_END: CostTable = CostTable([0.0, 1.0, 1.0, 0.25, 0.5, 1.0, 0.5]);

/// Which of the three tables applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Start,
    Middle,
    End,
}

/// The start, middle and end tables used for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostTables {
    pub start: CostTable,
    pub middle: CostTable,
    pub end: CostTable,
}

impl CostTables {
    pub fn new(start: CostTable, middle: CostTable, end: CostTable) -> Self {
        CostTables { start, middle, end }
    }

    /// Use one table for all three positions.
    pub fn uniform(table: CostTable) -> Self {
        CostTables {
            start: table,
            middle: table,
            end: table,
        }
    }

    pub fn get(&self, position: Position) -> &CostTable {
        match position {
            Position::Start => &self.start,
            Position::Middle => &self.middle,
            Position::End => &self.end,
        }
    }
}

impl Default for CostTables {
    fn default() -> Self {
        CostTables::new(DEFAULT_START, DEFAULT_MIDDLE, DEFAULT_END)
    }
}

/// Caller-supplied cost tables before validation.
///
/// Deserializes from either a flat list of weights or a list of three such
/// lists (start, middle, end).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostSpec {
    Single(Vec<f64>),
    Triple(Vec<Vec<f64>>),
}

impl CostSpec {
    /// Check the shape and every weight, producing the three tables.
    pub fn resolve(&self) -> Result<CostTables> {
        match self {
            CostSpec::Single(weights) => {
                log::debug!("resolving single cost table for all positions");
                Ok(CostTables::uniform(CostTable::from_slice(weights)?))
            }
            CostSpec::Triple(tables) => match tables.as_slice() {
                [start, middle, end] => {
                    log::debug!("resolving start/middle/end cost tables");
                    Ok(CostTables::new(
                        CostTable::from_slice(start)?,
                        CostTable::from_slice(middle)?,
                        CostTable::from_slice(end)?,
                    ))
                }
                other => Err(OrthodistError::invalid_config(format!(
                    "expected one cost table or exactly three (start, middle, end), got {}",
                    other.len()
                ))),
            },
        }
    }
}

impl From<CostTables> for CostSpec {
    fn from(tables: CostTables) -> Self {
        CostSpec::Triple(vec![tables.start.into(), tables.middle.into(), tables.end.into()])
    }
}

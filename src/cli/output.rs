//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OrthodistArgs, OutputFormat};
use crate::cost::{CostCategory, Position};
use crate::error::Result;
use crate::matching::Match;

/// Distance to one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDistance {
    pub target: String,
    pub distance: f64,
}

/// Result structure for the distance command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResults {
    pub source: String,
    pub results: Vec<TargetDistance>,
}

/// Result structure for the classify command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub x: String,
    pub y: String,
    pub position: Position,
    pub category: CostCategory,
    pub cost: f64,
}

/// Result structure for the rank command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankResults {
    pub source: String,
    pub matches: Vec<Match>,
}

/// Result structure for the matrix command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixResults {
    pub words: Vec<String>,
    pub distances: Vec<Vec<f64>>,
}

/// Result structure for the cluster command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResults {
    pub threshold: f64,
    pub clusters: Vec<Vec<String>>,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

impl HumanOutput for DistanceResults {
    fn to_human(&self) -> String {
        let width = self
            .results
            .iter()
            .map(|r| r.target.chars().count())
            .max()
            .unwrap_or(0);
        self.results
            .iter()
            .map(|r| {
                let pad = width - r.target.chars().count();
                format!("{} -> {}{}  {}", self.source, r.target, " ".repeat(pad), r.distance)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for ClassificationResult {
    fn to_human(&self) -> String {
        format!(
            "{} / {} at {:?}: {} (cost {})",
            self.x, self.y, self.position, self.category, self.cost
        )
    }
}

impl HumanOutput for RankResults {
    fn to_human(&self) -> String {
        if self.matches.is_empty() {
            return format!("No matches for '{}'", self.source);
        }
        self.matches
            .iter()
            .enumerate()
            .map(|(rank, m)| format!("{:>3}. {}  {}", rank + 1, m.target, m.distance))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for MatrixResults {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("\t{}", self.words.join("\t"))];
        for (word, row) in self.words.iter().zip(&self.distances) {
            let cells: Vec<String> = row.iter().map(|d| d.to_string()).collect();
            lines.push(format!("{word}\t{}", cells.join("\t")));
        }
        lines.join("\n")
    }
}

impl HumanOutput for ClusterResults {
    fn to_human(&self) -> String {
        self.clusters
            .iter()
            .enumerate()
            .map(|(i, members)| format!("Cluster {}: {}", i + 1, members.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a result in the requested format.
pub fn render<T: Serialize + HumanOutput>(result: &T, args: &OrthodistArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.to_human()),
        OutputFormat::Json if args.pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &OrthodistArgs) -> Result<()> {
    println!("{}", render(result, args)?);
    Ok(())
}

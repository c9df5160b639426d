//! Command line argument parsing for the orthodist CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::alphabet::Alphabet;
use crate::cost::Position;

/// orthodist - weighted orthographic edit distance
#[derive(Parser, Debug, Clone)]
#[command(name = "orthodist")]
#[command(about = "Weighted orthographic edit distance for hand-transcribed word forms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrthodistArgs {
    /// More log output; repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors (overrides --verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON) with cost tables and/or an alphabet
    #[arg(short, long, value_name = "CONFIG_FILE", env = "ORTHODIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Built-in alphabet, used unless the configuration file defines one
    #[arg(short, long, default_value = "armenian")]
    pub alphabet: AlphabetArg,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OrthodistArgs {
    /// Log level selected by `-q` / `-v`. Warnings are shown by default.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Distance from a source word to one or more targets
    Distance(DistanceArgs),

    /// Cost category of a single aligned pair
    Classify(ClassifyArgs),

    /// Rank candidate words by distance from a source word
    Rank(RankArgs),

    /// Pairwise distance matrix of a word list
    Matrix(MatrixArgs),

    /// Group a word list into clusters of close variants
    Cluster(ClusterArgs),
}

/// Arguments for computing distances
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Source word
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Target words
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<String>,

    /// Compare targets in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for classifying one aligned pair
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// First letter, or '-' for the gap
    #[arg(value_name = "X", allow_hyphen_values = true)]
    pub x: String,

    /// Second letter, or '-' for the gap
    #[arg(value_name = "Y", allow_hyphen_values = true)]
    pub y: String,

    /// Which position's cost table to price the pair with
    #[arg(short, long, default_value = "middle")]
    pub position: PositionArg,
}

/// Arguments for ranking candidates
#[derive(Parser, Debug, Clone)]
pub struct RankArgs {
    /// Source word
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// File with one candidate word per line
    #[arg(long, value_name = "WORDS_FILE")]
    pub candidates: PathBuf,

    /// Drop candidates farther than this
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Maximum number of matches to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the distance matrix
#[derive(Parser, Debug, Clone)]
pub struct MatrixArgs {
    /// File with one word per line
    #[arg(value_name = "WORDS_FILE")]
    pub words_file: PathBuf,
}

/// Arguments for clustering
#[derive(Parser, Debug, Clone)]
pub struct ClusterArgs {
    /// File with one word per line
    #[arg(value_name = "WORDS_FILE")]
    pub words_file: PathBuf,

    /// Link words whose distance is at most this
    #[arg(short, long, default_value = "1.0")]
    pub threshold: f64,
}

/// Position regimes selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionArg {
    /// Start-of-word table
    Start,
    /// Middle-of-word table
    Middle,
    /// End-of-word table
    End,
}

impl From<PositionArg> for Position {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Start => Position::Start,
            PositionArg::Middle => Position::Middle,
            PositionArg::End => Position::End,
        }
    }
}

/// Built-in alphabets selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetArg {
    /// Armenian (default)
    Armenian,
    /// Russian Cyrillic with ѣ and і
    Cyrillic,
}

impl AlphabetArg {
    pub fn build(self) -> Alphabet {
        match self {
            AlphabetArg::Armenian => Alphabet::armenian(),
            AlphabetArg::Cyrillic => Alphabet::cyrillic(),
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

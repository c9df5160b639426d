//! # orthodist
//!
//! Weighted edit distance for hand-transcribed word forms.
//!
//! Spelling in manuscripts and transcriptions varies for principled reasons:
//! letter case, historically interchangeable vowels and signs, and one-letter
//! prefixes or endings that come and go. This crate prices those differences
//! below arbitrary edits so that variant spellings of one word end up close
//! together.
//!
//! ## Features
//!
//! - Seven cost categories with a fixed precedence ([`classifier`])
//! - Separate cost tables for the start, middle and end of a word ([`cost`])
//! - Pluggable alphabets, with Armenian built in and Russian Cyrillic
//!   available ([`alphabet`])
//! - Sequential and parallel multi-target comparison ([`distance`])
//! - Ranking and clustering of word lists ([`matching`])
//!
//! ```
//! use orthodist::distance::{distance, weighted_distance};
//!
//! assert_eq!(weighted_distance("ջուր", "Ջուր"), 0.25);
//!
//! let results = distance(None, "ջուր", &["ջուր", "հուր"]).unwrap();
//! assert_eq!(results[0], 0.0);
//! ```

pub mod alphabet;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod cost;
pub mod distance;
pub mod error;
pub mod matching;

pub mod prelude {
    pub use crate::alphabet::{Alphabet, AlphabetConfig, Symbol};
    pub use crate::classifier::{Classifier, classify_cost};
    pub use crate::config::DistanceConfig;
    pub use crate::cost::{CostCategory, CostSpec, CostTable, CostTables, Position};
    pub use crate::distance::{DistanceEngine, DistanceGrid, distance, weighted_distance};
    pub use crate::error::{OrthodistError, Result};
    pub use crate::matching::{Match, MatchConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

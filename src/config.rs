//! JSON configuration for a [`DistanceEngine`].
//!
//! A configuration file may carry cost tables, an alphabet definition, both,
//! or neither; anything omitted falls back to the built-in defaults.
//!
//! ```json
//! {
//!   "costs": [0, 1, 1, 0.25, 0.5, 1, 1],
//!   "alphabet": {
//!     "prefixLetters": ["v"],
//!     "suffixLetters": ["s"],
//!     "vocalicEquivalence": {"a": ["o"], "o": ["a"]},
//!     "caseFoldOffset": 32,
//!     "alphabetRange": [65, 90]
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, AlphabetConfig, DEFAULT_ALPHABET};
use crate::cost::{CostSpec, CostTables};
use crate::distance::DistanceEngine;
use crate::error::Result;

/// Engine configuration as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistanceConfig {
    /// One table for all positions, or start/middle/end tables.
    #[serde(default)]
    pub costs: Option<CostSpec>,
    /// Alphabet definition replacing the built-in one.
    #[serde(default)]
    pub alphabet: Option<AlphabetConfig>,
}

impl DistanceConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Validate the configuration and build an engine from it.
    pub fn build_engine(&self) -> Result<DistanceEngine> {
        self.build_engine_with_alphabet(DEFAULT_ALPHABET.clone())
    }

    /// Like [`build_engine`](Self::build_engine), with `fallback` in place of
    /// the built-in alphabet when the file defines none.
    pub fn build_engine_with_alphabet(&self, fallback: Arc<Alphabet>) -> Result<DistanceEngine> {
        let tables = match &self.costs {
            Some(spec) => spec.resolve()?,
            None => CostTables::default(),
        };
        let alphabet = match &self.alphabet {
            Some(config) => Arc::new(config.build()?),
            None => fallback,
        };
        Ok(DistanceEngine::new(tables, alphabet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{CostCategory, DEFAULT_MIDDLE};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DistanceConfig::from_json("{}").unwrap();
        assert_eq!(config, DistanceConfig::default());

        let engine = config.build_engine().unwrap();
        assert_eq!(*engine.tables(), CostTables::default());
        assert_eq!(engine.alphabet().fold('Բ'), 'բ');
    }

    #[test]
    fn test_costs_only() {
        let config = DistanceConfig::from_json(r#"{"costs": [0, 2, 1, 0.25, 0.5, 1, 1]}"#).unwrap();
        let engine = config.build_engine().unwrap();
        assert_eq!(engine.tables().end[CostCategory::InsertDelete], 2.0);
        assert_eq!(engine.distance("", "աբ"), 4.0);
        assert_ne!(engine.tables().middle, DEFAULT_MIDDLE);
    }

    #[test]
    fn test_invalid_costs_fail_on_build() {
        let config = DistanceConfig::from_json(r#"{"costs": [[0, 1, 1, 0.25, 0.5, 1, 1]]}"#).unwrap();
        assert!(config.build_engine().unwrap_err().is_invalid_config());
    }

    #[test]
    fn test_fallback_alphabet_only_without_definition() {
        let cyrillic = Arc::new(Alphabet::cyrillic());

        let engine = DistanceConfig::default()
            .build_engine_with_alphabet(cyrillic.clone())
            .unwrap();
        assert_eq!(engine.distance("вода", "Вода"), 0.25);

        let config = DistanceConfig::from_json(
            r#"{"alphabet": {"caseFoldOffset": 32, "alphabetRange": [65, 90]}}"#,
        )
        .unwrap();
        let engine = config.build_engine_with_alphabet(cyrillic).unwrap();
        assert_eq!(engine.alphabet().fold('Q'), 'q');
        assert_eq!(engine.alphabet().fold('Б'), 'Б');
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(DistanceConfig::from_json(r#"{"cost": [0, 1, 1, 0.25, 0.5, 1, 1]}"#).is_err());
    }
}

//! Letters, the gap marker, and the orthographic data of one alphabet.
//!
//! An [`Alphabet`] bundles everything the cost classifier needs to know about
//! a script: which code points case-fold and by how much, which single letters
//! behave as grammatical prefixes or suffixes, and which letter pairs are
//! historically interchangeable. Alphabets are immutable once built and can be
//! shared freely between threads.

pub mod armenian;
pub mod cyrillic;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{OrthodistError, Result};

pub use armenian::DEFAULT_ALPHABET;

/// One side of an aligned position: a real letter or the gap marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A single code point of the compared strings.
    Letter(char),
    /// Absence of a letter, written `-`.
    Gap,
}

impl Symbol {
    /// Case-fold through `alphabet`. The gap folds to itself.
    pub fn fold(self, alphabet: &Alphabet) -> Symbol {
        match self {
            Symbol::Letter(c) => Symbol::Letter(alphabet.fold(c)),
            Symbol::Gap => Symbol::Gap,
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Letter(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Letter(c) => write!(f, "{c}"),
            Symbol::Gap => write!(f, "-"),
        }
    }
}

/// Orthographic data for one alphabet.
///
/// All letter sets are stored case-folded, so lookups after folding match
/// regardless of how the letters were supplied.
#[derive(Debug, Clone)]
pub struct Alphabet {
    fold_range: RangeInclusive<u32>,
    case_fold_offset: i32,
    prefix_letters: AHashSet<char>,
    suffix_letters: AHashSet<char>,
    vocalic_equivalence: AHashMap<char, Vec<char>>,
}

impl Alphabet {
    /// Create an alphabet whose uppercase block is `low..=high`, folded to
    /// lowercase by adding `case_fold_offset`.
    ///
    /// Fails if the range is inverted or if any code point in it would fold
    /// to something that is not a valid `char`.
    pub fn new(low: u32, high: u32, case_fold_offset: i32) -> Result<Self> {
        if low > high {
            return Err(OrthodistError::invalid_config(format!(
                "alphabet range [{low:#x}, {high:#x}] is inverted"
            )));
        }
        if let Some(bad) =
            (low..=high).find(|&code| shift(code, case_fold_offset).is_none())
        {
            return Err(OrthodistError::invalid_config(format!(
                "case-fold offset {case_fold_offset} maps {bad:#x} outside the valid code point space"
            )));
        }

        Ok(Alphabet {
            fold_range: low..=high,
            case_fold_offset,
            prefix_letters: AHashSet::new(),
            suffix_letters: AHashSet::new(),
            vocalic_equivalence: AHashMap::new(),
        })
    }

    /// Add letters that count as single-letter grammatical prefixes.
    pub fn with_prefix_letters<I: IntoIterator<Item = char>>(mut self, letters: I) -> Self {
        let folded: Vec<char> = letters.into_iter().map(|c| self.fold(c)).collect();
        self.prefix_letters.extend(folded);
        self
    }

    /// Add letters that count as single-letter grammatical suffixes.
    pub fn with_suffix_letters<I: IntoIterator<Item = char>>(mut self, letters: I) -> Self {
        let folded: Vec<char> = letters.into_iter().map(|c| self.fold(c)).collect();
        self.suffix_letters.extend(folded);
        self
    }

    /// Declare `letter` vocalically equivalent to each of `equivalents`.
    ///
    /// This is one-directional; call it for both sides to get a symmetric
    /// relation.
    pub fn with_equivalence<I: IntoIterator<Item = char>>(
        mut self,
        letter: char,
        equivalents: I,
    ) -> Self {
        let key = self.fold(letter);
        let folded: Vec<char> = equivalents.into_iter().map(|c| self.fold(c)).collect();
        let entry = self.vocalic_equivalence.entry(key).or_default();
        for c in folded {
            if !entry.contains(&c) {
                entry.push(c);
            }
        }
        self
    }

    /// Map an uppercase letter of this alphabet to its lowercase form.
    /// Any other code point is returned unchanged.
    pub fn fold(&self, c: char) -> char {
        let code = c as u32;
        if self.fold_range.contains(&code) {
            shift(code, self.case_fold_offset).unwrap_or(c)
        } else {
            c
        }
    }

    pub fn is_prefix_letter(&self, c: char) -> bool {
        self.prefix_letters.contains(&c)
    }

    pub fn is_suffix_letter(&self, c: char) -> bool {
        self.suffix_letters.contains(&c)
    }

    /// Whether `y` appears in the equivalence set of `x`.
    pub fn is_equivalent(&self, x: char, y: char) -> bool {
        self.vocalic_equivalence
            .get(&x)
            .is_some_and(|set| set.contains(&y))
    }

    /// Whether every equivalence `x ~ y` also has `y ~ x`.
    pub fn is_symmetric(&self) -> bool {
        self.vocalic_equivalence
            .iter()
            .all(|(&x, set)| set.iter().all(|&y| self.is_equivalent(y, x)))
    }

    /// The uppercase block folded by this alphabet.
    pub fn fold_range(&self) -> RangeInclusive<u32> {
        self.fold_range.clone()
    }

    pub fn case_fold_offset(&self) -> i32 {
        self.case_fold_offset
    }
}

fn shift(code: u32, offset: i32) -> Option<char> {
    let shifted = i64::from(code) + i64::from(offset);
    u32::try_from(shifted).ok().and_then(char::from_u32)
}

/// Serializable alphabet definition.
///
/// Keys follow the external option names (`prefixLetters`,
/// `suffixLetters`, `vocalicEquivalence`, `caseFoldOffset`, `alphabetRange`).
/// Letters are one-character strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphabetConfig {
    #[serde(default)]
    pub prefix_letters: Vec<String>,
    #[serde(default)]
    pub suffix_letters: Vec<String>,
    #[serde(default)]
    pub vocalic_equivalence: BTreeMap<String, Vec<String>>,
    pub case_fold_offset: i32,
    /// Inclusive `[low, high]` code point range of the uppercase block.
    pub alphabet_range: [u32; 2],
}

impl AlphabetConfig {
    /// Validate the definition and build an [`Alphabet`].
    pub fn build(&self) -> Result<Alphabet> {
        let [low, high] = self.alphabet_range;
        let prefixes = parse_letters(&self.prefix_letters, "prefixLetters")?;
        let suffixes = parse_letters(&self.suffix_letters, "suffixLetters")?;

        let mut alphabet = Alphabet::new(low, high, self.case_fold_offset)?
            .with_prefix_letters(prefixes)
            .with_suffix_letters(suffixes);

        for (key, values) in &self.vocalic_equivalence {
            let letter = parse_letter(key, "vocalicEquivalence")?;
            let equivalents = parse_letters(values, "vocalicEquivalence")?;
            alphabet = alphabet.with_equivalence(letter, equivalents);
        }

        if !alphabet.is_symmetric() {
            log::warn!(
                "vocalic equivalence table is asymmetric; classify_cost(x, y) may differ from classify_cost(y, x)"
            );
        }
        log::debug!(
            "built alphabet: range [{low:#x}, {high:#x}], {} prefix, {} suffix, {} equivalence entries",
            alphabet.prefix_letters.len(),
            alphabet.suffix_letters.len(),
            alphabet.vocalic_equivalence.len()
        );

        Ok(alphabet)
    }
}

fn parse_letter(s: &str, field: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(OrthodistError::invalid_config(format!(
            "{field}: '{s}' is not a single letter"
        ))),
    }
}

fn parse_letters(letters: &[String], field: &str) -> Result<Vec<char>> {
    letters.iter().map(|s| parse_letter(s, field)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> Alphabet {
        Alphabet::new('A' as u32, 'Z' as u32, 0x20)
            .unwrap()
            .with_equivalence('a', ['c'])
            .with_equivalence('c', ['a'])
    }

    #[test]
    fn test_fold_only_inside_range() {
        let alphabet = latin();
        assert_eq!(alphabet.fold('A'), 'a');
        assert_eq!(alphabet.fold('Z'), 'z');
        assert_eq!(alphabet.fold('a'), 'a');
        assert_eq!(alphabet.fold('-'), '-');
        assert_eq!(alphabet.fold('Ж'), 'Ж');
        assert_eq!(Symbol::Gap.fold(&alphabet), Symbol::Gap);
    }

    #[test]
    fn test_sets_are_stored_folded() {
        let alphabet = latin()
            .with_prefix_letters(['V'])
            .with_suffix_letters(['s'])
            .with_equivalence('E', ['I']);
        assert!(alphabet.is_prefix_letter('v'));
        assert!(alphabet.is_suffix_letter('s'));
        assert!(alphabet.is_equivalent('e', 'i'));
        assert!(!alphabet.is_equivalent('i', 'e'));
        assert!(!alphabet.is_symmetric());
    }

    #[test]
    fn test_invalid_alphabets() {
        assert!(Alphabet::new(0x5A, 0x41, 0x20).unwrap_err().is_invalid_config());
        // Would fold into the surrogate block.
        assert!(Alphabet::new(0xD700, 0xD7FF, 0x100).is_err());
        assert!(Alphabet::new(0x00, 0x10, -1).is_err());
    }

    #[test]
    fn test_config_build() {
        let json = r#"{
            "prefixLetters": ["v"],
            "suffixLetters": ["s"],
            "vocalicEquivalence": {"a": ["c"], "c": ["a"]},
            "caseFoldOffset": 32,
            "alphabetRange": [65, 90]
        }"#;
        let config: AlphabetConfig = serde_json::from_str(json).unwrap();
        let alphabet = config.build().unwrap();

        assert_eq!(alphabet.fold('Q'), 'q');
        assert!(alphabet.is_prefix_letter('v'));
        assert!(alphabet.is_suffix_letter('s'));
        assert!(alphabet.is_equivalent('c', 'a'));
        assert!(alphabet.is_symmetric());
    }

    #[test]
    fn test_config_rejects_multi_letter_entries() {
        let config = AlphabetConfig {
            prefix_letters: vec!["in".to_string()],
            suffix_letters: vec![],
            vocalic_equivalence: BTreeMap::new(),
            case_fold_offset: 32,
            alphabet_range: [65, 90],
        };
        assert!(config.build().unwrap_err().is_invalid_config());
    }
}

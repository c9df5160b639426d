//! Built-in Armenian alphabet.
//!
//! Uppercase Ա..Ֆ (U+0531..U+0556) folds onto ա..ֆ (U+0561..U+0586). The
//! affix letters are the one-letter proclitics and the demonstrative
//! article endings of Classical Armenian, which scribes attach or drop
//! freely.

use std::sync::{Arc, LazyLock};

use crate::alphabet::Alphabet;

const UPPERCASE_LOW: u32 = 0x0531;
const UPPERCASE_HIGH: u32 = 0x0556;
const CASE_FOLD_OFFSET: i32 = 0x30;

/// զ- (object marker), ց- ("to"), յ- ("in", before vowels).
const PREFIX_LETTERS: &[char] = &['զ', 'ց', 'յ'];

/// -ս, -դ, -ն articles.
const SUFFIX_LETTERS: &[char] = &['ս', 'դ', 'ն'];

/// Symmetric: every pair is listed from both sides.
const VOCALIC_EQUIVALENCE: &[(char, &[char])] = &[
    ('ա', &['ը']),
    ('ե', &['է', 'ը', 'ի', 'յ']),
    ('է', &['ե', 'ի']),
    ('ը', &['ա', 'ե', 'ի', 'ւ']),
    ('ի', &['ե', 'է', 'ը', 'յ']),
    ('յ', &['ե', 'ի']),
    ('ո', &['օ', 'ւ']),
    ('ւ', &['ո', 'ը', 'վ']),
    ('վ', &['ւ', 'ֆ']),
    ('օ', &['ո']),
    ('ֆ', &['վ']),
];

/// The alphabet used when no other is configured.
pub static DEFAULT_ALPHABET: LazyLock<Arc<Alphabet>> = LazyLock::new(|| Arc::new(armenian()));

fn armenian() -> Alphabet {
    let mut alphabet = Alphabet::new(UPPERCASE_LOW, UPPERCASE_HIGH, CASE_FOLD_OFFSET)
        .unwrap_or_else(|_| unreachable!("Ա..Ֆ + 0x30 is ա..ֆ"))
        .with_prefix_letters(PREFIX_LETTERS.iter().copied())
        .with_suffix_letters(SUFFIX_LETTERS.iter().copied());
    for &(letter, equivalents) in VOCALIC_EQUIVALENCE {
        alphabet = alphabet.with_equivalence(letter, equivalents.iter().copied());
    }
    alphabet
}

impl Alphabet {
    /// A fresh copy of the built-in Armenian alphabet.
    pub fn armenian() -> Alphabet {
        armenian()
    }
}

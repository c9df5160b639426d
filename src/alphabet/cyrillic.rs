//! Russian Cyrillic alphabet, available as an alternative to the default.
//!
//! Covers the modern alphabet plus the pre-reform letters ѣ and і, which show
//! up in older transcriptions and alternate with е and и.

use crate::alphabet::Alphabet;

/// Uppercase А..Я.
const UPPERCASE_LOW: u32 = 0x0410;
const UPPERCASE_HIGH: u32 = 0x042F;
const CASE_FOLD_OFFSET: i32 = 0x20;

/// Single-letter prepositions and verbal prefixes that attach to a word.
const PREFIX_LETTERS: &[char] = &['в', 'с', 'к', 'у', 'о'];

/// Hard/soft signs and one-letter inflectional endings.
const SUFFIX_LETTERS: &[char] = &['ъ', 'ь', 'а', 'я', 'е', 'и', 'ы', 'й'];

/// Symmetric: every pair is listed from both sides.
const VOCALIC_EQUIVALENCE: &[(char, &[char])] = &[
    ('а', &['о', 'я']),
    ('о', &['а', 'ъ']),
    ('ъ', &['о']),
    ('я', &['а']),
    ('е', &['ь', 'ѣ', 'и', 'э']),
    ('ь', &['е']),
    ('ѣ', &['е', 'и']),
    ('э', &['е']),
    ('и', &['е', 'ѣ', 'і', 'ы', 'й']),
    ('і', &['и']),
    ('ы', &['и']),
    ('й', &['и']),
    ('у', &['ю']),
    ('ю', &['у']),
];

fn cyrillic() -> Alphabet {
    let mut alphabet = Alphabet::new(UPPERCASE_LOW, UPPERCASE_HIGH, CASE_FOLD_OFFSET)
        .unwrap_or_else(|_| unreachable!("А..Я + 0x20 is а..я"))
        .with_prefix_letters(PREFIX_LETTERS.iter().copied())
        .with_suffix_letters(SUFFIX_LETTERS.iter().copied());
    for &(letter, equivalents) in VOCALIC_EQUIVALENCE {
        alphabet = alphabet.with_equivalence(letter, equivalents.iter().copied());
    }
    alphabet
}

impl Alphabet {
    /// The Russian Cyrillic alphabet.
    pub fn cyrillic() -> Alphabet {
        cyrillic()
    }
}

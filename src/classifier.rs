//! Assignment of aligned letter pairs to cost categories.
//!
//! Categories are tested in a fixed precedence order and the first match
//! wins:
//!
//! 1. identical symbols (no folding) are [`CostCategory::Equal`];
//! 2. distinct letters that fold to the same letter are
//!    [`CostCategory::CaseMismatch`];
//! 3. otherwise both sides are folded, and a pair involving the gap is
//!    [`CostCategory::Prefix`], [`CostCategory::Suffix`] or
//!    [`CostCategory::InsertDelete`] depending on the other letter;
//! 4. two letters are [`CostCategory::VocalicEquivalence`] when the second
//!    is listed for the first, and [`CostCategory::Mismatch`] otherwise.

use crate::alphabet::{Alphabet, Symbol};
use crate::cost::{CostCategory, CostTable};

/// Classifies aligned pairs against one alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Classifier<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Classifier { alphabet }
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// The category of aligning `x` with `y`.
    pub fn classify(&self, x: Symbol, y: Symbol) -> CostCategory {
        if x == y {
            return CostCategory::Equal;
        }

        let x = x.fold(self.alphabet);
        let y = y.fold(self.alphabet);

        match (x, y) {
            (Symbol::Letter(a), Symbol::Letter(b)) if a == b => CostCategory::CaseMismatch,
            (Symbol::Letter(other), Symbol::Gap) | (Symbol::Gap, Symbol::Letter(other)) => {
                if self.alphabet.is_prefix_letter(other) {
                    CostCategory::Prefix
                } else if self.alphabet.is_suffix_letter(other) {
                    CostCategory::Suffix
                } else {
                    CostCategory::InsertDelete
                }
            }
            (Symbol::Letter(a), Symbol::Letter(b)) => {
                if self.alphabet.is_equivalent(a, b) {
                    CostCategory::VocalicEquivalence
                } else {
                    CostCategory::Mismatch
                }
            }
            // Both gaps were already caught by the equality check.
            (Symbol::Gap, Symbol::Gap) => CostCategory::Equal,
        }
    }

    /// The weight `table` assigns to aligning `x` with `y`.
    #[inline]
    pub fn cost(&self, x: Symbol, y: Symbol, table: &CostTable) -> f64 {
        table.cost(self.classify(x, y))
    }
}

/// Weight of aligning `x` with `y` under `table`, using `alphabet`.
pub fn classify_cost(x: Symbol, y: Symbol, table: &CostTable, alphabet: &Alphabet) -> f64 {
    Classifier::new(alphabet).cost(x, y, table)
}

//! Ordered symbol set with index lookup.
//!
//! An [`Alphabet`] is the bijection between the machine's symbols and the
//! integer indices `0..size` that every permutation and rotor works on.

use super::error::AlphabetError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper-case a symbol when it has a single-character upper-case form.
pub(crate) fn normalize(symbol: char) -> char {
    let mut upper = symbol.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => symbol,
    }
}

/// Ordered sequence of distinct, case-normalized symbols.
///
/// Immutable after construction. Machines share one alphabet between
/// their plugboard and every rotor wiring.
///
/// # Example
///
/// ```rust
/// use rotorsim::core::Alphabet;
///
/// let alphabet = Alphabet::new("abcd").unwrap();
/// assert_eq!(alphabet.size(), 4);
/// assert_eq!(alphabet.to_index('C').unwrap(), 2);
/// assert_eq!(alphabet.to_symbol(3).unwrap(), 'D');
/// assert!(Alphabet::new("ABCA").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from `symbols`, upper-casing each one.
    ///
    /// Fails on an empty string or when a symbol repeats after
    /// normalization.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.chars().map(normalize).collect();
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(AlphabetError::DuplicateSymbol(*symbol));
            }
        }
        Ok(Self { symbols })
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Check whether `symbol` (after normalization) belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&normalize(symbol))
    }

    /// Index of `symbol`.
    pub fn to_index(&self, symbol: char) -> Result<usize, AlphabetError> {
        let symbol = normalize(symbol);
        self.symbols
            .iter()
            .position(|s| *s == symbol)
            .ok_or(AlphabetError::NotInAlphabet(symbol))
    }

    /// Symbol at `index`, which must lie in `0..size()`.
    pub fn to_symbol(&self, index: usize) -> Result<char, AlphabetError> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(AlphabetError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Iterate the symbols in index order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl Default for Alphabet {
    /// The 26 upper-case Latin letters.
    fn default() -> Self {
        Self {
            symbols: ('A'..='Z').collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

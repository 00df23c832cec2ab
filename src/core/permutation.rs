//! Bijections on alphabet indices built from cycle notation.

use super::alphabet::{normalize, Alphabet};
use super::error::PermutationError;
use std::sync::Arc;

/// A total bijection on `0..alphabet.size()`.
///
/// Built once from cycle notation such as `"(AELTPHQXRU) (BKNW) (IV)"`.
/// Symbols that appear in no cycle are fixed points. Both directions are
/// tabulated up front, so forward and inverse lookups are O(1).
///
/// # Example
///
/// ```rust
/// use rotorsim::core::{Alphabet, Permutation};
/// use std::sync::Arc;
///
/// let alphabet = Arc::new(Alphabet::new("ABCD").unwrap());
/// let perm = Permutation::new("(ABC)", alphabet).unwrap();
///
/// assert_eq!(perm.permute_symbol('A').unwrap(), 'B');
/// assert_eq!(perm.permute_symbol('C').unwrap(), 'A');
/// assert_eq!(perm.invert_symbol('A').unwrap(), 'C');
/// assert_eq!(perm.permute_symbol('D').unwrap(), 'D');
/// assert_eq!(perm.permute_index(-1), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Arc<Alphabet>,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// Parse `cycles` over `alphabet`.
    ///
    /// Whitespace between groups is ignored; groups may also be written
    /// back to back (`"(AB)(CD)"`). A symbol may occur at most once across
    /// all groups.
    pub fn new(cycles: &str, alphabet: Arc<Alphabet>) -> Result<Self, PermutationError> {
        let parsed = parse_cycles(cycles, &alphabet)?;
        let mut forward: Vec<usize> = (0..alphabet.size()).collect();
        let mut inverse = forward.clone();

        for cycle in &parsed {
            for (k, &from) in cycle.iter().enumerate() {
                let to = cycle[(k + 1) % cycle.len()];
                forward[from] = to;
                inverse[to] = from;
            }
        }

        Ok(Self {
            alphabet,
            forward,
            inverse,
        })
    }

    /// The permutation that maps every index to itself.
    pub fn identity(alphabet: Arc<Alphabet>) -> Self {
        let forward: Vec<usize> = (0..alphabet.size()).collect();
        Self {
            inverse: forward.clone(),
            forward,
            alphabet,
        }
    }

    /// Size of the underlying alphabet.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// Alphabet this permutation acts on.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Reduce `p` into `0..size()`, wrapping negatives.
    pub fn wrap(&self, p: isize) -> usize {
        p.rem_euclid(self.size() as isize) as usize
    }

    /// Apply the permutation to `p` modulo the alphabet size.
    pub fn permute_index(&self, p: isize) -> usize {
        self.forward[self.wrap(p)]
    }

    /// Apply the inverse permutation to `c` modulo the alphabet size.
    pub fn invert_index(&self, c: isize) -> usize {
        self.inverse[self.wrap(c)]
    }

    /// Symbol-level form of [`permute_index`](Self::permute_index).
    pub fn permute_symbol(&self, symbol: char) -> Result<char, PermutationError> {
        let index = self.index_of(symbol)?;
        Ok(self.symbol_at(self.forward[index]))
    }

    /// Symbol-level form of [`invert_index`](Self::invert_index).
    pub fn invert_symbol(&self, symbol: char) -> Result<char, PermutationError> {
        let index = self.index_of(symbol)?;
        Ok(self.symbol_at(self.inverse[index]))
    }

    /// True iff no index maps to itself.
    pub fn is_derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &p)| i != p)
    }

    /// True iff applying the permutation twice is the identity.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Canonical cycle notation: cycles in order of their smallest index,
    /// fixed points omitted. Parsing the result yields an equal permutation.
    pub fn cycles(&self) -> String {
        let mut seen = vec![false; self.size()];
        let mut groups = Vec::new();

        for start in 0..self.size() {
            if seen[start] || self.forward[start] == start {
                continue;
            }
            let mut group = String::from("(");
            let mut current = start;
            while !seen[current] {
                seen[current] = true;
                group.push(self.symbol_at(current));
                current = self.forward[current];
            }
            group.push(')');
            groups.push(group);
        }

        groups.join(" ")
    }

    fn index_of(&self, symbol: char) -> Result<usize, PermutationError> {
        self.alphabet
            .to_index(symbol)
            .map_err(|_| PermutationError::NotInAlphabet(normalize(symbol)))
    }

    fn symbol_at(&self, index: usize) -> char {
        // Indices held in the tables are always below the alphabet size.
        self.alphabet.symbols().nth(index).unwrap_or_default()
    }
}

/// Split cycle notation into index groups, validating syntax and symbols.
fn parse_cycles(cycles: &str, alphabet: &Alphabet) -> Result<Vec<Vec<usize>>, PermutationError> {
    let malformed = |reason: &str| PermutationError::MalformedCycle {
        cycles: cycles.to_string(),
        reason: reason.to_string(),
    };

    let mut groups = Vec::new();
    let mut current: Option<Vec<usize>> = None;
    let mut used = vec![false; alphabet.size()];

    for ch in cycles.chars() {
        match ch {
            '(' => {
                if current.is_some() {
                    return Err(malformed("nested '('"));
                }
                current = Some(Vec::new());
            }
            ')' => {
                let group = current.take().ok_or_else(|| malformed("unmatched ')'"))?;
                if group.is_empty() {
                    return Err(malformed("empty cycle"));
                }
                groups.push(group);
            }
            c if c.is_whitespace() => {
                if current.is_some() {
                    return Err(malformed("whitespace inside a cycle"));
                }
            }
            c => {
                let group = current
                    .as_mut()
                    .ok_or_else(|| malformed("symbol outside parentheses"))?;
                let index = alphabet
                    .to_index(c)
                    .map_err(|_| malformed(&format!("symbol '{c}' is not in the alphabet")))?;
                if used[index] {
                    return Err(PermutationError::DuplicateSymbol(normalize(c)));
                }
                used[index] = true;
                group.push(index);
            }
        }
    }

    if current.is_some() {
        return Err(malformed("unclosed '('"));
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper() -> Arc<Alphabet> {
        Arc::new(Alphabet::default())
    }

    const ROTOR_I: &str = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";

    #[test]
    fn cycles_map_to_successor() {
        let perm = Permutation::new(ROTOR_I, upper()).unwrap();
        assert_eq!(perm.permute_symbol('A').unwrap(), 'E');
        assert_eq!(perm.permute_symbol('U').unwrap(), 'A');
        assert_eq!(perm.permute_symbol('S').unwrap(), 'S');
        assert_eq!(perm.invert_symbol('E').unwrap(), 'A');
        assert_eq!(perm.invert_symbol('A').unwrap(), 'U');
    }

    #[test]
    fn index_operations_wrap_modulo_size() {
        let perm = Permutation::new(ROTOR_I, upper()).unwrap();
        assert_eq!(perm.permute_index(0), 4);
        assert_eq!(perm.permute_index(26), 4);
        assert_eq!(perm.permute_index(-26), 4);
        // -1 wraps to Z, which maps to J.
        assert_eq!(perm.permute_index(-1), 9);
        assert_eq!(perm.invert_index(30), 0);
    }

    #[test]
    fn forward_and_inverse_compose_to_identity() {
        let perm = Permutation::new(ROTOR_I, upper()).unwrap();
        for p in 0..26isize {
            assert_eq!(perm.invert_index(perm.permute_index(p) as isize), p as usize);
            assert_eq!(perm.permute_index(perm.invert_index(p) as isize), p as usize);
        }
    }

    #[test]
    fn empty_cycle_text_is_identity() {
        let perm = Permutation::new("", upper()).unwrap();
        for p in 0..26isize {
            assert_eq!(perm.permute_index(p), p as usize);
        }
        assert_eq!(perm, Permutation::identity(upper()));
        assert!(!perm.is_derangement());
    }

    #[test]
    fn adjacent_groups_without_whitespace() {
        let perm = Permutation::new("(AB)(CD)", upper()).unwrap();
        assert_eq!(perm.permute_symbol('B').unwrap(), 'A');
        assert_eq!(perm.permute_symbol('C').unwrap(), 'D');
    }

    #[test]
    fn lower_case_symbols_are_normalized() {
        let perm = Permutation::new("(ab)", upper()).unwrap();
        assert_eq!(perm.permute_symbol('a').unwrap(), 'B');
    }

    #[test]
    fn duplicate_across_cycles_is_rejected() {
        assert_eq!(
            Permutation::new("(AB) (CA)", upper()),
            Err(PermutationError::DuplicateSymbol('A'))
        );
    }

    #[test]
    fn duplicate_in_final_position_is_rejected() {
        assert_eq!(
            Permutation::new("(ABC) (DEZ) (Z)", upper()),
            Err(PermutationError::DuplicateSymbol('Z'))
        );
    }

    #[test]
    fn malformed_syntax_is_rejected() {
        for bad in ["(AB", "AB)", "((AB))", "(A B)", "AB", "()", "(A1)"] {
            let result = Permutation::new(bad, upper());
            assert!(
                matches!(result, Err(PermutationError::MalformedCycle { .. })),
                "expected {bad:?} to be malformed, got {result:?}"
            );
        }
    }

    #[test]
    fn symbol_lookup_outside_alphabet() {
        let perm = Permutation::new("(AB)", upper()).unwrap();
        assert_eq!(
            perm.permute_symbol('1'),
            Err(PermutationError::NotInAlphabet('1'))
        );
    }

    #[test]
    fn derangement_detection() {
        let reflector = Permutation::new(
            "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
            upper(),
        )
        .unwrap();
        assert!(reflector.is_derangement());
        assert!(reflector.is_involution());

        let rotor = Permutation::new(ROTOR_I, upper()).unwrap();
        assert!(!rotor.is_derangement());
        assert!(!rotor.is_involution());
    }

    #[test]
    fn canonical_cycles_round_trip() {
        let perm = Permutation::new("(YF) (ZH) (S)", upper()).unwrap();
        assert_eq!(perm.cycles(), "(FY) (HZ)");
        let reparsed = Permutation::new(&perm.cycles(), upper()).unwrap();
        assert_eq!(perm, reparsed);
    }
}

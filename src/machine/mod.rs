//! The assembled rotor machine.
//!
//! A [`Machine`] owns its slot list and plugboard exclusively. Rotors are
//! cloned out of the [`RotorCatalogue`] on insertion, so two machines built
//! from one catalogue never share mutable state.

mod catalogue;
pub mod error;
pub mod stepping;

pub use catalogue::RotorCatalogue;
pub use error::MachineError;

use crate::core::{Alphabet, AlphabetError, Permutation, Rotor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// What [`Machine::convert`] does with symbols outside the alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownSymbolPolicy {
    /// Replace the symbol with a blank.
    #[default]
    Blank,
    /// Copy the symbol to the output unchanged.
    PassThrough,
    /// Fail with [`MachineError::SymbolNotInAlphabet`].
    Reject,
}

/// Enigma-style rotor machine.
///
/// Slot 0 holds the reflector; higher slots lie further right and step
/// faster. Only the rightmost `pawls` slots may rotate.
///
/// # Example
///
/// ```rust
/// use rotorsim::core::{Alphabet, Permutation, Rotor};
/// use rotorsim::machine::{Machine, RotorCatalogue};
/// use std::sync::Arc;
///
/// let abc = Arc::new(Alphabet::default());
/// let perm = |cycles: &str| Permutation::new(cycles, abc.clone()).unwrap();
///
/// let catalogue = RotorCatalogue::try_from(vec![
///     Rotor::reflector("B", perm("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)")).unwrap(),
///     Rotor::fixed("BETA", perm("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)")),
///     Rotor::moving("III", perm("(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"), "V").unwrap(),
///     Rotor::moving("IV", perm("(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)"), "J").unwrap(),
///     Rotor::moving("I", perm("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"), "Q").unwrap(),
/// ])
/// .unwrap();
///
/// let mut machine = Machine::new(abc.clone(), 5, 3, catalogue).unwrap();
/// machine.insert_rotors(&["B", "BETA", "III", "IV", "I"]).unwrap();
/// machine.set_rotors("AXLE").unwrap();
/// machine.set_plugboard(perm("(HQ) (EX) (IP) (TR) (BY)")).unwrap();
///
/// assert_eq!(machine.convert("FROM").unwrap(), "QVPQ");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    alphabet: Arc<Alphabet>,
    num_rotors: usize,
    pawls: usize,
    catalogue: RotorCatalogue,
    slots: Vec<Rotor>,
    plugboard: Permutation,
    unknown_symbols: UnknownSymbolPolicy,
}

impl Machine {
    /// A machine with `num_rotors` slots and `pawls` pawls drawing rotors
    /// from `catalogue`.
    ///
    /// Requires `num_rotors > 1`, `pawls < num_rotors`, and every catalogue
    /// rotor wired over `alphabet`. The plugboard starts as the identity and
    /// no rotors are inserted.
    pub fn new(
        alphabet: Arc<Alphabet>,
        num_rotors: usize,
        pawls: usize,
        catalogue: RotorCatalogue,
    ) -> Result<Self, MachineError> {
        if num_rotors <= 1 {
            return Err(MachineError::TooFewRotors(num_rotors));
        }
        if pawls >= num_rotors {
            return Err(MachineError::PawlsOutOfRange { pawls, num_rotors });
        }
        if let Some(rotor) = catalogue.iter().find(|r| **r.alphabet() != *alphabet) {
            return Err(MachineError::AlphabetMismatch(rotor.name().to_string()));
        }

        Ok(Self {
            plugboard: Permutation::identity(alphabet.clone()),
            alphabet,
            num_rotors,
            pawls,
            catalogue,
            slots: Vec::new(),
            unknown_symbols: UnknownSymbolPolicy::default(),
        })
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Number of pawls, and so the most rotors that can ever move.
    pub fn num_pawls(&self) -> usize {
        self.pawls
    }

    pub fn catalogue(&self) -> &RotorCatalogue {
        &self.catalogue
    }

    pub fn plugboard(&self) -> &Permutation {
        &self.plugboard
    }

    pub fn unknown_symbol_policy(&self) -> UnknownSymbolPolicy {
        self.unknown_symbols
    }

    pub fn set_unknown_symbol_policy(&mut self, policy: UnknownSymbolPolicy) {
        self.unknown_symbols = policy;
    }

    /// Rotor in `slot`, if rotors are inserted.
    pub fn rotor(&self, slot: usize) -> Option<&Rotor> {
        self.slots.get(slot)
    }

    /// Whether rotors have been inserted.
    pub fn is_assembled(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Names of the inserted rotors, left to right.
    pub fn slot_names(&self) -> Vec<&str> {
        self.slots.iter().map(Rotor::name).collect()
    }

    /// Current settings of the non-reflector slots, left to right.
    pub fn settings(&self) -> String {
        self.slots.iter().skip(1).map(Rotor::setting_symbol).collect()
    }

    /// Fill the slots with the catalogue rotors named by `names`.
    ///
    /// `names[0]` must be a reflector and no other name may be. Any other
    /// rotor may sit in any slot: a fixed rotor inside the pawl range, or a
    /// moving rotor left of it, simply never steps. Every inserted rotor
    /// starts at setting 0.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), MachineError> {
        if names.len() != self.num_rotors {
            return Err(MachineError::WrongRotorCount {
                expected: self.num_rotors,
                found: names.len(),
            });
        }

        let mut slots = Vec::with_capacity(names.len());
        for (slot, name) in names.iter().enumerate() {
            let name: &str = name.as_ref();
            if names[..slot].iter().any(|n| AsRef::<str>::as_ref(n) == name) {
                return Err(MachineError::DuplicateRotorName(name.to_string()));
            }
            let mut rotor = self
                .catalogue
                .get(name)
                .cloned()
                .ok_or_else(|| MachineError::UnknownRotor(name.to_string()))?;

            if rotor.reflecting() != (slot == 0) {
                return Err(MachineError::ReflectorPlacement {
                    name: name.to_string(),
                    slot,
                });
            }

            rotor.set(0)?;
            slots.push(rotor);
        }

        self.slots = slots;
        tracing::debug!(rotors = ?self.slot_names(), "Inserted rotors");
        Ok(())
    }

    /// Set the non-reflector slots from `setting`, one symbol per slot, left
    /// to right.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), MachineError> {
        if !self.is_assembled() {
            return Err(MachineError::NotAssembled);
        }
        let expected = self.num_rotors - 1;
        if setting.chars().count() != expected {
            return Err(MachineError::BadSettingLength {
                setting: setting.to_string(),
                expected,
            });
        }

        let indices = setting
            .chars()
            .map(|symbol| self.alphabet.to_index(symbol))
            .collect::<Result<Vec<_>, _>>()?;
        for (rotor, index) in self.slots[1..].iter_mut().zip(indices) {
            rotor.set(index)?;
        }

        tracing::debug!(setting = %self.settings(), "Set rotors");
        Ok(())
    }

    /// Replace the plugboard.
    ///
    /// Decryption mirrors encryption only when `plugboard` is an involution,
    /// as plugboards built from disjoint pairs always are.
    pub fn set_plugboard(&mut self, plugboard: Permutation) -> Result<(), MachineError> {
        if **plugboard.alphabet() != *self.alphabet {
            return Err(MachineError::AlphabetMismatch("plugboard".to_string()));
        }
        if !plugboard.is_involution() {
            tracing::warn!(
                plugboard = %plugboard.cycles(),
                "Plugboard is not self-inverse; decryption will not mirror encryption"
            );
        }
        self.plugboard = plugboard;
        Ok(())
    }

    /// Slots that the next keypress will advance.
    pub fn advancing_slots(&self) -> BTreeSet<usize> {
        stepping::advancing_slots(&self.slots, self.pawls)
    }

    /// Press one key: step the rotors, then send `index` through the
    /// plugboard, the rotors right to left, back left to right, and the
    /// plugboard again.
    pub fn convert_index(&mut self, index: usize) -> Result<usize, MachineError> {
        if !self.is_assembled() {
            return Err(MachineError::NotAssembled);
        }
        if index >= self.alphabet.size() {
            return Err(AlphabetError::IndexOutOfRange {
                index,
                size: self.alphabet.size(),
            }
            .into());
        }

        let advancing = self.advancing_slots();
        stepping::apply(&mut self.slots, &advancing);
        tracing::trace!(?advancing, settings = %self.settings(), "Stepped rotors");

        let mut signal = self.plugboard.permute_index(index as isize);
        for rotor in self.slots.iter().rev() {
            signal = rotor.convert_forward(signal);
        }
        for rotor in &self.slots[1..] {
            signal = rotor.convert_backward(signal);
        }
        Ok(self.plugboard.permute_index(signal as isize))
    }

    /// Convert `message` one symbol at a time.
    ///
    /// Symbols outside the alphabet do not press a key; they are handled by
    /// the machine's [`UnknownSymbolPolicy`]. With the `Blank` and
    /// `PassThrough` policies the output has as many symbols as the input.
    pub fn convert(&mut self, message: &str) -> Result<String, MachineError> {
        let mut output = String::with_capacity(message.len());
        for symbol in message.chars() {
            if self.alphabet.contains(symbol) {
                let index = self.alphabet.to_index(symbol)?;
                let converted = self.convert_index(index)?;
                output.push(self.alphabet.to_symbol(converted)?);
                continue;
            }
            match self.unknown_symbols {
                UnknownSymbolPolicy::Blank => output.push(' '),
                UnknownSymbolPolicy::PassThrough => output.push(symbol),
                UnknownSymbolPolicy::Reject => {
                    return Err(MachineError::SymbolNotInAlphabet(symbol))
                }
            }
        }
        Ok(output)
    }
}

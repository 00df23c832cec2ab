//! Machine assembly and conversion errors.

use crate::core::{AlphabetError, RotorError};
use thiserror::Error;

/// Errors that can occur while assembling or running a [`Machine`](super::Machine).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("A machine needs more than one rotor slot (got {0})")]
    TooFewRotors(usize),

    #[error("Pawl count {pawls} must be below the number of rotor slots ({num_rotors})")]
    PawlsOutOfRange { pawls: usize, num_rotors: usize },

    #[error("Expected {expected} rotors, got {found}")]
    WrongRotorCount { expected: usize, found: usize },

    #[error("Rotor '{0}' is named more than once")]
    DuplicateRotorName(String),

    #[error("Rotor '{0}' is not in the catalogue")]
    UnknownRotor(String),

    #[error("Rotor '{name}' in slot {slot}: only slot 0 may hold a reflector, and it must")]
    ReflectorPlacement { name: String, slot: usize },

    #[error("Rotor '{0}' uses a different alphabet than the machine")]
    AlphabetMismatch(String),

    #[error("Setting '{setting}' must have exactly {expected} symbols")]
    BadSettingLength { setting: String, expected: usize },

    #[error("No rotors inserted")]
    NotAssembled,

    #[error("Symbol '{0}' is not in the machine's alphabet")]
    SymbolNotInAlphabet(char),

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error(transparent)]
    Rotor(#[from] RotorError),
}

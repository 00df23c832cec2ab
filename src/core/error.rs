//! Error types for the alphabet, permutation and rotor primitives.

use thiserror::Error;

/// Errors raised while building or querying an [`Alphabet`](super::Alphabet).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Alphabet must contain at least one symbol")]
    Empty,

    #[error("Duplicate symbol '{0}' in alphabet")]
    DuplicateSymbol(char),

    #[error("Symbol '{0}' is not in the alphabet")]
    NotInAlphabet(char),

    #[error("Index {index} out of range for alphabet of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Errors raised while parsing or applying a [`Permutation`](super::Permutation).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PermutationError {
    #[error("Malformed cycle notation '{cycles}': {reason}")]
    MalformedCycle { cycles: String, reason: String },

    #[error("Symbol '{0}' appears more than once in cycle notation")]
    DuplicateSymbol(char),

    #[error("Symbol '{0}' is not in the permutation's alphabet")]
    NotInAlphabet(char),
}

/// Errors raised while building or positioning a [`Rotor`](super::Rotor).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RotorError {
    #[error("Reflector '{0}' wiring must not have fixed points")]
    NotADerangement(String),

    #[error("Invalid setting {setting} for rotor '{name}' of size {size}")]
    InvalidSetting {
        name: String,
        setting: usize,
        size: usize,
    },

    #[error("Setting symbol '{symbol}' is not in the alphabet of rotor '{name}'")]
    InvalidSettingSymbol { name: String, symbol: char },

    #[error("Reflector '{0}' has a single position and cannot be set")]
    ReflectorPosition(String),

    #[error("Notch '{notch}' of rotor '{name}' is not in its alphabet")]
    UnknownNotch { name: String, notch: char },

    #[error("Bad wiring for rotor '{name}': {source}")]
    Wiring {
        name: String,
        #[source]
        source: PermutationError,
    },
}

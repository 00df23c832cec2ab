//! Build errors for the machine builder.

use crate::core::{AlphabetError, PermutationError, RotorError};
use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Alphabet not specified. Call .alphabet(symbols) before .build()")]
    MissingAlphabet,

    #[error("Slot count not specified. Call .slots(n) before .build()")]
    MissingSlots,

    #[error("Pawl count not specified. Call .pawls(n) before .build()")]
    MissingPawls,

    #[error("No rotors defined. Add at least one rotor")]
    NoRotors,

    #[error("Invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),

    #[error("Invalid plugboard: {0}")]
    Plugboard(#[source] PermutationError),

    #[error(transparent)]
    Rotor(#[from] RotorError),

    #[error(transparent)]
    Machine(#[from] MachineError),
}

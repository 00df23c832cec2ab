//! Message session errors.

use crate::core::PermutationError;
use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur while processing a message stream.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Input must begin with a settings line ('* ...')")]
    MissingSettings,

    #[error("Settings line truncated: expected {0}")]
    SettingsTruncated(&'static str),

    #[error("Settings line names {found} rotors, but the machine has {expected} slots")]
    RotorCount { expected: usize, found: usize },

    #[error("Expected a plugboard cycle, found '{0}'")]
    BadPlugboardToken(String),

    #[error("Invalid plugboard: {0}")]
    Plugboard(#[from] PermutationError),

    #[error(transparent)]
    Machine(#[from] MachineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

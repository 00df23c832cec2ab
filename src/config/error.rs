//! Configuration errors.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while reading a machine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Input ended before a required item
    #[error("Configuration truncated: expected {0}")]
    Truncated(&'static str),

    /// A count was not a non-negative integer
    #[error("Expected {what}, found '{token}'")]
    BadInteger { what: &'static str, token: String },

    /// The alphabet line uses a character reserved by the file format
    #[error("Alphabet may not contain '{0}'")]
    ReservedSymbol(char),

    /// Rotor type tag other than M, N or R
    #[error("Rotor '{name}' has unknown type '{tag}' (expected M, N or R)")]
    UnknownRotorType { name: String, tag: char },

    /// Notches given for a rotor that cannot rotate
    #[error("Rotor '{name}' does not rotate and cannot have notches")]
    UnexpectedNotches { name: String },

    /// Rotor description without wiring cycles
    #[error("Rotor '{name}' has no wiring cycles")]
    MissingCycles { name: String },

    /// The described machine failed validation
    #[error(transparent)]
    Build(#[from] BuildError),
}

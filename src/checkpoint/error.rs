//! Errors raised while saving or restoring rotor state.

use crate::core::PermutationError;
use crate::machine::MachineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The snapshot could not be written as JSON or bincode.
    #[error("Could not encode rotor snapshot: {0}")]
    SerializationFailed(String),

    /// Saved bytes or text are not a rotor snapshot.
    #[error("Could not decode rotor snapshot: {0}")]
    DeserializationFailed(String),

    /// Snapshot written by a newer or older format.
    #[error("Snapshot format {found} cannot be read (this build reads format {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Machine has no rotors to save, or differs from the one that was saved.
    #[error("Snapshot does not fit this machine: {0}")]
    ValidationFailed(String),

    /// The machine rejected the recorded rotors or settings
    #[error("Restore failed: {0}")]
    Restore(#[from] MachineError),

    /// The recorded plugboard no longer parses
    #[error("Restore failed: {0}")]
    Plugboard(#[from] PermutationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_snapshot() {
        let err = CheckpointError::UnsupportedVersion {
            found: 2,
            supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "Snapshot format 2 cannot be read (this build reads format 1)"
        );
        let err = CheckpointError::ValidationFailed("no rotors".to_string());
        assert_eq!(err.to_string(), "Snapshot does not fit this machine: no rotors");
    }
}

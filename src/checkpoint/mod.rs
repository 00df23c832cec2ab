//! Checkpoint and resume for machine state.
//!
//! A [`Checkpoint`] records which rotors occupy the slots, how each is
//! wired, where each one is turned, and the plugboard. Restoring it onto a machine built from
//! the same configuration continues a message exactly where it stopped.

use crate::core::{Permutation, Rotor};
use crate::machine::{Machine, UnknownSymbolPolicy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an assembled machine.
/// Does NOT include the rotor catalogue; that comes from configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Alphabet of the machine, used to reject mismatched restores
    pub alphabet: String,

    /// Rotor names, reflector first
    pub rotors: Vec<String>,

    /// Each slotted rotor in configuration syntax, so a catalogue that
    /// reuses a name with other wiring or notches is caught on restore
    pub wiring: Vec<String>,

    /// Settings of the non-reflector slots
    pub settings: String,

    /// Plugboard in canonical cycle notation
    pub plugboard: String,

    pub unknown_symbols: UnknownSymbolPolicy,
}

impl Checkpoint {
    /// Snapshot `machine`, which must have rotors inserted.
    pub fn capture(machine: &Machine) -> Result<Self, CheckpointError> {
        if !machine.is_assembled() {
            return Err(CheckpointError::ValidationFailed(
                "machine has no rotors inserted".to_string(),
            ));
        }
        Ok(Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            alphabet: machine.alphabet().to_string(),
            rotors: machine.slot_names().into_iter().map(str::to_string).collect(),
            wiring: (0..machine.num_rotors())
                .filter_map(|slot| machine.rotor(slot))
                .map(Rotor::describe)
                .collect(),
            settings: machine.settings(),
            plugboard: machine.plugboard().cycles(),
            unknown_symbols: machine.unknown_symbol_policy(),
        })
    }

    /// Put `machine` into the recorded state.
    pub fn restore(&self, machine: &mut Machine) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if machine.alphabet().to_string() != self.alphabet {
            return Err(CheckpointError::ValidationFailed(format!(
                "alphabet '{}' does not match machine alphabet '{}'",
                self.alphabet,
                machine.alphabet()
            )));
        }

        if self.wiring.len() != self.rotors.len() {
            return Err(CheckpointError::ValidationFailed(format!(
                "{} rotor names but {} wirings",
                self.rotors.len(),
                self.wiring.len()
            )));
        }
        for (name, recorded) in self.rotors.iter().zip(&self.wiring) {
            if let Some(rotor) = machine.catalogue().get(name) {
                if rotor.describe() != *recorded {
                    return Err(CheckpointError::ValidationFailed(format!(
                        "rotor '{name}' is now '{}', checkpoint recorded '{recorded}'",
                        rotor.describe()
                    )));
                }
            }
        }

        let plugboard = Permutation::new(&self.plugboard, machine.alphabet().clone())?;
        machine.insert_rotors(self.rotors.as_slice())?;
        machine.set_rotors(&self.settings)?;
        machine.set_plugboard(plugboard)?;
        machine.set_unknown_symbol_policy(self.unknown_symbols);

        tracing::debug!(id = %self.id, settings = %self.settings, "Restored checkpoint");
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

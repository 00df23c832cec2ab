//! The set of rotors a machine may draw from.

use super::error::MachineError;
use crate::core::Rotor;

/// Named rotors available for insertion, in declaration order.
///
/// Names are unique. Inserting into a machine clones the rotor, so the
/// catalogue itself is never mutated by encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RotorCatalogue {
    rotors: Vec<Rotor>,
}

impl RotorCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rotor`, rejecting a name already present.
    pub fn insert(&mut self, rotor: Rotor) -> Result<(), MachineError> {
        if self.get(rotor.name()).is_some() {
            return Err(MachineError::DuplicateRotorName(rotor.name().to_string()));
        }
        self.rotors.push(rotor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Rotor> {
        self.rotors.iter().find(|r| r.name() == name)
    }

    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rotor> {
        self.rotors.iter()
    }
}

impl TryFrom<Vec<Rotor>> for RotorCatalogue {
    type Error = MachineError;

    fn try_from(rotors: Vec<Rotor>) -> Result<Self, Self::Error> {
        let mut catalogue = Self::new();
        for rotor in rotors {
            catalogue.insert(rotor)?;
        }
        Ok(catalogue)
    }
}

//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Alphabet, Permutation, Rotor, RotorError};
use crate::machine::{Machine, RotorCatalogue, UnknownSymbolPolicy};
use std::sync::Arc;

/// What a described rotor will become.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RotorRole {
    Reflector,
    Fixed,
    /// Rotating rotor with a notch at each symbol of `notches`.
    Moving { notches: String },
}

/// Textual description of one catalogue rotor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotorSpec {
    pub name: String,
    pub role: RotorRole,
    /// Wiring in cycle notation.
    pub cycles: String,
}

impl RotorSpec {
    /// Construct the rotor over `alphabet`.
    pub fn build(&self, alphabet: &Arc<Alphabet>) -> Result<Rotor, RotorError> {
        let wiring =
            Permutation::new(&self.cycles, alphabet.clone()).map_err(|source| {
                RotorError::Wiring {
                    name: self.name.clone(),
                    source,
                }
            })?;
        match &self.role {
            RotorRole::Reflector => Rotor::reflector(self.name.clone(), wiring),
            RotorRole::Fixed => Ok(Rotor::fixed(self.name.clone(), wiring)),
            RotorRole::Moving { notches } => Rotor::moving(self.name.clone(), wiring, notches),
        }
    }
}

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use rotorsim::builder::MachineBuilder;
///
/// let mut machine = MachineBuilder::new()
///     .alphabet("ABCDEFGHIJKLMNOPQRSTUVWXYZ")
///     .slots(5)
///     .pawls(3)
///     .reflector("B", "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)")
///     .fixed("BETA", "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)")
///     .moving("III", "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)", "V")
///     .moving("IV", "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)", "J")
///     .moving("I", "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", "Q")
///     .insert(["B", "BETA", "III", "IV", "I"])
///     .setting("AXLE")
///     .plugboard("(YF) (ZH)")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.convert("Y").unwrap(), "Z");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    alphabet: Option<String>,
    num_rotors: Option<usize>,
    pawls: Option<usize>,
    rotors: Vec<RotorSpec>,
    insert: Option<Vec<String>>,
    setting: Option<String>,
    plugboard: Option<String>,
    unknown_symbols: UnknownSymbolPolicy,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alphabet symbols (required).
    pub fn alphabet(mut self, symbols: impl Into<String>) -> Self {
        self.alphabet = Some(symbols.into());
        self
    }

    /// Set the number of rotor slots (required).
    pub fn slots(mut self, num_rotors: usize) -> Self {
        self.num_rotors = Some(num_rotors);
        self
    }

    /// Set the number of pawls (required).
    pub fn pawls(mut self, pawls: usize) -> Self {
        self.pawls = Some(pawls);
        self
    }

    /// Add a described rotor to the catalogue.
    pub fn rotor(mut self, spec: RotorSpec) -> Self {
        self.rotors.push(spec);
        self
    }

    /// Add a reflector to the catalogue.
    pub fn reflector(self, name: impl Into<String>, cycles: impl Into<String>) -> Self {
        self.rotor(RotorSpec {
            name: name.into(),
            role: RotorRole::Reflector,
            cycles: cycles.into(),
        })
    }

    /// Add a non-rotating rotor to the catalogue.
    pub fn fixed(self, name: impl Into<String>, cycles: impl Into<String>) -> Self {
        self.rotor(RotorSpec {
            name: name.into(),
            role: RotorRole::Fixed,
            cycles: cycles.into(),
        })
    }

    /// Add a rotating rotor to the catalogue.
    pub fn moving(
        self,
        name: impl Into<String>,
        cycles: impl Into<String>,
        notches: impl Into<String>,
    ) -> Self {
        self.rotor(RotorSpec {
            name: name.into(),
            role: RotorRole::Moving {
                notches: notches.into(),
            },
            cycles: cycles.into(),
        })
    }

    /// Insert these rotors after building.
    pub fn insert<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Initial rotor setting, applied after insertion.
    pub fn setting(mut self, setting: impl Into<String>) -> Self {
        self.setting = Some(setting.into());
        self
    }

    /// Plugboard cycles. Defaults to the identity.
    pub fn plugboard(mut self, cycles: impl Into<String>) -> Self {
        self.plugboard = Some(cycles.into());
        self
    }

    /// Policy for symbols outside the alphabet.
    pub fn unknown_symbols(mut self, policy: UnknownSymbolPolicy) -> Self {
        self.unknown_symbols = policy;
        self
    }

    /// Described catalogue rotors, in insertion order.
    pub fn rotor_specs(&self) -> &[RotorSpec] {
        &self.rotors
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or anything fails
    /// validation.
    pub fn build(&self) -> Result<Machine, BuildError> {
        let symbols = self.alphabet.as_deref().ok_or(BuildError::MissingAlphabet)?;
        let num_rotors = self.num_rotors.ok_or(BuildError::MissingSlots)?;
        let pawls = self.pawls.ok_or(BuildError::MissingPawls)?;
        if self.rotors.is_empty() {
            return Err(BuildError::NoRotors);
        }

        let alphabet = Arc::new(Alphabet::new(symbols)?);
        let mut catalogue = RotorCatalogue::new();
        for spec in &self.rotors {
            catalogue.insert(spec.build(&alphabet)?)?;
        }

        let mut machine = Machine::new(alphabet.clone(), num_rotors, pawls, catalogue)?;
        machine.set_unknown_symbol_policy(self.unknown_symbols);

        if let Some(names) = &self.insert {
            machine.insert_rotors(names.as_slice())?;
        }
        if let Some(setting) = &self.setting {
            machine.set_rotors(setting)?;
        }
        if let Some(cycles) = &self.plugboard {
            let plugboard = Permutation::new(cycles, alphabet).map_err(BuildError::Plugboard)?;
            machine.set_plugboard(plugboard)?;
        }

        tracing::debug!(
            num_rotors,
            pawls,
            catalogue = machine.catalogue().len(),
            "Built machine"
        );
        Ok(machine)
    }
}

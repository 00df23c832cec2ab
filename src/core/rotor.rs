//! Rotors: wired permutations with a rotational offset.
//!
//! A rotor's wiring is fixed; only its setting changes. The three kinds
//! differ in capability, captured by [`RotorKind`]:
//!
//! - **Reflector**: a deranging wiring that never rotates and sits in slot 0.
//! - **Fixed**: contributes its wiring in both directions but never rotates.
//! - **Moving**: rotates and reports when it sits at one of its notches.

use super::alphabet::Alphabet;
use super::error::RotorError;
use super::permutation::Permutation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Capability class of a rotor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotorKind {
    Reflector,
    Fixed,
    /// Notch positions as alphabet indices.
    Moving { notches: Vec<usize> },
}

impl RotorKind {
    /// Configuration tag for this kind (`R`, `N` or `M`).
    pub fn tag(&self) -> char {
        match self {
            Self::Reflector => 'R',
            Self::Fixed => 'N',
            Self::Moving { .. } => 'M',
        }
    }
}

/// A named wiring plus its current rotational setting.
///
/// # Example
///
/// ```rust
/// use rotorsim::core::{Alphabet, Permutation, Rotor};
/// use std::sync::Arc;
///
/// let alphabet = Arc::new(Alphabet::default());
/// let wiring = Permutation::new("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", alphabet)
///     .unwrap();
/// let mut rotor = Rotor::moving("I", wiring, "Q").unwrap();
///
/// rotor.set_symbol('Q').unwrap();
/// assert!(rotor.at_notch());
/// rotor.advance();
/// assert_eq!(rotor.setting(), 17);
/// assert!(!rotor.at_notch());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: Permutation,
    kind: RotorKind,
    setting: usize,
}

impl Rotor {
    /// A reflector. Its wiring must be a derangement.
    pub fn reflector(name: impl Into<String>, wiring: Permutation) -> Result<Self, RotorError> {
        let name = name.into();
        if !wiring.is_derangement() {
            return Err(RotorError::NotADerangement(name));
        }
        Ok(Self::with_kind(name, wiring, RotorKind::Reflector))
    }

    /// A rotor that never rotates.
    pub fn fixed(name: impl Into<String>, wiring: Permutation) -> Self {
        Self::with_kind(name.into(), wiring, RotorKind::Fixed)
    }

    /// A rotating rotor with a notch at each symbol of `notches`.
    pub fn moving(
        name: impl Into<String>,
        wiring: Permutation,
        notches: &str,
    ) -> Result<Self, RotorError> {
        let name = name.into();
        let notches = notches
            .chars()
            .map(|notch| {
                wiring
                    .alphabet()
                    .to_index(notch)
                    .map_err(|_| RotorError::UnknownNotch {
                        name: name.clone(),
                        notch,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_kind(name, wiring, RotorKind::Moving { notches }))
    }

    fn with_kind(name: String, wiring: Permutation, kind: RotorKind) -> Self {
        Self {
            name,
            wiring,
            kind,
            setting: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        self.wiring.alphabet()
    }

    /// Size of the wiring's alphabet.
    pub fn size(&self) -> usize {
        self.wiring.size()
    }

    /// Current rotational offset in `0..size()`.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Current setting as a symbol.
    pub fn setting_symbol(&self) -> char {
        self.alphabet().symbols().nth(self.setting).unwrap_or_default()
    }

    /// Set the offset to `setting`.
    ///
    /// A reflector only accepts 0.
    pub fn set(&mut self, setting: usize) -> Result<(), RotorError> {
        if setting >= self.size() {
            return Err(RotorError::InvalidSetting {
                name: self.name.clone(),
                setting,
                size: self.size(),
            });
        }
        if self.reflecting() && setting != 0 {
            return Err(RotorError::ReflectorPosition(self.name.clone()));
        }
        self.setting = setting;
        Ok(())
    }

    /// Set the offset to the index of `symbol`.
    pub fn set_symbol(&mut self, symbol: char) -> Result<(), RotorError> {
        let setting =
            self.alphabet()
                .to_index(symbol)
                .map_err(|_| RotorError::InvalidSettingSymbol {
                    name: self.name.clone(),
                    symbol,
                })?;
        self.set(setting)
    }

    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    pub fn reflecting(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// True iff this is a moving rotor whose setting is one of its notches.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => notches.contains(&self.setting),
            RotorKind::Reflector | RotorKind::Fixed => false,
        }
    }

    /// Rotate one position. No-op for rotors that do not rotate.
    pub fn advance(&mut self) {
        if self.rotates() {
            self.setting = (self.setting + 1) % self.size();
        }
    }

    /// Signal entering from the right at contact `p`, leaving on the left.
    pub fn convert_forward(&self, p: usize) -> usize {
        let shift = self.setting as isize;
        let contact = self.wiring.permute_index(p as isize + shift);
        self.wiring.wrap(contact as isize - shift)
    }

    /// Signal entering from the left at contact `e`, leaving on the right.
    pub fn convert_backward(&self, e: usize) -> usize {
        let shift = self.setting as isize;
        let contact = self.wiring.invert_index(e as isize + shift);
        self.wiring.wrap(contact as isize - shift)
    }

    /// Rebuild this rotor's description in configuration syntax.
    pub fn describe(&self) -> String {
        let notches: String = match &self.kind {
            RotorKind::Moving { notches } => notches
                .iter()
                .filter_map(|&n| self.alphabet().to_symbol(n).ok())
                .collect(),
            RotorKind::Reflector | RotorKind::Fixed => String::new(),
        };
        format!(
            "{} {}{} {}",
            self.name,
            self.kind.tag(),
            notches,
            self.wiring.cycles()
        )
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.setting_symbol())
    }
}

//! Settings lines: `* <rotors...> <setting> [<plugboard cycles>...]`.

use super::error::SessionError;
use crate::core::Permutation;
use crate::machine::Machine;

/// True iff `line` starts (after leading whitespace) with `*`.
pub fn is_settings_line(line: &str) -> bool {
    line.trim_start().starts_with('*')
}

/// A parsed settings line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Rotor names, reflector first.
    pub rotors: Vec<String>,
    /// One setting symbol per non-reflector slot.
    pub setting: String,
    /// Plugboard cycle text; empty for no plugs.
    pub plugboard: String,
}

impl Settings {
    /// Parse a settings line for a machine with `num_rotors` slots.
    ///
    /// The `*` may stand alone or be glued to the first rotor name.
    pub fn parse(line: &str, num_rotors: usize) -> Result<Self, SessionError> {
        let body = line
            .trim_start()
            .strip_prefix('*')
            .ok_or(SessionError::MissingSettings)?;
        let tokens: Vec<&str> = body.split_whitespace().collect();
        let first_cycle = tokens
            .iter()
            .position(|token| token.contains('('))
            .unwrap_or(tokens.len());
        let (words, cycles) = tokens.split_at(first_cycle);

        // Rotor names, then exactly one setting.
        if words.len() < num_rotors {
            return Err(SessionError::SettingsTruncated("rotor names"));
        }
        if words.len() == num_rotors {
            return Err(SessionError::SettingsTruncated("rotor setting"));
        }
        if words.len() > num_rotors + 1 {
            return Err(SessionError::RotorCount {
                expected: num_rotors,
                found: words.len() - 1,
            });
        }
        let rotors = words[..num_rotors].iter().map(|w| w.to_string()).collect();
        let setting = words[num_rotors].to_string();

        if let Some(token) = cycles.iter().find(|token| !token.contains('(')) {
            return Err(SessionError::BadPlugboardToken(token.to_string()));
        }
        let plugboard = cycles.join(" ");

        Ok(Self {
            rotors,
            setting,
            plugboard,
        })
    }

    /// Insert the rotors, set them, and replace the plugboard.
    pub fn apply(&self, machine: &mut Machine) -> Result<(), SessionError> {
        machine.insert_rotors(self.rotors.as_slice())?;
        machine.set_rotors(&self.setting)?;
        let plugboard = Permutation::new(&self.plugboard, machine.alphabet().clone())?;
        machine.set_plugboard(plugboard)?;
        Ok(())
    }
}

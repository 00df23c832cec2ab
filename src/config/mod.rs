//! Machine configuration text.
//!
//! The format is whitespace-tokenized after the first line:
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ
//! 5 3
//! B R       (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
//! Beta N    (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! I MQ      (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! ```
//!
//! Line 1 holds the alphabet. Then come the slot and pawl counts, then one
//! description per catalogue rotor: a name, a type tag (`M` moving, `N`
//! non-moving, `R` reflector) with a moving rotor's notches glued on, and
//! one or more cycle tokens.

pub mod error;

pub use error::ConfigError;

use crate::builder::{MachineBuilder, RotorRole, RotorSpec};
use crate::machine::Machine;
use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Symbols with meaning in configuration or message syntax.
const RESERVED: [char; 3] = ['(', ')', '*'];

/// Parse configuration text into a builder.
///
/// Only the syntax is checked here; [`MachineBuilder::build`] validates the
/// described machine.
pub fn parse(text: &str) -> Result<MachineBuilder, ConfigError> {
    let (alphabet_line, rest) = text.split_once('\n').unwrap_or((text, ""));
    let alphabet = alphabet_line.trim();
    if alphabet.is_empty() {
        return Err(ConfigError::Truncated("alphabet"));
    }
    if let Some(c) = alphabet
        .chars()
        .find(|c| RESERVED.contains(c) || c.is_whitespace())
    {
        return Err(ConfigError::ReservedSymbol(c));
    }

    let mut tokens = rest.split_whitespace().peekable();
    let num_rotors = integer(&mut tokens, "number of rotor slots")?;
    let pawls = integer(&mut tokens, "number of pawls")?;

    let mut builder = MachineBuilder::new()
        .alphabet(alphabet)
        .slots(num_rotors)
        .pawls(pawls);
    while let Some(name) = tokens.next() {
        builder = builder.rotor(rotor(name, &mut tokens)?);
    }

    tracing::debug!(
        alphabet,
        num_rotors,
        pawls,
        rotors = builder.rotor_specs().len(),
        "Parsed configuration"
    );
    Ok(builder)
}

/// Parse and build in one step. The machine has no rotors inserted yet.
pub fn load(text: &str) -> Result<Machine, ConfigError> {
    Ok(parse(text)?.build()?)
}

fn integer(
    tokens: &mut Peekable<SplitWhitespace<'_>>,
    what: &'static str,
) -> Result<usize, ConfigError> {
    let token = tokens.next().ok_or(ConfigError::Truncated(what))?;
    token.parse().map_err(|_| ConfigError::BadInteger {
        what,
        token: token.to_string(),
    })
}

fn is_cycle_token(token: &str) -> bool {
    token.starts_with('(') && token.ends_with(')')
}

fn rotor(
    name: &str,
    tokens: &mut Peekable<SplitWhitespace<'_>>,
) -> Result<RotorSpec, ConfigError> {
    let type_token = tokens.next().ok_or(ConfigError::Truncated("rotor type"))?;
    let mut chars = type_token.chars();
    let tag = chars.next().ok_or(ConfigError::Truncated("rotor type"))?;
    let notches: String = chars.collect();

    let role = match tag {
        'M' => RotorRole::Moving { notches },
        'N' | 'R' if !notches.is_empty() => {
            return Err(ConfigError::UnexpectedNotches {
                name: name.to_string(),
            })
        }
        'N' => RotorRole::Fixed,
        'R' => RotorRole::Reflector,
        tag => {
            return Err(ConfigError::UnknownRotorType {
                name: name.to_string(),
                tag,
            })
        }
    };

    let mut cycles = Vec::new();
    while let Some(token) = tokens.next_if(|t| is_cycle_token(t)) {
        cycles.push(token);
    }
    if cycles.is_empty() {
        return Err(ConfigError::MissingCycles {
            name: name.to_string(),
        });
    }

    Ok(RotorSpec {
        name: name.to_string(),
        role,
        cycles: cycles.join(" "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildError;
    use crate::core::RotorError;
    use crate::machine::MachineError;

    const CONFIG: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ
5 3
B R (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
Beta N (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
I MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
III MV (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
IV MJ (AEPLIYWCOXMRFZBSTGJQNH) (DV)
       (KU)
";

    #[test]
    fn parses_full_configuration() {
        let builder = parse(CONFIG).unwrap();
        let specs = builder.rotor_specs();
        assert_eq!(specs.len(), 5);
        assert_eq!(specs[0].role, RotorRole::Reflector);
        assert_eq!(specs[1].role, RotorRole::Fixed);
        assert_eq!(
            specs[2].role,
            RotorRole::Moving {
                notches: "Q".to_string()
            }
        );
        // Cycles may continue on the following line.
        assert_eq!(specs[4].cycles, "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)");

        let machine = builder.build().unwrap();
        assert_eq!(machine.num_rotors(), 5);
        assert_eq!(machine.num_pawls(), 3);
        assert_eq!(machine.catalogue().len(), 5);
    }

    #[test]
    fn counts_may_share_or_split_lines() {
        let text = "AB\n2\n0 R R (AB)\nF N (A)";
        let builder = parse(text).unwrap();
        assert_eq!(builder.rotor_specs().len(), 2);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn glued_cycle_groups_form_one_token() {
        let text = "ABCD\n2 1\nR R (AB)(CD)\nM MA (ABCD)";
        let builder = parse(text).unwrap();
        assert_eq!(builder.rotor_specs()[0].cycles, "(AB)(CD)");
        assert!(builder.build().is_ok());
    }

    #[test]
    fn multiple_notches() {
        let text = "ABCD\n2 1\nR R (AB) (CD)\nM MAC (ABCD)";
        let builder = parse(text).unwrap();
        assert_eq!(
            builder.rotor_specs()[1].role,
            RotorRole::Moving {
                notches: "AC".to_string()
            }
        );
    }

    #[test]
    fn truncated_configurations() {
        assert_eq!(parse("").unwrap_err(), ConfigError::Truncated("alphabet"));
        assert_eq!(
            parse("AB\n").unwrap_err(),
            ConfigError::Truncated("number of rotor slots")
        );
        assert_eq!(
            parse("AB\n5").unwrap_err(),
            ConfigError::Truncated("number of pawls")
        );
        assert_eq!(
            parse("AB\n5 3 R").unwrap_err(),
            ConfigError::Truncated("rotor type")
        );
    }

    #[test]
    fn bad_counts() {
        assert_eq!(
            parse("AB\nfive 3").unwrap_err(),
            ConfigError::BadInteger {
                what: "number of rotor slots",
                token: "five".to_string()
            }
        );
        assert_eq!(
            parse("AB\n5 -1").unwrap_err(),
            ConfigError::BadInteger {
                what: "number of pawls",
                token: "-1".to_string()
            }
        );
    }

    #[test]
    fn reserved_alphabet_symbols() {
        assert_eq!(
            parse("AB(C\n2 1").unwrap_err(),
            ConfigError::ReservedSymbol('(')
        );
        assert_eq!(parse("A*\n2 1").unwrap_err(), ConfigError::ReservedSymbol('*'));
        assert_eq!(parse("A B\n2 1").unwrap_err(), ConfigError::ReservedSymbol(' '));
    }

    #[test]
    fn rotor_type_errors() {
        assert_eq!(
            parse("AB\n2 1\nX Q (AB)").unwrap_err(),
            ConfigError::UnknownRotorType {
                name: "X".to_string(),
                tag: 'Q'
            }
        );
        assert_eq!(
            parse("AB\n2 1\nX NA (AB)").unwrap_err(),
            ConfigError::UnexpectedNotches {
                name: "X".to_string()
            }
        );
        assert_eq!(
            parse("AB\n2 1\nX MA Y MB (AB)").unwrap_err(),
            ConfigError::MissingCycles {
                name: "X".to_string()
            }
        );
    }

    #[test]
    fn semantic_errors_surface_on_load() {
        assert_eq!(
            load("AB\n1 0\nR R (AB)").unwrap_err(),
            ConfigError::Build(BuildError::Machine(MachineError::TooFewRotors(1)))
        );
        assert_eq!(
            load("AB\n2 1\nR R (AB)\nR R (AB)").unwrap_err(),
            ConfigError::Build(BuildError::Machine(MachineError::DuplicateRotorName(
                "R".to_string()
            )))
        );
        assert_eq!(
            load("ABC\n2 1\nR R (AB)").unwrap_err(),
            ConfigError::Build(BuildError::Rotor(RotorError::NotADerangement(
                "R".to_string()
            )))
        );
    }

    #[test]
    fn windows_line_endings() {
        let text = "AB\r\n2 1\r\nR R (AB)\r\nM MA (AB)\r\n";
        let machine = load(text).unwrap();
        assert_eq!(machine.alphabet().size(), 2);
    }
}

//! Cipher primitives.
//!
//! This module contains the pure building blocks of a rotor machine:
//! - [`Alphabet`]: symbols and their indices
//! - [`Permutation`]: bijections parsed from cycle notation
//! - [`Rotor`]: a wiring plus a rotational setting
//!
//! Nothing here knows about slots, pawls or stepping; that lives in
//! [`crate::machine`].

mod alphabet;
pub mod error;
mod permutation;
mod rotor;

pub use alphabet::Alphabet;
pub use error::{AlphabetError, PermutationError, RotorError};
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};

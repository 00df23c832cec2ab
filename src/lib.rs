//! Rotorsim: an Enigma-class rotor cipher machine simulator
//!
//! A machine is a plugboard plus an ordered stack of rotors: a reflector in
//! slot 0, then fixed and moving rotors, fastest on the right. Each keypress
//! first steps the rotors, then sends the signal through the plugboard,
//! right to left through every rotor, back left to right through every rotor
//! except the reflector, and through the plugboard again.
//!
//! # Modules
//!
//! - [`core`]: alphabets, cycle-notation permutations and rotors
//! - [`machine`]: slot assembly, the pawl/notch stepping rule and conversion
//! - [`builder`]: fluent construction of machines
//! - [`config`]: the configuration file format
//! - [`session`]: settings lines and message streams
//! - [`checkpoint`]: snapshot and resume of machine state
//! - [`cli`]: the `rotorsim` command
//!
//! # Example
//!
//! ```rust
//! use rotorsim::config;
//! use rotorsim::session::Settings;
//!
//! let text = "ABCDEFGHIJKLMNOPQRSTUVWXYZ
//! 5 3
//! B R (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
//! BETA N (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! I MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! III MV (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
//! IV MJ (AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)
//! ";
//!
//! let mut machine = config::load(text).unwrap();
//! Settings::parse("* B BETA III IV I AXLE (HQ) (EX) (IP) (TR) (BY)", 5)
//!     .unwrap()
//!     .apply(&mut machine)
//!     .unwrap();
//!
//! assert_eq!(machine.convert("FROM").unwrap(), "QVPQ");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod cli;
pub mod config;
pub mod core;
pub mod machine;
pub mod session;

// Re-export commonly used types
pub use core::{Alphabet, Permutation, Rotor, RotorKind};
pub use machine::{Machine, UnknownSymbolPolicy};

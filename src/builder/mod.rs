//! Builder API for ergonomic machine construction.
//!
//! [`MachineBuilder`] collects the alphabet, slot and pawl counts and a
//! list of [`RotorSpec`]s as plain text, then validates everything in
//! [`MachineBuilder::build`]. The configuration reader produces a builder,
//! so programmatic and file-based setups share one validation path.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::{MachineBuilder, RotorRole, RotorSpec};

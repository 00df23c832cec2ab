//! Message stream processing.
//!
//! A [`Session`] drives a [`Machine`] over lines of input:
//! - a line starting with `*` reconfigures the machine ([`Settings`]);
//! - an empty line is echoed as an empty line;
//! - any other line is converted and written in groups of five.
//!
//! The first line must be a settings line. Each output line is written as
//! soon as its input line is processed, so output produced before an error
//! is kept.

pub mod error;
pub mod format;
pub mod settings;

pub use error::SessionError;
pub use format::group_in_fives;
pub use settings::{is_settings_line, Settings};

use crate::machine::Machine;
use std::io::{BufRead, Write};

/// A machine bound to an output sink.
pub struct Session<W: Write> {
    machine: Machine,
    output: W,
    configured: bool,
}

impl<W: Write> Session<W> {
    /// Start a session. `machine` need not have rotors inserted yet; the
    /// first settings line does that.
    pub fn new(machine: Machine, output: W) -> Self {
        Self {
            machine,
            output,
            configured: false,
        }
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Process every line of `input` in order.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), SessionError> {
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            self.process_line(&line).inspect_err(|e| {
                tracing::error!(line = number + 1, error = %e, "Failed to process input line");
            })?;
        }
        Ok(())
    }

    /// Process a single input line.
    pub fn process_line(&mut self, line: &str) -> Result<(), SessionError> {
        if is_settings_line(line) {
            let settings = Settings::parse(line, self.machine.num_rotors())?;
            settings.apply(&mut self.machine)?;
            self.configured = true;
            tracing::debug!(
                rotors = ?settings.rotors,
                setting = %settings.setting,
                plugboard = %settings.plugboard,
                "Applied settings"
            );
            return Ok(());
        }
        if !self.configured {
            return Err(SessionError::MissingSettings);
        }
        if line.is_empty() {
            writeln!(self.output)?;
            return Ok(());
        }

        let converted = self.machine.convert(line)?;
        writeln!(self.output, "{}", group_in_fives(&converted))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), SessionError> {
        self.output.flush()?;
        Ok(())
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

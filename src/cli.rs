//! Command-line surface: `rotorsim <config> [<input> [<output>]]`.

use crate::config::{self, ConfigError};
use crate::session::{Session, SessionError};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reported by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: rotorsim <config> [<input> [<output>]]")]
    Usage,

    #[error("Could not open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Machine configuration file
    pub config: PathBuf,

    /// Message file (None = standard input)
    pub input: Option<PathBuf>,

    /// Output file (None = standard output)
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse the arguments that follow the program name.
    pub fn from_args(args: &[String]) -> Result<Self, CliError> {
        match args {
            [config] => Ok(Self {
                config: config.into(),
                input: None,
                output: None,
            }),
            [config, input] => Ok(Self {
                config: config.into(),
                input: Some(input.into()),
                output: None,
            }),
            [config, input, output] => Ok(Self {
                config: config.into(),
                input: Some(input.into()),
                output: Some(output.into()),
            }),
            _ => Err(CliError::Usage),
        }
    }
}

fn open_error(path: &Path) -> impl FnOnce(io::Error) -> CliError + '_ {
    move |source| CliError::Open {
        path: path.to_path_buf(),
        source,
    }
}

/// Load the configuration, then convert the message stream.
pub fn run(args: &Args) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.config).map_err(open_error(&args.config))?;
    let machine = config::load(&text)?;

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(open_error(path))?)),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(open_error(path))?)),
        None => Box::new(io::stdout().lock()),
    };

    let mut session = Session::new(machine, output);
    let outcome = session.run(input);
    let flushed = session.flush();
    outcome?;
    flushed?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_to_three_arguments() {
        let args = Args::from_args(&strings(&["m.conf"])).unwrap();
        assert_eq!(args.config, PathBuf::from("m.conf"));
        assert_eq!(args.input, None);

        let args = Args::from_args(&strings(&["m.conf", "in.txt"])).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("in.txt")));
        assert_eq!(args.output, None);

        let args = Args::from_args(&strings(&["m.conf", "in.txt", "out.txt"])).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn wrong_argument_count() {
        assert!(matches!(Args::from_args(&[]), Err(CliError::Usage)));
        assert!(matches!(
            Args::from_args(&strings(&["a", "b", "c", "d"])),
            Err(CliError::Usage)
        ));
    }

    #[test]
    fn missing_config_file() {
        let args = Args::from_args(&strings(&["/nonexistent/rotorsim.conf"])).unwrap();
        assert!(matches!(run(&args), Err(CliError::Open { .. })));
    }
}

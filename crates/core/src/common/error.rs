//! Errors surfaced before simulation begins.
//!
//! Every error here is fatal: the CLI driver reports it and exits with
//! status 1 before a single instruction has executed. Once the interpreter
//! starts running there is no error path — unrecognized opcodes are
//! treated as no-ops (see [`crate::isa::decode`]).

use std::fmt;

/// Errors raised while loading a machine-code file into memory.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened for reading.
    #[error("Can't open file {0}")]
    Open(String),

    /// A line did not match the `ram[<addr>] = 16'b<bits>;` format.
    #[error("Can't parse line: {0}")]
    Parse(String),

    /// Addresses in the file must start at 0 and increase by 1 per line.
    #[error("Memory addresses encountered out of sequence: {0}")]
    OutOfSequence(usize),

    /// The file contains more lines than memory has cells.
    #[error("Program too big for memory")]
    TooBig,
}

/// Errors raised while parsing the `--cache` configuration string.
#[derive(Debug, thiserror::Error)]
pub enum CacheConfigError {
    /// The comma-separated value list was neither 3 nor 6 integers.
    #[error("Invalid cache config")]
    InvalidArity,

    /// One of the fields did not parse as an integer.
    #[error("Invalid cache config")]
    NotAnInteger,
}

/// Errors raised while parsing command-line arguments.
#[derive(Debug)]
pub enum ArgError {
    /// An unrecognized flag, or a flag missing its required value.
    Usage,
    /// More than one positional argument was given.
    ExtraPositional,
    /// No filename was given.
    MissingFilename,
    /// `-h` / `--help` was requested.
    HelpRequested,
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::Usage => write!(f, "usage error"),
            ArgError::ExtraPositional => write!(f, "multiple positional arguments"),
            ArgError::MissingFilename => write!(f, "missing filename"),
            ArgError::HelpRequested => write!(f, "help requested"),
        }
    }
}

impl std::error::Error for ArgError {}

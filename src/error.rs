//! Error types for treetest

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treetest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for treetest
#[derive(Error, Debug)]
pub enum Error {
    /// Scanning the suite root produced no test modules.
    #[error("No test modules found under {0}")]
    NoModulesFound(PathBuf),

    /// A module registered two tests under the same name.
    #[error("Duplicate test name {name:?} in module {module}")]
    DuplicateTestName { module: String, name: String },

    /// A filter pattern contains characters outside the pattern grammar.
    #[error("Invalid filter pattern: {0}")]
    InvalidPattern(String),

    /// An executable could not be resolved on the search path.
    #[error("Executable not found: {0}")]
    ProcessNotFound(String),

    /// Configuration file error or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The run was interrupted; never converted into a per-test report.
    #[error("Interrupted")]
    Interrupted,

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Other error with custom message.
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

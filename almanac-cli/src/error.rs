//! Error types for the CLI

use almanac_solver::SolverError;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file could not be read
    #[error("Failed to read input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),
}

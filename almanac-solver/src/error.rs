//! Error types for the almanac solver library

use thiserror::Error;

/// Error type for parsing almanac input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A range row appeared before any map header
    #[error("Range row on line {line} appears before any map header")]
    RangeBeforeHeader { line: usize },
    /// A range row could not be turned into a range record
    #[error("Malformed range row on line {line}: {reason}")]
    MalformedRange { line: usize, reason: String },
}

/// Error type for invalid solver configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Chunked range mode needs a chunk size of at least 1
    #[error("Chunk size must be at least 1")]
    ZeroChunkSize,
}

/// Error type for evaluating the translation chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The chain starting at `seed` loops back onto a category it already visited
    #[error("Translation chain loops back to category '{0}'")]
    CyclicChain(String),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

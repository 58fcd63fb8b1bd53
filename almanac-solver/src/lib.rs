//! Almanac Solver Library
//!
//! Parses a seed almanac into a chain of range remappings and finds the lowest
//! value any seed reaches at the end of that chain.
//!
//! # Overview
//!
//! The work happens in three stages:
//! - [`Almanac::parse`] classifies every line and builds the chain links and range tables
//! - [`expand_seeds`] turns the seed line into [`SeedUnit`]s, either one per number or
//!   as `(start, length)` pairs split into bounded chunks
//! - [`Chain::evaluate`] walks every seed value from `seed` to the terminal category
//!   and keeps the lowest result
//!
//! # Quick Example
//!
//! ```
//! use almanac_solver::{Almanac, Chain, OverlapPolicy, SeedMode, expand_seeds};
//!
//! let input = "seeds: 79 14 55 13\n\nseed-to-soil map:\n50 98 2\n52 50 48\n";
//! let almanac = Almanac::parse(input).unwrap();
//! let chain = Chain::resolve(&almanac, OverlapPolicy::LastMatch).unwrap();
//!
//! let units = expand_seeds(almanac.seeds(), SeedMode::Discrete);
//! let best = chain.evaluate(&units).unwrap();
//! assert_eq!(best.record.terminal(), ("soil", 13));
//! ```
//!
//! [`SolverInstance`] wraps the same pipeline and records parse and solve timings.

mod chain;
mod error;
mod instance;
mod seeds;
mod table;

// Re-export public API
pub use chain::{BestResult, Chain, EvaluationRecord, OverlapPolicy, lookup};
pub use error::{ConfigError, ParseError, SolveError, SolverError};
pub use instance::{SolveOptions, SolveResult, SolverInstance};
pub use seeds::{SeedMode, SeedUnit, expand_seeds, parse_seed_numbers};
pub use table::{Almanac, LineClassifier, LineKind, RangeRecord, SEED_CATEGORY};

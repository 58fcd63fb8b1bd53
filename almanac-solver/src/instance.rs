//! Solver instance implementation

use crate::chain::{BestResult, Chain, OverlapPolicy};
use crate::error::{ParseError, SolveError};
use crate::seeds::{SeedMode, expand_seeds};
use crate::table::Almanac;
use chrono::{DateTime, TimeDelta, Utc};

/// Options controlling how seeds are expanded and overlaps are resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    pub mode: SeedMode,
    pub overlap: OverlapPolicy,
}

/// Result from solving an almanac, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Lowest terminal value and its trace, `None` when there were no seeds
    pub best: Option<BestResult>,
    /// Name of the category every walk ends at
    pub terminal: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed almanac ready to be solved, with parse timing
///
/// The almanac is parsed once; `solve` may be called repeatedly with
/// different options.
pub struct SolverInstance {
    almanac: Almanac,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl SolverInstance {
    /// Create a new solver instance by parsing input
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Successfully parsed and created instance with timing
    /// * `Err(ParseError)` - Parsing failed
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let almanac = Almanac::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            almanac,
            parse_start,
            parse_end,
        })
    }

    /// Expand the seeds, walk the chain and keep the lowest terminal value
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - Solving finished, possibly without a result
    /// * `Err(SolveError)` - The translation chain is cyclic
    pub fn solve(&self, options: &SolveOptions) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let chain = Chain::resolve(&self.almanac, options.overlap)?;
        let units = expand_seeds(self.almanac.seeds(), options.mode);
        let best = chain.evaluate(&units);
        let solve_end = Utc::now();

        Ok(SolveResult {
            best,
            terminal: chain.terminal().to_string(),
            solve_start,
            solve_end,
        })
    }

    pub fn almanac(&self) -> &Almanac {
        &self.almanac
    }

    /// Get the parse start time (UTC)
    pub fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    /// Get the parse end time (UTC)
    pub fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    /// Convenience: get parse duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "seeds: 79 14 55 13\n\nseed-to-soil map:\n50 98 2\n52 50 48\n";

    #[test]
    fn test_solve_discrete() {
        let instance = SolverInstance::new(INPUT).unwrap();
        let result = instance.solve(&SolveOptions::default()).unwrap();
        assert_eq!(result.terminal, "soil");
        assert_eq!(result.best.as_ref().map(|b| b.lowest()), Some(13));
        assert!(result.duration() >= TimeDelta::zero());
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_solve_ranges_reuses_parsed_almanac() {
        let instance = SolverInstance::new(INPUT).unwrap();
        let options = SolveOptions {
            mode: SeedMode::chunked(1000).unwrap(),
            overlap: OverlapPolicy::LastMatch,
        };
        let result = instance.solve(&options).unwrap();
        // 55..68 maps to 57..70, 79..93 maps to 81..95
        assert_eq!(result.best.map(|b| b.lowest()), Some(57));
        assert_eq!(instance.almanac().seeds(), &[79, 14, 55, 13]);
    }

    #[test]
    fn test_parse_error_surfaces() {
        assert!(matches!(
            SolverInstance::new("seed-to-soil map:\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}

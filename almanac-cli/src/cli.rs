//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the numbers on the seed line are read
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Mode {
    /// One seed per value (default)
    #[default]
    Seed,
    /// Values pair up as a start and a range length
    Range,
}

/// Which range wins when ranges of one map overlap
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Overlap {
    /// The range listed last wins (default)
    #[default]
    Last,
    /// The range listed first wins
    First,
}

/// Seed almanac solver
#[derive(Parser, Debug)]
#[command(
    name = "almanac",
    about = "Find the lowest location reachable from an almanac's seeds",
    version
)]
pub struct Args {
    /// The input file to run this algorithm on
    #[arg(short, long, env = "ALMANAC_INPUT")]
    pub input: PathBuf,

    /// Mode of operation for the seed values: seed or range
    #[arg(long, value_enum, default_value = "seed", env = "ALMANAC_MODE")]
    pub mode: Mode,

    /// The max number of seeds in one chunk of a range
    #[arg(
        long,
        default_value_t = 1000,
        env = "ALMANAC_SPLIT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub split: u64,

    /// Overlapping ranges tie-break: last or first
    #[arg(long, value_enum, default_value = "last", env = "ALMANAC_OVERLAP")]
    pub overlap: Overlap,

    /// Print every translation step to standard output
    #[arg(long, env = "ALMANAC_DEBUG")]
    pub debug: bool,

    /// Quiet mode - only output the answer
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["almanac", "--input", "day5.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("day5.txt"));
        assert_eq!(args.mode, Mode::Seed);
        assert_eq!(args.split, 1000);
        assert_eq!(args.overlap, Overlap::Last);
        assert!(!args.debug);
        assert!(!args.quiet);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "almanac", "-i", "in.txt", "--mode", "range", "--split", "50", "--overlap", "first",
            "--debug", "-q",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Range);
        assert_eq!(args.split, 50);
        assert_eq!(args.overlap, Overlap::First);
        assert!(args.debug);
        assert!(args.quiet);
    }

    #[test]
    fn test_zero_split_rejected() {
        assert!(Args::try_parse_from(["almanac", "-i", "in.txt", "--split", "0"]).is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Args::try_parse_from(["almanac", "-i", "in.txt", "--mode", "pairs"]).is_err());
    }
}

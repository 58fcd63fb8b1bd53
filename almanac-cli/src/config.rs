//! Configuration resolution from CLI args

use crate::cli::{Args, Mode, Overlap};
use crate::error::CliError;
use almanac_solver::{OverlapPolicy, SeedMode, SolveOptions};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Input file path, with `~` expanded
    pub input: PathBuf,
    /// Seed mode and overlap policy handed to the solver
    pub options: SolveOptions,
    /// Print the per-value trace
    pub debug: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let mode = match args.mode {
            Mode::Seed => SeedMode::Discrete,
            Mode::Range => SeedMode::chunked(args.split)
                .map_err(|e| CliError::Config(format!("--split {}: {}", args.split, e)))?,
        };

        let overlap = match args.overlap {
            Overlap::Last => OverlapPolicy::LastMatch,
            Overlap::First => OverlapPolicy::FirstMatch,
        };

        Ok(Config {
            input: expand_tilde(&args.input),
            options: SolveOptions { mode, overlap },
            debug: args.debug,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(mode: Mode, split: u64, overlap: Overlap) -> Args {
        Args {
            input: PathBuf::from("input.txt"),
            mode,
            split,
            overlap,
            debug: true,
            quiet: false,
        }
    }

    #[test]
    fn test_seed_mode_ignores_split() {
        let config = Config::from_args(args(Mode::Seed, 0, Overlap::Last)).unwrap();
        assert_eq!(config.options.mode, SeedMode::Discrete);
        assert_eq!(config.options.overlap, OverlapPolicy::LastMatch);
        assert_eq!(config.input, PathBuf::from("input.txt"));
        assert!(config.debug);
    }

    #[test]
    fn test_range_mode_uses_split() {
        let config = Config::from_args(args(Mode::Range, 250, Overlap::First)).unwrap();
        assert_eq!(config.options.mode, SeedMode::chunked(250).unwrap());
        assert_eq!(config.options.overlap, OverlapPolicy::FirstMatch);
    }

    #[test]
    fn test_range_mode_zero_split_is_config_error() {
        let err = Config::from_args(args(Mode::Range, 0, Overlap::Last)).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(
            expand_tilde(Path::new("/tmp/input.txt")),
            PathBuf::from("/tmp/input.txt")
        );
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc/day5.txt")), home.join("aoc/day5.txt"));
        }
    }
}

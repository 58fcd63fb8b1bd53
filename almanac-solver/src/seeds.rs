//! Seed expansion: turning the seed declaration into units of work

use crate::error::{ConfigError, ParseError};
use itertools::Itertools;
use log::warn;
use std::num::NonZeroU64;
use std::ops::RangeInclusive;

/// How the numbers on the seed line are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Every number is a seed of its own
    #[default]
    Discrete,
    /// Numbers pair up as `(start, length)`, split into spans of at most `chunk_size`
    Chunked { chunk_size: NonZeroU64 },
}

impl SeedMode {
    /// Chunked range mode, rejecting a chunk size of zero
    pub fn chunked(chunk_size: u64) -> Result<Self, ConfigError> {
        NonZeroU64::new(chunk_size)
            .map(|chunk_size| Self::Chunked { chunk_size })
            .ok_or(ConfigError::ZeroChunkSize)
    }
}

/// A run of consecutive seed values from `start` to `last`, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUnit {
    start: u64,
    last: u64,
}

impl SeedUnit {
    /// A unit of `span` values, cut short at `u64::MAX`
    pub fn new(start: u64, span: NonZeroU64) -> Self {
        Self {
            start,
            last: start.saturating_add(span.get() - 1),
        }
    }

    /// A unit covering just `start`
    pub fn single(start: u64) -> Self {
        Self { start, last: start }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    /// Number of values covered
    pub fn span(&self) -> u64 {
        self.last - self.start + 1
    }

    /// Lazily iterate every value covered by this unit
    pub fn values(&self) -> RangeInclusive<u64> {
        self.start..=self.last
    }
}

/// Parse the whitespace-separated numbers following `seeds:`
pub fn parse_seed_numbers(text: &str) -> Result<Vec<u64>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<u64>().map_err(|e| {
                ParseError::InvalidFormat(format!("seed '{}' is not a valid number: {}", token, e))
            })
        })
        .collect()
}

/// Expand seed numbers into units according to `mode`, keeping declaration order
pub fn expand_seeds(numbers: &[u64], mode: SeedMode) -> Vec<SeedUnit> {
    match mode {
        SeedMode::Discrete => numbers.iter().copied().map(SeedUnit::single).collect(),
        SeedMode::Chunked { chunk_size } => {
            if numbers.len() % 2 == 1
                && let Some(last) = numbers.last()
            {
                warn!(
                    "Odd number of seed values; trailing {} has no length and is ignored",
                    last
                );
            }
            numbers
                .iter()
                .copied()
                .tuples()
                .flat_map(|(start, length)| split_range(start, length, chunk_size))
                .collect()
        }
    }
}

/// Split `[start, start + length)` into consecutive units of at most `chunk_size`.
///
/// A range running past `u64::MAX` is cut short there.
fn split_range(start: u64, length: u64, chunk_size: NonZeroU64) -> impl Iterator<Item = SeedUnit> {
    let available = (u64::MAX - start).saturating_add(1);
    if length > available {
        warn!(
            "Seed range {} + {} runs past {}; only {} value(s) evaluated",
            start,
            length,
            u64::MAX,
            available
        );
    }
    let length = length.min(available);
    let chunk = chunk_size.get();
    (0..length.div_ceil(chunk)).map(move |idx| {
        let offset = idx * chunk;
        let span = chunk.min(length - offset);
        SeedUnit {
            start: start + offset,
            last: start + offset + (span - 1),
        }
    })
}

//! Chain evaluation: walking every seed value from `seed` to the terminal category

use crate::error::SolveError;
use crate::seeds::SeedUnit;
use crate::table::{Almanac, RangeRecord, SEED_CATEGORY};
use log::debug;
use std::collections::HashSet;
use std::fmt;

/// Which range wins when several ranges of one category contain the same value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// The range declared last wins
    #[default]
    LastMatch,
    /// The range declared first wins
    FirstMatch,
}

/// Translate `value` through one category's ranges; unmapped values pass through unchanged
pub fn lookup(value: u64, ranges: &[RangeRecord], policy: OverlapPolicy) -> u64 {
    let found = match policy {
        OverlapPolicy::LastMatch => ranges.iter().rev().find_map(|r| r.translate(value)),
        OverlapPolicy::FirstMatch => ranges.iter().find_map(|r| r.translate(value)),
    };
    found.unwrap_or(value)
}

/// Value reached at every category of the chain, in walk order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRecord {
    steps: Vec<(String, u64)>,
}

impl EvaluationRecord {
    fn new(seed: u64) -> Self {
        Self {
            steps: vec![(SEED_CATEGORY.to_string(), seed)],
        }
    }

    /// The seed value this record starts from
    pub fn seed(&self) -> u64 {
        self.steps[0].1
    }

    /// Terminal category and the value reached there
    pub fn terminal(&self) -> (&str, u64) {
        let (category, value) = &self.steps[self.steps.len() - 1];
        (category.as_str(), *value)
    }

    /// Value reached at `category`, if the chain visits it
    pub fn value(&self, category: &str) -> Option<u64> {
        self.steps
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, value)| *value)
    }

    /// Number of categories visited, including `seed`; never zero
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.steps.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl fmt::Display for EvaluationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (category, value)) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{} {}", category, value)?;
        }
        Ok(())
    }
}

/// The record with the lowest terminal value over all evaluated seeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResult {
    /// Full trace of the winning seed
    pub record: EvaluationRecord,
    /// How many seed values were evaluated
    pub evaluated: u64,
}

impl BestResult {
    /// Terminal value of the winning seed
    pub fn lowest(&self) -> u64 {
        self.record.terminal().1
    }
}

/// One link of the chain together with the ranges of its source category
#[derive(Debug)]
struct Stage<'a> {
    category: &'a str,
    next: &'a str,
    ranges: &'a [RangeRecord],
}

/// The translation chain from `seed`, resolved once from an almanac
#[derive(Debug)]
pub struct Chain<'a> {
    stages: Vec<Stage<'a>>,
    policy: OverlapPolicy,
}

impl<'a> Chain<'a> {
    /// Follow links from `seed` until a category without an outgoing link
    pub fn resolve(almanac: &'a Almanac, policy: OverlapPolicy) -> Result<Self, SolveError> {
        let mut visited = HashSet::from([SEED_CATEGORY]);
        let mut stages = Vec::new();
        let mut category = SEED_CATEGORY;

        while let Some(next) = almanac.next_category(category) {
            if !visited.insert(next) {
                return Err(SolveError::CyclicChain(next.to_string()));
            }
            stages.push(Stage {
                category,
                next,
                ranges: almanac.ranges(category),
            });
            category = next;
        }

        Ok(Self { stages, policy })
    }

    /// Category where every walk ends
    pub fn terminal(&self) -> &str {
        self.stages.last().map_or(SEED_CATEGORY, |stage| stage.next)
    }

    /// Walk a single seed value and record every category it passes through
    pub fn walk(&self, seed: u64) -> EvaluationRecord {
        let mut record = EvaluationRecord::new(seed);
        let mut value = seed;
        for stage in &self.stages {
            value = lookup(value, stage.ranges, self.policy);
            record.steps.push((stage.next.to_string(), value));
        }
        record
    }

    /// Terminal value of a single seed, logging each step
    fn terminal_value(&self, seed: u64) -> u64 {
        self.stages.iter().fold(seed, |value, stage| {
            let next = lookup(value, stage.ranges, self.policy);
            debug!(
                "Seed {} - {} {} -> {} {}",
                seed, stage.category, value, stage.next, next
            );
            next
        })
    }

    /// Evaluate every value of every unit and keep the lowest terminal value.
    ///
    /// Ties keep the earliest seed. Returns `None` when there is nothing to evaluate.
    pub fn evaluate(&self, units: &[SeedUnit]) -> Option<BestResult> {
        let mut best: Option<(u64, u64)> = None;
        let mut evaluated = 0u64;

        for seed in units.iter().flat_map(SeedUnit::values) {
            let terminal = self.terminal_value(seed);
            evaluated += 1;
            if best.is_none_or(|(_, lowest)| terminal < lowest) {
                best = Some((seed, terminal));
            }
        }

        best.map(|(seed, _)| BestResult {
            record: self.walk(seed),
            evaluated,
        })
    }
}

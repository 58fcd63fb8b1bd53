//! Almanac parsing: line classification and translation table building

use crate::error::ParseError;
use crate::seeds::parse_seed_numbers;
use anyhow::{Context, anyhow};
use log::{debug, warn};
use regex::Regex;
use std::cell::OnceCell;
use std::collections::HashMap;

/// Category every chain walk starts from
pub const SEED_CATEGORY: &str = "seed";

/// One row of a category's translation table
///
/// Maps `[source_start, source_start + length)` linearly onto
/// `[dest_start, dest_start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRecord {
    source_start: u64,
    dest_start: u64,
    length: u64,
}

impl RangeRecord {
    /// Create a record from the fields in input row order
    /// (`dest_start source_start length`).
    ///
    /// Returns `None` for an empty range or when either end of the range
    /// does not fit in a `u64`.
    pub fn new(dest_start: u64, source_start: u64, length: u64) -> Option<Self> {
        if length == 0 {
            return None;
        }
        source_start.checked_add(length)?;
        dest_start.checked_add(length)?;
        Some(Self {
            source_start,
            dest_start,
            length,
        })
    }

    pub fn source_start(&self) -> u64 {
        self.source_start
    }

    pub fn dest_start(&self) -> u64 {
        self.dest_start
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Check if `value` falls inside the source interval
    pub fn contains(&self, value: u64) -> bool {
        value >= self.source_start && value - self.source_start < self.length
    }

    /// Translate `value` if it falls inside the source interval
    pub fn translate(&self, value: u64) -> Option<u64> {
        self.contains(value)
            .then(|| self.dest_start + (value - self.source_start))
    }
}

/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `seeds: ...`, carrying everything after the colon
    SeedLine(&'a str),
    /// `<source>-to-<dest> map:`
    MapHeader { source: &'a str, dest: &'a str },
    /// A line starting with a digit or `-`, expected to hold three numbers
    RangeRow(&'a str),
    /// Empty or whitespace-only line
    Blank,
    /// Anything else
    Unrecognized,
}

/// Line classifier with lazily compiled patterns
#[derive(Clone, Debug)]
pub struct LineClassifier {
    seed_regex: OnceCell<Regex>,
    header_regex: OnceCell<Regex>,
    range_regex: OnceCell<Regex>,
}

impl LineClassifier {
    /// Create a new classifier with uninitialized caches
    pub fn new() -> Self {
        Self {
            seed_regex: OnceCell::new(),
            header_regex: OnceCell::new(),
            range_regex: OnceCell::new(),
        }
    }

    fn seed_regex(&self) -> &Regex {
        self.seed_regex
            .get_or_init(|| Regex::new(r"(?i)^seeds:(.*)$").unwrap())
    }

    fn header_regex(&self) -> &Regex {
        self.header_regex
            .get_or_init(|| Regex::new(r"(?i)^([a-z]+)-to-([a-z]+) map:$").unwrap())
    }

    fn range_regex(&self) -> &Regex {
        self.range_regex
            .get_or_init(|| Regex::new(r"^[-0-9]").unwrap())
    }

    /// Classify a line, ignoring surrounding whitespace
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim();
        if line.is_empty() {
            return LineKind::Blank;
        }

        if let Some(captures) = self.seed_regex().captures(line)
            && let Some(rest) = captures.get(1)
        {
            return LineKind::SeedLine(rest.as_str());
        }

        if let Some(captures) = self.header_regex().captures(line)
            && let (Some(source), Some(dest)) = (captures.get(1), captures.get(2))
        {
            return LineKind::MapHeader {
                source: source.as_str(),
                dest: dest.as_str(),
            };
        }

        if self.range_regex().is_match(line) {
            return LineKind::RangeRow(line);
        }

        LineKind::Unrecognized
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Parsed almanac: seed numbers, chain links and per-category range tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<u64>,
    links: HashMap<String, String>,
    tables: HashMap<String, Vec<RangeRecord>>,
}

impl Almanac {
    /// Parse the whole almanac text in a single pass
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let classifier = LineClassifier::new();
        let mut builder = TableBuilder::default();

        for (idx, line) in input.lines().enumerate() {
            builder.push(idx + 1, classifier.classify(line))?;
        }

        builder.finish()
    }

    /// Seed numbers in declaration order
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Category the given category translates into, if any
    pub fn next_category(&self, category: &str) -> Option<&str> {
        self.links.get(category).map(String::as_str)
    }

    /// Ranges declared for a source category (empty if none)
    pub fn ranges(&self, category: &str) -> &[RangeRecord] {
        self.tables.get(category).map_or(&[], Vec::as_slice)
    }

    /// Number of `<source>-to-<dest>` links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

/// Incremental state while walking the lines of an almanac
#[derive(Default)]
struct TableBuilder {
    seeds: Option<Vec<u64>>,
    links: HashMap<String, String>,
    tables: HashMap<String, Vec<RangeRecord>>,
    current: Option<String>,
}

impl TableBuilder {
    fn push(&mut self, line_no: usize, kind: LineKind<'_>) -> Result<(), ParseError> {
        match kind {
            LineKind::Blank => {}
            LineKind::Unrecognized => debug!("Line {} - Not recognized, skipping", line_no),
            LineKind::SeedLine(rest) => {
                if self.seeds.is_some() {
                    warn!("Line {} - Extra seed line ignored", line_no);
                } else {
                    let seeds = parse_seed_numbers(rest).map_err(|e| match e {
                        ParseError::InvalidFormat(msg) => {
                            ParseError::InvalidFormat(format!("(line {}) {}", line_no, msg))
                        }
                        other => other,
                    })?;
                    self.seeds = Some(seeds);
                }
            }
            LineKind::MapHeader { source, dest } => {
                let source = source.to_ascii_lowercase();
                let dest = dest.to_ascii_lowercase();
                if self.links.insert(source.clone(), dest).is_some() {
                    warn!(
                        "Line {} - Map for '{}' declared again, previous ranges dropped",
                        line_no, source
                    );
                }
                self.tables.insert(source.clone(), Vec::new());
                self.current = Some(source);
            }
            LineKind::RangeRow(row) => {
                let current = self
                    .current
                    .as_ref()
                    .ok_or(ParseError::RangeBeforeHeader { line: line_no })?;
                let record = parse_range_row(row).map_err(|e| ParseError::MalformedRange {
                    line: line_no,
                    reason: format!("{:#}", e),
                })?;
                self.tables.entry(current.clone()).or_default().push(record);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Almanac, ParseError> {
        let seeds = self
            .seeds
            .ok_or_else(|| ParseError::MissingData("seeds".to_string()))?;
        Ok(Almanac {
            seeds,
            links: self.links,
            tables: self.tables,
        })
    }
}

/// Parse `destStart sourceStart length` into a record
fn parse_range_row(row: &str) -> anyhow::Result<RangeRecord> {
    let fields = row
        .split_whitespace()
        .map(|field| {
            field
                .parse::<u64>()
                .with_context(|| format!("'{}' is not a valid number", field))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let &[dest_start, source_start, length] = fields.as_slice() else {
        return Err(anyhow!("expected 3 numbers, found {}", fields.len()));
    };

    RangeRecord::new(dest_start, source_start, length)
        .ok_or_else(|| anyhow!("range must be non-empty and fit in 64 bits"))
}

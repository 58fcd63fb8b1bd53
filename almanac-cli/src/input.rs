//! Puzzle input loading

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};

/// Almanac text file on disk
pub struct InputFile {
    path: PathBuf,
}

impl InputFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file as UTF-8
    pub fn read(&self) -> Result<String, CliError> {
        fs::read_to_string(&self.path).map_err(|source| CliError::Input {
            path: self.path.clone(),
            source,
        })
    }
}

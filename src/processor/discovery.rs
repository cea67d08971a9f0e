//! Input discovery for CTD cast exports
//!
//! Resolves the input path into the list of cast files to parse: a single
//! file is taken as-is, a directory is scanned for file names matching the
//! configured glob pattern.

use crate::error::{CtdError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File discovery component for cast exports
#[derive(Debug)]
pub struct FileDiscovery {
    input_path: PathBuf,
    pattern: Pattern,
    recursive: bool,
}

impl FileDiscovery {
    /// Create a new file discovery instance
    pub fn new(input_path: PathBuf, file_pattern: &str, recursive: bool) -> Result<Self> {
        let pattern = Pattern::new(file_pattern).map_err(|e| {
            CtdError::configuration(format!("Invalid file pattern '{}': {}", file_pattern, e))
        })?;

        Ok(Self {
            input_path,
            pattern,
            recursive,
        })
    }

    /// Discover cast files, sorted by path for a deterministic row order
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        if !self.input_path.exists() {
            return Err(CtdError::InputNotFound {
                path: self.input_path.clone(),
            });
        }

        if self.input_path.is_file() {
            debug!("Using single input file: {}", self.input_path.display());
            return Ok(vec![self.input_path.clone()]);
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.input_path)
            .min_depth(1)
            .max_depth(max_depth)
        {
            let entry = entry?;
            if entry.file_type().is_file() && self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();

        if files.is_empty() {
            return Err(CtdError::NoInputFiles {
                path: self.input_path.clone(),
                pattern: self.pattern.as_str().to_string(),
            });
        }

        debug!(
            "Found {} files matching '{}' in {}",
            files.len(),
            self.pattern,
            self.input_path.display()
        );

        Ok(files)
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.pattern.matches(name))
    }
}

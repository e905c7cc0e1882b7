use std::fs;
use std::path::{Path, PathBuf};

use super::{ProgressStore, StoreError};
use crate::domain::Progress;

/// Progress kept in a pretty-printed JSON file.
///
/// Each call opens, fully reads or writes, and closes the file. A write that
/// fails halfway can leave a corrupt file behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<Progress, StoreError> {
        if !self.path.exists() {
            tracing::debug!("No progress file at {}, using defaults", self.path.display());
            return Ok(Progress::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn save(&self, progress: &Progress) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(progress).map_err(|source| StoreError::Encode {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        tracing::debug!(
            "Saved progress to {} (sessions={}, weak topics={})",
            self.path.display(),
            progress.sessions,
            progress.weak_topics.len()
        );
        Ok(())
    }
}

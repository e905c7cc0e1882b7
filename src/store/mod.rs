//! Durable progress storage.
//!
//! The quiz core never touches the filesystem directly; it is handed a
//! [`ProgressStore`] and calls `load`/`save` at its checkpoints. The JSON file
//! store backs both binaries, the in-memory store backs tests.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::Progress;

/// Shared handle used by the web state
pub type SharedStore = Arc<dyn ProgressStore>;

/// Progress store errors.
///
/// A store that exists but cannot be parsed is reported as `Corrupt` and is
/// never reset to defaults behind the operator's back.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("IO error on progress store {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },
  #[error("Progress store {path} is corrupt: {source}")]
  Corrupt {
    path: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("Could not encode progress for {path}: {source}")]
  Encode {
    path: String,
    #[source]
    source: serde_json::Error,
  },
}

/// Load/save access to the single progress record.
///
/// No locking or versioning is provided; one session at a time is assumed.
pub trait ProgressStore: Send + Sync {
  /// Read the current progress, or defaults if nothing has been saved yet
  fn load(&self) -> Result<Progress, StoreError>;

  /// Replace the stored progress
  fn save(&self, progress: &Progress) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse_error() -> serde_json::Error {
    serde_json::from_str::<Progress>("{").unwrap_err()
  }

  #[test]
  fn test_encode_error_is_not_reported_as_corrupt() {
    let err = StoreError::Encode {
      path: "data/progress.json".into(),
      source: parse_error(),
    };
    let message = err.to_string();
    assert!(message.starts_with("Could not encode progress for data/progress.json"));
    assert!(!message.contains("corrupt"));
  }

  #[test]
  fn test_corrupt_error_names_the_file() {
    let err = StoreError::Corrupt {
      path: "data/progress.json".into(),
      source: parse_error(),
    };
    assert!(err.to_string().contains("data/progress.json is corrupt"));
  }
}

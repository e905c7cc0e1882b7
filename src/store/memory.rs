use std::sync::{Mutex, PoisonError};

use super::{ProgressStore, StoreError};
use crate::domain::Progress;

/// Progress held in memory; used by tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
  progress: Mutex<Progress>,
  saves: Mutex<u32>,
}

impl MemoryStore {
  pub fn new(progress: Progress) -> Self {
    Self {
      progress: Mutex::new(progress),
      saves: Mutex::new(0),
    }
  }

  /// Snapshot of the stored progress
  pub fn snapshot(&self) -> Progress {
    self.progress.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// Number of successful `save` calls
  pub fn save_count(&self) -> u32 {
    *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl ProgressStore for MemoryStore {
  fn load(&self) -> Result<Progress, StoreError> {
    Ok(self.snapshot())
  }

  fn save(&self, progress: &Progress) -> Result<(), StoreError> {
    *self.progress.lock().unwrap_or_else(PoisonError::into_inner) = progress.clone();
    *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_round_trip_and_save_count() {
    let store = MemoryStore::default();
    let mut progress = Progress::default();
    progress.weak_topics.insert("Energy".into(), 2);

    store.save(&progress).unwrap();
    assert_eq!(store.load().unwrap(), progress);
    assert_eq!(store.save_count(), 1);
  }

  #[test]
  fn test_poisoned_lock_still_stores() {
    let store = MemoryStore::new(Progress::default());
    std::thread::scope(|s| {
      let _ = s
        .spawn(|| {
          let _guard = store.progress.lock().unwrap();
          panic!("writer died holding the lock");
        })
        .join();
    });
    assert!(store.progress.is_poisoned());

    let mut progress = Progress::default();
    progress.sessions = 2;
    store.save(&progress).unwrap();

    assert_eq!(store.snapshot(), progress);
    assert_eq!(store.save_count(), 1);
  }
}

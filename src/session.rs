//! Simple in-memory session storage for web quiz sessions.
//!
//! Stores QuizSession state keyed by session ID (from cookie).
//! Sessions auto-expire after a configurable duration of inactivity.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config;
use crate::quiz::QuizSession;

/// Session entry with last access time for expiration
struct SessionEntry {
  session: QuizSession,
  last_access: DateTime<Utc>,
}

/// Per-visitor quiz sessions, shared by all handlers
#[derive(Clone, Default)]
pub struct SessionStore {
  sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
    // A panic mid-request must not lock every visitor out
    self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Store a freshly started session, replacing any previous one under the ID
  pub fn insert(&self, session_id: &str, session: QuizSession) {
    let mut sessions = self.lock();

    // Clean up expired sessions occasionally (~10% chance)
    if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
      cleanup_expired(&mut sessions, Utc::now());
    }

    sessions.insert(
      session_id.to_string(),
      SessionEntry {
        session,
        last_access: Utc::now(),
      },
    );
  }

  /// Run `f` against the session for `session_id`, if it exists.
  ///
  /// The store stays locked while `f` runs, so each visitor's request is
  /// applied atomically to their session.
  pub fn with_session<T>(
    &self,
    session_id: &str,
    f: impl FnOnce(&mut QuizSession) -> T,
  ) -> Option<T> {
    let mut sessions = self.lock();
    let entry = sessions.get_mut(session_id)?;
    entry.last_access = Utc::now();
    Some(f(&mut entry.session))
  }

  pub fn remove(&self, session_id: &str) {
    self.lock().remove(session_id);
  }

  pub fn contains(&self, session_id: &str) -> bool {
    self.lock().contains_key(session_id)
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drop sessions idle for longer than the expiry window
  pub fn cleanup(&self, now: DateTime<Utc>) {
    cleanup_expired(&mut self.lock(), now);
  }
}

/// Clean up expired sessions
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>, now: DateTime<Utc>) {
  let expiry = now - Duration::hours(config::SESSION_EXPIRY_HOURS);
  sessions.retain(|_, entry| entry.last_access > expiry);
}

/// Generate a new session ID
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..32)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_session_id_shape() {
    let id = generate_session_id();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    assert_ne!(id, generate_session_id());
  }

  #[test]
  fn test_insert_and_access() {
    let store = SessionStore::new();
    store.insert("abc", QuizSession::with_sequence(1, vec![0, 1]));

    assert!(store.contains("abc"));
    assert_eq!(store.with_session("abc", |s| s.total()), Some(2));
    assert_eq!(store.with_session("missing", |s| s.total()), None);
  }

  #[test]
  fn test_mutations_are_kept() {
    let store = SessionStore::new();
    store.insert("abc", QuizSession::with_sequence(1, vec![0, 1]));

    store.with_session("abc", |s| s.quit());
    assert_eq!(store.with_session("abc", |s| s.is_complete()), Some(true));
  }

  #[test]
  fn test_remove() {
    let store = SessionStore::new();
    store.insert("abc", QuizSession::with_sequence(1, vec![0]));
    store.remove("abc");
    assert!(store.is_empty());
  }

  #[test]
  fn test_cleanup_drops_idle_sessions() {
    let store = SessionStore::new();
    store.insert("old", QuizSession::with_sequence(1, vec![0]));

    store.cleanup(Utc::now());
    assert_eq!(store.len(), 1);

    store.cleanup(Utc::now() + Duration::hours(config::SESSION_EXPIRY_HOURS + 1));
    assert!(store.is_empty());
  }
}

//! Application state shared by the web handlers.

use std::sync::Arc;

use crate::content::QuestionBank;
use crate::session::SessionStore;
use crate::store::SharedStore;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
  /// Read-only question bank
  pub bank: Arc<QuestionBank>,

  /// Single progress record shared by every visitor
  pub progress: SharedStore,

  /// In-flight quiz sessions keyed by cookie
  pub sessions: SessionStore,
}

impl AppState {
  pub fn new(bank: Arc<QuestionBank>, progress: SharedStore) -> Self {
    Self {
      bank,
      progress,
      sessions: SessionStore::new(),
    }
  }
}

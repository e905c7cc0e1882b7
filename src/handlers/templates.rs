//! Template and form structs for the quiz pages.

use askama::Template;
use serde::Deserialize;

/// A weak topic as listed on the home page
pub struct WeakArea {
  pub topic: String,
  pub misses: u32,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub sessions: u32,
  pub weak_areas: Vec<WeakArea>,
  pub topics: Vec<String>,
  pub question_count: usize,
}

#[derive(Template)]
#[template(path = "question.html")]
pub struct QuestionTemplate {
  pub topic: String,
  pub prompt: String,
  /// 1-based position in the session
  pub position: usize,
  pub total: usize,
}

#[derive(Template)]
#[template(path = "feedback.html")]
pub struct FeedbackTemplate {
  pub topic: String,
  pub prompt: String,
  pub correct: bool,
  pub user_answer: String,
  pub canonical_answer: String,
  pub explanation: String,
  pub position: usize,
  pub total: usize,
  pub is_last: bool,
}

#[derive(Template)]
#[template(path = "summary.html")]
pub struct SummaryTemplate {
  pub score: u32,
  pub total: usize,
  pub answered: usize,
  pub missed: Vec<crate::domain::MissedQuestion>,
  pub verdict: &'static str,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
  pub message: String,
}

// ============================================================================
// Form Structs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnswerForm {
  #[serde(default)]
  pub answer: String,
}

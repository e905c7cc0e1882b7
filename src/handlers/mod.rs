pub mod quiz;
pub mod templates;

use askama::Template;
use axum::{
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse, Response},
  routing::{get, post},
  Router,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use templates::{ErrorTemplate, IndexTemplate, WeakArea};

pub use quiz::{answer, question, start, summary};

/// Build the application router
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/start", get(start))
    .route("/question", get(question))
    .route("/answer", post(answer))
    .route("/summary", get(summary))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Render the error page with the given status
pub(crate) fn error_page(status: StatusCode, message: &str) -> Response {
  let template = ErrorTemplate {
    message: message.to_string(),
  };
  (status, Html(template.render().unwrap_or_default())).into_response()
}

/// GET / - progress overview and start button
pub async fn index(State(state): State<AppState>) -> Response {
  let progress = match state.progress.load() {
    Ok(progress) => progress,
    Err(e) => {
      tracing::error!("Failed to load progress: {}", e);
      return error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "The progress file could not be read. Fix or remove it and reload.",
      );
    }
  };

  let template = IndexTemplate {
    sessions: progress.sessions,
    weak_areas: progress
      .weak_areas()
      .into_iter()
      .map(|(topic, misses)| WeakArea {
        topic: topic.to_string(),
        misses,
      })
      .collect(),
    topics: state.bank.topics().into_iter().map(String::from).collect(),
    question_count: state.bank.len(),
  };

  Html(template.render().unwrap_or_default()).into_response()
}

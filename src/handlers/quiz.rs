//! Quiz session handlers: one request per question/answer step.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::config::{SESSION_COOKIE_NAME, SESSION_EXPIRY_HOURS};
use crate::quiz::{QuizError, QuizSession};
use crate::session::generate_session_id;
use crate::state::AppState;

use super::error_page;
use super::templates::{AnswerForm, FeedbackTemplate, QuestionTemplate, SummaryTemplate};

fn session_id(jar: &CookieJar) -> Option<String> {
  jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string())
}

/// Map a session error to the page the visitor should see instead
fn quiz_error_response(err: QuizError) -> Response {
  match err {
    QuizError::SessionComplete => Redirect::to("/summary").into_response(),
    QuizError::SessionInProgress => Redirect::to("/question").into_response(),
    QuizError::UnknownQuestion(id) => {
      tracing::error!("Session refers to question {} outside the bank", id);
      error_page(StatusCode::INTERNAL_SERVER_ERROR, "This session no longer matches the question bank.")
    }
    QuizError::Store(e) => {
      tracing::error!("Progress store error: {}", e);
      error_page(StatusCode::INTERNAL_SERVER_ERROR, "Progress could not be saved.")
    }
  }
}

fn no_session(session_id: &str) -> Response {
  tracing::warn!("No quiz session for cookie {}", session_id);
  Redirect::to("/").into_response()
}

/// GET /start - begin a new session and hand out its cookie
pub async fn start(State(state): State<AppState>, jar: CookieJar) -> Response {
  if let Some(old) = session_id(&jar) {
    state.sessions.remove(&old);
  }

  let session = match QuizSession::start(&state.bank, state.progress.as_ref(), &mut rand::rng()) {
    Ok(session) => session,
    Err(e) => return quiz_error_response(e),
  };
  tracing::info!(
    "Session #{} started with {} questions",
    session.session_number(),
    session.total()
  );

  let id = generate_session_id();
  state.sessions.insert(&id, session);

  let cookie = Cookie::build((SESSION_COOKIE_NAME, id))
    .path("/")
    .http_only(true)
    .max_age(time::Duration::hours(SESSION_EXPIRY_HOURS))
    .build();

  (jar.add(cookie), Redirect::to("/question")).into_response()
}

/// GET /question - show the current question
pub async fn question(State(state): State<AppState>, jar: CookieJar) -> Response {
  let Some(id) = session_id(&jar) else {
    return Redirect::to("/").into_response();
  };

  let bank = state.bank.clone();
  let view = state.sessions.with_session(&id, |session| {
    let question = session.current_question(&bank)?;
    Ok::<_, QuizError>(QuestionTemplate {
      topic: question.topic.clone(),
      prompt: question.prompt.clone(),
      position: session.answered() + 1,
      total: session.total(),
    })
  });

  match view {
    None => no_session(&id),
    Some(Err(e)) => quiz_error_response(e),
    Some(Ok(template)) => Html(template.render().unwrap_or_default()).into_response(),
  }
}

/// POST /answer - evaluate the submitted answer and show feedback
pub async fn answer(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<AnswerForm>,
) -> Response {
  let Some(id) = session_id(&jar) else {
    return Redirect::to("/").into_response();
  };

  let bank = state.bank.clone();
  let store = state.progress.clone();
  let view = state.sessions.with_session(&id, |session| {
    let question = session.current_question(&bank)?;
    let (topic, prompt) = (question.topic.clone(), question.prompt.clone());

    let feedback = session.submit_answer(&bank, store.as_ref(), &form.answer)?;
    Ok::<_, QuizError>(FeedbackTemplate {
      topic,
      prompt,
      correct: feedback.correct,
      user_answer: form.answer.trim().to_string(),
      canonical_answer: feedback.canonical_answer,
      explanation: feedback.explanation,
      position: session.answered(),
      total: session.total(),
      is_last: session.is_complete(),
    })
  });

  match view {
    None => no_session(&id),
    Some(Err(e)) => quiz_error_response(e),
    Some(Ok(template)) => Html(template.render().unwrap_or_default()).into_response(),
  }
}

/// GET /summary - final score and review; progress is reconciled on first view
pub async fn summary(State(state): State<AppState>, jar: CookieJar) -> Response {
  let Some(id) = session_id(&jar) else {
    return Redirect::to("/").into_response();
  };

  let store = state.progress.clone();
  let result = state
    .sessions
    .with_session(&id, |session| session.summary(store.as_ref()));

  match result {
    None => no_session(&id),
    Some(Err(e)) => quiz_error_response(e),
    Some(Ok(summary)) => {
      let template = SummaryTemplate {
        score: summary.score,
        total: summary.total,
        answered: summary.answered,
        verdict: summary.verdict().message(),
        missed: summary.missed_review,
      };
      Html(template.render().unwrap_or_default()).into_response()
    }
  }
}

//! Adaptive quiz sessions.
//!
//! Both front ends drive the same flow:
//! [`QuizSession::start`] → [`QuizSession::current_question`] /
//! [`QuizSession::submit_answer`] until [`QuizSession::is_complete`] →
//! [`QuizSession::summary`].

mod selector;
mod session;

pub use selector::build_question_sequence;
pub use session::{
  AnswerFeedback, QuizError, QuizSession, SessionPhase, SessionSummary, Verdict, GOOD_SCORE_RATIO,
};

//! One quiz session: question order, running score and the misses to review.
//!
//! Lifecycle: [`QuizSession::start`] begins `InProgress`; answering the last
//! question (or [`QuizSession::quit`]) moves to `Complete`; the first
//! [`QuizSession::summary`] folds the session's misses into the stored
//! progress and marks the session `Summarized` so it is never folded twice.

use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::selector::build_question_sequence;
use crate::content::QuestionBank;
use crate::domain::{MissedQuestion, Question, QuestionId};
use crate::store::{ProgressStore, StoreError};
use crate::validation::is_correct;

/// Share of correct answers needed for a `Good` verdict
pub const GOOD_SCORE_RATIO: f64 = 0.7;

/// Session operation errors
#[derive(Debug, Error)]
pub enum QuizError {
  #[error("session is already complete")]
  SessionComplete,
  #[error("session is still in progress")]
  SessionInProgress,
  #[error("question {0} is not in the bank")]
  UnknownQuestion(QuestionId),
  #[error(transparent)]
  Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
  InProgress,
  Complete,
  /// Complete and already reconciled into the progress store
  Summarized,
}

/// What the learner sees straight after answering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
  pub correct: bool,
  pub canonical_answer: String,
  pub explanation: String,
}

/// Overall verdict shown with the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
  Perfect,
  Good,
  KeepPractising,
}

impl Verdict {
  pub fn from_score(score: u32, total: usize) -> Self {
    if score as usize >= total {
      Self::Perfect
    } else if score as f64 >= total as f64 * GOOD_SCORE_RATIO {
      Self::Good
    } else {
      Self::KeepPractising
    }
  }

  pub fn message(&self) -> &'static str {
    match self {
      Self::Perfect => "Perfect score! Outstanding!",
      Self::Good => "Good work! Keep drilling the weak areas.",
      Self::KeepPractising => "Keep practising. Consistency beats cramming every time.",
    }
  }
}

/// End-of-session results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
  pub score: u32,
  /// Length of the full question sequence, including unanswered questions after a quit
  pub total: usize,
  pub answered: usize,
  pub missed_review: Vec<MissedQuestion>,
}

impl SessionSummary {
  pub fn verdict(&self) -> Verdict {
    Verdict::from_score(self.score, self.total)
  }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
  session_number: u32,
  sequence: Vec<QuestionId>,
  cursor: usize,
  score: u32,
  missed_topic_tally: BTreeMap<String, u32>,
  missed_review: Vec<MissedQuestion>,
  phase: SessionPhase,
}

impl QuizSession {
  /// Count a new session in the store, persist it, and fix the question order.
  pub fn start<R: Rng + ?Sized>(
    bank: &QuestionBank,
    store: &dyn ProgressStore,
    rng: &mut R,
  ) -> Result<Self, QuizError> {
    let mut progress = store.load()?;
    let session_number = progress.begin_session();
    store.save(&progress)?;

    let sequence = build_question_sequence(bank, &progress, rng);
    tracing::debug!(
      "Started session #{} with {} questions ({} boosted)",
      session_number,
      sequence.len(),
      sequence.len().saturating_sub(bank.len())
    );

    Ok(Self::with_sequence(session_number, sequence))
  }

  /// Session over a fixed question order, without touching any store
  pub fn with_sequence(session_number: u32, sequence: Vec<QuestionId>) -> Self {
    let phase = if sequence.is_empty() {
      SessionPhase::Complete
    } else {
      SessionPhase::InProgress
    };

    Self {
      session_number,
      sequence,
      cursor: 0,
      score: 0,
      missed_topic_tally: BTreeMap::new(),
      missed_review: Vec::new(),
      phase,
    }
  }

  pub fn is_complete(&self) -> bool {
    self.phase != SessionPhase::InProgress
  }

  pub fn phase(&self) -> SessionPhase {
    self.phase
  }

  pub fn session_number(&self) -> u32 {
    self.session_number
  }

  pub fn sequence(&self) -> &[QuestionId] {
    &self.sequence
  }

  pub fn total(&self) -> usize {
    self.sequence.len()
  }

  /// Number of questions answered so far
  pub fn answered(&self) -> usize {
    self.cursor
  }

  pub fn score(&self) -> u32 {
    self.score
  }

  pub fn missed_topic_tally(&self) -> &BTreeMap<String, u32> {
    &self.missed_topic_tally
  }

  pub fn missed_review(&self) -> &[MissedQuestion] {
    &self.missed_review
  }

  /// The question waiting for an answer
  pub fn current_question<'b>(&self, bank: &'b QuestionBank) -> Result<&'b Question, QuizError> {
    if self.is_complete() {
      return Err(QuizError::SessionComplete);
    }
    let id = self.sequence[self.cursor];
    bank.get(id).ok_or(QuizError::UnknownQuestion(id))
  }

  /// Evaluate an answer to the current question and advance.
  ///
  /// A correct answer on a topic with outstanding misses lowers its stored
  /// count by one immediately. The store is written before the session
  /// advances, so a failed write leaves the question unanswered.
  pub fn submit_answer(
    &mut self,
    bank: &QuestionBank,
    store: &dyn ProgressStore,
    answer: &str,
  ) -> Result<AnswerFeedback, QuizError> {
    let question = self.current_question(bank)?;
    let correct = is_correct(answer, &question.keywords);

    if correct {
      let mut progress = store.load()?;
      if progress.record_correction(&question.topic) {
        store.save(&progress)?;
        tracing::debug!(
          "Weak topic {} down to {}",
          question.topic,
          progress.weak_count(&question.topic)
        );
      }
      self.score += 1;
    } else {
      *self
        .missed_topic_tally
        .entry(question.topic.clone())
        .or_insert(0) += 1;
      self.missed_review.push(MissedQuestion::from(question));
    }

    tracing::debug!(
      "Question {}/{} ({}) answered {}",
      self.cursor + 1,
      self.sequence.len(),
      question.topic,
      if correct { "correctly" } else { "incorrectly" }
    );

    self.cursor += 1;
    if self.cursor >= self.sequence.len() {
      self.phase = SessionPhase::Complete;
    }

    Ok(AnswerFeedback {
      correct,
      canonical_answer: question.canonical_answer.clone(),
      explanation: question.explanation.clone(),
    })
  }

  /// End the session early; the current question is left unanswered.
  pub fn quit(&mut self) {
    if self.phase == SessionPhase::InProgress {
      tracing::debug!(
        "Session #{} ended after {}/{} questions",
        self.session_number,
        self.cursor,
        self.sequence.len()
      );
      self.phase = SessionPhase::Complete;
    }
  }

  /// Final results; the first call folds this session's misses into the store.
  pub fn summary(&mut self, store: &dyn ProgressStore) -> Result<SessionSummary, QuizError> {
    match self.phase {
      SessionPhase::InProgress => return Err(QuizError::SessionInProgress),
      SessionPhase::Complete => {
        let mut progress = store.load()?;
        progress.reconcile(&self.missed_topic_tally);
        store.save(&progress)?;
        self.phase = SessionPhase::Summarized;
        tracing::debug!(
          "Reconciled session #{}: {} missed topic(s)",
          self.session_number,
          self.missed_topic_tally.len()
        );
      }
      SessionPhase::Summarized => {}
    }

    Ok(SessionSummary {
      score: self.score,
      total: self.sequence.len(),
      answered: self.cursor,
      missed_review: self.missed_review.clone(),
    })
  }
}

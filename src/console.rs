//! Line-based console session.
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so the
//! same loop runs against a terminal or an in-memory buffer.

use rand::Rng;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::content::QuestionBank;
use crate::quiz::{QuizError, QuizSession, SessionSummary};
use crate::store::{ProgressStore, StoreError};

/// Typing this (any case) ends the session early
pub const QUIT_COMMAND: &str = "quit";

const RULE_WIDTH: usize = 50;

#[derive(Debug, Error)]
pub enum ConsoleError {
  #[error("terminal IO failed: {0}")]
  Io(#[from] io::Error),
  #[error(transparent)]
  Quiz(#[from] QuizError),
  #[error(transparent)]
  Store(#[from] StoreError),
}

/// Read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line.trim().to_string()))
}

fn rule(out: &mut impl Write, ch: char, width: usize) -> io::Result<()> {
  writeln!(out, "{}", ch.to_string().repeat(width))
}

fn print_banner<W: Write>(
  out: &mut W,
  bank: &QuestionBank,
  store: &dyn ProgressStore,
  session: &QuizSession,
) -> Result<(), ConsoleError> {
  writeln!(out)?;
  rule(out, '=', RULE_WIDTH)?;
  writeln!(out, "   O-LEVEL PHYSICS TUTOR")?;
  writeln!(out, "   Your personal exam coach")?;
  rule(out, '=', RULE_WIDTH)?;
  writeln!(out, "\nSession #{}", session.session_number())?;

  let progress = store.load()?;
  let weak = progress.weak_areas();
  if !weak.is_empty() {
    writeln!(out, "\nWEAK AREAS FROM LAST SESSION (focus on these):")?;
    for (topic, misses) in weak {
      writeln!(out, "   * {} ({} missed)", topic, misses)?;
    }
  }

  writeln!(out, "\nTopics covered: {}", bank.topics().join(", "))?;
  writeln!(out, "Type '{}' at any time to exit.\n", QUIT_COMMAND)?;
  Ok(())
}

fn print_summary<W: Write>(out: &mut W, summary: &SessionSummary) -> io::Result<()> {
  writeln!(out)?;
  rule(out, '=', RULE_WIDTH)?;
  writeln!(out, "SESSION COMPLETE: {}/{} correct", summary.score, summary.total)?;
  rule(out, '=', RULE_WIDTH)?;

  if summary.missed_review.is_empty() {
    writeln!(out, "\nNo weak areas this session. Excellent work!")?;
  } else {
    writeln!(out, "\nREVIEW TIME: before you go, re-read these carefully:")?;
    rule(out, '-', RULE_WIDTH)?;
    for missed in &summary.missed_review {
      writeln!(out, "\nTopic: {}", missed.topic)?;
      writeln!(out, "Question: {}", missed.question)?;
      writeln!(out, "Correct answer: {}", missed.answer)?;
      writeln!(out, "\n{}", missed.explanation)?;
      rule(out, '-', RULE_WIDTH)?;
    }
    writeln!(out, "\nThese topics will appear again next time until you've got them.")?;
  }

  writeln!(out, "\n{}", summary.verdict().message())?;
  writeln!(out)?;
  rule(out, '=', RULE_WIDTH)?;
  Ok(())
}

/// Run one full session and return its reconciled summary.
///
/// End of input behaves like `quit`.
pub fn run_session<R, W, G>(
  bank: &QuestionBank,
  store: &dyn ProgressStore,
  rng: &mut G,
  input: &mut R,
  out: &mut W,
) -> Result<SessionSummary, ConsoleError>
where
  R: BufRead,
  W: Write,
  G: Rng + ?Sized,
{
  let mut session = QuizSession::start(bank, store, rng)?;
  print_banner(out, bank, store, &session)?;

  while !session.is_complete() {
    let question = session.current_question(bank)?;
    writeln!(
      out,
      "\n[Question {}/{}] Topic: {}",
      session.answered() + 1,
      session.total(),
      question.topic
    )?;
    rule(out, '-', 40)?;
    writeln!(out, "{}\n", question.prompt)?;
    write!(out, "Your answer: ")?;
    out.flush()?;

    let answer = match read_line(input)? {
      Some(answer) if !answer.eq_ignore_ascii_case(QUIT_COMMAND) => answer,
      _ => {
        session.quit();
        writeln!(out, "\nSession ended. Keep practising!")?;
        break;
      }
    };

    let feedback = session.submit_answer(bank, store, &answer)?;
    if feedback.correct {
      writeln!(out, "\n✓ CORRECT! Well done.\n")?;
    } else {
      writeln!(
        out,
        "\n✗ Not quite. The correct answer is: {}\n",
        feedback.canonical_answer
      )?;
    }
    writeln!(out, "Explanation:\n{}", feedback.explanation)?;

    if !session.is_complete() {
      write!(out, "\nPress Enter to continue...")?;
      out.flush()?;
      if read_line(input)?.is_none() {
        session.quit();
      }
    }
  }

  let summary = session.summary(store)?;
  print_summary(out, &summary)?;
  Ok(summary)
}

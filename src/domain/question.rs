use serde::{Deserialize, Serialize};

/// Index of a question within its bank.
pub type QuestionId = usize;

/// A single short-answer exam question.
///
/// Field names on the wire follow the bank file layout
/// (`topic, question, answer, keywords, explanation`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub topic: String,
  #[serde(rename = "question")]
  pub prompt: String,
  #[serde(rename = "answer")]
  pub canonical_answer: String,
  /// Case-insensitive substrings, any of which makes an answer correct
  pub keywords: Vec<String>,
  pub explanation: String,
}

impl Question {
  pub fn new(
    topic: &str,
    prompt: &str,
    canonical_answer: &str,
    keywords: &[&str],
    explanation: &str,
  ) -> Self {
    Self {
      topic: topic.to_string(),
      prompt: prompt.to_string(),
      canonical_answer: canonical_answer.to_string(),
      keywords: keywords.iter().map(|k| k.to_string()).collect(),
      explanation: explanation.to_string(),
    }
  }
}

/// A wrong answer kept for the end-of-session review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedQuestion {
  pub topic: String,
  pub question: String,
  pub answer: String,
  pub explanation: String,
}

impl From<&Question> for MissedQuestion {
  fn from(q: &Question) -> Self {
    Self {
      topic: q.topic.clone(),
      question: q.prompt.clone(),
      answer: q.canonical_answer.clone(),
      explanation: q.explanation.clone(),
    }
  }
}

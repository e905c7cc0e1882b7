//! Question bank - the immutable, ordered set of questions a session draws from.
//!
//! The built-in bank covers the highest-frequency O-level topics. A JSON file
//! with the same shape can replace it:
//!
//! ```json
//! [
//!   {"topic": "Waves", "question": "...", "answer": "100 m/s",
//!    "keywords": ["100"], "explanation": "..."}
//! ]
//! ```

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::domain::{Question, QuestionId};
use crate::validation::{check_keywords, KeywordError};

/// Question bank loading errors.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Question bank is empty")]
    Empty,
    #[error("Question {index} is invalid: {reason}")]
    Invalid { index: usize, reason: String },
}

/// Ordered, validated list of questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting empty banks, blank topics and unusable keywords.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        for (index, q) in questions.iter().enumerate() {
            if q.topic.trim().is_empty() {
                return Err(BankError::Invalid {
                    index,
                    reason: "topic is empty".to_string(),
                });
            }
            check_keywords(&q.keywords).map_err(|e: KeywordError| BankError::Invalid {
                index,
                reason: e.to_string(),
            })?;
        }

        Ok(Self { questions })
    }

    /// The bank shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions paired with their ids, in bank order
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &Question)> {
        self.questions.iter().enumerate()
    }

    /// Distinct topics in order of first appearance
    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();
        for q in &self.questions {
            if !topics.contains(&q.topic.as_str()) {
                topics.push(&q.topic);
            }
        }
        topics
    }
}

/// Load a bank from a JSON file.
pub fn load_bank_from_file(path: &Path) -> Result<QuestionBank, BankError> {
    let content = fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&content).map_err(|source| BankError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    let bank = QuestionBank::new(questions)?;
    tracing::debug!("Loaded {} questions from {}", bank.len(), path.display());
    Ok(bank)
}

/// Load the configured bank, or the built-in one when no path is set.
pub fn load_bank(path: Option<&Path>) -> Result<QuestionBank, BankError> {
    match path {
        Some(path) => load_bank_from_file(path),
        None => Ok(QuestionBank::builtin()),
    }
}

fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Kinematics",
            "A car accelerates from rest to 20 m/s in 5 seconds. What is its acceleration?",
            "4 m/s²",
            &["4", "m/s²", "m/s2"],
            "Use: a = (v - u) / t → a = (20 - 0) / 5 = 4 m/s². KEY TIP: Always show your formula, \
             substitution, and units. Examiners award marks at each step.",
        ),
        Question::new(
            "Kinematics",
            "A ball is dropped from rest and falls for 3 seconds. How far does it fall? (g = 10 m/s²)",
            "45 m",
            &["45"],
            "Use: s = ut + ½at² → s = 0 + ½(10)(9) = 45 m. KEY TIP: When dropped from rest, u = 0. \
             State this clearly in your working.",
        ),
        Question::new(
            "Energy",
            "A 2 kg ball is lifted to a height of 5 m. What is its gravitational potential energy? (g = 10 m/s²)",
            "100 J",
            &["100"],
            "Use: GPE = mgh → GPE = 2 × 10 × 5 = 100 J. KEY TIP: Always write the formula first. \
             Examiners give a mark just for the correct formula.",
        ),
        Question::new(
            "Electricity",
            "A resistor has a voltage of 12V across it and a current of 3A through it. What is its resistance?",
            "4 Ω",
            &["4"],
            "Use Ohm's Law: R = V / I → R = 12 / 3 = 4 Ω. KEY TIP: Always rearrange the formula \
             clearly and show each step.",
        ),
        Question::new(
            "Waves",
            "A wave has a frequency of 50 Hz and a wavelength of 2 m. What is its speed?",
            "100 m/s",
            &["100"],
            "Use: v = fλ → v = 50 × 2 = 100 m/s. KEY TIP: v = fλ is one of the most tested \
             formulas. Memorise it.",
        ),
        Question::new(
            "Pressure",
            "What is the pressure at the bottom of a 4 m deep tank of water? (density = 1000 kg/m³, g = 10 m/s²)",
            "40,000 Pa",
            &["40000", "40,000"],
            "Use: P = ρgh → P = 1000 × 10 × 4 = 40,000 Pa. KEY TIP: Always check units. \
             Density must be in kg/m³.",
        ),
        Question::new(
            "Radioactivity",
            "What type of radiation is most penetrating and requires thick lead to stop it?",
            "Gamma radiation",
            &["gamma"],
            "Gamma is electromagnetic radiation and the most penetrating. Alpha: stopped by paper. \
             Beta: stopped by aluminium. Gamma: needs thick lead or concrete. KEY TIP: Learn the \
             penetration order. It comes up repeatedly.",
        ),
    ]
}

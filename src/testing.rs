//! Test fixtures shared across modules.
//!
//! Provides a small question bank whose keywords never overlap with the
//! throwaway wrong answers used in tests, and a helper for seeding progress.

use std::sync::Arc;

use crate::content::QuestionBank;
use crate::domain::{Progress, Question};
use crate::state::AppState;
use crate::store::MemoryStore;

/// Four questions: Kinematics, Energy, Waves, Radioactivity (ids 0..=3).
pub fn sample_bank() -> QuestionBank {
    QuestionBank::new(vec![
        Question::new(
            "Kinematics",
            "A ball falls from rest for 3 s. How far does it fall? (g = 10 m/s²)",
            "45 m",
            &["45"],
            "s = ut + ½at²",
        ),
        Question::new(
            "Energy",
            "A 2 kg mass is lifted 5 m. What is its GPE? (g = 10 m/s²)",
            "100 J",
            &["100", "joules"],
            "GPE = mgh",
        ),
        Question::new(
            "Waves",
            "A 50 Hz wave has wavelength 2 m. What is its speed?",
            "100 m/s",
            &["100 m/s", "100m/s"],
            "v = fλ",
        ),
        Question::new(
            "Radioactivity",
            "Which radiation needs thick lead to stop it?",
            "Gamma",
            &["gamma"],
            "Gamma is the most penetrating.",
        ),
    ])
    .expect("sample bank is valid")
}

/// Progress with the given weak-topic counts and session count
pub fn progress_with(weak_topics: &[(&str, u32)], sessions: u32) -> Progress {
    Progress {
        weak_topics: weak_topics
            .iter()
            .map(|(topic, count)| (topic.to_string(), *count))
            .collect(),
        sessions,
    }
}

/// Web state over the sample bank and an in-memory store.
///
/// Returns the store handle too so tests can inspect what was persisted.
pub fn test_state(progress: Progress) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new(progress));
    let state = AppState::new(Arc::new(sample_bank()), store.clone());
    (state, store)
}

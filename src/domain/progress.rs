use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cross-session learner progress.
///
/// Serialized as `{"weak_topics": {...}, "sessions": N}`. Counts are unsigned
/// so a negative value in a stored file is rejected as corrupt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
  /// Topic -> number of outstanding misses. A zero entry means "was weak, now resolved".
  #[serde(default)]
  pub weak_topics: BTreeMap<String, u32>,
  #[serde(default)]
  pub sessions: u32,
}

impl Progress {
  pub fn new() -> Self {
    Self::default()
  }

  /// Miss count for a topic (absent topics count as zero)
  pub fn weak_count(&self, topic: &str) -> u32 {
    self.weak_topics.get(topic).copied().unwrap_or(0)
  }

  /// True if the topic currently earns boosted questions
  pub fn is_weak(&self, topic: &str) -> bool {
    self.weak_count(topic) > 0
  }

  /// Count a new session start
  pub fn begin_session(&mut self) -> u32 {
    self.sessions = self.sessions.saturating_add(1);
    self.sessions
  }

  /// Credit a correct answer on a weak topic.
  ///
  /// Returns true only if a positive count was lowered; zero and absent
  /// topics are left untouched.
  pub fn record_correction(&mut self, topic: &str) -> bool {
    match self.weak_topics.get_mut(topic) {
      Some(count) if *count > 0 => {
        *count -= 1;
        true
      }
      _ => false,
    }
  }

  /// Fold a session's miss tally into the weak-topic counts
  pub fn reconcile(&mut self, missed_topic_tally: &BTreeMap<String, u32>) {
    for (topic, count) in missed_topic_tally {
      let entry = self.weak_topics.entry(topic.clone()).or_insert(0);
      *entry = entry.saturating_add(*count);
    }
  }

  /// Topics with outstanding misses, in topic-name order
  pub fn weak_areas(&self) -> Vec<(&str, u32)> {
    self
      .weak_topics
      .iter()
      .filter(|(_, count)| **count > 0)
      .map(|(topic, count)| (topic.as_str(), *count))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tally(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries.iter().map(|(t, c)| (t.to_string(), *c)).collect()
  }

  #[test]
  fn test_default_is_empty() {
    let progress = Progress::new();
    assert!(progress.weak_topics.is_empty());
    assert_eq!(progress.sessions, 0);
  }

  #[test]
  fn test_weak_count_absent_is_zero() {
    let progress = Progress::new();
    assert_eq!(progress.weak_count("Energy"), 0);
    assert!(!progress.is_weak("Energy"));
  }

  #[test]
  fn test_begin_session_increments() {
    let mut progress = Progress::new();
    assert_eq!(progress.begin_session(), 1);
    assert_eq!(progress.begin_session(), 2);
    assert_eq!(progress.sessions, 2);
  }

  #[test]
  fn test_record_correction_decrements_positive() {
    let mut progress = Progress::new();
    progress.weak_topics.insert("Pressure".into(), 2);

    assert!(progress.record_correction("Pressure"));
    assert_eq!(progress.weak_count("Pressure"), 1);
  }

  #[test]
  fn test_record_correction_floors_at_zero() {
    let mut progress = Progress::new();
    progress.weak_topics.insert("Pressure".into(), 1);

    assert!(progress.record_correction("Pressure"));
    for _ in 0..5 {
      assert!(!progress.record_correction("Pressure"));
    }
    assert_eq!(progress.weak_topics.get("Pressure"), Some(&0));
  }

  #[test]
  fn test_record_correction_ignores_absent_topic() {
    let mut progress = Progress::new();
    assert!(!progress.record_correction("Waves"));
    assert!(!progress.weak_topics.contains_key("Waves"));
  }

  #[test]
  fn test_reconcile_adds_to_existing_and_new_topics() {
    let mut progress = Progress::new();
    progress.weak_topics.insert("Energy".into(), 1);

    progress.reconcile(&tally(&[("Energy", 2), ("Waves", 1)]));

    assert_eq!(progress.weak_count("Energy"), 3);
    assert_eq!(progress.weak_count("Waves"), 1);
  }

  #[test]
  fn test_reconcile_empty_tally_is_noop() {
    let mut progress = Progress::new();
    progress.weak_topics.insert("Energy".into(), 0);
    let before = progress.clone();

    progress.reconcile(&BTreeMap::new());
    assert_eq!(progress, before);
  }

  #[test]
  fn test_weak_areas_skips_resolved() {
    let mut progress = Progress::new();
    progress.weak_topics.insert("Energy".into(), 0);
    progress.weak_topics.insert("Waves".into(), 2);

    assert_eq!(progress.weak_areas(), vec![("Waves", 2)]);
  }

  #[test]
  fn test_negative_count_rejected() {
    let json = r#"{"weak_topics": {"Energy": -1}, "sessions": 0}"#;
    assert!(serde_json::from_str::<Progress>(json).is_err());
  }
}

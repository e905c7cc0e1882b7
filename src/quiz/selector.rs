//! Question ordering with weak-topic boosting.
//!
//! Every question appears once. Questions whose topic still has outstanding
//! misses appear a second time, and the whole list is shuffled so the
//! repeats are spread through the session.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::content::QuestionBank;
use crate::domain::{Progress, QuestionId};

/// Build the question order for one session.
///
/// The random source is injected so callers (and tests) control the shuffle.
pub fn build_question_sequence<R: Rng + ?Sized>(
  bank: &QuestionBank,
  progress: &Progress,
  rng: &mut R,
) -> Vec<QuestionId> {
  let mut sequence: Vec<QuestionId> = bank.iter().map(|(id, _)| id).collect();

  // Boost: the same question again, not another one from the topic
  sequence.extend(
    bank
      .iter()
      .filter(|(_, q)| progress.is_weak(&q.topic))
      .map(|(id, _)| id),
  );

  sequence.shuffle(rng);
  sequence
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{progress_with, sample_bank};
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn occurrences(sequence: &[QuestionId], id: QuestionId) -> usize {
    sequence.iter().filter(|&&x| x == id).count()
  }

  #[test]
  fn test_no_weak_topics_is_permutation() {
    let bank = QuestionBank::builtin();
    let mut rng = StdRng::seed_from_u64(7);

    let sequence = build_question_sequence(&bank, &Progress::default(), &mut rng);

    assert_eq!(sequence.len(), bank.len());
    let mut sorted = sequence.clone();
    sorted.sort();
    assert_eq!(sorted, (0..bank.len()).collect::<Vec<_>>());
  }

  #[test]
  fn test_weak_topic_question_appears_twice() {
    let bank = sample_bank();
    let progress = progress_with(&[("Energy", 2)], 0);
    let mut rng = StdRng::seed_from_u64(1);

    let sequence = build_question_sequence(&bank, &progress, &mut rng);

    let (energy_id, _) = bank.iter().find(|(_, q)| q.topic == "Energy").unwrap();
    assert_eq!(sequence.len(), bank.len() + 1);
    assert_eq!(occurrences(&sequence, energy_id), 2);
    for (id, q) in bank.iter() {
      if q.topic != "Energy" {
        assert_eq!(occurrences(&sequence, id), 1, "topic {}", q.topic);
      }
    }
  }

  #[test]
  fn test_resolved_topic_not_boosted() {
    let bank = sample_bank();
    let progress = progress_with(&[("Energy", 0)], 3);
    let mut rng = StdRng::seed_from_u64(1);

    let sequence = build_question_sequence(&bank, &progress, &mut rng);
    assert_eq!(sequence.len(), bank.len());
  }

  #[test]
  fn test_every_question_of_weak_topic_is_boosted() {
    let bank = QuestionBank::builtin();
    let progress = progress_with(&[("Kinematics", 1)], 0);
    let mut rng = StdRng::seed_from_u64(3);

    let sequence = build_question_sequence(&bank, &progress, &mut rng);

    assert_eq!(sequence.len(), bank.len() + 2);
    for (id, q) in bank.iter().filter(|(_, q)| q.topic == "Kinematics") {
      assert_eq!(occurrences(&sequence, id), 2, "{}", q.prompt);
    }
  }

  #[test]
  fn test_weak_topic_missing_from_bank_ignored() {
    let bank = sample_bank();
    let progress = progress_with(&[("Optics", 5)], 0);
    let mut rng = StdRng::seed_from_u64(9);

    assert_eq!(build_question_sequence(&bank, &progress, &mut rng).len(), bank.len());
  }

  #[test]
  fn test_seeded_shuffle_is_deterministic() {
    let bank = QuestionBank::builtin();
    let progress = progress_with(&[("Pressure", 1)], 0);

    let mut expected: Vec<QuestionId> = (0..bank.len()).collect();
    expected.push(5);
    expected.shuffle(&mut StdRng::seed_from_u64(42));

    let sequence = build_question_sequence(&bank, &progress, &mut StdRng::seed_from_u64(42));
    assert_eq!(sequence, expected);
  }
}

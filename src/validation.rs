//! Keyword-based answer checking.
//!
//! An answer is correct when any acceptance keyword occurs in it as a
//! case-insensitive substring. There is no numeric parsing or unit
//! normalisation: `40000` and `40,000` must both be listed to accept both.
//!
//! Matching is deliberately loose. A short keyword such as `4` is accepted
//! anywhere in the answer, so `14` or `40` also pass. Banks should prefer
//! longer, more specific keywords where this matters.

use thiserror::Error;

/// Problems with a question's keyword list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordError {
  #[error("question has no acceptance keywords")]
  Missing,
  #[error("keyword {0} is empty and would match every answer")]
  Empty(usize),
}

/// Lowercase and trim an answer for comparison
pub fn normalize_answer(input: &str) -> String {
  input.trim().to_lowercase()
}

/// Check a free-text answer against a question's acceptance keywords
pub fn is_correct<S: AsRef<str>>(submitted: &str, keywords: &[S]) -> bool {
  let answer = normalize_answer(submitted);
  keywords
    .iter()
    .any(|kw| answer.contains(&kw.as_ref().to_lowercase()))
}

/// Ensure a keyword list can be used for matching.
///
/// Whitespace-only keywords are rejected alongside empty ones: a `" "`
/// keyword occurs in every multi-word answer and would accept it.
pub fn check_keywords<S: AsRef<str>>(keywords: &[S]) -> Result<(), KeywordError> {
  if keywords.is_empty() {
    return Err(KeywordError::Missing);
  }
  if let Some(idx) = keywords.iter().position(|kw| kw.as_ref().trim().is_empty()) {
    return Err(KeywordError::Empty(idx));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_exact_keyword() {
    assert!(is_correct("45", &["45"]));
    assert!(is_correct("gamma", &["gamma"]));
  }

  #[test]
  fn test_case_insensitive() {
    assert!(is_correct("GAMMA radiation", &["gamma"]));
    assert!(is_correct("gamma", &["GAMMA"]));
  }

  #[test]
  fn test_substring_anywhere() {
    assert!(is_correct("I think 40,000 Pa", &["40000", "40,000"]));
    assert!(is_correct("it falls 45 m", &["45"]));
  }

  #[test]
  fn test_no_numeric_normalisation() {
    assert!(!is_correct("40 000", &["40000"]));
    assert!(!is_correct("4e4", &["40000"]));
  }

  #[test]
  fn test_short_keyword_matches_wrong_magnitude() {
    // Known looseness of substring matching
    assert!(is_correct("14", &["4"]));
  }

  #[test]
  fn test_surrounding_whitespace_ignored() {
    assert!(is_correct("   100  \n", &["100"]));
  }

  #[test]
  fn test_incorrect() {
    assert!(!is_correct("beta", &["gamma"]));
    assert!(!is_correct("", &["gamma"]));
    assert!(!is_correct("   ", &["100"]));
  }

  #[test]
  fn test_unicode_symbols() {
    assert!(is_correct("4 Ω", &["Ω"]));
    assert!(is_correct("4 m/s²", &["m/s²"]));
  }

  #[test]
  fn test_any_of_several_keywords() {
    let keywords = vec!["4".to_string(), "m/s2".to_string()];
    assert!(is_correct("m/s2", &keywords));
    assert!(!is_correct("five", &keywords));
  }

  #[test]
  fn test_check_keywords() {
    assert_eq!(check_keywords(&["gamma"]), Ok(()));
    assert_eq!(check_keywords::<&str>(&[]), Err(KeywordError::Missing));
    assert_eq!(check_keywords(&["40000", ""]), Err(KeywordError::Empty(1)));
    assert_eq!(check_keywords(&["  "]), Err(KeywordError::Empty(0)));
  }

  #[test]
  fn test_space_keyword_would_accept_any_multi_word_answer() {
    assert!(is_correct("no idea", &[" "]));
    assert!(!is_correct("no", &[" "]));
    assert_eq!(check_keywords(&["gamma", " "]), Err(KeywordError::Empty(1)));
  }
}

//! Pronunciation similarity scoring.
//!
//! Compares a speech-recognition transcript against a target word and
//! returns an integer percentage. The algorithm is a bag-of-characters
//! overlap, not an edit distance or phonetic comparison: it ignores
//! character order and under-counts repetition. It is a placeholder
//! heuristic for drill feedback, not a correctness contract.

use crate::util::is_french_letter;

/// Lowercase and keep only French letters; spaces, digits and punctuation
/// are discarded before comparison.
pub fn normalize(s: &str) -> String {
  s.to_lowercase().chars().filter(|c| is_french_letter(*c)).collect()
}

/// Score in [0, 100]. Identical normalized strings score 100; if either side
/// normalizes to empty the score is 0. Otherwise: the count of the shorter
/// string's characters that occur anywhere in the longer one, over the
/// longer length.
pub fn similarity_score(transcript: &str, target: &str) -> u8 {
  let a = normalize(transcript);
  let b = normalize(target);

  if a == b {
    return 100;
  }
  if a.is_empty() || b.is_empty() {
    return 0;
  }

  let (longer, shorter) = if a.chars().count() > b.chars().count() { (&a, &b) } else { (&b, &a) };
  let longer_len = longer.chars().count();

  let matches = shorter.chars().filter(|c| longer.contains(*c)).count();

  ((matches as f32 / longer_len as f32) * 100.0).round() as u8
}

/// Drill feedback label for a score.
pub fn verdict(score: u8) -> &'static str {
  match score {
    90..=u8::MAX => "Excellent!",
    80..=89 => "Great!",
    70..=79 => "Good!",
    60..=69 => "Keep practicing!",
    _ => "Try again!",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identical_words_score_100() {
    assert_eq!(similarity_score("bonjour", "bonjour"), 100);
    assert_eq!(similarity_score("Bonjour!", "bonjour"), 100);
  }

  #[test]
  fn empty_transcript_scores_0() {
    assert_eq!(similarity_score("", "bonjour"), 0);
    assert_eq!(similarity_score("bonjour", ""), 0);
    assert_eq!(similarity_score("123 !!", "bonjour"), 0);
  }

  #[test]
  fn score_ignores_character_order() {
    // Documented weakness of the heuristic: a permutation of the target
    // scores as well as the target itself.
    assert_eq!(similarity_score("uojnrbo", "bonjour"), 100);
  }

  #[test]
  fn disjoint_strings_score_0() {
    assert_eq!(similarity_score("xyz123", "bonjour"), 0);
  }

  #[test]
  fn partial_overlap_is_proportional() {
    // "bonsoir" vs "bonjour": o/n/b/o/i→no... count chars of the shorter
    // found in the longer; both are 7 long so "bonjour" is the reference.
    let score = similarity_score("bonsoir", "bonjour");
    assert!(score > 0 && score < 100, "score={score}");
  }

  #[test]
  fn normalization_keeps_accents() {
    assert_eq!(normalize("Écureuil"), "écureuil");
    assert_eq!(similarity_score("écureuil", "Écureuil"), 100);
  }

  #[test]
  fn verdict_bands() {
    assert_eq!(verdict(100), "Excellent!");
    assert_eq!(verdict(85), "Great!");
    assert_eq!(verdict(72), "Good!");
    assert_eq!(verdict(61), "Keep practicing!");
    assert_eq!(verdict(10), "Try again!");
  }
}

//! Seed data: the built-in pronunciation drill bank.
//!
//! These words keep the pronunciation lab useful even without external
//! config or OpenAI, and double as the local fallback for AI pronunciation
//! guides.

use crate::domain::{DrillDifficulty, PronunciationWord};

fn word(
  id: &str,
  french: &str,
  english: &str,
  phonetic: &str,
  difficulty: DrillDifficulty,
  category: &str,
  tips: [&str; 3],
) -> PronunciationWord {
  PronunciationWord {
    id: id.into(),
    french: french.into(),
    english: english.into(),
    phonetic: phonetic.into(),
    difficulty,
    category: category.into(),
    tips: tips.iter().map(|t| (*t).to_string()).collect(),
  }
}

/// The built-in drill words, easy greetings through the hard vowel glides.
pub fn seed_pronunciation_words() -> Vec<PronunciationWord> {
  use DrillDifficulty::*;
  vec![
    word("1", "Bonjour", "Hello / Good day", "/bɔ̃.ʒuʁ/", Easy, "Greetings", [
      "The \"on\" makes a nasal sound - don't pronounce the \"n\"",
      "The \"j\" sounds like \"zh\" in \"pleasure\"",
      "The final \"r\" is a soft, guttural sound",
    ]),
    word("2", "Merci beaucoup", "Thank you very much", "/mɛʁ.si bo.ku/", Easy, "Politeness", [
      "The \"r\" in \"merci\" is soft and guttural",
      "\"eau\" in \"beaucoup\" sounds like \"oh\"",
      "The final \"p\" is silent",
    ]),
    word("3", "Je voudrais", "I would like", "/ʒə vu.dʁɛ/", Medium, "Requests", [
      "\"Je\" has a soft \"zh\" sound",
      "The \"ou\" sounds like \"oo\" in \"food\"",
      "The \"ais\" ending sounds like \"eh\"",
    ]),
    word("4", "S'il vous plaît", "Please", "/sil vu plɛ/", Medium, "Politeness", [
      "Link \"s'il\" and \"vous\" smoothly",
      "The \"aî\" sounds like \"eh\"",
      "The final \"t\" is silent",
    ]),
    word("5", "Excusez-moi", "Excuse me", "/ɛk.sky.ze mwa/", Medium, "Politeness", [
      "The \"x\" sounds like \"ks\"",
      "\"ez\" at the end sounds like \"ay\"",
      "\"moi\" rhymes with \"wah\"",
    ]),
    word("6", "Aujourd'hui", "Today", "/o.ʒuʁ.dɥi/", Hard, "Time", [
      "Start with \"oh\" sound",
      "The \"ui\" is a quick glide from \"oo\" to \"ee\"",
      "Practice the \"ʒ\" (zh) sound in the middle",
    ]),
    word("7", "Écureuil", "Squirrel", "/e.ky.ʁœj/", Hard, "Animals", [
      "Start with \"ay\" sound",
      "The \"œ\" is like \"u\" in \"burn\"",
      "End with a soft \"y\" sound",
    ]),
    word("8", "Grenouille", "Frog", "/ɡʁə.nuj/", Hard, "Animals", [
      "The \"gr\" is a soft, guttural combination",
      "\"ouille\" sounds like \"oo-ee\" glided together",
      "Practice the nasal \"e\" in the middle",
    ]),
    word("9", "Croissant", "Croissant", "/kʁwa.sɑ̃/", Medium, "Food", [
      "The \"cr\" has a soft French \"r\"",
      "\"oi\" sounds like \"wa\"",
      "The final \"ant\" is nasal - don't pronounce the \"nt\"",
    ]),
    word("10", "Baguette", "Baguette", "/ba.ɡɛt/", Easy, "Food", [
      "Stress is on the second syllable",
      "The \"gu\" sounds like \"g\" in \"get\"",
      "The \"ette\" ending is crisp",
    ]),
  ]
}

/// Case-insensitive lookup in the drill bank, used as the local fallback for
/// pronunciation guides.
pub fn find_seed_word<'a>(
  words: &'a [PronunciationWord],
  french: &str,
) -> Option<&'a PronunciationWord> {
  let wanted = french.trim().to_lowercase();
  words.iter().find(|w| w.french.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bank_lookup_ignores_case() {
    let words = seed_pronunciation_words();
    assert!(find_seed_word(&words, "bonjour").is_some());
    assert!(find_seed_word(&words, "  ÉCUREUIL ").is_some());
    assert!(find_seed_word(&words, "ordinateur").is_none());
  }
}

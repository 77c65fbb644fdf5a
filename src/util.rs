//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// True if the char belongs to the French alphabet once lowercased:
/// ASCII letters plus accented letters and the œ/æ ligatures.
/// Everything else is stripped before pronunciation comparison.
pub fn is_french_letter(ch: char) -> bool {
  ch.is_ascii_lowercase()
    || matches!(
      ch,
      'à' | 'â' | 'ä' | 'é' | 'è' | 'ê' | 'ë' | 'ï' | 'î' | 'ô' | 'ù' | 'û' | 'ü' | 'ÿ' | 'œ'
        | 'æ' | 'ç'
    )
}

/// Lowercase a topic name into a media-path slug ("Daily Routines" -> "daily-routines").
pub fn slugify(s: &str) -> String {
  s.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
#[allow(dead_code)]
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max { s.to_string() } else { format!("{}… ({} bytes total)", &s[..max], s.len()) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn template_fills_all_slots() {
    let out = fill_template("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]);
    assert_eq!(out, "x and y and x");
  }

  #[test]
  fn slugify_collapses_whitespace() {
    assert_eq!(slugify("Passé  Composé with   Avoir"), "passé-composé-with-avoir");
  }
}

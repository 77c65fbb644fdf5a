//! Loading application configuration (AI prompts + catalog policy) from TOML.
//!
//! See `AppConfig`, `Prompts` and `CatalogPolicy` for the expected schema.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub prompts: Prompts,
  #[serde(default)]
  pub catalog: CatalogPolicy,
}

/// Catalog assembly knobs. Defaults reproduce the shipped catalog: up to ten
/// topics per (level, category) pair plus ten thousand bulk records.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogPolicy {
  #[serde(default = "default_topics_per_pair")]
  pub topics_per_pair: usize,
  #[serde(default = "default_bulk_target")]
  pub bulk_target: usize,
}

fn default_topics_per_pair() -> usize {
  10
}

fn default_bulk_target() -> usize {
  10_000
}

impl Default for CatalogPolicy {
  fn default() -> Self {
    Self { topics_per_pair: default_topics_per_pair(), bulk_target: default_bulk_target() }
  }
}

/// Prompts used by the OpenAI client. Defaults are sensible for French
/// lesson/grammar/conversation generation. Override in TOML to tune
/// tone or structure.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  // Lesson generation
  pub lesson_system: String,
  pub lesson_user_template: String,
  // Grammar explanations
  pub grammar_system: String,
  pub grammar_user_template: String,
  // Conversation simulation
  pub conversation_system_template: String,
  // Vocabulary flashcards
  pub flashcards_system_template: String,
  pub flashcards_user_template: String,
  // Pronunciation guides
  pub phonetics_system: String,
  pub phonetics_user_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      lesson_system: "You are an expert French language teacher creating lessons for {level_description}. Generate comprehensive, engaging content with examples, exercises, and cultural context.".into(),
      lesson_user_template: "Create a {kind} lesson about \"{topic}\" for {level} level French learners.\n\nInclude:\n1. Introduction (in French and English)\n2. Key concepts/vocabulary (10-15 items with translations)\n3. Grammar points (if applicable)\n4. Example sentences (5-10)\n5. Practice exercises (3-5)\n6. Cultural notes\n7. Summary\n\nFormat as JSON with these sections.".into(),
      grammar_system: "You are a French grammar expert. Explain concepts clearly for {level} level learners.".into(),
      grammar_user_template: "Explain the French grammar concept: \"{concept}\" for {level} level.\n\nInclude:\n1. Clear explanation in English\n2. The rule in French\n3. Formation/structure\n4. 10 example sentences with translations\n5. Common mistakes to avoid\n6. Practice exercises (5)\n7. Exceptions and special cases\n\nFormat as JSON.".into(),
      conversation_system_template: "You are a friendly French conversation partner in this scenario: \"{scenario}\".\nThe learner is at {level} level. {level_instructions}\n\nRespond naturally in French, then provide:\n1. Your response in French\n2. English translation\n3. Any corrections or suggestions for the learner's message\n4. A follow-up question to continue the conversation\n\nFormat as JSON: {\"response\": \"...\", \"translation\": \"...\", \"corrections\": [...], \"followUp\": \"...\"}".into(),
      flashcards_system_template: "You are a French vocabulary expert creating flashcards for {level} level learners.".into(),
      flashcards_user_template: "Create {count} vocabulary flashcards for the theme: \"{theme}\" at {level} level.\n\nFor each word include:\n1. French word\n2. English translation\n3. Part of speech\n4. Gender (if noun)\n5. IPA pronunciation\n6. Example sentence in French\n7. Example translation\n8. Memory tip\n\nFormat as JSON array: {\"flashcards\": [...]}".into(),
      phonetics_system: "You are a French pronunciation expert. Provide IPA phonetic transcription and pronunciation tips.".into(),
      phonetics_user_template: "Provide the IPA phonetic transcription and 3 pronunciation tips for the French word: \"{word}\".\nFormat your response as JSON: {\"phonetics\": \"/...IPA.../\", \"tips\": [\"tip1\", \"tip2\", \"tip3\"]}".into(),
    }
  }
}

/// Attempt to load `AppConfig` from APP_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_app_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("APP_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<AppConfig>(&s) {
      Ok(cfg) => {
        info!(target: "prize2pride_backend", %path, "Loaded app config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "prize2pride_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "prize2pride_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

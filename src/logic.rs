//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Pronunciation scoring (pure, local)
//!   - Lesson/grammar/flashcard generation (OpenAI when available, local
//!     synthesis from the taxonomy otherwise)
//!   - Conversation simulation with a canned local fallback
//!   - Pronunciation guides (TTS + phonetics, seed-bank fallback)
//!   - Image/audio generation (OpenAI only; no local stand-in exists)

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;
use tracing::{debug, error, instrument};

use crate::domain::Level;
use crate::generator;
use crate::openai::GeneratedImage;
use crate::protocol::{ChatTurn, ConversationReply};
use crate::seeds::find_seed_word;
use crate::state::AppState;
use crate::{pronunciation, taxonomy};

pub const ORIGIN_OPENAI: &str = "openai";
pub const ORIGIN_LOCAL: &str = "local";

#[instrument(level = "info", skip(_state, transcript, target), fields(transcript_len = transcript.len(), target_len = target.len()))]
pub async fn score_pronunciation(
  _state: &AppState,
  transcript: &str,
  target: &str,
) -> (u8, &'static str) {
  let score = pronunciation::similarity_score(transcript, target);
  let verdict = pronunciation::verdict(score);
  debug!(target: "prize2pride_backend", score, verdict, "Pronunciation scored");
  (score, verdict)
}

#[instrument(level = "info", skip(state), fields(%topic, level = %level.code(), %kind))]
pub async fn do_generate_lesson(
  state: &AppState,
  topic: &str,
  level: Level,
  kind: &str,
) -> (serde_json::Value, &'static str) {
  if let Some(oa) = &state.openai {
    match oa.generate_lesson(&state.prompts, topic, level, kind).await {
      Ok(content) => return (content, ORIGIN_OPENAI),
      Err(e) => {
        error!(target: "prize2pride_backend", error = %e, "OpenAI lesson generation failed; using local lesson.");
      }
    }
  }
  (local_lesson(topic, level, kind), ORIGIN_LOCAL)
}

#[instrument(level = "info", skip(state), fields(%concept, level = %level.code()))]
pub async fn do_explain_grammar(
  state: &AppState,
  concept: &str,
  level: Level,
) -> (serde_json::Value, &'static str) {
  if let Some(oa) = &state.openai {
    match oa.explain_grammar(&state.prompts, concept, level).await {
      Ok(content) => return (content, ORIGIN_OPENAI),
      Err(e) => {
        error!(target: "prize2pride_backend", error = %e, "OpenAI grammar explanation failed; using local outline.");
      }
    }
  }
  (local_grammar(concept, level), ORIGIN_LOCAL)
}

#[instrument(level = "info", skip(state, history, message), fields(%scenario, level = %level.code(), turns = history.len(), message_len = message.len()))]
pub async fn do_converse(
  state: &AppState,
  scenario: &str,
  level: Level,
  history: &[ChatTurn],
  message: &str,
) -> (ConversationReply, &'static str) {
  if let Some(oa) = &state.openai {
    match oa.converse(&state.prompts, scenario, level, history, message).await {
      Ok(reply) => return (reply, ORIGIN_OPENAI),
      Err(e) => {
        error!(target: "prize2pride_backend", error = %e, "OpenAI conversation failed; using canned reply.");
      }
    }
  }
  (local_conversation_reply(scenario), ORIGIN_LOCAL)
}

#[instrument(level = "info", skip(state), fields(%theme, level = %level.code(), count))]
pub async fn do_flashcards(
  state: &AppState,
  theme: &str,
  level: Level,
  count: usize,
) -> (serde_json::Value, &'static str) {
  if let Some(oa) = &state.openai {
    match oa.flashcards(&state.prompts, theme, level, count).await {
      Ok(content) => {
        let cards = content.get("flashcards").cloned().unwrap_or(content);
        return (cards, ORIGIN_OPENAI);
      }
      Err(e) => {
        error!(target: "prize2pride_backend", error = %e, "OpenAI flashcards failed; using seed vocabulary.");
      }
    }
  }
  (local_flashcards(state, count), ORIGIN_LOCAL)
}

/// Pronunciation guide: TTS audio plus IPA and tips. Audio is best-effort;
/// a failed synthesis still returns phonetics. Without OpenAI, the seed bank
/// answers for known words and a generic tip set covers the rest.
#[instrument(level = "info", skip(state), fields(%word))]
pub async fn do_pronunciation_guide(
  state: &AppState,
  word: &str,
) -> (Option<String>, Option<String>, Vec<String>, &'static str) {
  if let Some(oa) = &state.openai {
    match oa.phonetics(&state.prompts, word).await {
      Ok(guide) => {
        // Slower playback for drills.
        let audio = match oa.synthesize_speech(word, "nova", 0.8).await {
          Ok(bytes) => Some(BASE64.encode(bytes)),
          Err(e) => {
            error!(target: "prize2pride_backend", error = %e, "TTS failed for pronunciation guide; serving phonetics only.");
            None
          }
        };
        return (audio, Some(guide.phonetics), guide.tips, ORIGIN_OPENAI);
      }
      Err(e) => {
        error!(target: "prize2pride_backend", error = %e, "OpenAI phonetics failed; using seed bank.");
      }
    }
  }

  match find_seed_word(&state.words, word) {
    Some(seed) => (None, Some(seed.phonetic.clone()), seed.tips.clone(), ORIGIN_LOCAL),
    None => (
      None,
      None,
      vec![
        "Listen to a native recording and shadow it syllable by syllable.".into(),
        "Keep final consonants silent unless followed by a vowel sound.".into(),
        "French rhythm is even: give each syllable equal weight.".into(),
      ],
      ORIGIN_LOCAL,
    ),
  }
}

/// Image generation has no local stand-in; without a client this is an error
/// the handler surfaces as a gateway failure.
#[instrument(level = "info", skip(state, prompt), fields(prompt_len = prompt.len(), %style))]
pub async fn do_generate_image(
  state: &AppState,
  prompt: &str,
  style: &str,
  size: &str,
  quality: &str,
) -> Result<GeneratedImage, String> {
  match &state.openai {
    Some(oa) => oa.generate_image(prompt, style, size, quality).await,
    None => Err("Image generation unavailable: OPENAI_API_KEY not set".into()),
  }
}

/// Text-to-speech, raw MP3 bytes. Same availability rule as images.
#[instrument(level = "info", skip(state, text), fields(text_len = text.len(), %voice, %speed))]
pub async fn do_synthesize_audio(
  state: &AppState,
  text: &str,
  voice: &str,
  speed: f32,
) -> Result<Vec<u8>, String> {
  match &state.openai {
    Some(oa) => oa.synthesize_speech(text, voice, speed).await,
    None => Err("Audio synthesis unavailable: OPENAI_API_KEY not set".into()),
  }
}

// -------- Local fallbacks --------

/// Offline lesson document assembled from the synthesizer's content block.
fn local_lesson(topic: &str, level: Level, kind: &str) -> serde_json::Value {
  let content = generator::module_content(topic);
  let exercises = generator::generate_exercises(topic, 3);

  json!({
    "introduction": {
      "english": format!("A {} lesson about {} for {} level learners.", kind, topic, level.code()),
      "french": format!("Une leçon sur {} pour le niveau {}.", topic, level.code()),
    },
    "vocabulary": content.vocabulary,
    "grammar": content.grammar,
    "examples": content.examples,
    "exercises": exercises,
    "culturalNotes": content.cultural_notes,
    "summary": format!("Key points of {} at the {} level.", topic, level.code()),
  })
}

fn local_grammar(concept: &str, level: Level) -> serde_json::Value {
  let content = generator::module_content(concept);
  json!({
    "concept": concept,
    "explanation": format!(
      "An outline of {} for {} level learners ({}).",
      concept,
      level.code(),
      taxonomy::level_description(level)
    ),
    "rule": content.grammar,
    "examples": content.examples,
    "practiceExercises": generator::generate_exercises(concept, 5),
  })
}

fn local_conversation_reply(scenario: &str) -> ConversationReply {
  ConversationReply {
    response: "Très bien ! Pouvez-vous m'en dire un peu plus ?".into(),
    translation: "Very good! Can you tell me a bit more?".into(),
    corrections: vec![],
    follow_up: format!("Et dans la situation « {} », qu'est-ce que vous feriez ensuite ?", scenario),
  }
}

/// Flashcards from the drill bank: word, translation and IPA are real data,
/// the first tip doubles as the memory aid.
fn local_flashcards(state: &AppState, count: usize) -> serde_json::Value {
  let cards: Vec<serde_json::Value> = state
    .words
    .iter()
    .take(count)
    .map(|w| {
      json!({
        "french": w.french,
        "english": w.english,
        "pronunciation": w.phonetic,
        "category": w.category,
        "memoryTip": w.tips.first().cloned().unwrap_or_default(),
      })
    })
    .collect();
  json!(cards)
}

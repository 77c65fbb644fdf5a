//! Minimal OpenAI client for our use-cases.
//!
//! We call chat.completions for lesson/grammar/conversation/flashcard
//! generation (always as a strict JSON object), images.generations for
//! illustration prompts, and audio.speech for text-to-speech. Calls are
//! instrumented and log model names, latencies, and response sizes (not
//! contents).
//!
//! NOTE: We never log the API key and we keep payload truncations short.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::config::Prompts;
use crate::domain::Level;
use crate::protocol::{ChatTurn, ConversationReply};
use crate::taxonomy::{conversation_instructions, level_description};
use crate::util::fill_template;

/// Style-enhanced prompt suffixes for the French learning context.
const STYLE_ENHANCEMENTS: &[(&str, &str)] = &[
  ("hyper-realistic", "ultra-realistic, 8K resolution, photorealistic, stunning detail, professional photography"),
  ("cinematic", "cinematic lighting, film grain, dramatic atmosphere, movie-quality, widescreen aspect"),
  ("artistic", "artistic interpretation, impressionist style, beautiful brushstrokes, museum quality"),
  ("educational", "clear educational illustration, infographic style, labeled elements, professional"),
  ("cultural", "authentic French culture, traditional elements, cultural significance, heritage"),
  ("vintage-french", "vintage French aesthetic, Belle Époque style, nostalgic, sepia tones, classic Parisian"),
  ("modern-paris", "modern Paris, contemporary French life, urban chic, stylish, metropolitan"),
  ("provence", "Provence countryside, lavender fields, rustic charm, golden hour, pastoral beauty"),
];

const DEFAULT_IMAGE_STYLE: &str = "hyper-realistic";

/// Instructor voice styles mapped onto the upstream TTS voices. Unknown
/// styles pass through so raw API voice names keep working.
const VOICE_MAPPING: &[(&str, &str)] = &[
  ("native-parisian", "nova"),
  ("southern-french", "shimmer"),
  ("belgian-french", "echo"),
  ("canadian-french", "fable"),
  ("formal-academic", "onyx"),
  ("casual-conversational", "alloy"),
];

pub fn map_voice(style: &str) -> &str {
  VOICE_MAPPING
    .iter()
    .find(|(s, _)| *s == style)
    .map(|(_, v)| *v)
    .unwrap_or(style)
}

fn enhance_image_prompt(prompt: &str, style: &str) -> String {
  let enhancement = STYLE_ENHANCEMENTS
    .iter()
    .find(|(s, _)| *s == style)
    .or_else(|| STYLE_ENHANCEMENTS.iter().find(|(s, _)| *s == DEFAULT_IMAGE_STYLE))
    .map(|(_, e)| *e)
    .unwrap_or_default();
  format!(
    "{}. Style: {}. Context: French language learning, educational, culturally authentic.",
    prompt, enhancement
  )
}

#[derive(Clone)]
pub struct OpenAI {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
  pub fast_model: String,
  pub strong_model: String,
  pub image_model: String,
  pub tts_model: String,
}

/// IPA transcription plus tips, as returned by the phonetics prompt.
#[derive(Debug, Deserialize)]
pub struct PhoneticGuide {
  pub phonetics: String,
  #[serde(default)]
  pub tips: Vec<String>,
}

/// One generated illustration.
#[derive(Debug)]
pub struct GeneratedImage {
  pub url: String,
  pub revised_prompt: Option<String>,
  pub prompt: String,
}

impl OpenAI {
  /// Construct the client if we find OPENAI_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("OPENAI_API_KEY").ok()?;
    let base_url =
      std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
    let fast_model =
      std::env::var("OPENAI_FAST_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".into());
    let strong_model =
      std::env::var("OPENAI_STRONG_MODEL").unwrap_or_else(|_| "gpt-4.1".into());
    let image_model = std::env::var("OPENAI_IMAGE_MODEL").unwrap_or_else(|_| "dall-e-3".into());
    let tts_model = std::env::var("OPENAI_TTS_MODEL").unwrap_or_else(|_| "tts-1-hd".into());

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .ok()?;

    Some(Self { client, api_key, base_url, fast_model, strong_model, image_model, tts_model })
  }

  /// JSON-object chat completion from an explicit message list.
  /// Generic over the target type T.
  #[instrument(level = "info", skip(self, messages), fields(model = %model, turns = messages.len()))]
  async fn chat_json_messages<T: for<'a> Deserialize<'a>>(
    &self,
    model: &str,
    messages: Vec<ChatMessageReq>,
    temperature: f32,
    max_tokens: Option<u32>,
  ) -> Result<T, String> {
    let url = format!("{}/chat/completions", self.base_url);
    let req = ChatCompletionRequest {
      model: model.to_string(),
      messages,
      temperature,
      response_format: Some(ResponseFormat { r#type: "json_object".into() }),
      max_tokens,
    };

    let res = self.client.post(&url)
      .header(USER_AGENT, "prize2pride-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req).send().await.map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_openai_error(&body).unwrap_or(body);
      return Err(format!("OpenAI HTTP {}: {}", status, msg));
    }

    let body: ChatCompletionResponse = res.json().await.map_err(|e| e.to_string())?;
    if let Some(usage) = &body.usage {
      info!(prompt_tokens = ?usage.prompt_tokens, completion_tokens = ?usage.completion_tokens, total_tokens = ?usage.total_tokens, "OpenAI usage");
    }
    let text = body.choices.first()
      .and_then(|c| c.message.content.clone())
      .unwrap_or_default();

    serde_json::from_str::<T>(&text).map_err(|e| format!("JSON parse error: {}", e))
  }

  /// Two-message (system + user) JSON completion.
  async fn chat_json<T: for<'a> Deserialize<'a>>(
    &self,
    model: &str,
    system: &str,
    user: &str,
    temperature: f32,
    max_tokens: Option<u32>,
  ) -> Result<T, String> {
    self
      .chat_json_messages(
        model,
        vec![
          ChatMessageReq { role: "system".into(), content: system.into() },
          ChatMessageReq { role: "user".into(), content: user.into() },
        ],
        temperature,
        max_tokens,
      )
      .await
  }

  // --- High-level helpers (domain-specialized) ---

  /// Generate a full lesson document for (topic, level, kind).
  #[instrument(level = "info", skip(self, prompts), fields(%topic, level = %level.code(), %kind, model = %self.strong_model))]
  pub async fn generate_lesson(
    &self,
    prompts: &Prompts,
    topic: &str,
    level: Level,
    kind: &str,
  ) -> Result<serde_json::Value, String> {
    let system =
      fill_template(&prompts.lesson_system, &[("level_description", level_description(level))]);
    let user = fill_template(
      &prompts.lesson_user_template,
      &[("kind", kind), ("topic", topic), ("level", level.code())],
    );

    let start = std::time::Instant::now();
    let result =
      self.chat_json::<serde_json::Value>(&self.strong_model, &system, &user, 0.7, Some(4000)).await;
    let elapsed = start.elapsed();

    match &result {
      Ok(_) => info!(?elapsed, "Lesson content received"),
      Err(e) => error!(?elapsed, error = %e, "Model call failed during lesson generation"),
    }
    result
  }

  /// Explain a grammar concept at a level.
  #[instrument(level = "info", skip(self, prompts), fields(%concept, level = %level.code()))]
  pub async fn explain_grammar(
    &self,
    prompts: &Prompts,
    concept: &str,
    level: Level,
  ) -> Result<serde_json::Value, String> {
    let system = fill_template(&prompts.grammar_system, &[("level", level.code())]);
    let user = fill_template(
      &prompts.grammar_user_template,
      &[("concept", concept), ("level", level.code())],
    );
    self.chat_json(&self.strong_model, &system, &user, 0.5, Some(3000)).await
  }

  /// One turn of the scenario conversation partner, history included.
  #[instrument(level = "info", skip(self, prompts, history, user_message), fields(%scenario, level = %level.code(), turns = history.len()))]
  pub async fn converse(
    &self,
    prompts: &Prompts,
    scenario: &str,
    level: Level,
    history: &[ChatTurn],
    user_message: &str,
  ) -> Result<ConversationReply, String> {
    let system = fill_template(
      &prompts.conversation_system_template,
      &[
        ("scenario", scenario),
        ("level", level.code()),
        ("level_instructions", conversation_instructions(level)),
      ],
    );

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessageReq { role: "system".into(), content: system });
    for turn in history {
      messages.push(ChatMessageReq { role: turn.role.clone(), content: turn.content.clone() });
    }
    messages.push(ChatMessageReq { role: "user".into(), content: user_message.into() });

    self.chat_json_messages(&self.fast_model, messages, 0.7, None).await
  }

  /// Vocabulary flashcards for a theme. Returns the raw JSON document; the
  /// handler extracts the `flashcards` array.
  #[instrument(level = "info", skip(self, prompts), fields(%theme, level = %level.code(), count))]
  pub async fn flashcards(
    &self,
    prompts: &Prompts,
    theme: &str,
    level: Level,
    count: usize,
  ) -> Result<serde_json::Value, String> {
    let count_s = count.to_string();
    let system = fill_template(&prompts.flashcards_system_template, &[("level", level.code())]);
    let user = fill_template(
      &prompts.flashcards_user_template,
      &[("count", count_s.as_str()), ("theme", theme), ("level", level.code())],
    );
    self.chat_json(&self.fast_model, &system, &user, 0.7, Some(4000)).await
  }

  /// IPA transcription and pronunciation tips for one word.
  #[instrument(level = "info", skip(self, prompts), fields(%word))]
  pub async fn phonetics(&self, prompts: &Prompts, word: &str) -> Result<PhoneticGuide, String> {
    let user = fill_template(&prompts.phonetics_user_template, &[("word", word)]);
    self.chat_json(&self.fast_model, &prompts.phonetics_system, &user, 0.2, None).await
  }

  /// Generate one illustration. The prompt is enhanced with the style suffix
  /// before being sent upstream.
  #[instrument(level = "info", skip(self, prompt), fields(model = %self.image_model, %style, %size, prompt_len = prompt.len()))]
  pub async fn generate_image(
    &self,
    prompt: &str,
    style: &str,
    size: &str,
    quality: &str,
  ) -> Result<GeneratedImage, String> {
    let url = format!("{}/images/generations", self.base_url);
    let enhanced = enhance_image_prompt(prompt, style);
    let req = ImageGenerationRequest {
      model: self.image_model.clone(),
      prompt: enhanced.clone(),
      n: 1,
      size: size.to_string(),
      quality: quality.to_string(),
      response_format: "url".into(),
    };

    let res = self.client.post(&url)
      .header(USER_AGENT, "prize2pride-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req).send().await.map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_openai_error(&body).unwrap_or(body);
      return Err(format!("OpenAI HTTP {}: {}", status, msg));
    }

    let body: ImageGenerationResponse = res.json().await.map_err(|e| e.to_string())?;
    let first = body.data.into_iter().next().ok_or("Image response had no data")?;
    let image_url = first.url.ok_or("Image response had no URL")?;

    info!(revised = first.revised_prompt.is_some(), "Image generated");
    Ok(GeneratedImage { url: image_url, revised_prompt: first.revised_prompt, prompt: enhanced })
  }

  /// Synthesize speech and return the raw MP3 bytes.
  #[instrument(level = "info", skip(self, text), fields(model = %self.tts_model, %voice, %speed, text_len = text.len()))]
  pub async fn synthesize_speech(
    &self,
    text: &str,
    voice: &str,
    speed: f32,
  ) -> Result<Vec<u8>, String> {
    let url = format!("{}/audio/speech", self.base_url);
    let req = SpeechRequest {
      model: self.tts_model.clone(),
      input: text.to_string(),
      voice: map_voice(voice).to_string(),
      speed,
    };

    let res = self.client.post(&url)
      .header(USER_AGENT, "prize2pride-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req).send().await.map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_openai_error(&body).unwrap_or(body);
      return Err(format!("OpenAI HTTP {}: {}", status, msg));
    }

    let bytes = res.bytes().await.map_err(|e| e.to_string())?;
    info!(bytes = bytes.len(), "Speech synthesized");
    Ok(bytes.to_vec())
  }
}

// --- Upstream DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  response_format: Option<ResponseFormat>,
  #[serde(skip_serializing_if = "Option::is_none")]
  max_tokens: Option<u32>,
}
#[derive(Serialize)]
struct ChatMessageReq { role: String, content: String }
#[derive(Serialize)]
struct ResponseFormat { #[serde(rename = "type")] r#type: String }

#[derive(Deserialize)]
struct ChatCompletionResponse {
  choices: Vec<ChatChoice>,
  #[serde(default)] usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice { message: ChatMessageResp }
#[derive(Deserialize)]
struct ChatMessageResp { content: Option<String> }
#[derive(Deserialize)]
struct Usage {
  #[serde(default)] prompt_tokens: Option<u32>,
  #[serde(default)] completion_tokens: Option<u32>,
  #[serde(default)] total_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ImageGenerationRequest {
  model: String,
  prompt: String,
  n: u8,
  size: String,
  quality: String,
  response_format: String,
}

#[derive(Deserialize)]
struct ImageGenerationResponse {
  data: Vec<ImageDatum>,
}
#[derive(Deserialize)]
struct ImageDatum {
  #[serde(default)]
  url: Option<String>,
  #[serde(default)]
  revised_prompt: Option<String>,
}

#[derive(Serialize)]
struct SpeechRequest {
  model: String,
  input: String,
  voice: String,
  speed: f32,
}

/// Try to extract a clean error message from OpenAI error body.
fn extract_openai_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  match serde_json::from_str::<EWrap>(body) {
    Ok(w) => Some(w.error.message),
    Err(_) => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn voice_mapping_translates_styles_and_passes_through_raw_voices() {
    assert_eq!(map_voice("native-parisian"), "nova");
    assert_eq!(map_voice("formal-academic"), "onyx");
    assert_eq!(map_voice("shimmer"), "shimmer");
  }

  #[test]
  fn unknown_image_style_falls_back_to_the_default() {
    let enhanced = enhance_image_prompt("A café terrace", "not-a-style");
    assert!(enhanced.contains("photorealistic"));
    assert!(enhanced.starts_with("A café terrace."));
  }
}

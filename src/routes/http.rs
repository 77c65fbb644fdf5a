//! HTTP endpoint handlers. These are thin wrappers that forward to core
//! logic or the in-memory catalog. Each handler is instrumented and logs
//! parameters plus basic result info.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::{header, StatusCode},
  response::IntoResponse,
  Json,
};
use tracing::{info, instrument, warn};

use crate::domain::{Category, DrillDifficulty, Level};
use crate::logic::*;
use crate::protocol::*;
use crate::state::{parse_category_or_default, parse_level_or_default, AppState};

const FEATURES: &[&str] = &[
  "AI Image Generation",
  "Text-to-Speech",
  "Lesson Generation",
  "Conversation Simulation",
  "Grammar Explanations",
  "Vocabulary Flashcards",
  "Pronunciation Scoring",
  "Course Catalog",
];

/// Listing endpoints cap page size so a stray query can't serialize the
/// whole catalog in one response.
const MAX_PAGE: usize = 500;
const MAX_BATCH: usize = 100;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut {
    ok: true,
    platform: "prize2pride",
    version: env!("CARGO_PKG_VERSION"),
    features: FEATURES,
  })
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(state.stats.clone())
}

#[instrument(level = "info", skip(state), fields(level = ?q.level, category = ?q.category))]
pub async fn http_list_courses(
  State(state): State<Arc<AppState>>,
  Query(q): Query<CatalogQuery>,
) -> impl IntoResponse {
  // Unrecognized filter strings are dropped (with a warning), not rejected.
  let level = q.level.as_deref().and_then(|code| {
    let parsed = Level::from_code(code);
    if parsed.is_none() {
      warn!(target: "catalog", %code, "Ignoring unknown level filter");
    }
    parsed
  });
  let category = q.category.as_deref().and_then(|name| {
    let parsed = Category::from_name(name);
    if parsed.is_none() {
      warn!(target: "catalog", %name, "Ignoring unknown category filter");
    }
    parsed
  });

  let offset = q.offset.unwrap_or(0);
  let limit = q.limit.unwrap_or(50).min(MAX_PAGE);
  let (total, courses) = state.catalog_slice(level, category, offset, limit);

  info!(target: "catalog", total, served = courses.len(), offset, "Catalog slice served");
  Json(CourseListOut { total, offset, courses })
}

#[instrument(level = "info", skip(state))]
pub async fn http_generate_course(
  State(state): State<Arc<AppState>>,
  Query(q): Query<GenerateCourseQuery>,
) -> impl IntoResponse {
  let level = parse_level_or_default(q.level.as_deref());
  let category = parse_category_or_default(q.category.as_deref());
  let course = state.generate_one(level, category, q.topic_index.unwrap_or(0)).await;

  info!(target: "catalog", id = %course.id, level = %level.code(), "Course generated on demand");
  Json(course)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_batch(
  State(state): State<Arc<AppState>>,
  Query(q): Query<BatchQuery>,
) -> impl IntoResponse {
  let level = parse_level_or_default(q.level.as_deref());
  let count = q.count.unwrap_or(10).min(MAX_BATCH);
  let courses = state.generate_batch(level, count).await;

  info!(target: "catalog", level = %level.code(), count = courses.len(), "Course batch served");
  Json(courses)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_words(
  State(state): State<Arc<AppState>>,
  Query(q): Query<WordsQuery>,
) -> impl IntoResponse {
  let difficulty = q.difficulty.as_deref().and_then(DrillDifficulty::from_name);
  Json(WordsOut { words: state.words_filtered(difficulty) })
}

#[instrument(level = "info", skip(state, body), fields(target_len = body.target.len()))]
pub async fn http_score_pronunciation(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ScoreIn>,
) -> impl IntoResponse {
  let (score, verdict) = score_pronunciation(&state, &body.transcript, &body.target).await;
  Json(ScoreOut { score, verdict: verdict.to_string() })
}

#[instrument(level = "info", skip(state, body), fields(%body.topic))]
pub async fn http_generate_lesson(
  State(state): State<Arc<AppState>>,
  Json(body): Json<LessonIn>,
) -> impl IntoResponse {
  let level = parse_level_or_default(body.level.as_deref());
  let (content, origin) = do_generate_lesson(&state, &body.topic, level, &body.kind).await;
  Json(LessonOut { topic: body.topic, level: level.code(), kind: body.kind, origin, content })
}

#[instrument(level = "info", skip(state, body), fields(%body.concept))]
pub async fn http_explain_grammar(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GrammarIn>,
) -> impl IntoResponse {
  let level = parse_level_or_default(body.level.as_deref());
  let (content, origin) = do_explain_grammar(&state, &body.concept, level).await;
  Json(GrammarOut { concept: body.concept, level: level.code(), origin, content })
}

#[instrument(level = "info", skip(state, body), fields(%body.scenario, message_len = body.message.len()))]
pub async fn http_converse(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ConversationIn>,
) -> impl IntoResponse {
  let level = parse_level_or_default(body.level.as_deref());
  let (reply, origin) =
    do_converse(&state, &body.scenario, level, &body.history, &body.message).await;
  Json(ConversationOut { scenario: body.scenario, level: level.code(), origin, reply })
}

#[instrument(level = "info", skip(state, body), fields(%body.theme))]
pub async fn http_flashcards(
  State(state): State<Arc<AppState>>,
  Json(body): Json<FlashcardsIn>,
) -> impl IntoResponse {
  let level = parse_level_or_default(body.level.as_deref());
  let count = body.count.unwrap_or(20);
  let (flashcards, origin) = do_flashcards(&state, &body.theme, level, count).await;

  let served = flashcards.as_array().map(|a| a.len()).unwrap_or(0);
  Json(FlashcardsOut { theme: body.theme, level: level.code(), count: served, origin, flashcards })
}

#[instrument(level = "info", skip(state, body), fields(%body.word))]
pub async fn http_pronunciation_guide(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GuideIn>,
) -> impl IntoResponse {
  let (audio_base64, phonetics, tips, origin) = do_pronunciation_guide(&state, &body.word).await;
  Json(GuideOut { word: body.word, audio_base64, phonetics, tips, origin })
}

#[instrument(level = "info", skip(state, body), fields(prompt_len = body.prompt.len()))]
pub async fn http_generate_image(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ImageIn>,
) -> impl IntoResponse {
  let style = body.style.unwrap_or_else(|| "hyper-realistic".into());
  let size = body.size.unwrap_or_else(|| "1024x1024".into());
  let quality = body.quality.unwrap_or_else(|| "hd".into());

  match do_generate_image(&state, &body.prompt, &style, &size, &quality).await {
    Ok(image) => Json(ImageOut {
      url: image.url,
      revised_prompt: image.revised_prompt,
      prompt: image.prompt,
      style,
      size,
    })
    .into_response(),
    Err(e) => (StatusCode::BAD_GATEWAY, Json(ErrorOut { error: e })).into_response(),
  }
}

#[instrument(level = "info", skip(state, body), fields(text_len = body.text.len()))]
pub async fn http_generate_audio(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AudioIn>,
) -> impl IntoResponse {
  let voice = body.voice.unwrap_or_else(|| "nova".into());
  let speed = body.speed.unwrap_or(1.0);

  match do_synthesize_audio(&state, &body.text, &voice, speed).await {
    Ok(bytes) => (
      [
        (header::CONTENT_TYPE, "audio/mpeg"),
        (header::CONTENT_DISPOSITION, "inline; filename=\"speech.mp3\""),
      ],
      bytes,
    )
      .into_response(),
    Err(e) => (StatusCode::BAD_GATEWAY, Json(ErrorOut { error: e })).into_response(),
  }
}

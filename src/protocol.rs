//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStats;
use crate::domain::{CourseRecord, PronunciationWord};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Stats,
    CourseBatch {
        level: String,
        #[serde(default = "default_batch_count")]
        count: usize,
    },
    ScorePronunciation {
        transcript: String,
        target: String,
    },
    ConversationMessage {
        scenario: String,
        level: String,
        message: String,
        #[serde(default)]
        history: Vec<ChatTurn>,
    },
}

fn default_batch_count() -> usize {
    10
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Stats {
        stats: CatalogStats,
    },
    CourseBatch {
        courses: Vec<CourseRecord>,
    },
    PronunciationScore {
        score: u8,
        verdict: String,
    },
    Conversation {
        #[serde(flatten)]
        reply: ConversationReply,
    },
    Error {
        message: String,
    },
}

/// One prior turn of a conversation, as the client stores it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// The conversation partner's structured reply.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationReply {
    pub response: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub corrections: Vec<String>,
    #[serde(rename = "followUp", default)]
    pub follow_up: String,
}

//
// HTTP request/response DTOs
//

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
    pub platform: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
}

/// Catalog listing filters. Unrecognized level/category strings are ignored
/// (logged), not rejected.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub level: Option<String>,
    pub category: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct CourseListOut {
    /// Matching records before pagination.
    pub total: usize,
    pub offset: usize,
    pub courses: Vec<CourseRecord>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateCourseQuery {
    pub level: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "topicIndex")]
    pub topic_index: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    pub level: Option<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct WordsQuery {
    pub difficulty: Option<String>,
}

#[derive(Serialize)]
pub struct WordsOut {
    pub words: Vec<PronunciationWord>,
}

#[derive(Deserialize)]
pub struct ScoreIn {
    pub transcript: String,
    pub target: String,
}
#[derive(Serialize)]
pub struct ScoreOut {
    pub score: u8,
    pub verdict: String,
}

#[derive(Deserialize)]
pub struct LessonIn {
    pub topic: String,
    pub level: Option<String>,
    /// "grammar" | "vocabulary" | "conversation" | "culture"
    #[serde(rename = "type", default = "default_lesson_kind")]
    pub kind: String,
}

fn default_lesson_kind() -> String {
    "vocabulary".into()
}

#[derive(Serialize)]
pub struct LessonOut {
    pub topic: String,
    pub level: &'static str,
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: &'static str,
    pub content: serde_json::Value,
}

#[derive(Deserialize)]
pub struct GrammarIn {
    pub concept: String,
    pub level: Option<String>,
}
#[derive(Serialize)]
pub struct GrammarOut {
    pub concept: String,
    pub level: &'static str,
    pub origin: &'static str,
    pub content: serde_json::Value,
}

#[derive(Deserialize)]
pub struct ConversationIn {
    pub scenario: String,
    pub level: Option<String>,
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}
#[derive(Serialize)]
pub struct ConversationOut {
    pub scenario: String,
    pub level: &'static str,
    pub origin: &'static str,
    #[serde(flatten)]
    pub reply: ConversationReply,
}

#[derive(Deserialize)]
pub struct FlashcardsIn {
    pub theme: String,
    pub level: Option<String>,
    pub count: Option<usize>,
}
#[derive(Serialize)]
pub struct FlashcardsOut {
    pub theme: String,
    pub level: &'static str,
    pub count: usize,
    pub origin: &'static str,
    pub flashcards: serde_json::Value,
}

#[derive(Deserialize)]
pub struct GuideIn {
    pub word: String,
}
#[derive(Serialize)]
pub struct GuideOut {
    pub word: String,
    #[serde(rename = "audioBase64", skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetics: Option<String>,
    pub tips: Vec<String>,
    pub origin: &'static str,
}

#[derive(Deserialize)]
pub struct ImageIn {
    pub prompt: String,
    pub style: Option<String>,
    pub size: Option<String>,
    pub quality: Option<String>,
}
#[derive(Serialize)]
pub struct ImageOut {
    pub url: String,
    #[serde(rename = "revisedPrompt", skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
    pub prompt: String,
    pub style: String,
    pub size: String,
}

#[derive(Deserialize)]
pub struct AudioIn {
    pub text: String,
    pub voice: Option<String>,
    pub speed: Option<f32>,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}

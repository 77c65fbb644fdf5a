//! WebSocket upgrade + message loop. Each client message is parsed as JSON
//! and forwarded to core logic. We reply with a single JSON message per
//! request.

use std::sync::Arc;

use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::logic::*;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::{parse_level_or_default, AppState};

/// Same ceiling as the HTTP batch endpoint.
const MAX_BATCH: usize = 100;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(
  ws: WebSocketUpgrade,
  State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
  info!(target: "prize2pride_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "prize2pride_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target = "prize2pride_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) })
            .to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "prize2pride_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => {
        let _ = socket.send(Message::Pong(payload)).await;
      }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "prize2pride_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Stats => ServerWsMessage::Stats { stats: state.stats.clone() },

    ClientWsMessage::CourseBatch { level, count } => {
      let level = parse_level_or_default(Some(&level));
      let courses = state.generate_batch(level, count.min(MAX_BATCH)).await;
      tracing::info!(target: "catalog", level = %level.code(), count = courses.len(), "WS course batch served");
      ServerWsMessage::CourseBatch { courses }
    }

    ClientWsMessage::ScorePronunciation { transcript, target } => {
      let (score, verdict) = score_pronunciation(state, &transcript, &target).await;
      ServerWsMessage::PronunciationScore { score, verdict: verdict.to_string() }
    }

    ClientWsMessage::ConversationMessage { scenario, level, message, history } => {
      let level = parse_level_or_default(Some(&level));
      let (reply, origin) = do_converse(state, &scenario, level, &history, &message).await;
      tracing::info!(target: "prize2pride_backend", %origin, "WS conversation reply served");
      ServerWsMessage::Conversation { reply }
    }
  }
}

// src/api/http/chatbot.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::error::{required_field_error, ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatbotRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatbotResponse {
    pub success: bool,
    pub reply: String,
    pub timestamp: DateTime<Utc>,
}

const TOO_LONG: &str = "Message is too long";

/// POST /api/chatbot
///
/// A malformed body is treated the same as a missing message. Bodies over the
/// router's size limit and messages over `max_message_chars` get a 413.
pub async fn chatbot_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatbotRequest>, JsonRejection>,
) -> ApiResult<Json<ChatbotResponse>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            debug!("Chatbot body over size limit");
            return Err(ApiError::payload_too_large(TOO_LONG));
        }
        Err(rejection) => {
            debug!("Rejected chatbot body: {}", rejection.body_text());
            return Err(required_field_error("message"));
        }
    };

    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| required_field_error("message"))?;

    if message.chars().count() > state.max_message_chars {
        return Err(ApiError::payload_too_large(TOO_LONG));
    }

    let intent = state.responder.detect(&message);
    info!("Chatbot request answered with intent {}", intent);

    Ok(Json(ChatbotResponse {
        success: true,
        reply: state.responder.knowledge().reply(intent).to_string(),
        timestamp: Utc::now(),
    }))
}

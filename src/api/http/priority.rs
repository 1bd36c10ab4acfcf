// src/api/http/priority.rs
// Priority preview for the report form

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::error::{required_field_error, ApiError, ApiResult};
use crate::issue::{IssueCategory, IssueDraft};
use crate::priority::PriorityLevel;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PriorityRequest {
    pub description: Option<String>,
    pub category: Option<IssueCategory>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PriorityResponse {
    pub priority: PriorityLevel,
    pub label: String,
    pub category: Option<IssueCategory>,
}

/// POST /api/issues/priority
pub async fn priority_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriorityRequest>, JsonRejection>,
) -> ApiResult<Json<PriorityResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected priority body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large("Description is too long")
        } else {
            ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
        }
    })?;

    let description = request
        .description
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| required_field_error("description"))?;

    let mut draft = IssueDraft {
        category: request.category,
        ..IssueDraft::default()
    };
    let priority = draft.set_description(description, &state.classifier);

    info!(
        "Priority preview: {} (category: {})",
        priority,
        draft.category.map_or("none", |c| c.as_str())
    );

    Ok(Json(PriorityResponse {
        priority,
        label: priority.label().to_string(),
        category: draft.category,
    }))
}

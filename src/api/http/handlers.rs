// src/api/http/handlers.rs

use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::api::error::ApiError;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "message": "CitiTrack server is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339()
    }))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("Route not found")
}

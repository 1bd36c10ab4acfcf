// src/api/http/router.rs
// HTTP router composition

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::{chatbot_handler, health_handler, not_found_handler, priority_handler};
use crate::api::error::ApiError;
use crate::state::AppState;

pub const API_VERSION: &str = "1";

/// Request bodies are a single short text field.
const MAX_BODY_BYTES: usize = 64 * 1024;

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chatbot", post(chatbot_handler))
        .route("/issues/priority", post(priority_handler))
}

fn cors_layer(origin: Option<&HeaderValue>) -> CorsLayer {
    let cors = match origin {
        Some(origin) => CorsLayer::new().allow_origin(origin.clone()),
        None => CorsLayer::new().allow_origin(cors::Any),
    };
    cors.allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::internal("Something went wrong").into_response()
}

/// Create the router with all endpoints under `/api`
pub fn create_router(state: AppState) -> Router {
    let version_header = SetResponseHeaderLayer::if_not_present(
        header::HeaderName::from_static("x-api-version"),
        HeaderValue::from_static(API_VERSION),
    );

    let middleware = ServiceBuilder::new()
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(state.cors_origin.as_ref()))
        .layer(version_header);

    Router::new()
        .nest("/api", api_routes())
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware)
        .with_state(state)
}

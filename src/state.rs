// src/state.rs
// Shared state handed to every HTTP handler

use axum::http::HeaderValue;
use std::sync::Arc;

use crate::chatbot::IntentResponder;
use crate::config::CitiTrackConfig;
use crate::error::{CitiTrackError, Result};
use crate::priority::PriorityClassifier;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<PriorityClassifier>,
    pub responder: Arc<IntentResponder>,
    pub max_message_chars: usize,
    /// `None` allows any origin
    pub cors_origin: Option<HeaderValue>,
}

impl AppState {
    pub fn new(
        classifier: Arc<PriorityClassifier>,
        responder: Arc<IntentResponder>,
        config: &CitiTrackConfig,
    ) -> Result<Self> {
        let cors_origin = match config.cors_origin.trim() {
            "*" => None,
            origin => Some(HeaderValue::from_str(origin).map_err(|_| {
                CitiTrackError::config(format!("invalid CORS_ORIGIN '{origin}'"))
            })?),
        };

        Ok(Self {
            classifier,
            responder,
            max_message_chars: config.max_message_chars,
            cors_origin,
        })
    }

    /// State over the built-in rule tables.
    pub fn from_config(config: &CitiTrackConfig) -> Result<Self> {
        let classifier = PriorityClassifier::new(
            crate::priority::default_tiers(),
            crate::priority::PriorityLevel::Low,
        )?;
        let responder = IntentResponder::try_default()?;
        Self::new(Arc::new(classifier), Arc::new(responder), config)
    }
}

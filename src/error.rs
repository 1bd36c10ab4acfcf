// src/error.rs
// Library error type

use thiserror::Error;

/// Errors raised while building rule tables or loading configuration.
///
/// The classifiers themselves are total over any input string and never
/// return these; they only surface when substituted tables are compiled or
/// the service is configured.
#[derive(Debug, Error)]
pub enum CitiTrackError {
    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Empty keyword in rule '{0}'")]
    EmptyKeyword(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CitiTrackError {
    pub fn config(msg: impl Into<String>) -> Self {
        CitiTrackError::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CitiTrackError>;

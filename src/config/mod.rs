// src/config/mod.rs
// Service configuration loaded from the environment (and .env)

use once_cell::sync::Lazy;
use std::str::FromStr;

use crate::error::{CitiTrackError, Result};

#[derive(Debug, Clone)]
pub struct CitiTrackConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── CORS ("*" allows any origin)
    pub cors_origin: String,

    // ── Chatbot
    pub max_message_chars: usize,

    // ── Logging
    pub log_level: String,
}

impl Default for CitiTrackConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_origin: "*".to_string(),
            max_message_chars: 2000,
            log_level: "info".to_string(),
        }
    }
}

// Values may carry trailing comments and whitespace.
fn env_var_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    // Logging isn't up yet when config loads.
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        None => default,
    }
}

impl CitiTrackConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key -> value source; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: env_var_or(&lookup, "CITITRACK_HOST", defaults.host),
            port: env_var_or(&lookup, "PORT", defaults.port),
            cors_origin: env_var_or(&lookup, "CORS_ORIGIN", defaults.cors_origin),
            max_message_chars: env_var_or(&lookup, "CHATBOT_MAX_MESSAGE_CHARS", defaults.max_message_chars),
            log_level: env_var_or(&lookup, "LOG_LEVEL", defaults.log_level),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tracing_level(&self) -> Result<tracing::Level> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|_| CitiTrackError::config(format!("unknown LOG_LEVEL '{}'", self.log_level)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(CitiTrackError::config("CITITRACK_HOST must not be empty"));
        }
        if self.max_message_chars == 0 {
            return Err(CitiTrackError::config("CHATBOT_MAX_MESSAGE_CHARS must be positive"));
        }
        self.tracing_level()?;
        Ok(())
    }
}

pub static CONFIG: Lazy<CitiTrackConfig> = Lazy::new(CitiTrackConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = CitiTrackConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.tracing_level().unwrap(), tracing::Level::INFO);
        assert!(config.validate().is_ok());
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_env_var_or_strips_comments() {
        let lookup = lookup_from(&[("PORT", "8080 # local")]);
        assert_eq!(env_var_or(&lookup, "PORT", 1u16), 8080);
    }

    #[test]
    fn test_env_var_or_falls_back_on_parse_error() {
        let lookup = lookup_from(&[("CHATBOT_MAX_MESSAGE_CHARS", "lots")]);
        assert_eq!(env_var_or(&lookup, "CHATBOT_MAX_MESSAGE_CHARS", 7usize), 7);
        assert_eq!(env_var_or(&lookup, "MISSING", 3usize), 3);
    }

    #[test]
    fn test_from_lookup_overrides_defaults() {
        let config = CitiTrackConfig::from_lookup(lookup_from(&[
            ("CITITRACK_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGIN", "http://localhost:3000"),
            ("LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert_eq!(config.tracing_level().unwrap(), tracing::Level::DEBUG);
        assert_eq!(config.max_message_chars, 2000);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = CitiTrackConfig {
            log_level: "chatty".to_string(),
            ..CitiTrackConfig::default()
        };
        assert!(matches!(config.validate(), Err(CitiTrackError::Config(_))));

        let config = CitiTrackConfig {
            max_message_chars: 0,
            ..CitiTrackConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

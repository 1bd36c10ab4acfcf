//! Regex and whole-message predicates

use regex::Regex;

use super::Predicate;
use crate::error::{CitiTrackError, Result};

/// A compiled regex, optionally vetoed by a second regex.
///
/// The veto lets a broad rule step aside for a more specific one further
/// down the list without reordering the table.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    unless: Option<Regex>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: compile(pattern)?,
            unless: None,
        })
    }

    /// Reject any text that also matches `pattern`.
    pub fn unless(mut self, pattern: &str) -> Result<Self> {
        self.unless = Some(compile(pattern)?);
        Ok(self)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn exclusion(&self) -> Option<&str> {
        self.unless.as_ref().map(Regex::as_str)
    }
}

impl Predicate for Pattern {
    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text) && !self.unless.as_ref().is_some_and(|veto| veto.is_match(text))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| CitiTrackError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Matches only when the whole text equals one of the phrases.
#[derive(Debug, Clone)]
pub struct ExactPhrase {
    phrases: Vec<String>,
}

impl ExactPhrase {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl Predicate for ExactPhrase {
    fn matches(&self, text: &str) -> bool {
        self.phrases.iter().any(|p| p == text)
    }
}

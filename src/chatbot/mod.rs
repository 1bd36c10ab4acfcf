//! Help-desk chatbot
//!
//! Rule-based responder for questions about using CitiTrack. A message is
//! normalized (trimmed, lower-cased), matched against an ordered intent
//! table and answered with the canned reply for the first intent that fits.
//! Nothing is sent to an external model and no state is kept between calls.

pub mod intent;
pub mod knowledge;
pub mod patterns;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::Result;
use crate::rules::RuleSet;

pub use intent::Intent;
pub use knowledge::KnowledgeBase;

#[derive(Debug)]
pub struct IntentResponder {
    rules: RuleSet<Intent>,
    knowledge: KnowledgeBase,
}

static BUILTIN: Lazy<IntentResponder> = Lazy::new(|| {
    let rules = patterns::default_rules().expect("valid regex");
    IntentResponder::new(rules, KnowledgeBase::builtin())
});

impl IntentResponder {
    pub fn new(rules: RuleSet<Intent>, knowledge: KnowledgeBase) -> Self {
        Self { rules, knowledge }
    }

    /// Build from the built-in table, surfacing pattern errors.
    pub fn try_default() -> Result<Self> {
        Ok(Self::new(patterns::default_rules()?, KnowledgeBase::builtin()))
    }

    /// Process-wide responder over the built-in tables.
    pub fn builtin() -> &'static IntentResponder {
        &BUILTIN
    }

    pub fn detect(&self, message: &str) -> Intent {
        let text = normalize(message);
        let intent = *self.rules.evaluate(&text);
        debug!("Chat intent: {}", intent);
        intent
    }

    pub fn respond(&self, message: &str) -> &str {
        self.knowledge.reply(self.detect(message))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}

fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Answer with the built-in tables.
pub fn respond(message: &str) -> &'static str {
    IntentResponder::builtin().respond(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ExactPhrase;

    fn detect(message: &str) -> Intent {
        IntentResponder::builtin().detect(message)
    }

    #[test]
    fn test_greeting() {
        assert_eq!(detect("Hello"), Intent::Greeting);
        assert_eq!(detect("  good morning!! "), Intent::Greeting);
        assert_eq!(respond("hi"), knowledge::builtin_reply(Intent::Greeting));
    }

    #[test]
    fn test_greeting_must_be_whole_message() {
        assert_ne!(detect("hello, where is the map?"), Intent::Greeting);
        assert_eq!(detect("hello, where is the map?"), Intent::Gps);
    }

    #[test]
    fn test_farewell() {
        assert_eq!(detect("Thank you!"), Intent::Farewell);
        assert_eq!(detect("bye"), Intent::Farewell);
    }

    #[test]
    fn test_help_and_default_match() {
        assert_eq!(detect("help"), Intent::Help);
        assert_eq!(detect("HELP?"), Intent::Help);
        assert_eq!(detect("asdkjasd"), Intent::Default);
        assert_eq!(respond("asdkjasd"), respond("help"));
    }

    #[test]
    fn test_tracking() {
        assert_eq!(detect("track my report"), Intent::Tracking);
        assert_eq!(detect("what is the status of my pothole?"), Intent::Tracking);
    }

    #[test]
    fn test_tracking_steps_aside_for_new_reports() {
        assert_eq!(
            detect("how do i track and report a new issue"),
            Intent::HowToReport
        );
        assert_eq!(detect("check how to submit an issue"), Intent::HowToReport);
    }

    #[test]
    fn test_how_to_report() {
        assert_eq!(detect("how do I report an issue"), Intent::HowToReport);
        assert_eq!(
            respond("How do I report an issue"),
            knowledge::builtin_reply(Intent::HowToReport)
        );
    }

    #[test]
    fn test_about() {
        assert_eq!(detect("What is CitiTrack?"), Intent::About);
        assert_eq!(detect("tell me about this system"), Intent::About);
    }

    #[test]
    fn test_account_intents() {
        assert_eq!(detect("how do I sign up"), Intent::SignUp);
        assert_eq!(detect("I want to create an account"), Intent::SignUp);
        assert_eq!(detect("I forgot password"), Intent::Login);
        assert_eq!(detect("where are account settings"), Intent::Profile);
    }

    #[test]
    fn test_feature_intents() {
        assert_eq!(detect("can i report streetlights"), Intent::WhatCanReport);
        assert_eq!(detect("how can I get started with cititrack"), Intent::HowToUse);
        assert_eq!(detect("does it use gps"), Intent::Gps);
        assert_eq!(detect("can I attach a picture"), Intent::Photo);
        assert_eq!(detect("notify me please"), Intent::Notifications);
        assert_eq!(detect("is there transparency"), Intent::Community);
        assert_eq!(detect("there is an urgent problem"), Intent::Emergency);
        assert_eq!(detect("list every feature"), Intent::Features);
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        assert_eq!(detect("ñmap"), Intent::Gps);
        assert_eq!(detect("¿status?"), Intent::Tracking);
        assert_ne!(detect("bitmap"), Intent::Gps);
    }

    #[test]
    fn test_emergency_reply_has_911() {
        assert!(respond("this is an emergency").contains("911"));
    }

    #[test]
    fn test_empty_message_is_default() {
        assert_eq!(detect(""), Intent::Default);
        assert_eq!(detect("   "), Intent::Default);
    }

    #[test]
    fn test_idempotent() {
        let message = "How do I upload a photo?";
        assert_eq!(respond(message), respond(message));
    }

    #[test]
    fn test_substituted_tables() {
        let rules = RuleSet::new(Intent::Default).rule(
            "greeting",
            ExactPhrase::new(["kumusta"]),
            Intent::Greeting,
        );
        let kb = KnowledgeBase::new("?").with_reply(Intent::Greeting, "Maayong adlaw!");
        let responder = IntentResponder::new(rules, kb);

        assert_eq!(responder.respond("Kumusta"), "Maayong adlaw!");
        assert_eq!(responder.respond("hello"), "?");
    }
}

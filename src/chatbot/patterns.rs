//! Built-in intent matching table
//!
//! Patterns run against the trimmed, lower-cased message. Order matters:
//! greetings and farewells are whole-message matches checked first, and
//! tracking is checked before the reporting instructions but steps aside for
//! "report a new issue" phrasing.
//!
//! Word boundaries are ASCII-only (`(?-u:\b)`): letters such as `ñ` count as
//! separators, so "ñmap" still mentions the map.

use super::intent::Intent;
use crate::error::Result;
use crate::rules::{ExactPhrase, Pattern, RuleSet};

/// How a single intent is recognized.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// The whole message equals one of the phrases.
    Exact(&'static [&'static str]),
    /// Regex search, optionally vetoed by a second regex.
    Regex {
        pattern: &'static str,
        unless: Option<&'static str>,
    },
}

const fn re(pattern: &'static str) -> Matcher {
    Matcher::Regex { pattern, unless: None }
}

/// Phrasing that asks to file a new report rather than follow an old one.
pub const NEW_REPORT_PATTERN: &str = r"(?-u:\b)(report|submit|file|make|create).{0,20}(new|issue)(?-u:\b)";

pub const INTENT_TABLE: &[(Intent, Matcher)] = &[
    (
        Intent::Greeting,
        re(r"^(hello|hi|hey|greetings|good morning|good afternoon|good evening)[\s!.?]*$"),
    ),
    (
        Intent::Farewell,
        re(r"^(bye|goodbye|exit|see you|farewell|thanks|thank you)[\s!.?]*$"),
    ),
    (Intent::Help, Matcher::Exact(&["help", "help?"])),
    (
        Intent::Tracking,
        Matcher::Regex {
            pattern: r"(?-u:\b)(track|status|check|progress|follow|my report|monitor)(?-u:\b)",
            unless: Some(NEW_REPORT_PATTERN),
        },
    ),
    (
        Intent::About,
        re(r"^(what is|what's|tell me about|explain|about|purpose).{0,30}(cititrack|this system|the system|the platform)?[\s!.?]*$"),
    ),
    (
        Intent::HowToReport,
        re(r"(?-u:\b)(how|what).{0,25}(report|submit|file|make|create).{0,25}(issue|problem|report)(?-u:\b)"),
    ),
    (
        Intent::SignUp,
        re(r"(?-u:\b)(sign up|register|create.*account|how.*join|new.*account)(?-u:\b)"),
    ),
    (
        Intent::Login,
        re(r"(?-u:\b)(login|log in|sign in|password reset|forgot password)(?-u:\b)"),
    ),
    (
        Intent::Profile,
        re(r"(?-u:\b)(profile|update profile|account settings|manage account|change password)(?-u:\b)"),
    ),
    (
        Intent::WhatCanReport,
        re(r"(?-u:\b)(what.{0,15}can|what.{0,15}type|issue type|report what|can i report)(?-u:\b)"),
    ),
    (
        Intent::HowToUse,
        re(r"(?-u:\b)(how|how to).{0,20}(use|start|begin|get started).{0,20}cititrack(?-u:\b)"),
    ),
    (Intent::Gps, re(r"(?-u:\b)(gps|map|location|coordinates|marker|pin)(?-u:\b)")),
    (Intent::Photo, re(r"(?-u:\b)(photo|image|upload|picture|attach)(?-u:\b)")),
    (
        Intent::Notifications,
        re(r"(?-u:\b)(notification|alert|update|get notified|stay informed|notify me)(?-u:\b)"),
    ),
    (
        Intent::Community,
        re(r"(?-u:\b)(community|transparency|how.*help|benefit|improve|helps city)(?-u:\b)"),
    ),
    (
        Intent::Emergency,
        re(r"(?-u:\b)(urgent|emergency|critical|danger|hazard|life threat)(?-u:\b)"),
    ),
    (
        Intent::Features,
        re(r"(?-u:\b)(feature|features|what can you|capability|tool)(?-u:\b)"),
    ),
];

/// Compile a matching table into a first-match-wins rule set.
pub fn compile_table(table: &[(Intent, Matcher)], fallback: Intent) -> Result<RuleSet<Intent>> {
    let mut rules = RuleSet::new(fallback);

    for &(intent, matcher) in table {
        rules = match matcher {
            Matcher::Exact(phrases) => {
                rules.rule(intent.as_str(), ExactPhrase::new(phrases.iter().copied()), intent)
            }
            Matcher::Regex { pattern, unless } => {
                let mut compiled = Pattern::new(pattern)?;
                if let Some(veto) = unless {
                    compiled = compiled.unless(veto)?;
                }
                rules.rule(intent.as_str(), compiled, intent)
            }
        };
    }

    Ok(rules)
}

pub fn default_rules() -> Result<RuleSet<Intent>> {
    compile_table(INTENT_TABLE, Intent::Default)
}

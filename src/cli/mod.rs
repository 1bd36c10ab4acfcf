//! Command-line interface
//!
//! `serve` runs the HTTP service; the other subcommands run the rule engines
//! once and print the result.

use clap::{Parser, Subcommand};
use std::fmt::Write;

use crate::chatbot::IntentResponder;
use crate::priority::PriorityClassifier;

#[derive(Parser, Debug)]
#[command(name = "cititrack")]
#[command(about = "Priority classifier and help-desk responder for CitiTrack")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service (default)
    Serve {
        /// Address to bind (overrides CITITRACK_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the priority level for an issue description
    Classify {
        /// Issue description
        text: String,
    },

    /// Print the chatbot reply for a message
    Ask {
        /// Chat message
        message: String,

        /// Also print the matched intent
        #[arg(long)]
        show_intent: bool,
    },

    /// Print the priority keyword tables and duplicate keywords
    Rules,
}

pub fn classify_output(classifier: &PriorityClassifier, text: &str) -> String {
    classifier.classify(text).label().to_string()
}

pub fn ask_output(responder: &IntentResponder, message: &str, show_intent: bool) -> String {
    let intent = responder.detect(message);
    let reply = responder.knowledge().reply(intent);
    if show_intent {
        format!("[{intent}]\n{reply}")
    } else {
        reply.to_string()
    }
}

pub fn rules_output(classifier: &PriorityClassifier) -> String {
    let mut out = String::new();

    for tier in classifier.tiers() {
        let _ = writeln!(out, "{} ({} keywords)", tier.level, tier.keywords.len());
        let _ = writeln!(out, "  {}", tier.keywords.join(", "));
    }
    let _ = writeln!(out, "{} (default)", classifier.fallback());

    let shadowed = classifier.shadowed_keywords();
    if !shadowed.is_empty() {
        let _ = writeln!(out, "\nDuplicate keywords (never decide their later tier):");
        for s in shadowed {
            let _ = writeln!(out, "  '{}' in {} is already {}", s.keyword, s.listed_in, s.claimed_by);
        }
    }

    out
}

//! # CitiTrack
//!
//! Rule engines behind CitiTrack's infrastructure issue reporting:
//!
//! - [`priority`]: assigns Low/Medium/High/Critical to an issue description
//! - [`chatbot`]: answers help-desk questions with canned replies
//!
//! Both are deterministic, stateless and safe to share across threads. The
//! [`api`] module serves them over HTTP.

pub mod api;
pub mod chatbot;
pub mod cli;
pub mod config;
pub mod error;
pub mod issue;
pub mod priority;
pub mod rules;
pub mod state;

pub use chatbot::{Intent, IntentResponder};
pub use error::{CitiTrackError, Result};
pub use priority::{PriorityClassifier, PriorityLevel};

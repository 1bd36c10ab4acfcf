// src/api/http/mod.rs

mod chatbot;
mod handlers;
mod priority;
mod router;

pub use chatbot::{ChatbotRequest, ChatbotResponse, chatbot_handler};
pub use handlers::{health_handler, not_found_handler};
pub use priority::{PriorityRequest, PriorityResponse, priority_handler};
pub use router::{API_VERSION, create_router};

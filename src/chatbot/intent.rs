//! Help-desk intents

use serde::{Deserialize, Serialize};

/// What a chat message is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Farewell,
    Help,
    Tracking,
    About,
    HowToReport,
    SignUp,
    Login,
    Profile,
    WhatCanReport,
    HowToUse,
    Gps,
    Photo,
    Notifications,
    Community,
    Emergency,
    Features,
    /// Nothing matched
    Default,
}

impl Intent {
    /// Every intent, in matching order.
    pub const ALL: [Intent; 18] = [
        Intent::Greeting,
        Intent::Farewell,
        Intent::Help,
        Intent::Tracking,
        Intent::About,
        Intent::HowToReport,
        Intent::SignUp,
        Intent::Login,
        Intent::Profile,
        Intent::WhatCanReport,
        Intent::HowToUse,
        Intent::Gps,
        Intent::Photo,
        Intent::Notifications,
        Intent::Community,
        Intent::Emergency,
        Intent::Features,
        Intent::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
            Intent::Help => "help",
            Intent::Tracking => "tracking",
            Intent::About => "about",
            Intent::HowToReport => "how_to_report",
            Intent::SignUp => "sign_up",
            Intent::Login => "login",
            Intent::Profile => "profile",
            Intent::WhatCanReport => "what_can_report",
            Intent::HowToUse => "how_to_use",
            Intent::Gps => "gps",
            Intent::Photo => "photo",
            Intent::Notifications => "notifications",
            Intent::Community => "community",
            Intent::Emergency => "emergency",
            Intent::Features => "features",
            Intent::Default => "default",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// src/chatbot/knowledge.rs
// Canned help-desk replies, one per intent

use std::collections::HashMap;

use super::intent::Intent;

/// Menu shown for "help" and for anything the rules don't recognize.
pub const MENU_REPLY: &str = "I'm here to help! I can help you with:\n\n• How to use CitiTrack\n• How to report an issue\n• How to track your reports\n• Account and login help\n• Sign up for CitiTrack\n• Features (GPS, photos, notifications)\n• What issues can be reported\n• How CitiTrack helps your community\n\nJust ask me anything about CitiTrack!";

const GREETING_REPLY: &str = "Hello! Welcome to CitiTrack. I'm here to help you with any questions about our infrastructure reporting system. What would you like to know?";

const FAREWELL_REPLY: &str = "Thank you for using CitiTrack! We hope you'll report any infrastructure issues you encounter. Have a great day!";

const TRACKING_REPLY: &str = "CitiTrack provides real-time tracking:\n• View all your reported issues in your dashboard\n• Check the current status of each report\n• Receive notifications when officials work on your issues\n• See resolution updates as they happen\n\nTransparency is core to our system!";

const ABOUT_REPLY: &str = "CitiTrack is a comprehensive web-based platform for Mati City that allows residents and government agencies to report, monitor, and track public infrastructure issues in real-time.\n\nOur mission is to improve community engagement and accelerate infrastructure maintenance through centralized reporting and transparent tracking. Every report you submit helps make Mati City's infrastructure better!";

const HOW_TO_REPORT_REPLY: &str = "To report an issue:\n\n1. Click on \"Report Issue\" page\n2. Select issue type (road, drainage, streetlight, etc.)\n3. Click map to mark location\n4. Add description of the problem\n5. Upload photos (optional)\n6. Click \"Submit Report\"\n\nThat's it! Authorities will review it right away.";

const SIGN_UP_REPLY: &str = "Signing up for CitiTrack is easy:\n1. Click the \"Sign Up\" button on the home page\n2. Enter your name, email, and create a password\n3. Verify your email address\n4. You're ready to start reporting!\n\nYou'll immediately be able to submit infrastructure issues and track their progress.";

const LOGIN_REPLY: &str = "To access your CitiTrack account:\n1. Click \"Login\" on the home page\n2. Enter your registered email and password\n3. You'll be directed to your dashboard\n\nIf you forgot your password, click \"Forgot Password\" and follow the email instructions to reset it securely.";

const PROFILE_REPLY: &str = "You can manage your account in Settings:\n• Update your personal information\n• Change your password\n• Manage notification preferences\n• View your reporting history\n• Track all your submitted issues\n\nKeeping your profile updated helps ensure important notifications reach you!";

const WHAT_CAN_REPORT_REPLY: &str = "You can report these infrastructure issues:\n• Road damage and potholes\n• Drainage and flooding problems\n• Broken streetlights\n• Public facility maintenance issues\n• Water system problems\n• Debris and litter accumulation\n• Traffic and safety concerns\n• Other infrastructure concerns\n\nJust describe the issue with location and photos on the Report Issue page.";

const HOW_TO_USE_REPLY: &str = "Here's how to use CitiTrack:\n\n1. Sign up or log in to your account\n2. Navigate to \"Report Issue\" page\n3. Select the issue type from the dropdown menu\n4. Click on the map to mark the exact location\n5. Provide a detailed description\n6. Upload photos (optional)\n7. Click \"Submit Report\"\n8. Track your issue status in real-time\n\nIt only takes a few minutes!";

const GPS_REPLY: &str = "Our GPS Mapping feature is powerful:\n• Pinpoint the exact location of infrastructure issues on an interactive map\n• Use your device's GPS for automatic location detection\n• Click on the map to adjust the location\n\nAccurate location data helps officials respond faster to your reports!";

const PHOTO_REPLY: &str = "Photo uploads help your reports:\n• Provides visual evidence of the problem\n• Helps officials understand the severity\n• Speeds up response and resolution time\n• Include clear, well-lit photos from multiple angles\n\nWhile optional, photos significantly increase resolution chances!";

const NOTIFICATIONS_REPLY: &str = "Enable notifications in your account settings to stay updated on:\n• New comments on your reports\n• Status changes (acknowledged, in progress, resolved)\n• Messages from government agencies\n• Infrastructure issues near you\n\nThis helps you stay informed throughout the resolution process.";

const COMMUNITY_REPLY: &str = "CitiTrack helps your community:\n• Faster issue resolution through centralized reporting\n• Real-time tracking of infrastructure problems\n• Better communication between citizens and government\n• Data-driven infrastructure management\n• Community engagement and transparency\n• Reduced response time to public concerns\n\nEvery report you submit makes Mati City better!";

const EMERGENCY_REPLY: &str = "For life-threatening emergencies, please call emergency services (911) immediately!\n\nCitiTrack handles non-emergency infrastructure issues. For urgent infrastructure hazards:\n1. Report it on CitiTrack for documentation\n2. Contact local authorities directly for immediate response\n3. Take photos if it's safe\n\nYour safety is the priority!";

const FEATURES_REPLY: &str = "CitiTrack includes these features:\n\n• GPS Mapping - Pinpoint issue locations\n• Photo Upload - Provide visual evidence\n• Real-time Tracking - Monitor progress\n• Notifications - Stay updated\n• Dashboard - View your reports\n• Community Reports - See other issues\n\nWhich feature would you like to know more about?";

/// Built-in reply for an intent.
pub fn builtin_reply(intent: Intent) -> &'static str {
    match intent {
        Intent::Greeting => GREETING_REPLY,
        Intent::Farewell => FAREWELL_REPLY,
        Intent::Help | Intent::Default => MENU_REPLY,
        Intent::Tracking => TRACKING_REPLY,
        Intent::About => ABOUT_REPLY,
        Intent::HowToReport => HOW_TO_REPORT_REPLY,
        Intent::SignUp => SIGN_UP_REPLY,
        Intent::Login => LOGIN_REPLY,
        Intent::Profile => PROFILE_REPLY,
        Intent::WhatCanReport => WHAT_CAN_REPORT_REPLY,
        Intent::HowToUse => HOW_TO_USE_REPLY,
        Intent::Gps => GPS_REPLY,
        Intent::Photo => PHOTO_REPLY,
        Intent::Notifications => NOTIFICATIONS_REPLY,
        Intent::Community => COMMUNITY_REPLY,
        Intent::Emergency => EMERGENCY_REPLY,
        Intent::Features => FEATURES_REPLY,
    }
}

/// Read-only intent -> reply table.
///
/// Intents without an entry answer with the fallback reply.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    replies: HashMap<Intent, String>,
    fallback: String,
}

impl KnowledgeBase {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            replies: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn with_reply(mut self, intent: Intent, reply: impl Into<String>) -> Self {
        self.replies.insert(intent, reply.into());
        self
    }

    pub fn builtin() -> Self {
        Intent::ALL
            .into_iter()
            .fold(Self::new(MENU_REPLY), |kb, intent| kb.with_reply(intent, builtin_reply(intent)))
    }

    pub fn reply(&self, intent: Intent) -> &str {
        self.replies
            .get(&intent)
            .map(String::as_str)
            .unwrap_or(self.fallback.as_str())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

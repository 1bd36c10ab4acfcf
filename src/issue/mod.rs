//! Issue report vocabulary
//!
//! Persistence lives elsewhere; these types only describe what a report
//! carries and how the report form assigns its priority.

use serde::{Deserialize, Serialize};

use crate::priority::{PriorityClassifier, PriorityLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    RoadDamage,
    Drainage,
    Streetlight,
    PublicFacility,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::RoadDamage => "road_damage",
            IssueCategory::Drainage => "drainage",
            IssueCategory::Streetlight => "streetlight",
            IssueCategory::PublicFacility => "public_facility",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::RoadDamage => "Road Damage",
            IssueCategory::Drainage => "Drainage Issues",
            IssueCategory::Streetlight => "Streetlight Problems",
            IssueCategory::PublicFacility => "Public Facility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    #[default]
    Submitted,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// An issue report being filled in on the report form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub category: Option<IssueCategory>,
    pub location: Option<Location>,
    pub priority: PriorityLevel,
}

impl IssueDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the description and re-run the classifier.
    ///
    /// A blank description keeps whatever priority the draft already had.
    pub fn set_description(&mut self, description: impl Into<String>, classifier: &PriorityClassifier) -> PriorityLevel {
        self.description = description.into();
        if !self.description.trim().is_empty() {
            self.priority = classifier.classify(&self.description);
        }
        self.priority
    }
}

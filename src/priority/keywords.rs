//! Built-in priority keyword tables
//!
//! Checked in this order: Critical, High, Medium. Anything else is Low.

/// Life-threatening conditions or immediate danger.
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "collapsed", "collapse", "danger", "dangerous", "life threatening", "life-threatening",
    "death", "accident", "injured", "injury", "severe", "emergency", "immediate",
    "blocking traffic", "hazard", "hazardous", "fallen tree", "power line",
    "gas leak", "explosion", "fire", "flooding", "landslide", "unstable",
];

/// Significant damage or health risks.
///
/// "flooding" and "dangerous" are also Critical keywords, so they can never
/// decide a High outcome. They stay in the table and are reported by
/// `PriorityClassifier::shadowed_keywords`.
pub const HIGH_KEYWORDS: &[&str] = &[
    "broken", "damage", "damaged", "pothole", "crack", "deep", "large hole",
    "water leak", "sewage", "sewerage", "flooding", "blocked", "congestion",
    "debris", "garbage", "broken light", "broken road", "dangerous", "risk",
];

/// Noticeable but not urgent.
pub const MEDIUM_KEYWORDS: &[&str] = &[
    "small hole", "minor crack", "loose", "worn", "need repair", "repair needed",
    "maintenance", "minor damage", "slight damage", "uneven", "dirty", "broken pipe",
];

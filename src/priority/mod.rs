//! Priority classification for issue descriptions
//!
//! Maps a free-text description to a [`PriorityLevel`] by testing keyword
//! tiers in order (Critical, High, Medium) and falling back to Low.

pub mod keywords;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::{KeywordSet, RuleSet};

pub use keywords::{CRITICAL_KEYWORDS, HIGH_KEYWORDS, MEDIUM_KEYWORDS};

/// Priority attached to an issue report.
///
/// New issue records start at Medium until a description is classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    pub const ALL: [PriorityLevel; 4] = [
        PriorityLevel::Low,
        PriorityLevel::Medium,
        PriorityLevel::High,
        PriorityLevel::Critical,
    ];

    /// Wire name, as stored on issue records.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Low => "low",
            PriorityLevel::Medium => "medium",
            PriorityLevel::High => "high",
            PriorityLevel::Critical => "critical",
        }
    }

    /// Display name, as shown on the report form.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::Low => "Low",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::High => "High",
            PriorityLevel::Critical => "Critical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(PriorityLevel::Low),
            "medium" => Some(PriorityLevel::Medium),
            "high" => Some(PriorityLevel::High),
            "critical" => Some(PriorityLevel::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One tier of the priority table: every keyword in it selects `level`.
#[derive(Debug, Clone)]
pub struct KeywordTier {
    pub level: PriorityLevel,
    pub keywords: Vec<String>,
}

impl KeywordTier {
    pub fn new<I, S>(level: PriorityLevel, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            level,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// The built-in Critical/High/Medium tiers, in evaluation order.
pub fn default_tiers() -> Vec<KeywordTier> {
    vec![
        KeywordTier::new(PriorityLevel::Critical, CRITICAL_KEYWORDS.iter().copied()),
        KeywordTier::new(PriorityLevel::High, HIGH_KEYWORDS.iter().copied()),
        KeywordTier::new(PriorityLevel::Medium, MEDIUM_KEYWORDS.iter().copied()),
    ]
}

/// A keyword listed in a tier that an earlier tier already claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedKeyword {
    pub keyword: String,
    /// Tier whose entry can never decide an outcome.
    pub listed_in: PriorityLevel,
    /// Earlier tier that always wins for this keyword.
    pub claimed_by: PriorityLevel,
}

/// Keyword-tier classifier. Immutable once built; share it behind an `Arc`.
#[derive(Debug)]
pub struct PriorityClassifier {
    tiers: Vec<KeywordTier>,
    rules: RuleSet<PriorityLevel>,
}

static BUILTIN: Lazy<PriorityClassifier> = Lazy::new(|| {
    PriorityClassifier::new(default_tiers(), PriorityLevel::Low)
        .expect("built-in priority keywords are non-empty")
});

impl PriorityClassifier {
    /// Build a classifier from tiers listed in evaluation order.
    ///
    /// Each non-Critical tier's keywords are qualified by the keywords of
    /// every later tier: an occurrence wholly inside a longer lower-tier
    /// phrase ("crack" inside "minor crack") is left for that tier to decide.
    /// A Critical keyword always counts, whatever phrase it sits in.
    pub fn new(tiers: Vec<KeywordTier>, fallback: PriorityLevel) -> Result<Self> {
        let mut rules = RuleSet::new(fallback);

        for (i, tier) in tiers.iter().enumerate() {
            let set = KeywordSet::new(&tier.keywords)?;
            let set = if tier.level == PriorityLevel::Critical {
                set
            } else {
                set.with_qualifiers(tiers[i + 1..].iter().flat_map(|t| t.keywords.iter()))?
            };
            rules = rules.rule(tier.level.as_str(), set, tier.level);
        }

        Ok(Self { tiers, rules })
    }

    /// Process-wide classifier over the built-in tables.
    pub fn builtin() -> &'static PriorityClassifier {
        &BUILTIN
    }

    /// Classify a description. Total over all input; blank text is Low.
    pub fn classify(&self, description: &str) -> PriorityLevel {
        let text = description.to_lowercase();
        if text.trim().is_empty() {
            return *self.rules.fallback();
        }
        *self.rules.evaluate(&text)
    }

    pub fn tiers(&self) -> &[KeywordTier] {
        &self.tiers
    }

    pub fn fallback(&self) -> PriorityLevel {
        *self.rules.fallback()
    }

    /// Keywords that appear in more than one tier. Only the first listing
    /// ever takes effect; the later ones are dead entries.
    pub fn shadowed_keywords(&self) -> Vec<ShadowedKeyword> {
        let mut shadowed = Vec::new();

        for (i, tier) in self.tiers.iter().enumerate() {
            for keyword in &tier.keywords {
                let keyword = keyword.to_lowercase();
                let earlier = self.tiers[..i]
                    .iter()
                    .find(|t| t.keywords.iter().any(|k| k.to_lowercase() == keyword));

                if let Some(earlier) = earlier {
                    shadowed.push(ShadowedKeyword {
                        keyword,
                        listed_in: tier.level,
                        claimed_by: earlier.level,
                    });
                }
            }
        }

        shadowed
    }
}

/// Classify with the built-in tables.
pub fn classify(description: &str) -> PriorityLevel {
    PriorityClassifier::builtin().classify(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_beats_lower_tiers() {
        assert_eq!(classify("fire and also a small hole"), PriorityLevel::Critical);
        assert_eq!(classify("gas leak near a pothole"), PriorityLevel::Critical);
    }

    #[test]
    fn test_high() {
        assert_eq!(classify("there is a large pothole"), PriorityLevel::High);
        assert_eq!(classify("garbage piling up"), PriorityLevel::High);
    }

    #[test]
    fn test_medium() {
        assert_eq!(classify("minor crack on the sidewalk"), PriorityLevel::Medium);
        assert_eq!(classify("the bench is loose"), PriorityLevel::Medium);
        assert_eq!(classify("needs maintenance"), PriorityLevel::Medium);
    }

    #[test]
    fn test_low_default() {
        assert_eq!(classify("everything looks fine"), PriorityLevel::Low);
        assert_eq!(classify(""), PriorityLevel::Low);
        assert_eq!(classify("   \n\t"), PriorityLevel::Low);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("POTHOLE"), classify("pothole"));
        assert_eq!(classify("Gas Leak"), PriorityLevel::Critical);
    }

    #[test]
    fn test_substring_matching() {
        // "fire" inside "firefighters" still counts
        assert_eq!(classify("firefighters were called"), PriorityLevel::Critical);
        assert_eq!(classify("cracked pavement"), PriorityLevel::High);
    }

    #[test]
    fn test_qualified_phrase_only_shields_its_own_span() {
        assert_eq!(classify("minor crack and a big crack"), PriorityLevel::High);
        assert_eq!(classify("minor damage to the bench"), PriorityLevel::Medium);
    }

    #[test]
    fn test_every_critical_keyword_wins() {
        for keyword in CRITICAL_KEYWORDS {
            for extra in MEDIUM_KEYWORDS.iter().chain(HIGH_KEYWORDS) {
                let text = format!("{keyword} and {extra}");
                assert_eq!(classify(&text), PriorityLevel::Critical, "{text}");
            }
        }
    }

    #[test]
    fn test_shadowed_keywords_flag_duplicates() {
        let shadowed = PriorityClassifier::builtin().shadowed_keywords();
        let names: Vec<&str> = shadowed.iter().map(|s| s.keyword.as_str()).collect();

        assert_eq!(names, vec!["flooding", "dangerous"]);
        assert!(shadowed.iter().all(|s| s.listed_in == PriorityLevel::High
            && s.claimed_by == PriorityLevel::Critical));
    }

    #[test]
    fn test_substituted_tables() {
        let classifier = PriorityClassifier::new(
            vec![KeywordTier::new(PriorityLevel::High, ["sinkhole"])],
            PriorityLevel::Low,
        )
        .unwrap();

        assert_eq!(classifier.classify("a SINKHOLE opened"), PriorityLevel::High);
        assert_eq!(classifier.classify("fire"), PriorityLevel::Low);
        assert!(classifier.shadowed_keywords().is_empty());
    }

    #[test]
    fn test_critical_keyword_is_never_qualified_away() {
        let classifier = PriorityClassifier::new(
            vec![
                KeywordTier::new(PriorityLevel::Critical, ["fire"]),
                KeywordTier::new(PriorityLevel::Medium, ["fireplace"]),
            ],
            PriorityLevel::Low,
        )
        .unwrap();

        assert_eq!(classifier.classify("the fireplace is cracked"), PriorityLevel::Critical);
        assert_eq!(classifier.classify("a fire"), PriorityLevel::Critical);
    }

    #[test]
    fn test_lower_tiers_still_yield_to_longer_phrases() {
        let classifier = PriorityClassifier::new(
            vec![
                KeywordTier::new(PriorityLevel::High, ["leak"]),
                KeywordTier::new(PriorityLevel::Medium, ["leaky faucet"]),
            ],
            PriorityLevel::Low,
        )
        .unwrap();

        assert_eq!(classifier.classify("leaky faucet in the park"), PriorityLevel::Medium);
        assert_eq!(classifier.classify("a leak under the bridge"), PriorityLevel::High);
    }

    #[test]
    fn test_empty_keyword_in_table_is_an_error() {
        let result = PriorityClassifier::new(
            vec![KeywordTier::new(PriorityLevel::High, [""])],
            PriorityLevel::Low,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_level_names() {
        assert_eq!(PriorityLevel::parse("CRITICAL"), Some(PriorityLevel::Critical));
        assert_eq!(PriorityLevel::parse("urgent"), None);
        assert_eq!(PriorityLevel::High.to_string(), "High");
        assert_eq!(serde_json::to_string(&PriorityLevel::Medium).unwrap(), "\"medium\"");
        assert!(PriorityLevel::Critical > PriorityLevel::High);
        assert_eq!(PriorityLevel::default(), PriorityLevel::Medium);
    }

    #[test]
    fn test_idempotent() {
        let text = "Broken streetlight near the school";
        assert_eq!(classify(text), classify(text));
    }
}

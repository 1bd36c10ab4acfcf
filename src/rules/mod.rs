//! First-match-wins rule evaluation
//!
//! Both classifiers are an ordered list of `(predicate, outcome)` pairs with a
//! fallback outcome. The order of the list is the precedence: the first rule
//! whose predicate accepts the input decides the outcome and evaluation stops.
//!
//! ```
//! use cititrack::rules::{KeywordSet, RuleSet};
//!
//! let rules = RuleSet::new("quiet")
//!     .rule("loud", KeywordSet::new(["shout", "yell"]).unwrap(), "loud");
//!
//! assert_eq!(*rules.evaluate("please don't yell"), "loud");
//! assert_eq!(*rules.evaluate("whisper"), "quiet");
//! ```

pub mod keyword;
pub mod pattern;

pub use keyword::KeywordSet;
pub use pattern::{ExactPhrase, Pattern};

/// Something a piece of (already normalized) text either matches or doesn't.
pub trait Predicate: Send + Sync {
    fn matches(&self, text: &str) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, text: &str) -> bool {
        self(text)
    }
}

/// A named predicate paired with the outcome it selects.
pub struct Rule<T> {
    name: String,
    predicate: Box<dyn Predicate>,
    outcome: T,
}

impl<T> Rule<T> {
    pub fn new(name: impl Into<String>, predicate: impl Predicate + 'static, outcome: T) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            outcome,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outcome(&self) -> &T {
        &self.outcome
    }

    pub fn matches(&self, text: &str) -> bool {
        self.predicate.matches(text)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

/// Ordered rules plus the outcome used when none of them match.
#[derive(Debug)]
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
    fallback: T,
}

impl<T> RuleSet<T> {
    pub fn new(fallback: T) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule. Rules added earlier take precedence.
    pub fn rule(mut self, name: impl Into<String>, predicate: impl Predicate + 'static, outcome: T) -> Self {
        self.rules.push(Rule::new(name, predicate, outcome));
        self
    }

    pub fn push(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    /// The first rule accepting `text`, if any.
    pub fn first_match(&self, text: &str) -> Option<&Rule<T>> {
        self.rules.iter().find(|rule| rule.matches(text))
    }

    /// Outcome of the first matching rule, or the fallback.
    pub fn evaluate(&self, text: &str) -> &T {
        self.first_match(text)
            .map(Rule::outcome)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule<T>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

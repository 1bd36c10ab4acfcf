//! Substring keyword sets

use super::Predicate;
use crate::error::{CitiTrackError, Result};

/// Unordered group of substrings; the set matches when any of them occurs.
///
/// Keywords are compared against text that the caller has already
/// lower-cased, so they are stored lower-cased too.
///
/// A set can carry *qualifiers*: longer phrases owned by a lower-precedence
/// rule. A keyword occurrence that sits entirely inside a strictly longer
/// qualifier occurrence does not count, so "minor crack" can qualify away the
/// bare "crack" it contains.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<String>,
    qualifiers: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = normalize(keywords)?;
        Ok(Self {
            keywords,
            qualifiers: Vec::new(),
        })
    }

    /// Phrases that suppress any keyword occurrence they strictly enclose.
    pub fn with_qualifiers<I, S>(mut self, qualifiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.qualifiers = normalize(qualifiers)?;
        Ok(self)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// First keyword with an unqualified occurrence in `text`.
    pub fn find(&self, text: &str) -> Option<&str> {
        if self.qualifiers.is_empty() {
            return self
                .keywords
                .iter()
                .find(|kw| text.contains(kw.as_str()))
                .map(String::as_str);
        }

        let qualified: Vec<(usize, usize)> = self
            .qualifiers
            .iter()
            .flat_map(|q| occurrences(text, q.as_str()))
            .collect();

        self.keywords
            .iter()
            .find(|kw| {
                occurrences(text, kw.as_str()).any(|(start, end)| {
                    !qualified
                        .iter()
                        .any(|&(qs, qe)| qs <= start && end <= qe && qe - qs > end - start)
                })
            })
            .map(String::as_str)
    }
}

impl Predicate for KeywordSet {
    fn matches(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}

fn normalize<I, S>(items: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| {
            let item = item.as_ref();
            if item.trim().is_empty() {
                Err(CitiTrackError::EmptyKeyword(item.to_string()))
            } else {
                Ok(item.to_lowercase())
            }
        })
        .collect()
}

/// Byte spans of every occurrence of `needle`, overlapping ones included.
fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        let pos = from + haystack.get(from..)?.find(needle)?;
        let step = haystack[pos..].chars().next().map_or(1, char::len_utf8);
        from = pos + step;
        Some((pos, pos + needle.len()))
    })
}

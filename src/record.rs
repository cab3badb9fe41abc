//! Article records, author identity, and the crawl's article accumulator.
//!
//! Author identity is deliberately crude: a lower-cased, trimmed string.
//! Two spellings that differ only in case are the same author; initials and
//! diacritics are not reconciled. This mirrors the matching the search
//! service itself performs and is a documented limitation.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MalformedAuthorList;

/// Normalized author identity: lower-cased, surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AuthorName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// One publication discovered through the search service.
///
/// Immutable once retrieved. `authors` keeps the order the service
/// returned; the order carries no meaning beyond pairing. Metadata fields
/// (`title`, `published`, `venue`, `summary`) pass through unmodified.
///
/// On deserialization the `authors` field accepts either a native sequence
/// of names or a serialized textual list such as `['Jane Doe', 'J. Smith']`
/// — older article dumps store it that way. Normalization to `Vec<String>`
/// happens here, once, so every consumer downstream sees a plain sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Source-specific identifier (e.g. "http://arxiv.org/abs/2401.01234v1").
    pub id: String,
    /// Full title.
    #[serde(default)]
    pub title: String,
    /// Author names in the order returned by the search service.
    #[serde(deserialize_with = "deserialize_author_list")]
    pub authors: Vec<String>,
    /// Publication timestamp, when the source supplied one.
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
    /// Journal reference, falling back to the primary category.
    #[serde(default)]
    pub venue: Option<String>,
    /// Abstract text, when present.
    #[serde(default)]
    pub summary: Option<String>,
    /// Source database identifier ("arxiv").
    #[serde(default)]
    pub source: String,
}

impl ArticleRecord {
    /// Case-insensitive co-authorship test: does `author` appear in this
    /// record's author list?
    pub fn has_author(&self, author: &AuthorName) -> bool {
        self.authors.iter().any(|a| AuthorName::new(a) == *author)
    }

    /// Normalized names of everyone on the record.
    pub fn author_names(&self) -> HashSet<AuthorName> {
        self.authors.iter().map(|a| AuthorName::new(a)).collect()
    }
}

/// Parse a serialized author list: a bracketed, comma-separated sequence
/// where items may be quoted with single or double quotes. Quoted items may
/// contain commas ("Doe, Jane"). `[]` is a valid empty list.
pub fn parse_author_list(text: &str) -> Result<Vec<String>, MalformedAuthorList> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| MalformedAuthorList(format!("expected a bracketed list, got {text:?}")))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in inner.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None => match ch {
                '\'' | '"' => quote = Some(ch),
                ',' => finish_name(&mut names, &mut current, text)?,
                _ => current.push(ch),
            },
        }
    }

    if quote.is_some() {
        return Err(MalformedAuthorList(format!(
            "unterminated quote in {text:?}"
        )));
    }
    finish_name(&mut names, &mut current, text)?;
    Ok(names)
}

fn finish_name(
    names: &mut Vec<String>,
    current: &mut String,
    original: &str,
) -> Result<(), MalformedAuthorList> {
    let name = current.trim().to_string();
    current.clear();
    if name.is_empty() {
        return Err(MalformedAuthorList(format!(
            "empty author entry in {original:?}"
        )));
    }
    names.push(name);
    Ok(())
}

fn deserialize_author_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AuthorListVisitor;

    impl<'de> Visitor<'de> for AuthorListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sequence of author names or a serialized author list")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut names = Vec::new();
            while let Some(name) = seq.next_element::<String>()? {
                names.push(name);
            }
            Ok(names)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse_author_list(value).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(AuthorListVisitor)
}

/// Append-only accumulator for every article a crawl discovers.
///
/// Rediscovering the same article through a different co-author appends it
/// again — each author's co-authored subset lands independently, so the set
/// may hold duplicates. Whether those duplicates survive into the graph is
/// a [`crate::graph::builder::DuplicatePolicy`] decision, not this type's.
#[derive(Debug, Default, Clone)]
pub struct ArticleSet {
    records: Vec<ArticleRecord>,
}

impl ArticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append records. Never deduplicates, never removes.
    pub fn append<I: IntoIterator<Item = ArticleRecord>>(&mut self, records: I) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArticleRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }
}

impl From<Vec<ArticleRecord>> for ArticleSet {
    fn from(records: Vec<ArticleRecord>) -> Self {
        Self { records }
    }
}

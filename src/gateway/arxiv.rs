//! ArXiv implementation of the search gateway.
//!
//! Queries the Atom API at `export.arxiv.org/api/query` and parses the
//! returned `<entry>` elements into [`ArticleRecord`]s. One request serves
//! one search; the result cap keeps pages small, so the body is fetched
//! whole and parsed in a single pass.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quick_xml::escape::unescape as quick_unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use reqwest::Client;
use tokio::time::{sleep, Duration};

use crate::config::ArxivSourceConfig;
use crate::error::GatewayError;
use crate::gateway::SearchGateway;
use crate::logger;
use crate::record::ArticleRecord;

/// Gateway to the arXiv Atom search API.
#[derive(Clone, Debug)]
pub struct ArxivGateway {
    client: Client,
    config: ArxivSourceConfig,
}

impl ArxivGateway {
    /// Gateway with default configuration (public arXiv endpoint).
    pub fn new() -> Self {
        Self::with_config(ArxivSourceConfig::default())
    }

    /// Gateway with custom configuration, e.g. a mock server in tests.
    pub fn with_config(config: ArxivSourceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl Default for ArxivGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchGateway for ArxivGateway {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ArticleRecord>, GatewayError> {
        let search_query = format!("all:\"{}\"", query);
        logger::debug(&format!("searching arxiv: {}", search_query));

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("search_query", search_query),
                ("start", "0".to_string()),
                ("max_results", max_results.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let records = parse_feed(&body)?;

        // Polite pause between requests to the public endpoint.
        if self.config.delay_ms > 0 {
            sleep(Duration::from_millis(self.config.delay_ms)).await;
        }

        Ok(records)
    }
}

// Normalize text nodes: strip CDATA markers and unescape XML entities.
fn normalize_text(txt: &str) -> String {
    let s = txt.trim();
    if s.is_empty() {
        return String::new();
    }
    if let Some(inner) = s.strip_prefix("<![CDATA[").and_then(|r| r.strip_suffix("]]>")) {
        return inner.trim().to_string();
    }
    match quick_unescape(s) {
        Ok(cow) => cow.trim().to_string(),
        Err(_) => s.to_string(),
    }
}

// Extract the `term` attribute (possibly namespaced) from a category element.
fn term_attribute(e: &BytesStart) -> Option<String> {
    for att in e.attributes().with_checks(false).flatten() {
        let key = att.key.as_ref();
        if key == b"term" || key.ends_with(b"term") {
            return Some(String::from_utf8_lossy(att.value.as_ref()).to_string());
        }
    }
    None
}

/// Fields accumulated while walking one `<entry>`.
#[derive(Default)]
struct EntryFields {
    id: Option<String>,
    title: Option<String>,
    published: Option<String>,
    journal_ref: Option<String>,
    primary_category: Option<String>,
    summary: Option<String>,
    authors: Vec<String>,
}

impl EntryFields {
    fn finish(self) -> Result<ArticleRecord, GatewayError> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| GatewayError::MalformedFeed("entry missing <id>".to_string()))?;

        let published = match &self.published {
            Some(raw) => Some(
                DateTime::parse_from_rfc3339(raw)
                    .map_err(|e| {
                        GatewayError::MalformedFeed(format!("bad <published> date {raw:?}: {e}"))
                    })?
                    .with_timezone(&Utc),
            ),
            None => None,
        };

        Ok(ArticleRecord {
            id,
            title: self.title.unwrap_or_default(),
            authors: self.authors,
            published,
            // Journal reference takes precedence; primary category is the fallback.
            venue: self.journal_ref.or(self.primary_category),
            summary: self.summary,
            source: "arxiv".to_string(),
        })
    }
}

/// Parse an Atom feed body into article records.
///
/// Feed-level elements (`<feed><title>`, `<feed><id>`, ...) are ignored;
/// only content inside `<entry>` is captured. An unparseable body or an
/// entry without an identifier is a [`GatewayError::MalformedFeed`] — the
/// whole search fails rather than silently dropping records.
pub(crate) fn parse_feed(body: &str) -> Result<Vec<ArticleRecord>, GatewayError> {
    let mut reader = Reader::from_str(body);
    let mut records = Vec::new();
    let mut entry: Option<EntryFields> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = e.local_name();
                if name.as_ref() == b"entry" {
                    entry = Some(EntryFields::default());
                    continue;
                }
                let Some(fields) = entry.as_mut() else {
                    continue;
                };
                match name.as_ref() {
                    b"id" => fields.id = Some(read_text(&mut reader, e)?),
                    b"title" => fields.title = Some(read_text(&mut reader, e)?),
                    b"published" => fields.published = Some(read_text(&mut reader, e)?),
                    b"journal_ref" => fields.journal_ref = Some(read_text(&mut reader, e)?),
                    b"summary" => fields.summary = Some(read_text(&mut reader, e)?),
                    b"name" => {
                        let author = read_text(&mut reader, e)?;
                        fields.authors.push(author);
                    }
                    _ if name.as_ref().ends_with(b"primary_category") => {
                        if let Some(term) = term_attribute(e) {
                            fields.primary_category = Some(term);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                // <arxiv:primary_category term="..."/> arrives as an empty element.
                if let Some(fields) = entry.as_mut() {
                    if e.local_name().as_ref().ends_with(b"primary_category") {
                        if let Some(term) = term_attribute(e) {
                            fields.primary_category = Some(term);
                        }
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                if e.local_name().as_ref() == b"entry" {
                    if let Some(fields) = entry.take() {
                        records.push(fields.finish()?);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(GatewayError::MalformedFeed(e.to_string())),
            _ => {}
        }
    }

    Ok(records)
}

fn read_text(reader: &mut Reader<&[u8]>, e: &BytesStart) -> Result<String, GatewayError> {
    let txt = reader
        .read_text(e.name())
        .map_err(|err| GatewayError::MalformedFeed(err.to_string()))?;
    Ok(normalize_text(&txt))
}

//! Action API request parameters and response parsing.
//!
//! All queries use `formatversion=2`, where `query.pages` is an array and a
//! page that does not exist comes back as `{"title": ..., "missing": true}`.
//! Parsing is kept apart from transport so it can be tested on recorded
//! responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use transattr_core::RevisionRecord;

use crate::FetchError;

pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// How many recent revisions to read summaries from.
pub const DEFAULT_REVISION_LIMIT: u32 = 100;

/// Query string pairs for one request.
pub type Params = Vec<(&'static str, String)>;

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    query: Option<Query>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Deserialize)]
struct Query {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    ns: i64,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Deserialize)]
struct Revision {
    /// Absent when the summary was suppressed.
    #[serde(default)]
    comment: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    slots: Option<Slots>,
}

#[derive(Deserialize)]
struct Slots {
    main: Slot,
}

#[derive(Deserialize)]
struct Slot {
    #[serde(default)]
    content: Option<String>,
}

fn revision_params(title: &str) -> Params {
    vec![
        ("action", "query".into()),
        ("format", "json".into()),
        ("formatversion", "2".into()),
        ("prop", "revisions".into()),
        ("titles", title.into()),
    ]
}

/// The oldest revision: summary, tags and timestamp.
pub fn first_revision_params(title: &str) -> Params {
    let mut params = revision_params(title);
    params.extend([
        ("rvprop", "comment|tags|timestamp".into()),
        ("rvdir", "newer".into()),
        ("rvlimit", "1".into()),
    ]);
    params
}

/// Summaries of the `limit` newest revisions.
pub fn recent_comments_params(title: &str, limit: u32) -> Params {
    let mut params = revision_params(title);
    params.extend([
        ("rvprop", "comment|timestamp".into()),
        ("rvlimit", limit.to_string()),
    ]);
    params
}

/// Current wikitext of the main slot.
pub fn content_params(title: &str) -> Params {
    let mut params = revision_params(title);
    params.extend([("rvprop", "content".into()), ("rvslots", "main".into())]);
    params
}

/// Basic page info, used for the namespace.
pub fn page_info_params(title: &str) -> Params {
    vec![
        ("action", "query".into()),
        ("format", "json".into()),
        ("formatversion", "2".into()),
        ("prop", "info".into()),
        ("titles", title.into()),
    ]
}

/// Title of the talk page belonging to `title`.
///
/// Handles main-namespace titles and drafts (`Draft:X` → `Draft talk:X`).
pub fn talk_page_title(title: &str) -> String {
    match title.strip_prefix("Draft:") {
        Some(rest) => format!("Draft talk:{rest}"),
        None => format!("Talk:{title}"),
    }
}

/// Normalise a title as it appears in a page URL (`Foo_bar` → `Foo bar`).
pub fn display_title(title: &str) -> String {
    title.trim().replace('_', " ")
}

fn single_page(body: &str) -> Result<Option<Page>, FetchError> {
    let response: Response = serde_json::from_str(body)?;
    if let Some(err) = response.error {
        return Err(FetchError::Api {
            code: err.code,
            info: err.info,
        });
    }
    let page = response
        .query
        .and_then(|q| q.pages.into_iter().next())
        .filter(|p| !p.missing && !p.invalid);
    Ok(page)
}

fn existing_page(body: &str, title: &str) -> Result<Page, FetchError> {
    single_page(body)?.ok_or_else(|| FetchError::MissingPage(title.to_string()))
}

/// Parse a [`first_revision_params`] response.
pub fn parse_first_revision(body: &str, title: &str) -> Result<RevisionRecord, FetchError> {
    let page = existing_page(body, title)?;
    let revision = page
        .revisions
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::NoRevisions(page.title.clone()))?;
    let timestamp = revision
        .timestamp
        .ok_or_else(|| FetchError::MissingTimestamp(page.title.clone()))?;
    Ok(RevisionRecord {
        comment: revision.comment,
        tags: revision.tags.into_iter().collect(),
        timestamp,
    })
}

/// Parse a [`recent_comments_params`] response, newest first.
pub fn parse_comments(body: &str, title: &str) -> Result<Vec<String>, FetchError> {
    let page = existing_page(body, title)?;
    Ok(page.revisions.into_iter().map(|r| r.comment).collect())
}

/// Parse a [`content_params`] response. A missing page or revision is `None`.
pub fn parse_content(body: &str) -> Result<Option<String>, FetchError> {
    let content = single_page(body)?
        .and_then(|page| page.revisions.into_iter().next())
        .and_then(|rev| rev.slots)
        .and_then(|slots| slots.main.content);
    Ok(content)
}

/// Parse a [`page_info_params`] response.
pub fn parse_namespace(body: &str, title: &str) -> Result<i64, FetchError> {
    Ok(existing_page(body, title)?.ns)
}

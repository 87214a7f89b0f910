//! Where a check gets its data from.

use async_trait::async_trait;

use crate::revision::RevisionRecord;

/// Read access to one article and its talk page.
///
/// The checker calls these in order and at most once each per run:
/// creation record, edit summaries, article markup, then (only when needed)
/// the talk page. Any error aborts the run.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The earliest revision of the article.
    async fn creation_record(&self) -> Result<RevisionRecord, Self::Error>;

    /// Summaries of a bounded window of recent revisions.
    async fn edit_summaries(&self) -> Result<Vec<String>, Self::Error>;

    /// Current source of the article, `None` when unavailable.
    async fn article_markup(&self) -> Result<Option<String>, Self::Error>;

    /// Current source of the talk page, `None` when it does not exist.
    async fn talk_page_markup(&self) -> Result<Option<String>, Self::Error>;
}

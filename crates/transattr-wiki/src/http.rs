//! HTTP client for the MediaWiki Action API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};
use transattr_core::{ArticleSource, RevisionRecord};

use crate::FetchError;
use crate::api::{self, DEFAULT_API_URL, DEFAULT_REVISION_LIMIT, Params};

/// Connection settings for [`WikiClient`].
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// Like `https://en.wikipedia.org/w/api.php`.
    pub api_url: String,
    pub revision_limit: u32,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            revision_limit: DEFAULT_REVISION_LIMIT,
            timeout: Duration::from_secs(30),
            user_agent: format!(
                "transattr/{} (translation attribution checker)",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

/// Read-only Action API client.
pub struct WikiClient {
    client: reqwest::Client,
    api_url: String,
    revision_limit: u32,
}

impl WikiClient {
    /// Build a client. A trailing slash on the API URL is dropped.
    pub fn new(config: WikiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            revision_limit: config.revision_limit,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get(&self, params: &Params) -> Result<String, FetchError> {
        debug!(url = %self.api_url, ?params, "querying wiki API");
        let resp = self.client.get(&self.api_url).query(params).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.text().await?)
    }

    /// The oldest revision of `title`.
    pub async fn first_revision(&self, title: &str) -> Result<RevisionRecord, FetchError> {
        info!(title, "fetching first revision");
        let body = self.get(&api::first_revision_params(title)).await?;
        api::parse_first_revision(&body, title)
    }

    /// Summaries of the most recent revisions of `title`, newest first.
    pub async fn recent_comments(&self, title: &str) -> Result<Vec<String>, FetchError> {
        info!(title, limit = self.revision_limit, "fetching edit summaries");
        let body = self
            .get(&api::recent_comments_params(title, self.revision_limit))
            .await?;
        let comments = api::parse_comments(&body, title)?;
        info!(count = comments.len(), "fetched edit summaries");
        Ok(comments)
    }

    /// Current wikitext of `title`, `None` if the page does not exist.
    pub async fn page_content(&self, title: &str) -> Result<Option<String>, FetchError> {
        info!(title, "fetching page content");
        let body = self.get(&api::content_params(title)).await?;
        let content = api::parse_content(&body)?;
        if content.is_none() {
            info!(title, "no content found");
        }
        Ok(content)
    }

    /// Namespace number of `title`.
    pub async fn namespace(&self, title: &str) -> Result<i64, FetchError> {
        let body = self.get(&api::page_info_params(title)).await?;
        api::parse_namespace(&body, title)
    }
}

/// One article on a MediaWiki site, as an [`ArticleSource`].
pub struct MediaWikiSource {
    client: WikiClient,
    title: String,
}

impl MediaWikiSource {
    pub fn new(client: WikiClient, title: &str) -> Self {
        Self {
            client,
            title: api::display_title(title),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn talk_title(&self) -> String {
        api::talk_page_title(&self.title)
    }

    pub fn client(&self) -> &WikiClient {
        &self.client
    }
}

#[async_trait]
impl ArticleSource for MediaWikiSource {
    type Error = FetchError;

    async fn creation_record(&self) -> Result<RevisionRecord, FetchError> {
        self.client.first_revision(&self.title).await
    }

    async fn edit_summaries(&self) -> Result<Vec<String>, FetchError> {
        self.client.recent_comments(&self.title).await
    }

    async fn article_markup(&self) -> Result<Option<String>, FetchError> {
        self.client.page_content(&self.title).await
    }

    async fn talk_page_markup(&self) -> Result<Option<String>, FetchError> {
        self.client.page_content(&self.talk_title()).await
    }
}

use thiserror::Error;

/// Failure to retrieve data from the wiki. Always ends the check.
#[derive(Error, Debug)]
pub enum FetchError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    #[error("page not found: {0}")]
    MissingPage(String),

    #[error("page {0} has no revisions")]
    NoRevisions(String),

    #[error("first revision of {0} has no timestamp")]
    MissingTimestamp(String),
}

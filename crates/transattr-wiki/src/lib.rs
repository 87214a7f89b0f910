//! MediaWiki Action API access for the attribution checker.

pub mod api;
mod error;
pub use error::FetchError;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{MediaWikiSource, WikiClient, WikiConfig};

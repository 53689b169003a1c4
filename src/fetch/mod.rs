//! fetch
//!
//! HTTP retrieval: metadata documents and image bytes.
//!
//! # Design
//!
//! One [`Fetcher`] wraps a `reqwest::Client` configured with a fixed set
//! of browser-like default headers. Some metadata hosts reject requests
//! with unrecognized or missing headers, so every request resembles a
//! standard browser client.
//!
//! There is deliberately no retry, no timeout override beyond the
//! transport default, and no redirect-policy customization: a failed fetch
//! is reported to the caller, which logs and skips the token.

pub mod image;
pub mod metadata;

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, CACHE_CONTROL, USER_AGENT,
};
use reqwest::Client;
use thiserror::Error;

pub use metadata::MetadataDocument;

/// User-Agent presented to metadata and image hosts.
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Errors from HTTP retrieval.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or connection failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The host answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Request URL
        url: String,
    },

    /// The body could not be parsed as a metadata document.
    #[error("malformed metadata document: {0}")]
    Decode(String),

    /// Local file I/O failed while writing an image.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP fetcher for metadata documents and image bytes.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with browser-like default headers.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}

/// The fixed request headers sent with every fetch.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    // Must list only encodings the client is built to decode.
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, br"));
    headers.insert("DNT", HeaderValue::from_static("1"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
    headers
}

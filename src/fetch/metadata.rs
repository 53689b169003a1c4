//! fetch::metadata
//!
//! Metadata document retrieval and its (deliberately loose) schema.

use serde::Deserialize;

use super::{FetchError, Fetcher};

/// An NFT metadata document.
///
/// Only the display name and image locator matter to the pipeline; absence
/// of either is a valid, handled state, not an error. Every other field is
/// carried through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataDocument {
    /// Display name, used (sanitized) as the image file name.
    pub name: Option<String>,
    /// Image locator, possibly using a non-HTTP scheme.
    pub image: Option<String>,
    /// Everything else (description, attributes, ...), ignored.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Fetcher {
    /// Fetch and parse one metadata document.
    ///
    /// # Errors
    ///
    /// `Status` for a non-2xx response, `Transport` for connection
    /// failures, `Decode` when the body is not a JSON object. The caller
    /// treats all of these as "skip this token".
    pub async fn metadata(&self, url: &str) -> Result<MetadataDocument, FetchError> {
        let response = self
            .client()
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<MetadataDocument>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

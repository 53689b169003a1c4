//! harvest
//!
//! The per-token orchestrator.
//!
//! # Design
//!
//! Tokens are processed strictly sequentially: token `k+1` does not begin
//! until token `k` reaches its terminal state. Each stage returns a
//! `Result`, and the orchestrator pattern-matches failures into a
//! [`SkipReason`] rather than relying on caught-exception control flow.
//! Every token terminates in exactly one [`TokenOutcome`]; no per-token
//! failure stops the run.
//!
//! The only fatal fault is being unable to create the output directory.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::HarvestConfig;
use crate::fetch::{FetchError, Fetcher};
use crate::ledger::{Ledger, LedgerError};
use crate::resolve::resolve_uri;
use crate::sink;

/// Why a token was skipped.
#[derive(Debug)]
pub enum SkipReason {
    /// The per-token locator query failed.
    TokenQuery(LedgerError),
    /// The ledger returned an empty metadata locator.
    LocatorMissing,
    /// The metadata document could not be fetched or parsed.
    MetadataFetch(FetchError),
    /// The metadata document has no image field.
    ImageMissing,
    /// The image download failed; any partial file was removed.
    ImageDownload(FetchError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TokenQuery(e) => write!(f, "token query failed: {e}"),
            SkipReason::LocatorMissing => write!(f, "empty metadata locator"),
            SkipReason::MetadataFetch(e) => write!(f, "metadata fetch failed: {e}"),
            SkipReason::ImageMissing => write!(f, "no image in metadata"),
            SkipReason::ImageDownload(e) => write!(f, "image download failed: {e}"),
        }
    }
}

/// Terminal state of one token's pipeline.
#[derive(Debug)]
pub enum TokenOutcome {
    /// The image was written to `path`.
    Saved {
        /// Token identifier
        token_id: u64,
        /// Destination the image was written to
        path: PathBuf,
    },
    /// The token was skipped; the run continued.
    Skipped {
        /// Token identifier
        token_id: u64,
        /// What went wrong
        reason: SkipReason,
    },
}

/// Drives the enumerate → resolve → fetch → download sequence.
pub struct Harvester {
    ledger: Arc<dyn Ledger>,
    fetcher: Fetcher,
    config: HarvestConfig,
}

impl Harvester {
    /// Create a harvester over the given ledger and fetcher.
    pub fn new(ledger: Arc<dyn Ledger>, fetcher: Fetcher, config: HarvestConfig) -> Self {
        Self {
            ledger,
            fetcher,
            config,
        }
    }

    /// Run the full harvest: tokens `1..=N`, one outcome each.
    ///
    /// # Errors
    ///
    /// Only output-directory creation failure is fatal; everything else
    /// becomes a logged `Skipped` outcome.
    pub async fn run(&self) -> Result<Vec<TokenOutcome>, std::io::Error> {
        tokio::fs::create_dir_all(&self.config.output_dir).await?;

        let supply = self.collection_size().await;
        info!(supply, "fetching metadata for collection");

        // The supply comes from the contract; never pre-allocate from it.
        let mut outcomes = Vec::new();
        for token_id in 1..=supply {
            let outcome = self.process_token(token_id).await;
            match &outcome {
                TokenOutcome::Saved { path, .. } => {
                    info!(token_id, path = %path.display(), "downloaded image");
                }
                TokenOutcome::Skipped { reason, .. } => {
                    warn!(token_id, %reason, "skipped token");
                }
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Collection size from the ledger, or the configured fallback.
    ///
    /// The fallback is a policy choice, not a detection: it may over- or
    /// under-enumerate the real collection.
    async fn collection_size(&self) -> u64 {
        match self.ledger.total_supply().await {
            Ok(supply) => supply,
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = self.config.fallback_supply,
                    "totalSupply() unavailable, using fallback"
                );
                self.config.fallback_supply
            }
        }
    }

    /// One token, start to terminal state.
    async fn process_token(&self, token_id: u64) -> TokenOutcome {
        let skip = |reason| TokenOutcome::Skipped { token_id, reason };

        let raw_uri = match self.ledger.token_uri(token_id).await {
            Ok(uri) => uri,
            Err(e) => return skip(SkipReason::TokenQuery(e)),
        };
        let metadata_url = match resolve_uri(Some(&raw_uri)) {
            Some(url) => url,
            None => return skip(SkipReason::LocatorMissing),
        };

        let metadata = match self.fetcher.metadata(&metadata_url).await {
            Ok(doc) => doc,
            Err(e) => return skip(SkipReason::MetadataFetch(e)),
        };

        let stem = sink::file_stem(metadata.name.as_deref(), token_id);
        let image_url = match resolve_uri(metadata.image.as_deref()) {
            Some(url) => url,
            None => return skip(SkipReason::ImageMissing),
        };

        let ext = sink::inferred_extension(&image_url);
        let dest = sink::destination(&self.config.output_dir, &stem, &ext, token_id);

        match self.fetcher.download(&image_url, &dest).await {
            Ok(()) => TokenOutcome::Saved {
                token_id,
                path: dest,
            },
            Err(e) => skip(SkipReason::ImageDownload(e)),
        }
    }
}

//! ledger::traits
//!
//! Ledger trait definition for read-only contract queries.
//!
//! # Design
//!
//! The trait is async because ledger queries involve network I/O, and
//! implementations must be `Send + Sync` for use across async tasks. Every
//! method returns `Result<_, LedgerError>`; the harvest orchestrator treats
//! a `total_supply` failure as "use the fallback constant" and a
//! `token_uri` failure as "skip this token".

use async_trait::async_trait;
use thiserror::Error;

use super::abi::AbiError;

/// Errors from ledger queries.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Network or connection failure reaching the node.
    #[error("transport error: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC error (revert, unknown method).
    #[error("rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// The call succeeded but the returned data could not be decoded.
    #[error("malformed call result: {0}")]
    Malformed(#[from] AbiError),
}

/// Read-only queries against an NFT collection contract.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Query the collection size.
    ///
    /// # Errors
    ///
    /// Returns `Rpc` when the contract does not implement `totalSupply()`
    /// or the call reverts. Callers are expected to recover with a
    /// fallback bound rather than abort.
    async fn total_supply(&self) -> Result<u64, LedgerError>;

    /// Query the metadata locator for a token.
    ///
    /// # Errors
    ///
    /// Returns `Rpc` for nonexistent token ids (ERC-721 reverts on
    /// `tokenURI` of an unminted token); callers skip the token.
    async fn token_uri(&self, token_id: u64) -> Result<String, LedgerError>;
}

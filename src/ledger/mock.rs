//! ledger::mock
//!
//! Mock ledger implementation for deterministic testing.
//!
//! # Design
//!
//! The mock ledger serves configured responses from memory and records the
//! queries it receives, so tests can drive the harvest pipeline without a
//! node and assert on the call sequence afterwards.
//!
//! # Example
//!
//! ```
//! use nftgrab::ledger::{Ledger, MockLedger};
//!
//! # tokio_test::block_on(async {
//! let ledger = MockLedger::with_supply(2);
//! ledger.set_token_uri(1, "ipfs://QmHash/1.json");
//!
//! assert_eq!(ledger.total_supply().await.unwrap(), 2);
//! assert_eq!(ledger.token_uri(1).await.unwrap(), "ipfs://QmHash/1.json");
//! assert!(ledger.token_uri(2).await.is_err());
//! # });
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{Ledger, LedgerError};

/// Mock ledger for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockLedger {
    inner: Arc<Mutex<MockLedgerInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockLedgerInner {
    /// Collection size; `None` makes `total_supply` fail.
    supply: Option<u64>,
    /// Configured metadata locators by token id.
    uris: HashMap<u64, String>,
    /// Recorded queries for verification.
    calls: Vec<MockCall>,
}

/// Recorded query for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    TotalSupply,
    TokenUri(u64),
}

impl MockLedger {
    /// Create a mock whose `total_supply` fails (unsupported method).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock reporting the given collection size.
    pub fn with_supply(supply: u64) -> Self {
        let mock = Self::default();
        mock.set_supply(supply);
        mock
    }

    /// Set the collection size.
    pub fn set_supply(&self, supply: u64) {
        self.inner.lock().unwrap().supply = Some(supply);
    }

    /// Configure the metadata locator for a token.
    pub fn set_token_uri(&self, token_id: u64, uri: impl Into<String>) {
        self.inner.lock().unwrap().uris.insert(token_id, uri.into());
    }

    /// Queries received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.inner.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn total_supply(&self) -> Result<u64, LedgerError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(MockCall::TotalSupply);
        inner.supply.ok_or(LedgerError::Rpc {
            code: 3,
            message: "execution reverted".to_string(),
        })
    }

    async fn token_uri(&self, token_id: u64) -> Result<String, LedgerError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(MockCall::TokenUri(token_id));
        inner.uris.get(&token_id).cloned().ok_or(LedgerError::Rpc {
            code: 3,
            message: format!("execution reverted: no URI for token {token_id}"),
        })
    }
}

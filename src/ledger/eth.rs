//! ledger::eth
//!
//! Ethereum JSON-RPC implementation of the `Ledger` trait.
//!
//! # Design
//!
//! Both reads go through `eth_call` at the `latest` block: the call data
//! is built in [`abi`](super::abi), POSTed to the configured node, and the
//! hex result decoded back out. A JSON-RPC `error` member (revert, method
//! not found) maps to [`LedgerError::Rpc`]; HTTP and connection failures
//! map to [`LedgerError::Transport`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::abi;
use super::traits::{Ledger, LedgerError};

/// JSON-RPC response envelope for `eth_call`.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorBody>,
}

/// JSON-RPC error member.
#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Ledger backed by an Ethereum node's JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct EthLedger {
    /// HTTP client for RPC requests
    client: Client,
    /// Node endpoint URL
    rpc_url: String,
    /// Target ERC-721 contract address
    contract: String,
}

impl EthLedger {
    /// Create a ledger for one contract on one node.
    pub fn new(rpc_url: impl Into<String>, contract: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            rpc_url: rpc_url.into(),
            contract: contract.into(),
        }
    }

    /// Issue one `eth_call` and return the raw hex result.
    async fn eth_call(&self, call_data: String) -> Result<String, LedgerError> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": "eth_call",
            "params": [{"to": self.contract, "data": call_data}, "latest"],
            "id": 1,
        });

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LedgerError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        if let Some(err) = envelope.error {
            return Err(LedgerError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        envelope.result.ok_or(LedgerError::Rpc {
            code: -32603,
            message: "response carried neither result nor error".to_string(),
        })
    }
}

#[async_trait]
impl Ledger for EthLedger {
    async fn total_supply(&self) -> Result<u64, LedgerError> {
        let raw = self.eth_call(abi::encode_total_supply()).await?;
        Ok(abi::decode_uint(&raw)?)
    }

    async fn token_uri(&self, token_id: u64) -> Result<String, LedgerError> {
        let raw = self.eth_call(abi::encode_token_uri(token_id)).await?;
        Ok(abi::decode_string(&raw)?)
    }
}

//! config
//!
//! Harvest run configuration.
//!
//! # Design
//!
//! Configuration is an explicit value handed to the orchestrator rather than
//! process-wide constants. Tests construct one pointing at mock endpoints
//! and a temporary output directory.

use std::path::PathBuf;

/// Collection size assumed when the contract does not expose `totalSupply()`.
///
/// This is a policy choice, not a detection of true collection size: it may
/// over- or under-enumerate.
pub const DEFAULT_FALLBACK_SUPPLY: u64 = 10_000;

/// Configuration for one harvest run.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// JSON-RPC endpoint of the Ethereum node.
    pub rpc_url: String,
    /// Address of the target ERC-721 contract.
    pub contract_address: String,
    /// Directory downloaded images are written to.
    pub output_dir: PathBuf,
    /// Collection size assumed when `totalSupply()` is unavailable.
    pub fallback_supply: u64,
}

impl HarvestConfig {
    /// Create a configuration with the default fallback supply.
    pub fn new(
        rpc_url: impl Into<String>,
        contract_address: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            contract_address: contract_address.into(),
            output_dir: output_dir.into(),
            fallback_supply: DEFAULT_FALLBACK_SUPPLY,
        }
    }
}

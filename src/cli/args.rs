//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--rpc-url`: JSON-RPC endpoint of an Ethereum node
//! - `--contract`: address of the target ERC-721 collection
//! - `--out-dir`: directory images are written to
//! - `--fallback-supply`: collection size assumed when `totalSupply()` fails
//! - `--debug`: verbose logging

use clap::Parser;
use std::path::PathBuf;

use crate::config::{HarvestConfig, DEFAULT_FALLBACK_SUPPLY};

/// nftgrab - download every image in an NFT collection
#[derive(Parser, Debug)]
#[command(name = "nftgrab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON-RPC endpoint of an Ethereum node (Infura, Alchemy, self-hosted)
    #[arg(long)]
    pub rpc_url: String,

    /// Address of the target ERC-721 contract
    #[arg(long)]
    pub contract: String,

    /// Directory to save downloaded images into
    #[arg(long, default_value = "./nft_images")]
    pub out_dir: PathBuf,

    /// Collection size to assume when the contract has no totalSupply()
    #[arg(long, default_value_t = DEFAULT_FALLBACK_SUPPLY)]
    pub fallback_supply: u64,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Build the harvest configuration from the parsed arguments.
    pub fn to_config(&self) -> HarvestConfig {
        HarvestConfig {
            rpc_url: self.rpc_url.clone(),
            contract_address: self.contract.clone(),
            output_dir: self.out_dir.clone(),
            fallback_supply: self.fallback_supply,
        }
    }
}

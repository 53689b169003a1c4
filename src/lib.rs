//! nftgrab - a CLI for harvesting NFT collection images
//!
//! nftgrab enumerates the tokens of an ERC-721 collection, fetches each
//! token's metadata document, and downloads the referenced image to a local
//! directory.
//!
//! # Architecture
//!
//! The pipeline is a single forward-only sequence per token:
//!
//! - [`cli`] - Command-line interface layer (parses args, builds config)
//! - [`config`] - Explicit configuration passed into the orchestrator
//! - [`ledger`] - Read-only contract queries (`totalSupply`, `tokenURI`)
//! - [`resolve`] - Normalizes storage-scheme locators to HTTP(S) URLs
//! - [`fetch`] - Metadata fetch and streaming image download
//! - [`sink`] - File naming: sanitization, extension inference, collisions
//! - [`harvest`] - Orchestrates the per-token sequence
//!
//! # Failure model
//!
//! No per-token failure is fatal: each stage returns a `Result`, and the
//! orchestrator converts errors into a logged skip before advancing to the
//! next token. The run only aborts on outer-driver faults such as being
//! unable to create the output directory.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod harvest;
pub mod ledger;
pub mod resolve;
pub mod sink;

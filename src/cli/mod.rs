//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! The CLI layer is thin: it parses arguments with clap and converts them
//! into a [`HarvestConfig`](crate::config::HarvestConfig) for the
//! orchestrator. No harvesting logic lives here.

pub mod args;

pub use args::Cli;

//! nftgrab binary entry point.
//!
//! Parses arguments, wires the JSON-RPC ledger and HTTP fetcher into the
//! harvester, and runs it to completion. Per-token failures are logged by
//! the harvester; only outer-driver faults exit non-zero.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nftgrab::cli::Cli;
use nftgrab::fetch::Fetcher;
use nftgrab::harvest::Harvester;
use nftgrab::ledger::EthLedger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let config = cli.to_config();
    let ledger = Arc::new(EthLedger::new(&config.rpc_url, &config.contract_address));
    let fetcher = Fetcher::new().context("failed to build HTTP client")?;

    Harvester::new(ledger, fetcher, config)
        .run()
        .await
        .context("failed to create output directory")?;
    Ok(())
}

/// Install the tracing subscriber, honoring `RUST_LOG` when set.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "nftgrab=debug" } else { "nftgrab=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

//! # QBFT Explorer Runtime
//!
//! Entry point wiring the validator sync subsystem to a Besu node.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from environment
//! 2. Install the tracing subscriber
//! 3. Build the Besu RPC adapter and store backends
//! 4. Run the sync scheduler until Ctrl-C
//!
//! Block ingestion belongs to the separate indexer; until it is attached
//! the block view starts empty and epoch metrics report the fallback.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::info;

use explorer_telemetry::{init_telemetry, TelemetryConfig};
use validator_sync::{
    BesuRpcClient, InMemoryBlockStore, InMemoryValidatorStore, SyncConfig, SyncDependencies,
    SyncScheduler, ValidatorSyncService,
};

#[tokio::main]
async fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    init_telemetry(&telemetry).context("failed to initialize telemetry")?;

    let config = SyncConfig::from_env();
    info!(
        rpc_url = %config.rpc_url,
        interval_secs = config.sync_interval_secs,
        "starting qbft explorer runtime"
    );

    let rpc = Arc::new(BesuRpcClient::new(&config).context("failed to build rpc client")?);
    let validators = Arc::new(InMemoryValidatorStore::new());
    let blocks = Arc::new(InMemoryBlockStore::new());

    let service = Arc::new(ValidatorSyncService::new(SyncDependencies {
        rpc,
        validators,
        blocks,
    }));

    let scheduler = SyncScheduler::new(
        service,
        Duration::from_secs(config.sync_interval_secs),
    );
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler_handle = tokio::spawn(async move { scheduler.run(shutdown_rx).await });

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutdown signal received");

    shutdown_tx
        .send(true)
        .context("failed to signal scheduler shutdown")?;
    scheduler_handle
        .await
        .context("scheduler task panicked")?;

    info!("qbft explorer runtime stopped");
    Ok(())
}

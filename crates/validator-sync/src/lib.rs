//! # Validator Sync
//!
//! QBFT validator-set reconciliation for a permissioned Besu network.
//!
//! ## Purpose
//!
//! Keep the explorer's validator registry in agreement with the
//! consensus layer:
//! - fetch the current signer set (`qbft_getValidatorsByBlockNumber`)
//!   and per-signer metrics (`qbft_getSignerMetrics`) over JSON-RPC,
//! - reconcile them against persisted records in one fail-fast pass,
//! - derive the current epoch from the latest block height,
//! - aggregate network metrics for presentation.
//!
//! ## Module Structure
//!
//! ```text
//! validator-sync/
//! ├── domain/          # Value objects, errors, epoch math
//! ├── ports/           # API trait (inbound) + dependency traits (outbound)
//! ├── application/     # ValidatorSyncService orchestrating a pass
//! ├── adapters/        # Besu JSON-RPC client, in-memory stores
//! ├── scheduler.rs     # Periodic sync driver with single-flight guard
//! └── config.rs        # SyncConfig
//! ```
//!
//! ## Reconciliation Pass
//!
//! | Step | Action | On failure |
//! |------|--------|------------|
//! | 1 | Fetch validator set (`latest`) | abort pass |
//! | 2 | Fetch signer metrics | abort pass |
//! | 3 | Bulk-reset every stored row to inactive | abort pass |
//! | 4 | Per address, in RPC order: upsert as active | abort pass, keep prior saves |
//!
//! A pass is idempotent; any partial state left by a failed pass is fully
//! repaired by the next successful one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod scheduler;

// Re-exports
pub use adapters::{BesuRpcClient, InMemoryBlockStore, InMemoryValidatorStore};
pub use application::{SyncDependencies, ValidatorSyncService};
pub use config::SyncConfig;
pub use domain::{
    epoch_at, parse_quantity, BlockTag, EpochInfo, NetworkMetrics, RpcError, SignerMetric,
    SyncReport, ValidatorSyncError, CONSENSUS_TYPE, EPOCH_LENGTH,
};
pub use ports::{
    BlockStore, Clock, ConsensusRpc, MockConsensusRpc, SystemClock, ValidatorStore,
    ValidatorSyncApi,
};
pub use scheduler::SyncScheduler;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

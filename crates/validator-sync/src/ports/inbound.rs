//! # Inbound Port
//!
//! API trait defining what the validator sync subsystem offers to the
//! rest of the explorer (REST controllers, admin tooling, the scheduler).

use async_trait::async_trait;
use explorer_types::{Address, Validator};

use crate::domain::{EpochInfo, NetworkMetrics, SyncReport, ValidatorSyncError};

/// Validator sync API - inbound port.
#[async_trait]
pub trait ValidatorSyncApi: Send + Sync {
    /// Run one full reconciliation pass against the consensus layer.
    ///
    /// Idempotent: re-running against an unchanged validator set leaves
    /// the store in the same state (`last_seen` excepted).
    async fn sync_validators(&self) -> Result<SyncReport, ValidatorSyncError>;

    /// Assemble the point-in-time network summary.
    ///
    /// Count and uptime queries are essential and propagate failure;
    /// epoch info falls back to `(0, 30000)` when unavailable.
    async fn network_metrics(&self) -> Result<NetworkMetrics, ValidatorSyncError>;

    /// Current epoch derived from the latest stored block.
    async fn epoch_info(&self) -> Result<EpochInfo, ValidatorSyncError>;

    /// All validators ever observed.
    async fn validators(&self) -> Result<Vec<Validator>, ValidatorSyncError>;

    /// Validators in the current signer set.
    async fn active_validators(&self) -> Result<Vec<Validator>, ValidatorSyncError>;

    /// Validators absent from the current signer set.
    async fn inactive_validators(&self) -> Result<Vec<Validator>, ValidatorSyncError>;

    /// One validator by address, if ever observed.
    async fn validator_by_address(
        &self,
        address: &Address,
    ) -> Result<Option<Validator>, ValidatorSyncError>;
}

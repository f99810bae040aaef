//! # Validator Sync Service
//!
//! Application service bringing the persisted validator registry into
//! agreement with the consensus layer's reported signer set, and serving
//! derived epoch and network metrics.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use explorer_types::{Address, Validator, ValidatorStatus};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{
    epoch_at, BlockTag, EpochInfo, NetworkMetrics, SignerMetric, SyncReport, ValidatorSyncError,
    CONSENSUS_TYPE, EPOCH_LENGTH,
};
use crate::ports::{
    BlockStore, Clock, ConsensusRpc, SystemClock, ValidatorStore, ValidatorSyncApi,
};

/// Uptime assigned to a validator that has been around for longer than
/// one pass. Flat until the signer metrics expose a duration signal.
const OBSERVED_UPTIME: f64 = 99.0;

/// Validator Sync Service - orchestrates one reconciliation pass per
/// invocation, plus read-side metrics.
pub struct ValidatorSyncService<R, V, B>
where
    R: ConsensusRpc,
    V: ValidatorStore,
    B: BlockStore,
{
    rpc: Arc<R>,
    validators: Arc<V>,
    blocks: Arc<B>,
    clock: Box<dyn Clock>,
}

/// Dependencies for ValidatorSyncService.
pub struct SyncDependencies<R, V, B> {
    /// Consensus-layer JSON-RPC gateway.
    pub rpc: Arc<R>,
    /// Validator persistence.
    pub validators: Arc<V>,
    /// Block persistence (chain head only).
    pub blocks: Arc<B>,
}

impl<R, V, B> ValidatorSyncService<R, V, B>
where
    R: ConsensusRpc,
    V: ValidatorStore,
    B: BlockStore,
{
    /// Create a new service with the system clock.
    pub fn new(deps: SyncDependencies<R, V, B>) -> Self {
        Self {
            rpc: deps.rpc,
            validators: deps.validators,
            blocks: deps.blocks,
            clock: Box::new(SystemClock),
        }
    }

    /// Set a custom clock (for testing).
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// Index metrics by address. First occurrence wins on duplicates.
fn index_metrics(metrics: &[SignerMetric]) -> HashMap<Address, &SignerMetric> {
    let mut by_address = HashMap::with_capacity(metrics.len());
    for metric in metrics {
        by_address.entry(metric.address).or_insert(metric);
    }
    by_address
}

/// Overwrite a validator's counters from its signer metric, field by
/// field. A counter that fails to parse is skipped and keeps its stored
/// value; the other field is unaffected.
fn apply_signer_metric(validator: &mut Validator, metric: &SignerMetric, pass_id: Uuid) {
    match metric.parsed_proposed_block_count() {
        Some(count) => validator.proposed_block_count = count,
        None => warn!(
            %pass_id,
            address = %validator.address,
            value = %metric.proposed_block_count,
            "unparseable proposed block count, keeping stored value"
        ),
    }
    match metric.parsed_last_proposed_block_number() {
        Some(number) => validator.last_proposed_block_number = number,
        None => warn!(
            %pass_id,
            address = %validator.address,
            value = %metric.last_proposed_block_number,
            "unparseable last proposed block number, keeping stored value"
        ),
    }
}

#[async_trait]
impl<R, V, B> ValidatorSyncApi for ValidatorSyncService<R, V, B>
where
    R: ConsensusRpc + 'static,
    V: ValidatorStore + 'static,
    B: BlockStore + 'static,
{
    async fn sync_validators(&self) -> Result<SyncReport, ValidatorSyncError> {
        let pass_id = Uuid::new_v4();
        debug!(%pass_id, "starting validator sync pass");

        let addresses = self
            .rpc
            .validators_by_block_number(BlockTag::Latest)
            .await
            .map_err(ValidatorSyncError::ValidatorSetFetch)?;

        let metrics = self
            .rpc
            .signer_metrics()
            .await
            .map_err(ValidatorSyncError::SignerMetricsFetch)?;
        let metrics_by_address = index_metrics(&metrics);

        // Reset first: anything absent from the fetched set ends the pass
        // inactive without an explicit diff step.
        self.validators
            .update_all_status(ValidatorStatus::Inactive, false)
            .await
            .map_err(ValidatorSyncError::StatusReset)?;

        let mut created = 0usize;
        for address in &addresses {
            let now = self.clock.now();
            let mut validator = match self
                .validators
                .find_by_address(address)
                .await
                .map_err(|source| ValidatorSyncError::LookupValidator {
                    address: *address,
                    source,
                })? {
                Some(mut existing) => {
                    existing.mark_active(now);
                    existing
                }
                None => {
                    created += 1;
                    Validator::new(*address, now)
                }
            };

            if let Some(metric) = metrics_by_address.get(address) {
                apply_signer_metric(&mut validator, metric, pass_id);
            }

            // A validator first seen on an earlier pass has a positive
            // observation window.
            if now > validator.first_seen {
                validator.uptime = OBSERVED_UPTIME;
            }

            // Fail fast: a single save failure aborts the pass.
            self.validators
                .save(validator)
                .await
                .map_err(|source| ValidatorSyncError::SaveValidator {
                    address: *address,
                    source,
                })?;
        }

        info!(
            %pass_id,
            observed = addresses.len(),
            created,
            "validator sync pass complete"
        );
        Ok(SyncReport {
            pass_id,
            observed: addresses.len(),
            created,
        })
    }

    async fn network_metrics(&self) -> Result<NetworkMetrics, ValidatorSyncError> {
        let total_validators = self.validators.count().await?;
        let active_validators = self.validators.count_active().await?;
        let inactive_validators = self.validators.count_inactive().await?;
        let average_uptime = self.validators.average_uptime().await?;

        // Epoch info is the one non-essential input; metrics never fail
        // merely because no block has been indexed yet.
        let epoch = match self.epoch_info().await {
            Ok(info) => info,
            Err(err) => {
                debug!(error = %err, "epoch info unavailable, using defaults");
                EpochInfo::default()
            }
        };

        Ok(NetworkMetrics {
            total_validators,
            active_validators,
            inactive_validators,
            consensus_type: CONSENSUS_TYPE.to_string(),
            current_epoch: epoch.current_epoch,
            epoch_length: epoch.epoch_length,
            average_uptime,
        })
    }

    async fn epoch_info(&self) -> Result<EpochInfo, ValidatorSyncError> {
        let block = self
            .blocks
            .find_latest()
            .await?
            .ok_or(ValidatorSyncError::NoBlockFound)?;
        Ok(EpochInfo {
            current_epoch: epoch_at(block.number),
            epoch_length: EPOCH_LENGTH,
        })
    }

    async fn validators(&self) -> Result<Vec<Validator>, ValidatorSyncError> {
        Ok(self.validators.find_all().await?)
    }

    async fn active_validators(&self) -> Result<Vec<Validator>, ValidatorSyncError> {
        Ok(self.validators.find_active().await?)
    }

    async fn inactive_validators(&self) -> Result<Vec<Validator>, ValidatorSyncError> {
        Ok(self.validators.find_inactive().await?)
    }

    async fn validator_by_address(
        &self,
        address: &Address,
    ) -> Result<Option<Validator>, ValidatorSyncError> {
        Ok(self.validators.find_by_address(address).await?)
    }
}

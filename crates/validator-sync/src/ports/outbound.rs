//! # Outbound Ports
//!
//! Traits for the external collaborators the sync service depends on:
//! the consensus-layer JSON-RPC gateway, the validator and block stores,
//! and the clock.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use explorer_types::{Address, Block, StoreError, Validator, ValidatorStatus};

use crate::domain::{BlockTag, RpcError, SignerMetric};

/// Consensus-layer JSON-RPC gateway - outbound port.
#[async_trait]
pub trait ConsensusRpc: Send + Sync {
    /// Current validator address set, in the order the node reports it.
    ///
    /// Wire method: `qbft_getValidatorsByBlockNumber`.
    async fn validators_by_block_number(
        &self,
        block: BlockTag,
    ) -> Result<Vec<Address>, RpcError>;

    /// Per-validator signing metrics.
    ///
    /// Wire method: `qbft_getSignerMetrics`.
    async fn signer_metrics(&self) -> Result<Vec<SignerMetric>, RpcError>;
}

/// Validator persistence - outbound port. Implemented by the relational
/// layer in the deployed system, in-memory in tests.
#[async_trait]
pub trait ValidatorStore: Send + Sync {
    /// Look up one validator by address.
    async fn find_by_address(&self, address: &Address) -> Result<Option<Validator>, StoreError>;

    /// All validators.
    async fn find_all(&self) -> Result<Vec<Validator>, StoreError>;

    /// Validators with `is_active = true`.
    async fn find_active(&self) -> Result<Vec<Validator>, StoreError>;

    /// Validators with `is_active = false`.
    async fn find_inactive(&self) -> Result<Vec<Validator>, StoreError>;

    /// Total validator count.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Active validator count.
    async fn count_active(&self) -> Result<u64, StoreError>;

    /// Inactive validator count.
    async fn count_inactive(&self) -> Result<u64, StoreError>;

    /// Mean uptime across all validators; 0.0 for an empty store.
    async fn average_uptime(&self) -> Result<f64, StoreError>;

    /// Bulk-update status and the `is_active` mirror on every row.
    async fn update_all_status(
        &self,
        status: ValidatorStatus,
        is_active: bool,
    ) -> Result<(), StoreError>;

    /// Insert or update, keyed by address.
    async fn save(&self, validator: Validator) -> Result<(), StoreError>;
}

/// Block persistence - outbound port. Only the chain head is consumed.
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// The highest stored block, if any.
    async fn find_latest(&self) -> Result<Option<Block>, StoreError>;
}

/// Time source - outbound port, injected so `first_seen`/`last_seen`
/// are deterministic under test.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Default clock using system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock consensus RPC gateway for testing.
#[derive(Clone, Default)]
pub struct MockConsensusRpc {
    /// Validator set returned by `validators_by_block_number`.
    pub validators: Vec<Address>,
    /// Metrics returned by `signer_metrics`.
    pub metrics: Vec<SignerMetric>,
    /// Fail the validator-set call?
    pub fail_validators: bool,
    /// Fail the metrics call?
    pub fail_metrics: bool,
}

#[async_trait]
impl ConsensusRpc for MockConsensusRpc {
    async fn validators_by_block_number(
        &self,
        _block: BlockTag,
    ) -> Result<Vec<Address>, RpcError> {
        if self.fail_validators {
            return Err(RpcError::Transport("mock failure".to_string()));
        }
        Ok(self.validators.clone())
    }

    async fn signer_metrics(&self) -> Result<Vec<SignerMetric>, RpcError> {
        if self.fail_metrics {
            return Err(RpcError::Protocol {
                code: -32000,
                message: "mock failure".to_string(),
            });
        }
        Ok(self.metrics.clone())
    }
}

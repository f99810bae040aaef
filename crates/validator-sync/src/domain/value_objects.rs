//! # Domain Value Objects
//!
//! Immutable value types carried between the RPC boundary, the
//! reconciliation engine, and the metrics aggregator.

use std::fmt;

use explorer_types::{Address, U256};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::epoch::EPOCH_LENGTH;

/// Consensus protocol label reported in network metrics.
pub const CONSENSUS_TYPE: &str = "QBFT";

/// Block selector for `qbft_getValidatorsByBlockNumber`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// The latest block.
    Latest,
    /// A specific block height.
    Number(u64),
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Number(n) => write!(f, "0x{n:x}"),
        }
    }
}

/// One record from `qbft_getSignerMetrics`.
///
/// The counters stay as the raw `0x`-hex strings the wire carries;
/// parsing happens during reconciliation so a bad value can be skipped
/// per-field without losing the rest of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerMetric {
    /// Validator address this record belongs to.
    pub address: Address,
    /// Blocks proposed, hex-encoded quantity.
    pub proposed_block_count: String,
    /// Height of the last proposed block, hex-encoded quantity.
    pub last_proposed_block_number: String,
}

impl SignerMetric {
    /// Parsed `proposed_block_count`, if well-formed.
    pub fn parsed_proposed_block_count(&self) -> Option<U256> {
        parse_quantity(&self.proposed_block_count)
    }

    /// Parsed `last_proposed_block_number`, if well-formed.
    pub fn parsed_last_proposed_block_number(&self) -> Option<U256> {
        parse_quantity(&self.last_proposed_block_number)
    }
}

/// Parse a `0x`-prefixed (or bare) hex quantity into a `U256`.
pub fn parse_quantity(input: &str) -> Option<U256> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    if stripped.is_empty() {
        return None;
    }
    U256::from_str_radix(stripped, 16).ok()
}

/// Current epoch position, derived from the latest block height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochInfo {
    /// `latest_block_number / epoch_length`.
    pub current_epoch: u64,
    /// QBFT epoch length in blocks.
    pub epoch_length: u64,
}

impl Default for EpochInfo {
    /// The substitute used when no block is available yet.
    fn default() -> Self {
        Self {
            current_epoch: 0,
            epoch_length: EPOCH_LENGTH,
        }
    }
}

/// Point-in-time network summary. Assembled per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    /// Validators ever observed.
    pub total_validators: u64,
    /// Validators in the current signer set.
    pub active_validators: u64,
    /// Validators absent from the current signer set.
    pub inactive_validators: u64,
    /// Consensus protocol label.
    pub consensus_type: String,
    /// Current epoch number.
    pub current_epoch: u64,
    /// Epoch length in blocks.
    pub epoch_length: u64,
    /// Mean uptime across all validators.
    pub average_uptime: f64,
}

/// Outcome of one successful reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Correlation id carried on the pass's log events.
    pub pass_id: Uuid,
    /// Addresses in the fetched validator set.
    pub observed: usize,
    /// Addresses seen for the first time this pass.
    pub created: usize,
}

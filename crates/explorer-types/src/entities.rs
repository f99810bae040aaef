//! # Core Domain Entities
//!
//! Defines the entities tracked by the explorer.
//!
//! ## Clusters
//!
//! - **Consensus**: [`Validator`], [`ValidatorStatus`]
//! - **Chain**: [`Block`]
//! - **Primitives**: [`Address`], [`Hash`], re-exported [`U256`]

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AddressParseError;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 32-byte block hash.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style account address.
///
/// Constructed only by parsing `0x`-prefixed hex of either case, so two
/// RPC endpoints that disagree on casing still produce equal addresses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Parse an address from hex, with or without the `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self, AddressParseError> {
        let stripped = input.strip_prefix("0x").unwrap_or(input);
        let bytes = hex::decode(stripped).map_err(|_| AddressParseError {
            input: input.to_string(),
        })?;
        let bytes: [u8; 20] = bytes.try_into().map_err(|_| AddressParseError {
            input: input.to_string(),
        })?;
        Ok(Self(bytes))
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// Membership status of a validator in the QBFT signer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorStatus {
    /// Present in the current validator set.
    Active,
    /// Previously observed, absent from the current set.
    Inactive,
}

impl ValidatorStatus {
    /// Whether this status counts as active.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for ValidatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// One member of the QBFT signer set, as persisted by the explorer.
///
/// Lifecycle: created on first observation in a validator-set response,
/// never deleted, flipped between active and inactive on every
/// reconciliation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    /// Account address; natural key, unique.
    pub address: Address,
    /// Blocks proposed, from the consensus-layer signer metrics.
    pub proposed_block_count: U256,
    /// Height of the most recent block this validator proposed.
    pub last_proposed_block_number: U256,
    /// Membership status.
    pub status: ValidatorStatus,
    /// Mirror of `status` for query convenience.
    /// Invariant: `is_active == status.is_active()`.
    pub is_active: bool,
    /// Availability percentage in [0, 100].
    pub uptime: f64,
    /// Set once at creation, never mutated afterwards.
    pub first_seen: DateTime<Utc>,
    /// Advanced on every pass that observes the validator active.
    pub last_seen: DateTime<Utc>,
}

impl Validator {
    /// Record for an address observed for the first time.
    pub fn new(address: Address, now: DateTime<Utc>) -> Self {
        Self {
            address,
            proposed_block_count: U256::zero(),
            last_proposed_block_number: U256::zero(),
            status: ValidatorStatus::Active,
            is_active: true,
            uptime: 100.0,
            first_seen: now,
            last_seen: now,
        }
    }

    /// Mark as active and advance `last_seen`.
    pub fn mark_active(&mut self, now: DateTime<Utc>) {
        self.status = ValidatorStatus::Active;
        self.is_active = true;
        self.last_seen = now;
    }

    /// Mark as inactive. `last_seen` stays at the last active observation.
    pub fn mark_inactive(&mut self) {
        self.status = ValidatorStatus::Inactive;
        self.is_active = false;
    }
}

/// A block as seen by the explorer. Only the latest block is consumed
/// here, for epoch derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block height.
    pub number: u64,
    /// Block hash.
    pub hash: Hash,
    /// Timestamp from the block header.
    pub timestamp: DateTime<Utc>,
}

//! # Sync Configuration
//!
//! Configuration for the validator sync subsystem.

use serde::{Deserialize, Serialize};

/// Validator sync configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Besu JSON-RPC endpoint.
    pub rpc_url: String,

    /// Client-side timeout per RPC call, in seconds. Bounds a sync pass
    /// so it cannot hang on an unresponsive node.
    pub rpc_timeout_secs: u64,

    /// Interval between scheduled reconciliation passes, in seconds.
    pub sync_interval_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            rpc_timeout_secs: 30,
            sync_interval_secs: 15,
        }
    }
}

impl SyncConfig {
    /// Create a config for testing (smaller values).
    pub fn for_testing() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            rpc_timeout_secs: 5,
            sync_interval_secs: 1,
        }
    }

    /// Build from environment variables, falling back to defaults.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `EXPLORER_RPC_URL` | `rpc_url` |
    /// | `EXPLORER_RPC_TIMEOUT_SECS` | `rpc_timeout_secs` |
    /// | `EXPLORER_SYNC_INTERVAL_SECS` | `sync_interval_secs` |
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("EXPLORER_RPC_URL") {
            config.rpc_url = url;
        }
        if let Ok(value) = std::env::var("EXPLORER_RPC_TIMEOUT_SECS") {
            if let Ok(secs) = value.parse() {
                config.rpc_timeout_secs = secs;
            }
        }
        if let Ok(value) = std::env::var("EXPLORER_SYNC_INTERVAL_SECS") {
            if let Ok(secs) = value.parse() {
                config.sync_interval_secs = secs;
            }
        }
        config
    }
}

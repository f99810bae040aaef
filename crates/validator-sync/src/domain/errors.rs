//! # Domain Errors
//!
//! Error types for the validator sync subsystem. `ValidatorSyncError`
//! identifies which phase of a reconciliation pass failed, so the caller
//! can log and retry with context.

use explorer_types::{Address, StoreError};
use thiserror::Error;

/// Errors from the consensus-layer JSON-RPC gateway.
#[derive(Debug, Clone, Error)]
pub enum RpcError {
    /// Request never produced an HTTP response (connection refused,
    /// timeout, DNS failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("unexpected http status {status}")]
    Http {
        /// The HTTP status code received.
        status: u16,
    },

    /// The response carried a JSON-RPC error object. Treated as a hard
    /// failure regardless of HTTP status.
    #[error("rpc error {code}: {message}")]
    Protocol {
        /// JSON-RPC error code.
        code: i64,
        /// JSON-RPC error message.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("invalid rpc response: {0}")]
    InvalidResponse(String),
}

/// Errors from a reconciliation pass or a metrics query.
#[derive(Debug, Error)]
pub enum ValidatorSyncError {
    /// Fetching the current validator set failed.
    #[error("validator set fetch failed: {0}")]
    ValidatorSetFetch(#[source] RpcError),

    /// Fetching signer metrics failed.
    #[error("signer metrics fetch failed: {0}")]
    SignerMetricsFetch(#[source] RpcError),

    /// The bulk inactive-reset failed before any per-validator work.
    #[error("bulk status reset failed: {0}")]
    StatusReset(#[source] StoreError),

    /// Reading one validator record failed mid-pass.
    #[error("lookup failed for validator {address}: {source}")]
    LookupValidator {
        /// The address being reconciled.
        address: Address,
        /// The underlying store failure.
        #[source]
        source: StoreError,
    },

    /// Upserting one validator record failed mid-pass. Earlier saves
    /// stay committed; later addresses are never attempted.
    #[error("save failed for validator {address}: {source}")]
    SaveValidator {
        /// The address being reconciled.
        address: Address,
        /// The underlying store failure.
        #[source]
        source: StoreError,
    },

    /// A read-only store query failed.
    #[error("store query failed: {0}")]
    Store(#[from] StoreError),

    /// The block store holds no block yet, so no epoch can be derived.
    #[error("no block found")]
    NoBlockFound,
}

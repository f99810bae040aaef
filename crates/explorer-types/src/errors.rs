//! # Error Types
//!
//! Errors shared across the explorer crates.

use thiserror::Error;

/// A string failed to parse as a 20-byte account address.
#[derive(Debug, Clone, Error)]
#[error("invalid address: {input:?}")]
pub struct AddressParseError {
    /// The rejected input.
    pub input: String,
}

/// Errors surfaced by the persistence ports.
///
/// The explorer does not interpret backend failures beyond reporting
/// them; the concrete store (Postgres in the deployed system, in-memory
/// in tests) maps its own error type into one of these.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),

    /// The backend is unreachable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

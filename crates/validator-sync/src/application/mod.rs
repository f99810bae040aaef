//! # Application Layer
//!
//! The service orchestrating reconciliation, epoch derivation, and
//! metrics aggregation.

pub mod service;

pub use service::{SyncDependencies, ValidatorSyncService};

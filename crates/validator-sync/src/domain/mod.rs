//! # Domain Layer
//!
//! Value objects, errors, and epoch arithmetic for validator sync.

pub mod epoch;
pub mod errors;
pub mod value_objects;

pub use epoch::{epoch_at, EPOCH_LENGTH};
pub use errors::{RpcError, ValidatorSyncError};
pub use value_objects::{
    parse_quantity, BlockTag, EpochInfo, NetworkMetrics, SignerMetric, SyncReport, CONSENSUS_TYPE,
};

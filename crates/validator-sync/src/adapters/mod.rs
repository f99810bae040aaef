//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports: the Besu JSON-RPC
//! gateway and the in-memory store backends.

pub mod besu_rpc;
pub mod memory_store;

pub use besu_rpc::BesuRpcClient;
pub use memory_store::{InMemoryBlockStore, InMemoryValidatorStore};

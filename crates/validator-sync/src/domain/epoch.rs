//! # Epoch Arithmetic
//!
//! QBFT checkpoints its validator set every fixed number of blocks; the
//! explorer only needs to place the chain head inside that grid.

/// QBFT epoch length in blocks (the Besu default).
pub const EPOCH_LENGTH: u64 = 30_000;

/// Epoch containing the given block height.
pub fn epoch_at(block_number: u64) -> u64 {
    block_number / EPOCH_LENGTH
}

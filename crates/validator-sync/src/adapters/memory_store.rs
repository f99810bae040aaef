//! # In-Memory Store Adapters
//!
//! Map-backed implementations of the persistence ports. The deployed
//! system keeps validators in Postgres behind the same traits; these
//! back the runtime until that indexer is attached, and every test.

use async_trait::async_trait;
use explorer_types::{Address, Block, StoreError, Validator, ValidatorStatus};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::ports::{BlockStore, ValidatorStore};

/// Validator store backed by a `HashMap` keyed by address.
#[derive(Default)]
pub struct InMemoryValidatorStore {
    inner: RwLock<HashMap<Address, Validator>>,
}

impl InMemoryValidatorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut validators: Vec<Validator>) -> Vec<Validator> {
        validators.sort_by_key(|v| v.address);
        validators
    }
}

#[async_trait]
impl ValidatorStore for InMemoryValidatorStore {
    async fn find_by_address(&self, address: &Address) -> Result<Option<Validator>, StoreError> {
        Ok(self.inner.read().get(address).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Validator>, StoreError> {
        Ok(Self::sorted(self.inner.read().values().cloned().collect()))
    }

    async fn find_active(&self) -> Result<Vec<Validator>, StoreError> {
        Ok(Self::sorted(
            self.inner
                .read()
                .values()
                .filter(|v| v.is_active)
                .cloned()
                .collect(),
        ))
    }

    async fn find_inactive(&self) -> Result<Vec<Validator>, StoreError> {
        Ok(Self::sorted(
            self.inner
                .read()
                .values()
                .filter(|v| !v.is_active)
                .cloned()
                .collect(),
        ))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().len() as u64)
    }

    async fn count_active(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().values().filter(|v| v.is_active).count() as u64)
    }

    async fn count_inactive(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().values().filter(|v| !v.is_active).count() as u64)
    }

    async fn average_uptime(&self) -> Result<f64, StoreError> {
        let guard = self.inner.read();
        if guard.is_empty() {
            return Ok(0.0);
        }
        let sum: f64 = guard.values().map(|v| v.uptime).sum();
        Ok(sum / guard.len() as f64)
    }

    async fn update_all_status(
        &self,
        status: ValidatorStatus,
        is_active: bool,
    ) -> Result<(), StoreError> {
        let mut guard = self.inner.write();
        for validator in guard.values_mut() {
            validator.status = status;
            validator.is_active = is_active;
        }
        Ok(())
    }

    async fn save(&self, validator: Validator) -> Result<(), StoreError> {
        self.inner.write().insert(validator.address, validator);
        Ok(())
    }
}

/// Block store holding only the chain head.
#[derive(Default)]
pub struct InMemoryBlockStore {
    latest: RwLock<Option<Block>>,
}

impl InMemoryBlockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the chain head.
    pub fn set_latest(&self, block: Block) {
        *self.latest.write() = Some(block);
    }
}

#[async_trait]
impl BlockStore for InMemoryBlockStore {
    async fn find_latest(&self) -> Result<Option<Block>, StoreError> {
        Ok(self.latest.read().clone())
    }
}

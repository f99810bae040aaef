//! Epoch derivation and network-metrics aggregation flows.

#![cfg(test)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use explorer_types::Block;
use validator_sync::{
    InMemoryBlockStore, InMemoryValidatorStore, MockConsensusRpc, SyncDependencies,
    ValidatorSyncApi, ValidatorSyncError, ValidatorSyncService, EPOCH_LENGTH,
};

use super::{addr, TickingClock};

fn block_at(number: u64) -> Block {
    Block {
        number,
        hash: [0u8; 32],
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
    }
}

fn build_service(
    rpc: MockConsensusRpc,
    validators: Arc<InMemoryValidatorStore>,
    blocks: Arc<InMemoryBlockStore>,
) -> ValidatorSyncService<MockConsensusRpc, InMemoryValidatorStore, InMemoryBlockStore> {
    ValidatorSyncService::new(SyncDependencies {
        rpc: Arc::new(rpc),
        validators,
        blocks,
    })
    .with_clock(Box::new(TickingClock::new()))
}

#[tokio::test]
async fn test_epoch_from_chain_head() {
    let blocks = Arc::new(InMemoryBlockStore::new());
    let service = build_service(
        MockConsensusRpc::default(),
        Arc::new(InMemoryValidatorStore::new()),
        Arc::clone(&blocks),
    );

    blocks.set_latest(block_at(64_500));
    let info = service.epoch_info().await.unwrap();
    assert_eq!(info.current_epoch, 2);
    assert_eq!(info.epoch_length, EPOCH_LENGTH);

    blocks.set_latest(block_at(0));
    let info = service.epoch_info().await.unwrap();
    assert_eq!(info.current_epoch, 0);
}

#[tokio::test]
async fn test_epoch_requires_a_block() {
    let service = build_service(
        MockConsensusRpc::default(),
        Arc::new(InMemoryValidatorStore::new()),
        Arc::new(InMemoryBlockStore::new()),
    );
    assert!(matches!(
        service.epoch_info().await,
        Err(ValidatorSyncError::NoBlockFound)
    ));
}

#[tokio::test]
async fn test_metrics_survive_missing_block() {
    let store = Arc::new(InMemoryValidatorStore::new());
    let rpc = MockConsensusRpc {
        validators: vec![addr(1)],
        ..Default::default()
    };
    let service = build_service(rpc, Arc::clone(&store), Arc::new(InMemoryBlockStore::new()));
    service.sync_validators().await.unwrap();

    // No block indexed yet: metrics still succeed with the fallback.
    let metrics = service.network_metrics().await.unwrap();
    assert_eq!(metrics.current_epoch, 0);
    assert_eq!(metrics.epoch_length, EPOCH_LENGTH);
    assert_eq!(metrics.total_validators, 1);
}

#[tokio::test]
async fn test_metrics_aggregate_counts_and_uptime() {
    let store = Arc::new(InMemoryValidatorStore::new());
    let blocks = Arc::new(InMemoryBlockStore::new());
    blocks.set_latest(block_at(90_000));

    // Pass one: three validators.
    let rpc = MockConsensusRpc {
        validators: vec![addr(1), addr(2), addr(3)],
        ..Default::default()
    };
    build_service(rpc, Arc::clone(&store), Arc::clone(&blocks))
        .sync_validators()
        .await
        .unwrap();

    // Pass two, later: one validator leaves the set.
    let rpc = MockConsensusRpc {
        validators: vec![addr(1), addr(2)],
        ..Default::default()
    };
    let service = ValidatorSyncService::new(SyncDependencies {
        rpc: Arc::new(rpc),
        validators: Arc::clone(&store),
        blocks: Arc::clone(&blocks),
    })
    .with_clock(Box::new(TickingClock::offset_by(600)));
    service.sync_validators().await.unwrap();

    let metrics = service.network_metrics().await.unwrap();
    assert_eq!(metrics.total_validators, 3);
    assert_eq!(metrics.active_validators, 2);
    assert_eq!(metrics.inactive_validators, 1);
    assert_eq!(metrics.consensus_type, "QBFT");
    assert_eq!(metrics.current_epoch, 3);
    assert_eq!(metrics.epoch_length, EPOCH_LENGTH);
    // Two re-observed at 99.0, one still at its creation 100.0.
    let expected = (99.0 + 99.0 + 100.0) / 3.0;
    assert!((metrics.average_uptime - expected).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_validator_queries_pass_through() {
    let store = Arc::new(InMemoryValidatorStore::new());
    let rpc = MockConsensusRpc {
        validators: vec![addr(1), addr(2)],
        ..Default::default()
    };
    let service = build_service(rpc, Arc::clone(&store), Arc::new(InMemoryBlockStore::new()));
    service.sync_validators().await.unwrap();

    assert_eq!(service.validators().await.unwrap().len(), 2);
    assert_eq!(service.active_validators().await.unwrap().len(), 2);
    assert!(service.inactive_validators().await.unwrap().is_empty());
    assert!(service
        .validator_by_address(&addr(1))
        .await
        .unwrap()
        .is_some());
    assert!(service
        .validator_by_address(&addr(9))
        .await
        .unwrap()
        .is_none());
}

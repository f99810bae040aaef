//! # Sync Scheduler
//!
//! Periodic driver for the reconciliation pass. The engine itself makes
//! no overlap guarantee, so the scheduler enforces the single-flight
//! rule: a tick that fires while a pass is still running is skipped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::ports::ValidatorSyncApi;

/// Periodic sync driver.
pub struct SyncScheduler<A: ValidatorSyncApi> {
    service: Arc<A>,
    interval: Duration,
    in_flight: Mutex<()>,
}

impl<A: ValidatorSyncApi> SyncScheduler<A> {
    /// Create a scheduler firing every `interval`.
    pub fn new(service: Arc<A>, interval: Duration) -> Self {
        Self {
            service,
            interval,
            in_flight: Mutex::new(()),
        }
    }

    /// Run one guarded pass. Returns `false` if a pass was already in
    /// flight (manual triggers share the same service) and this one was
    /// skipped.
    async fn run_once(&self) -> bool {
        let Ok(_guard) = self.in_flight.try_lock() else {
            warn!("previous sync pass still running, skipping tick");
            return false;
        };
        match self.service.sync_validators().await {
            Ok(report) => info!(
                pass_id = %report.pass_id,
                observed = report.observed,
                created = report.created,
                "scheduled sync pass complete"
            ),
            // The pass is idempotent; the next tick retries from scratch.
            Err(err) => error!(error = %err, "scheduled sync pass failed"),
        }
        true
    }

    /// Drive passes until the shutdown channel flips to `true` or its
    /// sender is dropped.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!(interval_secs = self.interval.as_secs(), "sync scheduler started");
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_once().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("sync scheduler stopping");
                        break;
                    }
                }
            }
        }
    }
}

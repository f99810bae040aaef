//! # QBFT Explorer Test Suite
//!
//! Unified test crate for cross-crate integration flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── sync_flow.rs      # Reconciliation passes end to end
//!     └── metrics_flow.rs   # Epoch derivation and network metrics
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p explorer-tests
//!
//! # By flow
//! cargo test -p explorer-tests integration::sync_flow
//! cargo test -p explorer-tests integration::metrics_flow
//! ```

#![allow(dead_code)]

pub mod integration;

//! Telemetry configuration from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

/// Configuration for the logging bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name stamped on log lines.
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,

    /// Whether to emit JSON-formatted logs (for log shippers).
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "qbft-explorer".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// - `EXPLORER_SERVICE_NAME`: service name (default: qbft-explorer)
    /// - `EXPLORER_LOG_LEVEL`: log level (default: info)
    /// - `EXPLORER_LOG_JSON`: JSON output when `true`/`1` (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("EXPLORER_SERVICE_NAME")
                .unwrap_or_else(|_| "qbft-explorer".to_string()),
            log_level: env::var("EXPLORER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            json_logs: env::var("EXPLORER_LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

//! # Besu JSON-RPC Adapter
//!
//! Implements the `ConsensusRpc` port against a Besu node's QBFT RPC
//! extension, JSON-RPC 2.0 over HTTP POST.

use async_trait::async_trait;
use explorer_types::Address;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::config::SyncConfig;
use crate::domain::{BlockTag, RpcError, SignerMetric};
use crate::ports::ConsensusRpc;

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: serde_json::Value,
    id: u64,
}

impl<'a> JsonRpcRequest<'a> {
    fn new(method: &'a str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        }
    }
}

/// JSON-RPC 2.0 error member.
#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcErrorObject>,
}

/// Signer metric record as Besu serializes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignerMetricDto {
    address: String,
    proposed_block_count: String,
    last_proposed_block_number: String,
}

/// HTTP client for a Besu node's QBFT RPC methods.
pub struct BesuRpcClient {
    url: String,
    http: reqwest::Client,
}

impl BesuRpcClient {
    /// Build a client from the sync configuration. The configured
    /// timeout bounds every call so a pass cannot hang indefinitely.
    pub fn new(config: &SyncConfig) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.rpc_timeout_secs))
            .build()
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        Ok(Self {
            url: config.rpc_url.clone(),
            http,
        })
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, RpcError> {
        debug!(method, url = %self.url, "dispatching rpc call");
        let request = JsonRpcRequest::new(method, params);
        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Http {
                status: status.as_u16(),
            });
        }

        let envelope: JsonRpcResponse<T> = response
            .json()
            .await
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;

        // A populated error member is fatal even on HTTP 200.
        if let Some(err) = envelope.error {
            return Err(RpcError::Protocol {
                code: err.code,
                message: err.message,
            });
        }
        envelope
            .result
            .ok_or_else(|| RpcError::InvalidResponse("missing result member".to_string()))
    }
}

#[async_trait]
impl ConsensusRpc for BesuRpcClient {
    async fn validators_by_block_number(
        &self,
        block: BlockTag,
    ) -> Result<Vec<Address>, RpcError> {
        let raw: Vec<String> = self
            .call(
                "qbft_getValidatorsByBlockNumber",
                json!([block.to_string()]),
            )
            .await?;
        raw.iter()
            .map(|s| {
                Address::from_hex(s).map_err(|e| RpcError::InvalidResponse(e.to_string()))
            })
            .collect()
    }

    async fn signer_metrics(&self) -> Result<Vec<SignerMetric>, RpcError> {
        let raw: Vec<SignerMetricDto> = self.call("qbft_getSignerMetrics", json!([])).await?;
        raw.into_iter()
            .map(|dto| {
                let address = Address::from_hex(&dto.address)
                    .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;
                Ok(SignerMetric {
                    address,
                    proposed_block_count: dto.proposed_block_count,
                    last_proposed_block_number: dto.last_proposed_block_number,
                })
            })
            .collect()
    }
}

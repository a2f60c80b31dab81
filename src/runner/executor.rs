use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// The single request-level failure kind.
///
/// Connection errors, timeouts and non-2xx statuses all end up here; `reason`
/// is kept for diagnostics only.
#[derive(Debug, Clone, Error)]
#[error("request to {url} failed: {reason}")]
pub struct RequestFailed {
    pub url: String,
    pub reason: String,
}

/// Performs one request against an endpoint.
#[async_trait]
pub trait Execute: Send + Sync {
    async fn execute(
        &self,
        endpoint: &str,
        method: &Method,
        payload: Option<&str>,
    ) -> Result<(), RequestFailed>;
}

#[derive(Clone)]
pub struct RequestExecutor {
    client: Client,
    base_url: String,
}

impl RequestExecutor {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.is_empty() || endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

#[async_trait]
impl Execute for RequestExecutor {
    async fn execute(
        &self,
        endpoint: &str,
        method: &Method,
        payload: Option<&str>,
    ) -> Result<(), RequestFailed> {
        let url = self.url_for(endpoint);
        let mut req_builder = self.client.request(method.clone(), &url);

        if let Some(payload) = payload.filter(|p| !p.is_empty()) {
            req_builder = req_builder.json(&json!({ "payload": payload }));
        }

        // Body is never read; status alone decides the outcome.
        req_builder
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map(|_| ())
            .map_err(|e| RequestFailed {
                url,
                reason: e.to_string(),
            })
    }
}

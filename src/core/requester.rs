//! Transport abstraction for the exchange-rate API

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A minimal HTTP GET seam. Implementations issue one request with the
/// given query parameters and return the response body as parsed JSON.
#[async_trait]
pub trait Requester: Send + Sync {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<Value>;
}

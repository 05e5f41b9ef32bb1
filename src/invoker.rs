use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::request::IncomingRequest;

/// Seam to the underlying command-invocation machinery.
///
/// The pipeline calls this when no hook replaced the response, and returns
/// the full structured output to the caller as JSON. Process spawning,
/// alias resolution and output capture live behind this trait and are not
/// part of this crate.
#[async_trait]
pub trait CommandInvoker: Send + Sync {
    /// Execute the request's command with its args and options, returning
    /// the full structured output
    async fn invoke(&self, request: &IncomingRequest) -> Result<Value>;
}

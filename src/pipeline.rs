use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::hooks::{HookOutcome, HookRegistry};
use crate::invoker::CommandInvoker;
use crate::request::{CallerContext, IncomingRequest};

/// Per-listener request pipeline: registered hooks run first, default
/// command invocation is the fallback.
///
/// One pipeline exists per listening server instance and carries that
/// instance's port; the registry behind it may be shared with instances
/// on other ports, which is why hooks carry their own port filter.
pub struct RequestPipeline {
    registry: Arc<HookRegistry>,
    invoker: Arc<dyn CommandInvoker>,
    port: String,
}

impl RequestPipeline {
    pub fn new(
        registry: Arc<HookRegistry>,
        invoker: Arc<dyn CommandInvoker>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            invoker,
            port: port.into(),
        }
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Handle one inbound request and produce the caller-visible body.
    ///
    /// `ip_address` and `host` come from the transport layer and are
    /// forwarded to hooks verbatim; the pipeline itself never inspects
    /// them. An `Err` here fails this request only.
    pub async fn handle(
        &self,
        ip_address: &str,
        host: &str,
        request: IncomingRequest,
    ) -> Result<String> {
        let caller = CallerContext {
            ip_address: ip_address.to_string(),
            host: host.to_string(),
            port: self.port.clone(),
        };

        info!(
            command = %request.command,
            alias = %request.alias,
            port = %self.port,
            "Handling request"
        );

        match self.registry.dispatch(&caller, &request).await? {
            HookOutcome::Replaced(payload) => render_payload(payload),
            HookOutcome::Unaltered => {
                let output = self
                    .invoker
                    .invoke(&request)
                    .await
                    .context(format!("Command '{}' failed", request.command))?;
                serde_json::to_string(&output).context("Failed to serialize command output")
            }
        }
    }
}

/// Hook payloads that are already strings go back to the caller verbatim;
/// anything structured is serialized as JSON.
fn render_payload(payload: Value) -> Result<String> {
    match payload {
        Value::String(s) => Ok(s),
        other => serde_json::to_string(&other).context("Failed to serialize hook payload"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_payload_passes_through_raw() {
        assert_eq!(render_payload(json!("blocked")).unwrap(), "blocked");
    }

    #[test]
    fn test_structured_payload_serializes_to_json() {
        assert_eq!(
            render_payload(json!({"ok": true})).unwrap(),
            r#"{"ok":true}"#
        );
    }
}

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::{debug, warn};

use super::hook::RequestHook;
use super::outcome::HookOutcome;
use crate::request::{CallerContext, IncomingRequest};

const DEFAULT_HOOK_TIMEOUT: Duration = Duration::from_secs(5);

/// Ordered registry of request-alter hooks.
///
/// Populated at process startup (explicit registration, no runtime
/// discovery), then shared read-only between the server instances that
/// dispatch through it.
pub struct HookRegistry {
    hooks: Vec<Arc<dyn RequestHook>>,
    default_timeout: Duration,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_HOOK_TIMEOUT)
    }

    /// Create a registry with a custom default hook timeout
    pub fn with_timeout(default_timeout: Duration) -> Self {
        Self {
            hooks: Vec::new(),
            default_timeout,
        }
    }

    /// Register a hook. Registration order is dispatch order.
    pub fn register(&mut self, hook: Arc<dyn RequestHook>) {
        debug!(hook = hook.name(), "Registered request hook");
        self.hooks.push(hook);
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Timeout for a hook (custom or registry default)
    fn timeout_for(&self, hook: &dyn RequestHook) -> Duration {
        hook.timeout().unwrap_or(self.default_timeout)
    }

    /// Run the hooks matching the caller's port, in registration order.
    ///
    /// The port guard is evaluated here, before each hook body. The first
    /// hook returning [`HookOutcome::Replaced`] determines the response
    /// and ends the chain; `Unaltered` falls through to the next hook.
    /// A hook error or timeout fails this request only; the registry
    /// stays usable for subsequent requests.
    pub async fn dispatch(
        &self,
        caller: &CallerContext,
        request: &IncomingRequest,
    ) -> Result<HookOutcome> {
        for hook in &self.hooks {
            if let Some(port) = hook.port_filter() {
                if port != caller.port {
                    debug!(
                        hook = hook.name(),
                        port = %caller.port,
                        "Port filter did not match, skipping hook"
                    );
                    continue;
                }
            }

            let timeout = self.timeout_for(hook.as_ref());

            match tokio::time::timeout(timeout, hook.on_request(caller, request)).await {
                Ok(Ok(HookOutcome::Replaced(payload))) => {
                    debug!(hook = hook.name(), "Hook replaced the response");
                    return Ok(HookOutcome::Replaced(payload));
                }
                Ok(Ok(HookOutcome::Unaltered)) => {
                    debug!(hook = hook.name(), "Hook left the request unaltered");
                }
                Ok(Err(e)) => {
                    warn!(hook = hook.name(), error = %e, "Hook failed");
                    return Err(e.context(format!("Hook '{}' failed", hook.name())));
                }
                Err(_) => {
                    warn!(
                        hook = hook.name(),
                        timeout_ms = timeout.as_millis(),
                        "Hook timed out"
                    );
                    return Err(anyhow!("Hook '{}' timed out", hook.name()));
                }
            }
        }

        Ok(HookOutcome::Unaltered)
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::outcome::HookOutcome;
use crate::request::{CallerContext, IncomingRequest};

/// Request-alter hook, invoked once per inbound request before default
/// processing.
///
/// The same registry can back server instances listening on different
/// ports, so a hook that only cares about one instance should restrict
/// itself with [`port_filter`](RequestHook::port_filter) rather than
/// re-checking the port in its body.
#[async_trait]
pub trait RequestHook: Send + Sync {
    /// Hook name for logging
    fn name(&self) -> &str;

    /// Port this hook is restricted to; `None` applies to every port.
    /// Compared against `CallerContext::port` as an exact string before
    /// `on_request` runs, so a non-matching hook body never executes.
    fn port_filter(&self) -> Option<&str> {
        None
    }

    /// Inspect the request and decide how it should be handled.
    /// The request is read-only; any alteration is expressed through the
    /// returned [`HookOutcome`].
    async fn on_request(
        &self,
        caller: &CallerContext,
        request: &IncomingRequest,
    ) -> Result<HookOutcome>;

    /// Custom timeout for this hook; `None` uses the registry default
    fn timeout(&self) -> Option<Duration> {
        None
    }
}

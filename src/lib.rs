//! Request-alter extension layer for a command-invocation REST server.
//!
//! A host server builds one [`RequestPipeline`] per listening port and
//! feeds every inbound request through it. Registered [`RequestHook`]s
//! see the request first and may replace the caller-visible response;
//! otherwise the pipeline falls back to the [`CommandInvoker`] and
//! returns its full output as JSON.

pub mod config;
pub mod hooks;
pub mod invoker;
pub mod pipeline;
pub mod request;

pub use config::{load_config, HooksConfig, ListenConfig, ServerConfig};
pub use hooks::{HookOutcome, HookRegistry, RequestHook};
pub use invoker::CommandInvoker;
pub use pipeline::RequestPipeline;
pub use request::{CallerContext, IncomingRequest, OptionValue};

/// Initialize structured JSON logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A command option value as it appears on the wire: either a string
/// assignment or a bare boolean flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
}

/// A REST-style command invocation request, parsed from the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingRequest {
    /// Target environment alias (e.g. "@self")
    pub alias: String,
    /// Command name to execute
    pub command: String,
    /// Positional arguments, in order
    #[serde(default)]
    pub args: Vec<String>,
    /// Named options
    #[serde(default)]
    pub options: BTreeMap<String, OptionValue>,
}

/// Network origin of a request.
///
/// `ip_address` and `host` are reported by the transport layer and can be
/// spoofed by non-browser clients. The host passes them to hooks verbatim
/// and never bases an accept/reject decision on them; any authorization
/// built on top of these fields is a hook's own responsibility.
#[derive(Debug, Clone)]
pub struct CallerContext {
    pub ip_address: String,
    pub host: String,
    /// Listening port the request arrived on. Matched by exact string
    /// compare, never parsed as a number.
    pub port: String,
}

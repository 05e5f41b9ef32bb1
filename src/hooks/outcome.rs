use serde_json::Value;

/// What a hook decided about a request.
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutcome {
    /// Fall through to the next hook, then to default processing
    Unaltered,
    /// Caller-visible payload supplied by the hook; default processing
    /// is skipped and the host renders this value instead
    Replaced(Value),
}

impl HookOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, HookOutcome::Replaced(_))
    }
}

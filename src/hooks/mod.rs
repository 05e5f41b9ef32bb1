pub mod hook;
pub mod outcome;
pub mod registry;

pub use hook::RequestHook;
pub use outcome::HookOutcome;
pub use registry::HookRegistry;

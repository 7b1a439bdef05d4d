//! Configuration access for item generators.
//!
//! Every lookup names its scope explicitly; there is no global configuration.

mod order;
mod scope;

pub use order::{MemoryOrderConfig, OrderConfig};
pub use scope::{MemoryScopeConfig, Scope, ScopeConfig, is_truthy};

//! Core order export types: the sales order model, the outbound line item
//! shape and the error type shared by all item generators.

mod builder;
mod error;
mod types;

pub use builder::*;
pub use error::*;
pub use types::*;

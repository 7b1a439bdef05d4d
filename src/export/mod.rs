//! Order export plumbing shared by all item generators: the per-order
//! context, the request buffer, the generator contract and the run loop.

mod generator;
mod run;
mod storage;

pub use generator::{ExportContext, ItemGenerator, Outcome, SkipReason};
pub use run::{ExportRun, OrderExport};
pub use storage::RequestStorage;

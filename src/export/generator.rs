use serde::{Deserialize, Serialize};

use super::RequestStorage;
use crate::config::OrderConfig;
use crate::core::{ExportError, SalesOrder};

/// Read-only view of the order being exported, plus the order settings
/// that apply to it.
#[derive(Clone, Copy)]
pub struct ExportContext<'a> {
    order: &'a SalesOrder,
    order_config: &'a dyn OrderConfig,
}

impl<'a> ExportContext<'a> {
    pub fn new(order: &'a SalesOrder, order_config: &'a dyn OrderConfig) -> Self {
        Self {
            order,
            order_config,
        }
    }

    pub fn sales_order(&self) -> &'a SalesOrder {
        self.order
    }

    pub fn order_config(&self) -> &'a dyn OrderConfig {
        self.order_config
    }
}

impl std::fmt::Debug for ExportContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportContext")
            .field("order", &self.order.increment_id)
            .finish_non_exhaustive()
    }
}

/// Result of one generator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A line item was appended.
    Emitted,
    /// Nothing was appended.
    Skipped(SkipReason),
}

/// Why a generator appended nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The feature is switched off for the order's store.
    FeatureDisabled,
    /// The order carries no amount for this item.
    NoAmount,
    /// The amount is below the emission threshold.
    NegligibleAmount,
}

/// One stage of the per-item generation phase of an order export.
///
/// Implementors provide [`generate`](Self::generate); [`execute`](Self::execute)
/// runs the full initialize → generate → finalize sequence.
pub trait ItemGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn initialize(&self, _context: &ExportContext<'_>) -> Result<(), ExportError> {
        Ok(())
    }

    fn generate(
        &self,
        context: &ExportContext<'_>,
        request: &mut RequestStorage,
    ) -> Result<Outcome, ExportError>;

    fn finalize(
        &self,
        _context: &ExportContext<'_>,
        _request: &mut RequestStorage,
    ) -> Result<(), ExportError> {
        Ok(())
    }

    fn execute(
        &self,
        context: &ExportContext<'_>,
        request: &mut RequestStorage,
    ) -> Result<Outcome, ExportError> {
        self.initialize(context)?;
        let outcome = self.generate(context, request)?;
        self.finalize(context, request)?;
        Ok(outcome)
    }
}

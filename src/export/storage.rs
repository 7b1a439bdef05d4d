use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::OrderItem;
#[cfg(feature = "json")]
use crate::core::ExportError;

/// Accumulates the line items of one order export request.
///
/// Generators only ever append; nothing reads back or removes entries
/// while a run is in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStorage {
    order_items: Vec<OrderItem>,
}

impl RequestStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line item.
    pub fn add_data(&mut self, item: OrderItem) {
        trace!(type_id = item.type_id.id(), name = %item.name, "order item added");
        self.order_items.push(item);
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.order_items
    }

    pub fn len(&self) -> usize {
        self.order_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order_items.is_empty()
    }

    pub fn into_items(self) -> Vec<OrderItem> {
        self.order_items
    }

    /// Render the request body fragment (`{"orderItems": [...]}`).
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

//! Per-store order export settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{ExportError, ReferrerId, StoreId};

/// Order export settings resolved per store.
pub trait OrderConfig: Send + Sync {
    /// Referrer (sales channel) id the target system books orders of this store under.
    fn order_referrer_id(&self, store_id: StoreId) -> Result<ReferrerId, ExportError>;
}

/// In-memory [`OrderConfig`]: explicit per-store referrers with an optional
/// fallback for stores not listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryOrderConfig {
    #[serde(default)]
    pub referrers: BTreeMap<StoreId, ReferrerId>,
    #[serde(default)]
    pub default_referrer: Option<ReferrerId>,
}

impl MemoryOrderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn referrer(mut self, store_id: StoreId, referrer_id: ReferrerId) -> Self {
        self.referrers.insert(store_id, referrer_id);
        self
    }

    pub fn default_referrer(mut self, referrer_id: ReferrerId) -> Self {
        self.default_referrer = Some(referrer_id);
        self
    }
}

impl OrderConfig for MemoryOrderConfig {
    fn order_referrer_id(&self, store_id: StoreId) -> Result<ReferrerId, ExportError> {
        self.referrers
            .get(&store_id)
            .copied()
            .or(self.default_referrer)
            .ok_or_else(|| {
                ExportError::configuration(format!(
                    "no order referrer configured for store {store_id}"
                ))
            })
    }
}

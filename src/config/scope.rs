//! Store-scoped configuration values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{ExportError, StoreId};

/// Scope a configuration value is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Installation-wide default.
    Default,
    /// A single store view.
    Store(StoreId),
}

/// Read access to merchant configuration.
///
/// Values are raw strings as stored by the shop backend; `Ok(None)` means the
/// path is not set in the requested scope (nor in any scope it inherits from).
pub trait ScopeConfig: Send + Sync {
    fn value(&self, path: &str, scope: Scope) -> Result<Option<String>, ExportError>;

    /// Whether the flag at `path` is switched on. See [`is_truthy`].
    fn is_set_flag(&self, path: &str, scope: Scope) -> Result<bool, ExportError> {
        Ok(is_truthy(self.value(path, scope)?.as_deref()))
    }
}

/// Truthiness of a stored configuration value: missing, `""` and `"0"` are
/// off, everything else is on.
pub fn is_truthy(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "0")
}

/// In-memory [`ScopeConfig`] with store → default fallback.
///
/// Stores listed in `known_stores` may be queried; any other store id is a
/// configuration error. An empty `known_stores` accepts every store.
///
/// ```
/// use plenty_fee::config::*;
///
/// let config = MemoryScopeConfig::new()
///     .set_default("Extrafee/Extrafee/status", "0")
///     .set_store(2, "Extrafee/Extrafee/status", "1");
///
/// assert!(!config.is_set_flag("Extrafee/Extrafee/status", Scope::Store(1)).unwrap());
/// assert!(config.is_set_flag("Extrafee/Extrafee/status", Scope::Store(2)).unwrap());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryScopeConfig {
    #[serde(default)]
    pub default: BTreeMap<String, String>,
    #[serde(default)]
    pub stores: BTreeMap<StoreId, BTreeMap<String, String>>,
    #[serde(default)]
    pub known_stores: Vec<StoreId>,
}

impl MemoryScopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_default(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.default.insert(path.into(), value.into());
        self
    }

    pub fn set_store(
        mut self,
        store_id: StoreId,
        path: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.stores
            .entry(store_id)
            .or_default()
            .insert(path.into(), value.into());
        self
    }

    /// Restrict lookups to the given stores.
    pub fn known_stores(mut self, stores: impl IntoIterator<Item = StoreId>) -> Self {
        self.known_stores = stores.into_iter().collect();
        self
    }
}

impl ScopeConfig for MemoryScopeConfig {
    fn value(&self, path: &str, scope: Scope) -> Result<Option<String>, ExportError> {
        match scope {
            Scope::Default => Ok(self.default.get(path).cloned()),
            Scope::Store(store_id) => {
                if !self.known_stores.is_empty() && !self.known_stores.contains(&store_id) {
                    return Err(ExportError::configuration(format!(
                        "store {store_id} is not configured"
                    )));
                }
                Ok(self
                    .stores
                    .get(&store_id)
                    .and_then(|values| values.get(path))
                    .or_else(|| self.default.get(path))
                    .cloned())
            }
        }
    }
}

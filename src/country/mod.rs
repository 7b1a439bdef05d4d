//! Billing country → VAT-country id resolution.

mod table;

pub use table::CountryTable;

use crate::core::{CountryVatId, ExportError};

/// Maps an ISO 3166-1 alpha-2 country code to the target system's
/// VAT-country identifier.
pub trait CountryResolver: Send + Sync {
    /// Fails with [`ExportError::UnresolvedCountry`] for unknown codes.
    fn resolve(&self, country_code: &str) -> Result<CountryVatId, ExportError>;
}

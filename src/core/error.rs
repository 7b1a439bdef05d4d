use thiserror::Error;

/// Errors that can occur while generating order export line items.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// A configuration lookup failed (unknown scope, missing referrer, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The billing country has no VAT-country identifier in the target system.
    #[error("unresolved country: {0}")]
    UnresolvedCountry(String),

    /// Builder encountered invalid or missing order data.
    #[error("builder error: {0}")]
    Builder(String),

    /// Request rendering failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ExportError {
    /// Shorthand for a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Shorthand for an unresolved country error, carrying the offending code.
    pub fn unresolved_country(country_code: impl AsRef<str>) -> Self {
        let code = country_code.as_ref();
        if code.is_empty() {
            Self::UnresolvedCountry("billing address has no country code".into())
        } else {
            Self::UnresolvedCountry(format!("no VAT country mapped for '{code}'"))
        }
    }

    /// Whether this error came from a configuration lookup.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

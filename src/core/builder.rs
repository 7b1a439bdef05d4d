use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::error::ExportError;
use super::types::*;

/// Builder for [`SalesOrder`].
///
/// ```
/// use plenty_fee::core::*;
/// use rust_decimal_macros::dec;
///
/// let order = SalesOrderBuilder::new("100000042", 1)
///     .base_currency("EUR")
///     .billing_address(BillingAddressBuilder::new("Berlin", "10115", "DE").build())
///     .data("fee", dec!(2.50))
///     .build()
///     .unwrap();
///
/// assert_eq!(order.data("fee"), Some(dec!(2.50)));
/// ```
pub struct SalesOrderBuilder {
    increment_id: String,
    store_id: StoreId,
    base_currency_code: String,
    billing_address: Option<BillingAddress>,
    data: BTreeMap<String, Decimal>,
}

impl SalesOrderBuilder {
    pub fn new(increment_id: impl Into<String>, store_id: StoreId) -> Self {
        Self {
            increment_id: increment_id.into(),
            store_id,
            base_currency_code: "EUR".to_string(),
            billing_address: None,
            data: BTreeMap::new(),
        }
    }

    pub fn base_currency(mut self, code: impl Into<String>) -> Self {
        self.base_currency_code = code.into();
        self
    }

    pub fn billing_address(mut self, address: BillingAddress) -> Self {
        self.billing_address = Some(address);
        self
    }

    /// Attach a named decimal field (e.g. the extra fee amount under `fee`).
    pub fn data(mut self, key: impl Into<String>, value: Decimal) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Result<SalesOrder, ExportError> {
        let billing_address = self
            .billing_address
            .ok_or_else(|| ExportError::Builder("billing address is required".into()))?;

        if self.increment_id.trim().is_empty() {
            return Err(ExportError::Builder("increment id cannot be empty".into()));
        }
        if self.base_currency_code.trim().is_empty() {
            return Err(ExportError::Builder(
                "base currency code cannot be empty".into(),
            ));
        }

        Ok(SalesOrder {
            increment_id: self.increment_id,
            store_id: self.store_id,
            base_currency_code: self.base_currency_code,
            billing_address,
            data: self.data,
        })
    }
}

/// Builder for [`BillingAddress`].
pub struct BillingAddressBuilder {
    street: Option<String>,
    city: String,
    postal_code: String,
    country_code: String,
}

impl BillingAddressBuilder {
    pub fn new(
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            street: None,
            city: city.into(),
            postal_code: postal_code.into(),
            country_code: country_code.into(),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn build(self) -> BillingAddress {
        BillingAddress {
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            country_code: self.country_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn address() -> BillingAddress {
        BillingAddressBuilder::new("Berlin", "10115", "DE")
            .street("Friedrichstraße 123")
            .build()
    }

    #[test]
    fn builds_order_with_defaults() {
        let order = SalesOrderBuilder::new("100000001", 2)
            .billing_address(address())
            .build()
            .unwrap();
        assert_eq!(order.store_id, 2);
        assert_eq!(order.base_currency_code, "EUR");
        assert_eq!(order.billing_country_code(), "DE");
        assert_eq!(order.data("fee"), None);
    }

    #[test]
    fn data_fields_are_readable() {
        let order = SalesOrderBuilder::new("100000002", 1)
            .billing_address(address())
            .data("fee", dec!(3.99))
            .data("fee", dec!(4.99))
            .build()
            .unwrap();
        assert_eq!(order.data("fee"), Some(dec!(4.99)));
    }

    #[test]
    fn missing_billing_address_fails() {
        let err = SalesOrderBuilder::new("100000003", 1).build().unwrap_err();
        assert!(matches!(err, ExportError::Builder(_)));
        assert!(err.to_string().contains("billing address"));
    }

    #[test]
    fn empty_currency_fails() {
        let err = SalesOrderBuilder::new("100000004", 1)
            .base_currency(" ")
            .billing_address(address())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("currency"));
    }
}

//! # plenty-fee
//!
//! Extra fee (payment surcharge) line items for order exports to an external
//! order-management API.
//!
//! An export run hands each order to a list of [`export::ItemGenerator`]s that
//! append line items to a shared [`export::RequestStorage`].
//! [`fee::ExtraFeeGenerator`] is the generator for extra fees: it checks the
//! store's feature flag and the fee amount, then emits a single surcharge item
//! in the target system's currency and VAT schema.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use plenty_fee::config::*;
//! use plenty_fee::core::*;
//! use plenty_fee::country::CountryTable;
//! use plenty_fee::export::*;
//! use plenty_fee::fee::*;
//! use rust_decimal_macros::dec;
//!
//! let order = SalesOrderBuilder::new("100000042", 1)
//!     .base_currency("EUR")
//!     .billing_address(BillingAddressBuilder::new("Berlin", "10115", "DE").build())
//!     .data(FEE_DATA_KEY, dec!(5.00))
//!     .build()
//!     .unwrap();
//!
//! let generator = ExtraFeeGenerator::new(
//!     Arc::new(MemoryScopeConfig::new().set_store(1, XML_PATH_EXTRAFEE_STATUS, "1")),
//!     Arc::new(CountryTable::new()),
//!     Arc::new(FixedLabel::new("Surcharge")),
//! );
//!
//! let order_config = MemoryOrderConfig::new().referrer(1, dec!(1));
//! let mut request = RequestStorage::new();
//! let outcome = generator
//!     .execute(&ExportContext::new(&order, &order_config), &mut request)
//!     .unwrap();
//!
//! assert_eq!(outcome, Outcome::Emitted);
//! assert_eq!(request.items()[0].amounts[0].price_original_gross, dec!(5.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Order model, configuration, country table, export run, extra fee generator |
//! | `json` | JSON rendering of the request buffer |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod config;

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod country;

#[cfg(feature = "core")]
pub mod export;

#[cfg(feature = "core")]
pub mod fee;

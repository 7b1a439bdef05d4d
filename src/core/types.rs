use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store (scope) identifier used for configuration lookups.
pub type StoreId = u32;

/// Target system's internal country identifier used for VAT purposes.
pub type CountryVatId = u32;

/// Order referrer (sales channel) identifier. The target system uses
/// fractional ids for sub-referrers, e.g. `104.01`.
pub type ReferrerId = Decimal;

/// A locally stored sales order, as seen by the export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    /// Human-facing order number (e.g. "100000042").
    pub increment_id: String,
    /// Store the order was placed in.
    pub store_id: StoreId,
    /// ISO 4217 code of the order's base currency.
    pub base_currency_code: String,
    /// Billing address.
    pub billing_address: BillingAddress,
    /// Named decimal fields attached to the order by extensions (e.g. `fee`).
    pub data: BTreeMap<String, Decimal>,
}

impl SalesOrder {
    /// Read a named decimal field. `None` when the field was never set.
    pub fn data(&self, key: &str) -> Option<Decimal> {
        self.data.get(key).copied()
    }

    /// ISO 3166-1 alpha-2 country code of the billing address.
    pub fn billing_country_code(&self) -> &str {
        &self.billing_address.country_code
    }
}

/// Billing address of a sales order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingAddress {
    /// Street + house number.
    pub street: Option<String>,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Country code (ISO 3166-1 alpha-2).
    pub country_code: String,
}

/// Order item types understood by the target order API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderItemType {
    Variation,
    ItemBundle,
    BundleComponent,
    PromotionalCoupon,
    GiftCard,
    ShippingCosts,
    PaymentSurcharge,
    GiftWrap,
    UnassignedVariation,
    Deposit,
    Order,
    DunningCharge,
    Set,
    SetComponent,
    OrderProperty,
}

impl OrderItemType {
    /// Numeric type id as sent on the wire.
    pub fn id(&self) -> u8 {
        match self {
            Self::Variation => 1,
            Self::ItemBundle => 2,
            Self::BundleComponent => 3,
            Self::PromotionalCoupon => 4,
            Self::GiftCard => 5,
            Self::ShippingCosts => 6,
            Self::PaymentSurcharge => 7,
            Self::GiftWrap => 8,
            Self::UnassignedVariation => 9,
            Self::Deposit => 10,
            Self::Order => 11,
            Self::DunningCharge => 12,
            Self::Set => 13,
            Self::SetComponent => 14,
            Self::OrderProperty => 15,
        }
    }

    /// Parse from the numeric type id.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Variation),
            2 => Some(Self::ItemBundle),
            3 => Some(Self::BundleComponent),
            4 => Some(Self::PromotionalCoupon),
            5 => Some(Self::GiftCard),
            6 => Some(Self::ShippingCosts),
            7 => Some(Self::PaymentSurcharge),
            8 => Some(Self::GiftWrap),
            9 => Some(Self::UnassignedVariation),
            10 => Some(Self::Deposit),
            11 => Some(Self::Order),
            12 => Some(Self::DunningCharge),
            13 => Some(Self::Set),
            14 => Some(Self::SetComponent),
            15 => Some(Self::OrderProperty),
            _ => None,
        }
    }
}

impl From<OrderItemType> for u8 {
    fn from(value: OrderItemType) -> Self {
        value.id()
    }
}

impl TryFrom<u8> for OrderItemType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_id(value).ok_or_else(|| format!("unknown order item type id {value}"))
    }
}

/// One line item of an order export request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub type_id: OrderItemType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub referrer_id: ReferrerId,
    pub quantity: u32,
    pub country_vat_id: CountryVatId,
    pub vat_field: u8,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub vat_rate: Decimal,
    #[serde(rename = "orderItemName")]
    pub name: String,
    pub amounts: Vec<OrderItemAmount>,
}

/// Price block of an order item, one per currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemAmount {
    /// Whether `currency` is the target system's base currency.
    pub is_system_currency: bool,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub exchange_rate: Decimal,
    /// Gross unit price before surcharge and discount.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price_original_gross: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discount: Decimal,
    /// Whether `discount` is a percentage rather than an absolute amount.
    pub is_percentage: bool,
}

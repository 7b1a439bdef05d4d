//! Wire shape of the order items request fragment.
//!
//! Run with: `cargo test --features json --test json_tests`

#![cfg(feature = "json")]

use std::sync::Arc;

use plenty_fee::config::*;
use plenty_fee::core::*;
use plenty_fee::country::CountryTable;
use plenty_fee::export::*;
use plenty_fee::fee::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

fn request_with_fee(fee: Decimal) -> RequestStorage {
    let order = SalesOrderBuilder::new("100000042", 1)
        .base_currency("EUR")
        .billing_address(BillingAddressBuilder::new("Berlin", "10115", "DE").build())
        .data(FEE_DATA_KEY, fee)
        .build()
        .unwrap();
    let generator = ExtraFeeGenerator::new(
        Arc::new(MemoryScopeConfig::new().set_store(1, XML_PATH_EXTRAFEE_STATUS, "1")),
        Arc::new(CountryTable::new()),
        Arc::new(FixedLabel::new("Surcharge")),
    );
    let order_config = MemoryOrderConfig::new().referrer(1, dec!(1));
    let mut request = RequestStorage::new();
    generator
        .execute(&ExportContext::new(&order, &order_config), &mut request)
        .unwrap();
    request
}

fn surcharge_request() -> RequestStorage {
    request_with_fee(dec!(5.00))
}

fn price_of(request: &RequestStorage) -> Decimal {
    request.items()[0].amounts[0].price_original_gross
}

#[test]
fn surcharge_item_json() {
    let value: Value = serde_json::from_str(&surcharge_request().to_json().unwrap()).unwrap();
    let expected: Value = serde_json::from_str(
        r#"{
            "orderItems": [{
                "typeId": 7,
                "referrerId": 1,
                "quantity": 1,
                "countryVatId": 1,
                "vatField": 0,
                "vatRate": 0,
                "orderItemName": "Surcharge",
                "amounts": [{
                    "isSystemCurrency": true,
                    "currency": "EUR",
                    "exchangeRate": 1,
                    "priceOriginalGross": 5.00,
                    "surcharge": 0,
                    "discount": 0,
                    "isPercentage": false
                }]
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(value, expected);
}

#[test]
fn empty_request_json() {
    assert_eq!(RequestStorage::new().to_json().unwrap(), r#"{"orderItems":[]}"#);
}

#[test]
fn item_json_round_trips() {
    let request = surcharge_request();
    let parsed: RequestStorage = serde_json::from_str(&request.to_json().unwrap()).unwrap();
    assert_eq!(parsed, request);
}

// --- Decimal precision on the wire ---

#[test]
fn fee_keeps_scale_on_the_wire() {
    let json = surcharge_request().to_json().unwrap();
    assert!(json.contains(r#""priceOriginalGross":5.00,"#));
}

#[test]
fn large_fee_is_written_exactly() {
    let fee = dec!(12345678901234.5678);
    let request = request_with_fee(fee);
    let json = request.to_json().unwrap();
    assert!(json.contains(r#""priceOriginalGross":12345678901234.5678,"#));

    let parsed: RequestStorage = serde_json::from_str(&json).unwrap();
    assert_eq!(price_of(&parsed), fee);
    assert_eq!(price_of(&parsed).scale(), 4);
}

#[test]
fn high_scale_fee_is_written_exactly() {
    let fee = dec!(0.1234567890123456789);
    let json = request_with_fee(fee).to_json().unwrap();
    assert!(json.contains(r#""priceOriginalGross":0.1234567890123456789,"#));

    let parsed: RequestStorage = serde_json::from_str(&json).unwrap();
    assert_eq!(price_of(&parsed), fee);
    assert_eq!(price_of(&parsed).to_string(), "0.1234567890123456789");
}

#[test]
fn fractional_referrer_is_written_exactly() {
    let mut request = surcharge_request();
    let mut item = request.items()[0].clone();
    item.referrer_id = dec!(104.01);
    request.add_data(item);

    let json = request.to_json().unwrap();
    assert!(json.contains(r#""referrerId":104.01,"#));
}

#[test]
fn unknown_type_id_is_rejected() {
    let err = serde_json::from_str::<OrderItemType>("99").unwrap_err();
    assert!(err.to_string().contains("unknown order item type id 99"));
}

// ---------------------------------------------------------------------------
// Snapshot tests (insta)
// ---------------------------------------------------------------------------

#[test]
fn snapshot_surcharge_item() {
    let json = serde_json::to_string_pretty(&surcharge_request()).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "orderItems": [
        {
          "typeId": 7,
          "referrerId": 1,
          "quantity": 1,
          "countryVatId": 1,
          "vatField": 0,
          "vatRate": 0,
          "orderItemName": "Surcharge",
          "amounts": [
            {
              "isSystemCurrency": true,
              "currency": "EUR",
              "exchangeRate": 1,
              "priceOriginalGross": 5.00,
              "surcharge": 0,
              "discount": 0,
              "isPercentage": false
            }
          ]
        }
      ]
    }
    "#);
}

//! Export the extra fee of a few orders and print the request fragments.
//!
//! Run with: `RUST_LOG=plenty_fee=debug cargo run --features json --example extra_fee`

use std::sync::Arc;

use plenty_fee::config::*;
use plenty_fee::core::*;
use plenty_fee::country::CountryTable;
use plenty_fee::export::*;
use plenty_fee::fee::*;
use rust_decimal_macros::dec;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), ExportError> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let scope_config = MemoryScopeConfig::new()
        .set_default(XML_PATH_EXTRAFEE_STATUS, "1")
        .set_store(2, XML_PATH_EXTRAFEE_STATUS, "0");
    let order_config = MemoryOrderConfig::new()
        .referrer(1, dec!(1))
        .referrer(2, dec!(104.01));

    let export = OrderExport::new().register(Arc::new(ExtraFeeGenerator::new(
        Arc::new(scope_config),
        Arc::new(CountryTable::new()),
        Arc::new(FixedLabel::new("Nachnahmegebühr")),
    )));

    let orders = [
        ("100000001", 1, "DE", Some(dec!(5.00))),
        ("100000002", 1, "AT", Some(dec!(0.00001))),
        ("100000003", 2, "DE", Some(dec!(100.00))),
        ("100000004", 1, "CH", None),
        ("100000005", 1, "XX", Some(dec!(10.00))),
    ];

    for (increment_id, store_id, country, fee) in orders {
        let mut builder = SalesOrderBuilder::new(increment_id, store_id).billing_address(
            BillingAddressBuilder::new("Musterstadt", "12345", country).build(),
        );
        if let Some(fee) = fee {
            builder = builder.data(FEE_DATA_KEY, fee);
        }
        let order = builder.build()?;

        match export.run(&ExportContext::new(&order, &order_config)) {
            Ok(run) => {
                println!("{increment_id}: {:?}", run.outcomes);
                println!("  {}", run.request.to_json()?);
            }
            Err(e) => println!("{increment_id}: export failed: {e}"),
        }
    }

    Ok(())
}

use std::sync::Arc;

use tracing::{info, warn};

use super::{ExportContext, ItemGenerator, Outcome, RequestStorage};
use crate::core::ExportError;

/// Runs registered item generators, in registration order, over one order.
///
/// ```
/// use std::sync::Arc;
/// use plenty_fee::config::*;
/// use plenty_fee::core::*;
/// use plenty_fee::country::CountryTable;
/// use plenty_fee::export::*;
/// use plenty_fee::fee::*;
/// use rust_decimal_macros::dec;
///
/// let order = SalesOrderBuilder::new("100000042", 1)
///     .billing_address(BillingAddressBuilder::new("Wien", "1010", "AT").build())
///     .data(FEE_DATA_KEY, dec!(1.95))
///     .build()
///     .unwrap();
/// let order_config = MemoryOrderConfig::new().default_referrer(dec!(1));
///
/// let export = OrderExport::new().register(Arc::new(ExtraFeeGenerator::new(
///     Arc::new(MemoryScopeConfig::new().set_default(XML_PATH_EXTRAFEE_STATUS, "1")),
///     Arc::new(CountryTable::new()),
///     Arc::new(FixedLabel::new("Zahlartgebühr")),
/// )));
///
/// let run = export.run(&ExportContext::new(&order, &order_config)).unwrap();
/// assert_eq!(run.request.len(), 1);
/// assert_eq!(run.request.items()[0].country_vat_id, 2);
/// ```
#[derive(Default)]
pub struct OrderExport {
    generators: Vec<Arc<dyn ItemGenerator>>,
}

/// Filled request plus what each generator did.
#[derive(Debug, Clone)]
pub struct ExportRun {
    pub request: RequestStorage,
    pub outcomes: Vec<(&'static str, Outcome)>,
}

impl OrderExport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, generator: Arc<dyn ItemGenerator>) -> Self {
        self.generators.push(generator);
        self
    }

    pub fn generator_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    /// Execute every generator. The first error aborts the run and the
    /// partially filled request is dropped.
    pub fn run(&self, context: &ExportContext<'_>) -> Result<ExportRun, ExportError> {
        let order = context.sales_order();
        let mut request = RequestStorage::new();
        let mut outcomes = Vec::with_capacity(self.generators.len());

        for generator in &self.generators {
            let outcome = generator.execute(context, &mut request).map_err(|e| {
                warn!(
                    order = %order.increment_id,
                    generator = generator.name(),
                    error = %e,
                    "item generation failed"
                );
                e
            })?;
            outcomes.push((generator.name(), outcome));
        }

        info!(
            order = %order.increment_id,
            items = request.len(),
            "order items generated"
        );

        Ok(ExportRun { request, outcomes })
    }
}

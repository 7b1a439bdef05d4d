use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::LabelProvider;
use crate::config::{Scope, ScopeConfig};
use crate::core::{ExportError, OrderItem, OrderItemAmount, OrderItemType, SalesOrder};
use crate::country::CountryResolver;
use crate::export::{ExportContext, ItemGenerator, Outcome, RequestStorage, SkipReason};

/// Order data field holding the extra fee amount.
pub const FEE_DATA_KEY: &str = "fee";

/// Store-scoped flag switching extra fee export on.
pub const XML_PATH_EXTRAFEE_STATUS: &str = "Extrafee/Extrafee/status";

/// Fees below this amount are not exported.
pub const FEE_THRESHOLD: Decimal = dec!(0.0001);

/// Item name used when no label is configured.
pub const DEFAULT_FEE_LABEL: &str = "Extra fee";

/// Result of the activation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activation {
    /// Export this amount.
    Export(Decimal),
    Skip(SkipReason),
}

/// Exports an order's extra fee as a payment surcharge line item.
pub struct ExtraFeeGenerator {
    config: Arc<dyn ScopeConfig>,
    countries: Arc<dyn CountryResolver>,
    label: Arc<dyn LabelProvider>,
}

impl ExtraFeeGenerator {
    pub fn new(
        config: Arc<dyn ScopeConfig>,
        countries: Arc<dyn CountryResolver>,
        label: Arc<dyn LabelProvider>,
    ) -> Self {
        Self {
            config,
            countries,
            label,
        }
    }

    /// Decide whether `order` gets a fee item.
    fn activation(&self, order: &SalesOrder) -> Result<Activation, ExportError> {
        let amount = order.data(FEE_DATA_KEY);

        if !self
            .config
            .is_set_flag(XML_PATH_EXTRAFEE_STATUS, Scope::Store(order.store_id))?
        {
            return Ok(Activation::Skip(SkipReason::FeatureDisabled));
        }

        Ok(match amount {
            None => Activation::Skip(SkipReason::NoAmount),
            Some(amount) if amount < FEE_THRESHOLD => {
                Activation::Skip(SkipReason::NegligibleAmount)
            }
            Some(amount) => Activation::Export(amount),
        })
    }

    fn item_name(&self) -> String {
        self.label
            .fee_label()
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| DEFAULT_FEE_LABEL.to_string())
    }
}

impl ItemGenerator for ExtraFeeGenerator {
    fn name(&self) -> &'static str {
        "extra_fee"
    }

    fn generate(
        &self,
        context: &ExportContext<'_>,
        request: &mut RequestStorage,
    ) -> Result<Outcome, ExportError> {
        let order = context.sales_order();

        let amount = match self.activation(order)? {
            Activation::Export(amount) => amount,
            Activation::Skip(reason) => {
                debug!(
                    order = %order.increment_id,
                    store_id = order.store_id,
                    ?reason,
                    "extra fee skipped"
                );
                return Ok(Outcome::Skipped(reason));
            }
        };

        let amounts = vec![OrderItemAmount {
            is_system_currency: true,
            currency: order.base_currency_code.clone(),
            exchange_rate: Decimal::ONE,
            price_original_gross: amount,
            surcharge: Decimal::ZERO,
            discount: Decimal::ZERO,
            is_percentage: false,
        }];

        let item = OrderItem {
            type_id: OrderItemType::PaymentSurcharge,
            referrer_id: context.order_config().order_referrer_id(order.store_id)?,
            quantity: 1,
            country_vat_id: self.countries.resolve(order.billing_country_code())?,
            vat_field: 0,
            vat_rate: Decimal::ZERO,
            name: self.item_name(),
            amounts,
        };

        debug!(order = %order.increment_id, %amount, "extra fee exported");
        request.add_data(item);
        Ok(Outcome::Emitted)
    }
}

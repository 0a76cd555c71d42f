use rust_decimal::Decimal;

use super::allocation;
use super::config::BillingConfig;
use super::error::BillingError;
use super::margin::MarginTable;
use super::totals;
use super::types::*;

/// Billing operations bound to a jurisdiction config and a margin table.
///
/// Callers supply both explicitly; the engine reads no ambient state.
///
/// ```
/// use caja::core::*;
/// use rust_decimal_macros::dec;
///
/// let engine = BillingEngine::new(
///     BillingConfig::default().with_tax_rate(dec!(0.19)),
///     MarginTable::from_entries([MarginEntry::new("bodega-1", dec!(0.30))]),
/// );
/// let cart = vec![LineItemBuilder::new(ProductBuilder::new("P", "Item", dec!(100)).build(), dec!(1)).build()];
/// assert_eq!(engine.invoice_totals(&cart).total, dec!(119));
/// assert_eq!(engine.suggested_price(dec!(100), "bodega-1"), dec!(130.00));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BillingEngine {
    config: BillingConfig,
    margins: MarginTable,
}

impl BillingEngine {
    /// The table's fallback margin is replaced by `config.default_margin`.
    ///
    /// `config` is not validated; out-of-range rates are clamped by the
    /// calculations (a negative tax rate acts as 0). Use
    /// [`BillingEngine::try_new`] to reject them instead.
    pub fn new(config: BillingConfig, margins: MarginTable) -> Self {
        let margins = margins.with_default_margin(config.default_margin);
        Self { config, margins }
    }

    /// Like [`BillingEngine::new`], but fails if [`BillingConfig::validate`] does.
    pub fn try_new(config: BillingConfig, margins: MarginTable) -> Result<Self, BillingError> {
        config.validate()?;
        Ok(Self::new(config, margins))
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    pub fn margins(&self) -> &MarginTable {
        &self.margins
    }

    pub fn net_subtotal(&self, items: &[LineItem]) -> Decimal {
        totals::compute_net_subtotal(items)
    }

    pub fn invoice_totals(&self, items: &[LineItem]) -> InvoiceTotals {
        totals::compute_invoice_totals_with_rate(items, self.config.tax_rate)
    }

    pub fn gross_profit(&self, items: &[CostedItem], invoice_discount: Decimal) -> Decimal {
        allocation::allocate_invoice_discount(items, invoice_discount)
    }

    pub fn margin(&self, key: &str) -> Decimal {
        self.margins.lookup(key)
    }

    pub fn suggested_price(&self, purchase_price: Decimal, margin_key: &str) -> Decimal {
        super::margin::suggested_price(purchase_price, margin_key, &self.margins)
    }
}

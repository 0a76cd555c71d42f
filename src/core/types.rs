use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable product as referenced from a cart row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product code (SKU / internal code).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Sale price per unit, before tax.
    pub unit_sale_price: Decimal,
    /// Purchase (cost) price per unit, if known.
    #[serde(default)]
    pub unit_purchase_price: Option<Decimal>,
}

/// One cart or invoice row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product: Product,
    /// Units sold. Negative values are treated as zero.
    pub quantity: Decimal,
    /// Line discount in percent (0–100). `None` means no discount.
    #[serde(default)]
    pub line_discount_percent: Option<Decimal>,
}

/// Sale/cost row used for gross-profit computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostedItem {
    pub unit_sale_price: Decimal,
    pub unit_purchase_price: Decimal,
    pub quantity: Decimal,
}

impl CostedItem {
    pub fn new(unit_sale_price: Decimal, unit_purchase_price: Decimal, quantity: Decimal) -> Self {
        Self {
            unit_sale_price,
            unit_purchase_price,
            quantity,
        }
    }
}

impl From<&LineItem> for CostedItem {
    /// A line without a known purchase price is costed at zero.
    fn from(item: &LineItem) -> Self {
        Self {
            unit_sale_price: item.product.unit_sale_price,
            unit_purchase_price: item.product.unit_purchase_price.unwrap_or(Decimal::ZERO),
            quantity: item.quantity,
        }
    }
}

/// Invoice totals computed with the aggregate-discount policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// Sum of gross line totals, ignoring line discounts.
    pub subtotal: Decimal,
    /// Sum of each line's discount amount.
    pub total_discount: Decimal,
    /// `subtotal - total_discount`.
    pub subtotal_after_discount: Decimal,
    /// VAT on the discounted subtotal.
    pub tax: Decimal,
    /// `subtotal_after_discount + tax`.
    pub total: Decimal,
}

/// Per-line result of proportional invoice-discount allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedLine {
    /// `unit_sale_price * quantity`.
    pub revenue: Decimal,
    /// `unit_purchase_price * quantity`.
    pub cost: Decimal,
    /// This line's share of the invoice-level discount.
    pub discount_share: Decimal,
    /// `revenue - cost - discount_share`.
    pub gross_profit: Decimal,
}

/// Margin fraction configured for a warehouse or business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginEntry {
    pub warehouse_or_business_id: String,
    /// Markup as a fraction of the purchase price (0.25 = 25%).
    pub margin_fraction: Decimal,
}

impl MarginEntry {
    pub fn new(id: impl Into<String>, margin_fraction: Decimal) -> Self {
        Self {
            warehouse_or_business_id: id.into(),
            margin_fraction,
        }
    }
}

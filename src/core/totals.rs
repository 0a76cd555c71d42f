use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::config::TAX_RATE;
use super::types::*;

/// Round a Decimal to 2 decimal places using half-up (commercial rounding).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Negative amounts count as zero.
pub(crate) fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Line discount as a fraction in `[0, 1]`; absent means no discount.
pub(crate) fn discount_fraction(percent: Option<Decimal>) -> Decimal {
    percent
        .unwrap_or(Decimal::ZERO)
        .clamp(Decimal::ZERO, dec!(100))
        / dec!(100)
}

/// Sum that saturates at `Decimal::MAX`/`Decimal::MIN` instead of panicking.
pub(crate) fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `unit_sale_price * quantity` with both clamped to zero.
fn gross_line_total(item: &LineItem) -> Decimal {
    non_negative(item.product.unit_sale_price).saturating_mul(non_negative(item.quantity))
}

/// Cart subtotal with each line netted by its own discount before summing.
///
/// The result is unrounded; currency rounding is left to presentation.
/// Amounts beyond the `Decimal` range saturate at `Decimal::MAX`.
pub fn compute_net_subtotal(items: &[LineItem]) -> Decimal {
    saturating_sum(items.iter().map(|item| {
        gross_line_total(item)
            .saturating_mul(Decimal::ONE - discount_fraction(item.line_discount_percent))
    }))
}

/// Invoice totals at the standard [`TAX_RATE`].
///
/// Gross subtotal and total discount are summed separately, then the
/// discount is subtracted and VAT is applied once to the aggregate.
pub fn compute_invoice_totals(items: &[LineItem]) -> InvoiceTotals {
    compute_invoice_totals_with_rate(items, TAX_RATE)
}

/// Invoice totals at a caller-supplied VAT rate (fraction, e.g. 0.13).
///
/// Every field saturates at `Decimal::MAX` rather than overflowing.
pub fn compute_invoice_totals_with_rate(items: &[LineItem], tax_rate: Decimal) -> InvoiceTotals {
    let subtotal = saturating_sum(items.iter().map(gross_line_total));
    let total_discount = saturating_sum(items.iter().map(|item| {
        gross_line_total(item).saturating_mul(discount_fraction(item.line_discount_percent))
    }));

    let subtotal_after_discount = subtotal.saturating_sub(total_discount);
    let tax = subtotal_after_discount.saturating_mul(non_negative(tax_rate));

    InvoiceTotals {
        subtotal,
        total_discount,
        subtotal_after_discount,
        tax,
        total: subtotal_after_discount.saturating_add(tax),
    }
}

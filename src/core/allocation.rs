//! Proportional allocation of an invoice-level discount for gross-profit
//! reporting.
//!
//! A flat invoice discount is attributed to each line in proportion to that
//! line's share of pre-discount revenue:
//!
//! ```text
//! share_i = discount * revenue_i / Σ revenue
//! profit  = Σ (sale_i - purchase_i) * qty_i - share_i
//! ```

use rust_decimal::Decimal;

use super::totals::{non_negative, saturating_sum};
use super::types::{AllocatedLine, CostedItem};

/// Per-line gross profit after attributing `invoice_discount` proportionally.
///
/// When the invoice has no revenue every share is zero. Amounts beyond the
/// `Decimal` range saturate instead of overflowing.
pub fn allocate_invoice_discount_lines(
    items: &[CostedItem],
    invoice_discount: Decimal,
) -> Vec<AllocatedLine> {
    let invoice_discount = non_negative(invoice_discount);
    let invoice_total_without_discount = saturating_sum(items.iter().map(revenue));

    items
        .iter()
        .map(|item| {
            let revenue = revenue(item);
            let cost =
                non_negative(item.unit_purchase_price).saturating_mul(non_negative(item.quantity));
            let discount_share =
                discount_share(invoice_discount, revenue, invoice_total_without_discount);
            AllocatedLine {
                revenue,
                cost,
                discount_share,
                gross_profit: revenue.saturating_sub(cost).saturating_sub(discount_share),
            }
        })
        .collect()
}

/// Gross profit of one invoice after proportional discount allocation.
pub fn allocate_invoice_discount(items: &[CostedItem], invoice_discount: Decimal) -> Decimal {
    saturating_sum(
        allocate_invoice_discount_lines(items, invoice_discount)
            .iter()
            .map(|line| line.gross_profit),
    )
}

fn revenue(item: &CostedItem) -> Decimal {
    non_negative(item.unit_sale_price).saturating_mul(non_negative(item.quantity))
}

/// `discount * revenue / total`, falling back to `revenue / total * discount`
/// when the product leaves the `Decimal` range.
fn discount_share(discount: Decimal, revenue: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    discount
        .checked_mul(revenue)
        .and_then(|product| product.checked_div(total))
        .or_else(|| {
            revenue
                .checked_div(total)
                .map(|weight| weight.saturating_mul(discount))
        })
        .unwrap_or(Decimal::ZERO)
}

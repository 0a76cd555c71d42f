use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{CostedItem, allocate_invoice_discount_lines, round2};

use super::period::ReportPeriod;

/// An issued invoice as seen by the gross-profit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInvoice {
    pub number: String,
    pub issue_date: NaiveDate,
    /// Flat invoice-level discount in currency units.
    #[serde(default)]
    pub discount: Decimal,
    pub items: Vec<CostedItem>,
}

/// A recorded outgoing payment (egreso).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
}

impl Expense {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
        }
    }
}

/// Aggregated figures for one reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub period: ReportPeriod,
    /// Invoices issued within the period.
    pub invoice_count: usize,
    /// Pre-discount sales.
    pub revenue: Decimal,
    /// Purchase cost of the goods sold.
    pub cost_of_goods: Decimal,
    /// Invoice discounts attributed to sold lines.
    pub discounts: Decimal,
    /// `revenue - cost_of_goods - discounts`.
    pub gross_profit: Decimal,
    /// Expenses recorded within the period.
    pub expenses: Decimal,
    /// `gross_profit - expenses`.
    pub net_profit: Decimal,
    /// Gross profit as a percentage of discounted revenue, rounded to 2 dp.
    /// `None` when there was no discounted revenue.
    pub gross_margin_percent: Option<Decimal>,
}

/// Summarize invoices and expenses dated within `period`.
///
/// Totals saturate at the `Decimal` bounds; the margin percentage is `None`
/// when it cannot be represented.
pub fn summarize(
    invoices: &[ReportInvoice],
    expenses: &[Expense],
    period: ReportPeriod,
) -> FinancialSummary {
    let mut invoice_count = 0;
    let mut revenue = Decimal::ZERO;
    let mut cost_of_goods = Decimal::ZERO;
    let mut discounts = Decimal::ZERO;
    let mut gross_profit = Decimal::ZERO;

    for invoice in invoices.iter().filter(|inv| period.contains(inv.issue_date)) {
        invoice_count += 1;
        for line in allocate_invoice_discount_lines(&invoice.items, invoice.discount) {
            revenue = revenue.saturating_add(line.revenue);
            cost_of_goods = cost_of_goods.saturating_add(line.cost);
            discounts = discounts.saturating_add(line.discount_share);
            gross_profit = gross_profit.saturating_add(line.gross_profit);
        }
    }

    let expenses = expenses
        .iter()
        .filter(|e| period.contains(e.date))
        .map(|e| e.amount.max(Decimal::ZERO))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let net_revenue = revenue.saturating_sub(discounts);
    let gross_margin_percent = gross_profit
        .checked_div(net_revenue)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(round2);

    FinancialSummary {
        period,
        invoice_count,
        revenue,
        cost_of_goods,
        discounts,
        gross_profit,
        expenses,
        net_profit: gross_profit.saturating_sub(expenses),
        gross_margin_percent,
    }
}

/// Expense totals per category within `period`, sorted by category.
pub fn expenses_by_category(expenses: &[Expense], period: ReportPeriod) -> BTreeMap<String, Decimal> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for expense in expenses.iter().filter(|e| period.contains(e.date)) {
        let total = totals.entry(expense.category.clone()).or_insert(Decimal::ZERO);
        *total = total.saturating_add(expense.amount.max(Decimal::ZERO));
    }
    totals
}

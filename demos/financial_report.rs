use caja::json::{parse_costed_items, parse_margin_table};
use caja::report::*;
use caja::suggested_price;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;

fn main() -> Result<(), caja::BillingError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Payloads as the REST backend returns them: mixed numbers and strings.
    let margins = parse_margin_table(&json!({ "1": 0.3, "2": "0.15" }))?;
    let first = parse_costed_items(&json!([
        { "product": { "unitSalePrice": "1500", "unitPurchasePrice": "1000" }, "quantity": 2 },
        { "product": { "unitSalePrice": 500, "unitPurchasePrice": 300 }, "quantity": "2" }
    ]))?;
    let second = parse_costed_items(&json!([
        { "unitSalePrice": 2000, "unitPurchasePrice": 1200, "quantity": 1 }
    ]))?;

    let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap_or_default();
    let invoices = vec![
        ReportInvoice { number: "F-001".into(), issue_date: day(3), discount: dec!(400), items: first },
        ReportInvoice { number: "F-002".into(), issue_date: day(21), discount: dec!(0), items: second },
    ];
    let expenses = vec![
        Expense::new(day(1), "alquiler", dec!(1000)),
        Expense::new(day(15), "servicios", dec!(250)),
    ];

    let period = ReportPeriod::month_of(day(1));
    let summary = summarize(&invoices, &expenses, period);

    println!("Period:        {} .. {}", period.start(), period.end());
    println!("Invoices:      {}", summary.invoice_count);
    println!("Revenue:       {}", summary.revenue);
    println!("Cost of goods: {}", summary.cost_of_goods);
    println!("Discounts:     {}", summary.discounts);
    println!("Gross profit:  {}", summary.gross_profit);
    println!("Expenses:      {}", summary.expenses);
    println!("Net profit:    {}", summary.net_profit);
    if let Some(pct) = summary.gross_margin_percent {
        println!("Gross margin:  {pct}%");
    }
    for (category, amount) in expenses_by_category(&expenses, period) {
        println!("  {category:<12} {amount}");
    }

    println!("Suggested price for cost 1000 at business 1: {}", suggested_price(dec!(1000), "1", &margins));
    Ok(())
}

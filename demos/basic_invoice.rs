use caja::core::*;
use rust_decimal_macros::dec;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let margins = MarginTable::from_entries([
        MarginEntry::new("1", dec!(0.30)),
        MarginEntry::new("2", dec!(0.15)),
    ]);
    let engine = BillingEngine::new(BillingConfig::default(), margins);

    let cafe = ProductBuilder::new("CAF-01", "Café molido 500g", engine.suggested_price(dec!(769.23), "1"))
        .purchase_price(dec!(769.23))
        .build();
    let azucar = ProductBuilder::new("AZU-02", "Azúcar 1kg", dec!(500))
        .purchase_price(dec!(380))
        .build();

    let cart = vec![
        LineItemBuilder::new(cafe, dec!(2)).discount_percent(dec!(10)).build(),
        LineItemBuilder::new(azucar, dec!(1)).build(),
    ];

    for finding in validate_line_items(&cart) {
        println!("warning: {finding}");
    }

    let totals = engine.invoice_totals(&cart);
    let currency = &engine.config().currency_code;
    for line in &cart {
        println!(
            "  {} x {} @ {} (desc. {}%)",
            line.quantity,
            line.product.name,
            line.product.unit_sale_price,
            line.line_discount_percent.unwrap_or_default()
        );
    }
    println!("---");
    println!("Subtotal:  {} {currency}", round2(totals.subtotal));
    println!("Discount:  {} {currency}", round2(totals.total_discount));
    println!("Net:       {} {currency}", round2(totals.subtotal_after_discount));
    println!("IVA 13%:   {} {currency}", round2(totals.tax));
    println!("Total:     {} {currency}", round2(totals.total));

    let costed: Vec<CostedItem> = cart.iter().map(CostedItem::from).collect();
    println!(
        "Gross profit with 150 invoice discount: {} {currency}",
        round2(engine.gross_profit(&costed, dec!(150)))
    );
}

//! Boundary parsing of backend/UI JSON into engine input.
//!
//! Run with: `cargo test --features json --test json_tests`

#![cfg(feature = "json")]

use caja::core::*;
use caja::json::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn backend_cart_end_to_end() {
    let payload = json!([
        {
            "product": { "code": "CAF-01", "name": "Café 500g", "unitSalePrice": 1000, "unitPurchasePrice": 720 },
            "quantity": 2,
            "lineDiscountPercent": 10
        },
        {
            "product": { "code": "AZU-02", "name": "Azúcar 1kg", "unitSalePrice": "500" },
            "quantity": "1"
        }
    ]);

    let items = parse_line_items(&payload).unwrap();
    assert_eq!(compute_net_subtotal(&items), dec!(2300));

    let t = compute_invoice_totals(&items);
    assert_eq!(t.subtotal, dec!(2500));
    assert_eq!(t.total_discount, dec!(200));
    assert_eq!(t.total, dec!(2599));
}

#[test]
fn half_typed_form_values_become_zero() {
    let payload = json!([
        { "product": { "code": "A", "name": "A", "unitSalePrice": 100 }, "quantity": "" },
        { "product": { "code": "B", "name": "B", "unitSalePrice": "abc" }, "quantity": 3 },
        { "product": { "code": "C", "name": "C", "unitSalePrice": 100 }, "quantity": -3 },
        { "product": { "code": "D", "name": "D", "unitSalePrice": 100 }, "quantity": null },
        { "product": { "code": "E", "name": "E", "unitSalePrice": 100 } },
        { "product": { "code": "F", "name": "F", "unitSalePrice": 100 }, "quantity": 1, "lineDiscountPercent": "x" }
    ]);

    let items = parse_line_items(&payload).unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].quantity, Decimal::ZERO);
    assert_eq!(items[1].product.unit_sale_price, Decimal::ZERO);
    assert_eq!(items[2].quantity, Decimal::ZERO);
    assert_eq!(items[3].quantity, Decimal::ZERO);
    assert_eq!(items[4].quantity, Decimal::ZERO);
    assert_eq!(items[5].line_discount_percent, Some(Decimal::ZERO));

    // Only the last line contributes, undiscounted
    assert_eq!(compute_net_subtotal(&items), dec!(100));
}

#[test]
fn numeric_string_quantity_is_parsed() {
    let items = parse_line_items(&json!([
        { "product": { "code": "Q", "name": "Queso", "unitSalePrice": "4000" }, "quantity": "12.5" }
    ]))
    .unwrap();
    assert_eq!(items[0].quantity, dec!(12.5));
    assert_eq!(compute_net_subtotal(&items), dec!(50000));
}

#[test]
fn non_array_items_fail_fast() {
    let err = parse_line_items(&json!({ "product": {} })).unwrap_err();
    assert!(matches!(err, BillingError::InvalidInputShape(_)));
    assert!(err.to_string().contains("object"));
}

#[test]
fn empty_array_is_valid() {
    let items = parse_line_items(&json!([])).unwrap();
    assert!(items.is_empty());
    assert_eq!(compute_invoice_totals(&items).total, Decimal::ZERO);
}

#[test]
fn costed_items_for_gross_profit() {
    let items = parse_costed_items(&json!([
        { "unitSalePrice": 1500, "unitPurchasePrice": 1000, "quantity": 2 },
        { "unitSalePrice": 500, "unitPurchasePrice": 300, "quantity": 2 }
    ]))
    .unwrap();
    assert_eq!(allocate_invoice_discount(&items, dec!(400)), dec!(1000));
}

#[test]
fn costed_items_reject_non_array() {
    assert!(parse_costed_items(&json!("rows")).is_err());
}

#[test]
fn margin_table_drives_suggested_price() {
    let table = parse_margin_table(&json!([
        { "warehouseOrBusinessId": "1", "marginFraction": 0.3 },
        { "warehouseOrBusinessId": "2", "marginFraction": 0.15 }
    ]))
    .unwrap();
    assert_eq!(suggested_price(dec!(100), "1", &table), dec!(130.00));
    assert_eq!(suggested_price(dec!(50), "99", &table), dec!(62.50));
}

#[test]
fn strict_types_deserialize_directly() {
    let item: LineItem = serde_json::from_value(json!({
        "product": { "code": "P", "name": "Pan", "unitSalePrice": "1500" },
        "quantity": "2"
    }))
    .unwrap();
    assert_eq!(item.product.unit_purchase_price, None);
    assert_eq!(item.line_discount_percent, None);
    assert_eq!(compute_net_subtotal(&[item]), dec!(3000));
}

#[test]
fn cart_at_the_amount_cap_saturates_instead_of_overflowing() {
    let line = json!({
        "product": { "code": "X", "name": "X", "unitSalePrice": 1_000_000_000_000u64 },
        "quantity": 1_000_000_000_000u64
    });
    let payload = serde_json::Value::Array(vec![line; 80_000]);

    let items = parse_line_items(&payload).unwrap();
    assert_eq!(items.len(), 80_000);
    assert_eq!(compute_net_subtotal(&items), Decimal::MAX);

    let t = compute_invoice_totals(&items);
    assert_eq!(t.subtotal, Decimal::MAX);
    assert_eq!(t.total, Decimal::MAX);
}

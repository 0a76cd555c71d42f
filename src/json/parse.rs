use serde_json::{Map, Value};
use tracing::warn;

use crate::core::{BillingError, CostedItem, LineItem, MarginEntry, MarginTable, Product};

use super::coerce::{self, Numeric};

/// Parse a cart/invoice line list as sent by the backend.
///
/// Expects an array of objects shaped like
/// `{ "product": { "code", "name", "unitSalePrice", "unitPurchasePrice" },
///    "quantity", "lineDiscountPercent" }`.
/// Only a non-array input fails; every numeric field is coerced.
pub fn parse_line_items(value: &Value) -> Result<Vec<LineItem>, BillingError> {
    let items = expect_array(value, "line items")?;
    Ok(items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_line_item(item, i))
        .collect())
}

/// Parse sale/cost rows for gross-profit allocation.
///
/// Price fields are read from the row itself or from a nested `product`.
pub fn parse_costed_items(value: &Value) -> Result<Vec<CostedItem>, BillingError> {
    let items = expect_array(value, "costed items")?;
    Ok(items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_costed_item(item, i))
        .collect())
}

/// Parse a margin table from either
/// `[{ "warehouseOrBusinessId", "marginFraction" }, ...]` or `{ "<id>": <fraction> }`.
///
/// Entries without an id or with a non-numeric fraction are skipped so the
/// default margin applies to them.
pub fn parse_margin_table(value: &Value) -> Result<MarginTable, BillingError> {
    let mut table = MarginTable::new();
    match value {
        Value::Array(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                let path = format!("margins[{i}]");
                let id = coerce::read_text(entry.get("warehouseOrBusinessId"));
                match id {
                    Some(id) => {
                        if let Some(margin) = margin_fraction(entry.get("marginFraction"), &path) {
                            table.insert(MarginEntry::new(id, margin));
                        }
                    }
                    None => warn!(entry = %path, "margin entry without id skipped"),
                }
            }
        }
        Value::Object(map) => {
            for (id, fraction) in map {
                let path = format!("margins.{id}");
                if let Some(margin) = margin_fraction(Some(fraction), &path) {
                    table.insert(MarginEntry::new(id.clone(), margin));
                }
            }
        }
        other => {
            return Err(BillingError::InvalidInputShape(format!(
                "margin table must be an array or object, got {}",
                kind(other)
            )));
        }
    }
    Ok(table)
}

fn parse_line_item(value: &Value, index: usize) -> LineItem {
    let path = format!("items[{index}]");
    let empty = Map::new();
    let obj = value.as_object().unwrap_or_else(|| {
        warn!(item = %path, kind = kind(value), "line item is not an object, using empty line");
        &empty
    });
    let product = obj.get("product").and_then(Value::as_object).unwrap_or(&empty);

    LineItem {
        product: Product {
            code: coerce::read_text(product.get("code")).unwrap_or_default(),
            name: coerce::read_text(product.get("name")).unwrap_or_default(),
            unit_sale_price: coerce::required_amount(
                product.get("unitSalePrice"),
                &format!("{path}.product.unitSalePrice"),
            ),
            unit_purchase_price: coerce::optional_amount(
                product.get("unitPurchasePrice"),
                &format!("{path}.product.unitPurchasePrice"),
            ),
        },
        quantity: coerce::required_amount(obj.get("quantity"), &format!("{path}.quantity")),
        line_discount_percent: coerce::optional_amount(
            obj.get("lineDiscountPercent"),
            &format!("{path}.lineDiscountPercent"),
        ),
    }
}

fn parse_costed_item(value: &Value, index: usize) -> CostedItem {
    let path = format!("items[{index}]");
    let field = |name: &str| {
        value
            .get(name)
            .or_else(|| value.get("product").and_then(|p| p.get(name)))
    };
    if !value.is_object() {
        warn!(item = %path, kind = kind(value), "costed item is not an object, using zero row");
    }

    CostedItem {
        unit_sale_price: coerce::required_amount(
            field("unitSalePrice"),
            &format!("{path}.unitSalePrice"),
        ),
        unit_purchase_price: coerce::required_amount(
            field("unitPurchasePrice"),
            &format!("{path}.unitPurchasePrice"),
        ),
        quantity: coerce::required_amount(field("quantity"), &format!("{path}.quantity")),
    }
}

/// Margin fractions are clamped into `[0, 1]`.
fn margin_fraction(value: Option<&Value>, path: &str) -> Option<rust_decimal::Decimal> {
    match coerce::read_numeric(value) {
        Numeric::Value(d) if d > rust_decimal::Decimal::ONE => {
            warn!(entry = path, value = %d, "margin fraction above 1 clamped to 1");
            Some(rust_decimal::Decimal::ONE)
        }
        Numeric::Value(d) => Some(coerce::clamp_negative(d, path)),
        Numeric::Missing | Numeric::Invalid => {
            warn!(entry = path, raw = ?value, "margin fraction is not numeric, entry skipped");
            None
        }
    }
}

fn expect_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>, BillingError> {
    value.as_array().ok_or_else(|| {
        BillingError::InvalidInputShape(format!("{what} must be an array, got {}", kind(value)))
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn rejects_non_array_items() {
        for bad in [json!({}), json!("items"), json!(null), json!(3)] {
            let err = parse_line_items(&bad).unwrap_err();
            assert!(matches!(err, BillingError::InvalidInputShape(_)));
        }
    }

    #[test]
    fn parses_well_formed_line() {
        let items = parse_line_items(&json!([{
            "product": { "code": "P-1", "name": "Café", "unitSalePrice": 1000, "unitPurchasePrice": 700 },
            "quantity": 2,
            "lineDiscountPercent": 10
        }]))
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product.code, "P-1");
        assert_eq!(items[0].product.unit_sale_price, dec!(1000));
        assert_eq!(items[0].product.unit_purchase_price, Some(dec!(700)));
        assert_eq!(items[0].quantity, dec!(2));
        assert_eq!(items[0].line_discount_percent, Some(dec!(10)));
    }

    #[test]
    fn non_object_element_becomes_empty_line() {
        let items = parse_line_items(&json!(["garbage"])).unwrap();
        assert_eq!(items[0].product.code, "");
        assert_eq!(items[0].quantity, Decimal::ZERO);
        assert_eq!(items[0].line_discount_percent, None);
    }

    #[test]
    fn costed_items_read_flat_or_nested() {
        let items = parse_costed_items(&json!([
            { "unitSalePrice": 10, "unitPurchasePrice": 6, "quantity": 3 },
            { "product": { "unitSalePrice": "20", "unitPurchasePrice": "15" }, "quantity": "1" }
        ]))
        .unwrap();
        assert_eq!(items[0], CostedItem::new(dec!(10), dec!(6), dec!(3)));
        assert_eq!(items[1], CostedItem::new(dec!(20), dec!(15), dec!(1)));
    }

    #[test]
    fn margin_table_from_array_and_map() {
        let from_array = parse_margin_table(&json!([
            { "warehouseOrBusinessId": 1, "marginFraction": 0.3 },
            { "warehouseOrBusinessId": "2", "marginFraction": "0.15" }
        ]))
        .unwrap();
        assert_eq!(from_array.lookup("1"), dec!(0.3));
        assert_eq!(from_array.lookup("2"), dec!(0.15));

        let from_map = parse_margin_table(&json!({ "1": 0.3, "2": 0.15 })).unwrap();
        assert_eq!(from_map, from_array);
    }

    #[test]
    fn non_numeric_margin_falls_back_to_default() {
        let table = parse_margin_table(&json!({ "1": "n/a", "2": null })).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.lookup("1"), dec!(0.25));
    }

    #[test]
    fn margin_fraction_clamped_to_unit_range() {
        let table = parse_margin_table(&json!({ "1": 1.5, "2": -0.2, "3": 1 })).unwrap();
        assert_eq!(table.lookup("1"), Decimal::ONE);
        assert_eq!(table.lookup("2"), Decimal::ZERO);
        assert_eq!(table.lookup("3"), Decimal::ONE);
    }

    #[test]
    fn margin_table_rejects_scalar() {
        assert!(parse_margin_table(&json!("0.3")).is_err());
    }
}

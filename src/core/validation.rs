use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Check a cart for values a form should flag.
/// Returns all findings (not just the first).
///
/// Advisory only: the calculation functions never call this and clamp the
/// same values instead of failing.
pub fn validate_line_items(items: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, item) in items.iter().enumerate() {
        validate_line(item, i, &mut errors);
    }

    errors
}

fn validate_line(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.product.code.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.product.code"),
            "product code must not be empty",
        ));
    }

    if item.quantity < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            format!("quantity must not be negative, got {}", item.quantity),
        ));
    }

    if item.product.unit_sale_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.product.unit_sale_price"),
            format!(
                "sale price must not be negative, got {}",
                item.product.unit_sale_price
            ),
        ));
    }

    if let Some(purchase) = item.product.unit_purchase_price {
        if purchase < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{prefix}.product.unit_purchase_price"),
                format!("purchase price must not be negative, got {purchase}"),
            ));
        }
    }

    if let Some(percent) = item.line_discount_percent {
        if !(Decimal::ZERO..=dec!(100)).contains(&percent) {
            errors.push(ValidationError::new(
                format!("{prefix}.line_discount_percent"),
                format!("discount must be between 0 and 100 percent, got {percent}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::*;

    fn item(code: &str, price: Decimal, qty: Decimal) -> LineItemBuilder {
        LineItemBuilder::new(ProductBuilder::new(code, "Item", price).build(), qty)
    }

    #[test]
    fn clean_cart_has_no_findings() {
        let items = [
            item("A", dec!(10), dec!(1)).discount_percent(dec!(100)).build(),
            item("B", dec!(0), dec!(0)).build(),
        ];
        assert!(validate_line_items(&items).is_empty());
    }

    #[test]
    fn reports_every_problem_with_path() {
        let items = [
            item("A", dec!(10), dec!(1)).build(),
            item(" ", dec!(-1), dec!(-2)).discount_percent(dec!(101)).build(),
        ];
        let errors = validate_line_items(&items);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "items[1].product.code",
                "items[1].quantity",
                "items[1].product.unit_sale_price",
                "items[1].line_discount_percent",
            ]
        );
    }

    #[test]
    fn negative_purchase_price_flagged() {
        let mut line = item("A", dec!(10), dec!(1)).build();
        line.product.unit_purchase_price = Some(dec!(-5));
        let errors = validate_line_items(&[line]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("purchase price"));
    }
}

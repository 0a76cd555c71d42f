use rust_decimal::Decimal;

use super::types::*;

/// Builder for [`Product`].
///
/// ```
/// use caja::core::*;
/// use rust_decimal_macros::dec;
///
/// let product = ProductBuilder::new("P-100", "Arroz 1kg", dec!(1250))
///     .purchase_price(dec!(950))
///     .build();
/// assert_eq!(product.unit_purchase_price, Some(dec!(950)));
/// ```
pub struct ProductBuilder {
    code: String,
    name: String,
    unit_sale_price: Decimal,
    unit_purchase_price: Option<Decimal>,
}

impl ProductBuilder {
    pub fn new(code: impl Into<String>, name: impl Into<String>, unit_sale_price: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            unit_sale_price,
            unit_purchase_price: None,
        }
    }

    pub fn purchase_price(mut self, price: Decimal) -> Self {
        self.unit_purchase_price = Some(price);
        self
    }

    pub fn build(self) -> Product {
        Product {
            code: self.code,
            name: self.name,
            unit_sale_price: self.unit_sale_price,
            unit_purchase_price: self.unit_purchase_price,
        }
    }
}

/// Builder for [`LineItem`].
///
/// ```
/// use caja::core::*;
/// use rust_decimal_macros::dec;
///
/// let line = LineItemBuilder::new(ProductBuilder::new("P-1", "Café", dec!(1000)).build(), dec!(2))
///     .discount_percent(dec!(10))
///     .build();
/// assert_eq!(line.line_discount_percent, Some(dec!(10)));
/// ```
pub struct LineItemBuilder {
    product: Product,
    quantity: Decimal,
    line_discount_percent: Option<Decimal>,
}

impl LineItemBuilder {
    pub fn new(product: Product, quantity: Decimal) -> Self {
        Self {
            product,
            quantity,
            line_discount_percent: None,
        }
    }

    pub fn discount_percent(mut self, percent: Decimal) -> Self {
        self.line_discount_percent = Some(percent);
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            product: self.product,
            quantity: self.quantity,
            line_discount_percent: self.line_discount_percent,
        }
    }
}

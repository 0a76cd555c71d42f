//! Boundary parsing for loosely typed JSON from the backend or UI forms.
//!
//! The engine in [`crate::core`] expects strict, non-negative Decimals.
//! These functions turn whatever the REST backend (or a half-filled form)
//! produced into that shape:
//!
//! - numbers and numeric strings are accepted (`12.5`, `"12.5"`, `"1e3"`)
//! - `null` / absent required fields become `0`, optional ones stay `None`
//! - non-numeric values become `0`; negatives are clamped to `0`
//! - only a wrongly shaped container (items not an array) is an error
//!
//! Every coercion is reported through `tracing` at `warn` level.
//!
//! ```
//! use caja::json::parse_line_items;
//! use rust_decimal_macros::dec;
//! use serde_json::json;
//!
//! let items = parse_line_items(&json!([
//!     { "product": { "code": "A", "name": "Pan", "unitSalePrice": "1500" }, "quantity": "" }
//! ])).unwrap();
//! assert_eq!(items[0].product.unit_sale_price, dec!(1500));
//! assert_eq!(items[0].quantity, dec!(0));
//!
//! assert!(parse_line_items(&json!({ "items": [] })).is_err());
//! ```

mod coerce;
mod parse;

pub use parse::*;

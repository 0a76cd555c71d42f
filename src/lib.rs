//! # caja
//!
//! Billing and pricing engine for a point-of-sale / back-office system:
//! cart subtotals with line discounts, invoice totals with a fixed 13% VAT,
//! proportional allocation of invoice-level discounts for gross-profit
//! reporting, and margin-based suggested sale prices.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Every calculation is a pure function: no I/O, no ambient state. Degenerate
//! numeric input (negative quantities or prices) is clamped to zero rather
//! than rejected.
//!
//! ## Quick Start
//!
//! ```rust
//! use caja::core::*;
//! use rust_decimal_macros::dec;
//!
//! let cart = vec![
//!     LineItemBuilder::new(ProductBuilder::new("P-1", "Café molido", dec!(1000)).build(), dec!(2))
//!         .discount_percent(dec!(10))
//!         .build(),
//!     LineItemBuilder::new(ProductBuilder::new("P-2", "Azúcar", dec!(500)).build(), dec!(1))
//!         .build(),
//! ];
//!
//! assert_eq!(compute_net_subtotal(&cart), dec!(2300));
//!
//! let totals = compute_invoice_totals(&cart);
//! assert_eq!(totals.subtotal, dec!(2500));
//! assert_eq!(totals.total_discount, dec!(200));
//! assert_eq!(totals.tax, dec!(299));
//! assert_eq!(totals.total, dec!(2599));
//!
//! let margins = MarginTable::from_entries([MarginEntry::new("1", dec!(0.30))]);
//! assert_eq!(suggested_price(dec!(100), "1", &margins), dec!(130.00));
//! assert_eq!(suggested_price(dec!(50), "99", &margins), dec!(62.50));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Line items, totals, discount allocation, margins, validation |
//! | `json` | Coercing parser for loosely typed backend/UI JSON |
//! | `settings` | `BillingConfig` loading from TOML files and `CAJA_*` env vars |
//! | `report` | Period gross-profit and expense summaries |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "settings")]
pub mod settings;

#[cfg(feature = "report")]
pub mod report;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

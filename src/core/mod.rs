//! Core billing types and calculations.
//!
//! This module provides the line-item model, the two subtotal variants,
//! invoice-discount allocation for gross profit, and margin-based pricing.

mod allocation;
mod builder;
mod config;
mod engine;
mod error;
mod margin;
mod totals;
mod types;
mod validation;

pub use allocation::*;
pub use builder::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use margin::*;
pub use totals::*;
pub use types::*;
pub use validation::*;

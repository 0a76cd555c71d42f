//! Period financial summaries: gross profit over invoices, minus expenses.
//!
//! Each invoice's gross profit is computed with
//! [`allocate_invoice_discount`](crate::core::allocate_invoice_discount), so
//! a flat invoice discount reduces profit in proportion to each line's
//! revenue. Recorded expenses (egresos) in the same period are subtracted to
//! give net profit.

mod period;
mod summary;

pub use period::*;
pub use summary::*;

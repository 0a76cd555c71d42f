#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        // Must not panic — shape errors are fine, panics are bugs.
        if let Ok(items) = caja::json::parse_line_items(&value) {
            let totals = caja::compute_invoice_totals(&items);
            assert!(totals.total >= rust_decimal::Decimal::ZERO);
            let _ = caja::compute_net_subtotal(&items);
        }
        if let Ok(items) = caja::json::parse_costed_items(&value) {
            let _ = caja::allocate_invoice_discount(&items, rust_decimal::Decimal::ONE_HUNDRED);
        }
    }
});

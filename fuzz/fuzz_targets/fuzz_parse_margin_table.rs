#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(table) = caja::json::parse_margin_table(&value) {
            let _ = caja::suggested_price(rust_decimal::Decimal::ONE_HUNDRED, "1", &table);
        }
    }
});

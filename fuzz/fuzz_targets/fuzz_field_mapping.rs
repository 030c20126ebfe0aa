#![no_main]

use crs_report::Cell;
use crs_report::mapping::{format_amount, format_date, parse_country_code, parse_currency_code};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Every mapper is total: any text in, a value out, no panics.
        let cell = Cell::from(s);
        let _ = parse_country_code(&cell);
        let _ = parse_currency_code(&cell);
        let _ = format_date(&cell);
        let amount = format_amount(&cell);
        assert_eq!(format_amount(&Cell::from(amount.as_str())), amount);

        if let Ok(n) = s.trim().parse::<f64>() {
            let _ = format_date(&Cell::Number(n));
            let _ = format_amount(&Cell::Number(n));
        }
    }
});

#![no_main]

use chrono::NaiveDate;
use crs_report::ingest::workbook_from_csv;
use crs_report::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as both account exports. Errors are fine, panics
    // are bugs.
    let business: &[u8] = b"TIN,11223344\nName,Fuzz Ltd\n";
    let Ok(workbook) = workbook_from_csv([
        (BUSINESS_INFORMATION, business),
        (INDIVIDUAL_ACCOUNTS, data),
        (ENTITY_ACCOUNTS, data),
    ]) else {
        return;
    };
    let Some(period) = NaiveDate::from_ymd_opt(2024, 12, 31) else {
        return;
    };
    let config = ConfigBuilder::new("MU", "GB", period).build();
    if let Ok(doc) = generate(&workbook, &config) {
        let rows = workbook
            .sheet(INDIVIDUAL_ACCOUNTS)
            .map(records::count_data_rows)
            .unwrap_or_default();
        assert_eq!(doc.individual_count, rows);
    }
});

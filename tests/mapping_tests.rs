use chrono::NaiveDate;
use crs_report::mapping::*;
use crs_report::records::{BusinessInfo, count_data_rows, is_data_row};
use crs_report::*;

fn text(s: &str) -> Cell {
    Cell::from(s)
}

// --- Amounts ---

#[test]
fn amount_defaults_to_zero() {
    assert_eq!(format_amount(&Cell::Empty), "0.00");
    assert_eq!(format_amount(&text("")), "0.00");
    assert_eq!(format_amount(&text("null")), "0.00");
    assert_eq!(format_amount(&text("twelve")), "0.00");
    assert_eq!(format_amount(&Cell::Bool(true)), "0.00");
}

#[test]
fn amount_fixed_two_places() {
    assert_eq!(format_amount(&text("1234.5")), "1234.50");
    assert_eq!(format_amount(&Cell::Number(1234.5)), "1234.50");
    assert_eq!(format_amount(&Cell::Number(7.0)), "7.00");
    assert_eq!(format_amount(&text("-42.125")), "-42.13");
    assert_eq!(format_amount(&text(" 1e3 ")), "1000.00");
}

#[test]
fn amount_idempotent() {
    for raw in ["1234.5", "0", "-0.004", "99999999.999", "null", "abc"] {
        let once = format_amount(&text(raw));
        assert_eq!(format_amount(&text(&once)), once, "input {raw:?}");
    }
}

// --- Codes ---

#[test]
fn currency_codes() {
    assert_eq!(parse_currency_code(&Cell::Empty), "USD");
    assert_eq!(parse_currency_code(&text("US Dollar - USD")), "USD");
    assert_eq!(parse_currency_code(&text("Mauritian Rupee - MUR")), "MUR");
    assert_eq!(parse_currency_code(&text("rupees")), "USD");
}

#[test]
fn country_codes() {
    assert_eq!(parse_country_code(&text("Mauritius - MU")), "MU");
    assert_eq!(parse_country_code(&text("MU")), "MU");
    assert_eq!(parse_country_code(&Cell::Empty), "");
}

#[test]
fn tagged_code_results() {
    assert_eq!(
        parse_code(&text("Mauritius - MU"), CodeKind::Country),
        ParsedCode::Parsed("MU".into())
    );
    let passthrough = parse_code(&text("MU"), CodeKind::Country);
    assert!(!passthrough.is_parsed());
    assert_eq!(passthrough.into_value(), "MU");
    assert_eq!(parse_code(&Cell::Empty, CodeKind::Currency), ParsedCode::Absent);
}

#[test]
fn split_codes_keep_first_segment() {
    assert_eq!(split_code(&text("OECD601 - IBAN"), "OECD605"), "OECD601");
    assert_eq!(split_code(&text("CRS101"), "CRS102"), "CRS101");
    assert_eq!(split_code(&Cell::Empty, "OECD605"), "OECD605");
}

// --- Dates ---

#[test]
fn serial_dates_follow_epoch_offset() {
    assert_eq!(format_date(&Cell::Number(25_569.0)), "1970-01-01");
    assert_eq!(format_date(&Cell::Number(43_831.0)), "2020-01-01");
    let serial = 45_000.0;
    let expected = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        + chrono::Duration::days((serial as i64) - SERIAL_EPOCH_OFFSET as i64);
    assert_eq!(from_serial(serial), Some(expected));
}

#[test]
fn date_inputs() {
    assert_eq!(format_date(&Cell::Empty), "");
    assert_eq!(format_date(&text("not a date")), "");
    let d = NaiveDate::from_ymd_opt(1990, 3, 15).unwrap();
    assert_eq!(format_date(&Cell::Date(d)), "1990-03-15");
    assert_eq!(format_date(&text("1990-03-15")), "1990-03-15");
    assert_eq!(format_date(&text("1990-03-15T10:20:30Z")), "1990-03-15");
}

// --- Rows and business info ---

#[test]
fn data_row_test() {
    assert!(is_data_row(&Row::new(vec![Cell::Number(1.0), "x".into()])));
    assert!(!is_data_row(&Row::new(vec![Cell::Number(1.0)])));
    assert!(!is_data_row(&Row::new(vec!["1".into(), "x".into()])));
    assert!(!is_data_row(&Row::default()));

    let sheet = Sheet::new(
        INDIVIDUAL_ACCOUNTS,
        vec![
            Row::new(vec!["No.".into(), "Account Number".into()]),
            Row::new(vec![Cell::Number(1.0), "A".into()]),
            Row::new(vec![Cell::Empty, Cell::Empty]),
            Row::new(vec![Cell::Number(2.0), "B".into()]),
        ],
    );
    assert_eq!(count_data_rows(&sheet), 2);
}

#[test]
fn business_info_from_label_rows() {
    let info = BusinessInfo::from_rows(&[
        Row::new(vec!["TIN".into(), "11223344".into()]),
        Row::new(vec!["Name".into(), "Acme Ltd".into()]),
    ]);
    assert_eq!(info.tin(), "11223344");
    assert_eq!(info.name(), "Acme Ltd");
    assert_eq!(info.get("city"), "");
}

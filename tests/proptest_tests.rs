use chrono::NaiveDate;
use crs_report::mapping::{format_amount, parse_country_code};
use crs_report::records::count_data_rows;
use crs_report::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn config() -> Config {
    ConfigBuilder::new("MU", "GB", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).build()
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        any::<bool>().prop_map(Cell::Bool),
        (-1.0e9f64..1.0e9).prop_map(Cell::Number),
        "[ A-Za-z0-9.-]{0,12}".prop_map(Cell::Text),
    ]
}

fn arb_row() -> impl Strategy<Value = Row> {
    prop::collection::vec(arb_cell(), 0..8).prop_map(Row::new)
}

fn arb_workbook() -> impl Strategy<Value = Workbook> {
    (
        prop::collection::vec(arb_row(), 0..12),
        prop::collection::vec(arb_row(), 0..12),
    )
        .prop_map(|(individuals, entities)| {
            Workbook::default()
                .with_sheet(Sheet::new(
                    BUSINESS_INFORMATION,
                    vec![Row::new(vec!["TIN".into(), "11223344".into()])],
                ))
                .with_sheet(Sheet::new(INDIVIDUAL_ACCOUNTS, individuals))
                .with_sheet(Sheet::new(ENTITY_ACCOUNTS, entities))
        })
}

proptest! {
    #[test]
    fn format_amount_is_idempotent(cell in arb_cell()) {
        let once = format_amount(&cell);
        prop_assert_eq!(format_amount(&Cell::from(once.as_str())), once.clone());
        prop_assert!(once.split('.').nth(1).is_some_and(|frac| frac.len() == 2));
    }

    #[test]
    fn country_code_extracted_from_any_label(label in "[A-Za-z][A-Za-z ]{0,19}", code in "[A-Z]{2}") {
        let raw = format!("{} - {code}", label.trim_end());
        prop_assert_eq!(parse_country_code(&Cell::from(raw.as_str())), code);
    }

    #[test]
    fn report_count_equals_data_rows(wb in arb_workbook()) {
        let doc = generate(&wb, &config()).unwrap();
        let expected = count_data_rows(wb.sheet(INDIVIDUAL_ACCOUNTS).unwrap())
            + count_data_rows(wb.sheet(ENTITY_ACCOUNTS).unwrap());
        prop_assert_eq!(doc.total_reports(), expected);
        prop_assert_eq!(doc.xml.matches("<AccountReport>").count(), expected);
    }

    #[test]
    fn ref_ids_unique_within_run(seed in any::<u64>(), n in 1usize..500) {
        let mut ids = RefIdGenerator::with_seed(seed);
        let issued: HashSet<String> = (0..n)
            .map(|i| ids.next_id(if i % 2 == 0 { "MU2024-DOC-" } else { "MU2024-MSG-" }))
            .collect();
        prop_assert_eq!(issued.len(), n);
    }
}

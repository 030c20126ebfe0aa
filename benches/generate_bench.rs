use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use crs_report::mapping::{format_amount, format_date, parse_country_code};
use crs_report::*;

fn config() -> Config {
    ConfigBuilder::new("MU", "GB", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).build()
}

fn individual_row(n: usize) -> Row {
    Row::new(vec![
        Cell::Number(n as f64),
        format!("IND-{n:06}").into(),
        "OECD601 - IBAN".into(),
        Cell::Bool(false),
        Cell::Bool(false),
        Cell::Bool(false),
        "Jane".into(),
        format!("Doe {n}").into(),
        "Mauritius - MU".into(),
        format!("TIN{n}").into(),
        Cell::Empty,
        "Royal Road".into(),
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        "11324".into(),
        "Port Louis".into(),
        "Mauritius - MU".into(),
        Cell::Number(31_048.0),
        "Curepipe".into(),
        "Mauritius - MU".into(),
        "US Dollar - USD".into(),
        Cell::Number(1500.5 + n as f64),
        "25".into(),
    ])
}

fn entity_row(n: usize) -> Row {
    let mut cells: Vec<Cell> = vec![
        Cell::Number(n as f64),
        format!("ENT-{n:06}").into(),
        Cell::Empty,
        Cell::Bool(false),
        Cell::Bool(false),
        Cell::Bool(false),
        format!("Holding {n} Ltd").into(),
        "Seychelles - SC".into(),
        format!("SC-{n}").into(),
        Cell::Empty,
        "CRS101 - Passive NFE".into(),
    ];
    cells.resize(16, Cell::Empty);
    cells.extend([
        Cell::from("Victoria"),
        "Seychelles - SC".into(),
        "Euro - EUR".into(),
        Cell::Number(250_000.0),
        Cell::Empty,
        "John".into(),
        "Smith".into(),
        "France - FR".into(),
        "FR-55".into(),
    ]);
    Row::new(cells)
}

fn workbook(individuals: usize, entities: usize) -> Workbook {
    Workbook::default()
        .with_sheet(Sheet::new(
            BUSINESS_INFORMATION,
            vec![
                Row::new(vec!["TIN".into(), "11223344".into()]),
                Row::new(vec!["Name".into(), "Acme Ltd".into()]),
                Row::new(vec!["City".into(), "Ebene".into()]),
            ],
        ))
        .with_sheet(Sheet::new(
            INDIVIDUAL_ACCOUNTS,
            (1..=individuals).map(individual_row).collect(),
        ))
        .with_sheet(Sheet::new(
            ENTITY_ACCOUNTS,
            (1..=entities).map(entity_row).collect(),
        ))
}

// ── Field mapping ──────────────────────────────────────────────────

fn bench_field_mapping(c: &mut Criterion) {
    let country = Cell::from("Mauritius - MU");
    let amount = Cell::from("1234567.891");
    let serial = Cell::Number(45_292.0);
    c.bench_function("parse_country_code", |b| {
        b.iter(|| black_box(parse_country_code(black_box(&country))));
    });
    c.bench_function("format_amount", |b| {
        b.iter(|| black_box(format_amount(black_box(&amount))));
    });
    c.bench_function("format_date_serial", |b| {
        b.iter(|| black_box(format_date(black_box(&serial))));
    });
}

// ── Whole documents ────────────────────────────────────────────────

fn bench_generate_small(c: &mut Criterion) {
    let wb = workbook(10, 10);
    let cfg = config();
    c.bench_function("generate_20_accounts", |b| {
        b.iter(|| black_box(generate(black_box(&wb), black_box(&cfg))));
    });
}

fn bench_generate_large(c: &mut Criterion) {
    let wb = workbook(1000, 1000);
    let cfg = config();
    c.bench_function("generate_2000_accounts", |b| {
        b.iter(|| black_box(generate(black_box(&wb), black_box(&cfg))));
    });
}

criterion_group!(
    benches,
    bench_field_mapping,
    bench_generate_small,
    bench_generate_large,
);
criterion_main!(benches);

use chrono::NaiveDate;
use crs_report::ingest::workbook_from_csv;
use crs_report::*;
use tracing_subscriber::EnvFilter;

const BUSINESS: &str = "\
TIN,11223344
Name,Acme Ltd
Country of Residence,Mauritius - MU
Street,1 Cybercity
City,Ebene
Country,Mauritius - MU
";

const INDIVIDUALS: &str = "\
No.,Account Number,Account Number Type,Undocumented Account,Closed Account,Dormant Account,First Name,Last Name,Country of Residence,TIN,TIN Issued By,Street,Building Identifier,Floor Identifier,District Name,Post Code,City,Address Country,Birth Date,Birth City,Birth Country,Currency,Account Balance,Payment Amount
1,ACC-001,OECD601 - IBAN,false,false,false,Jane,Doe,Mauritius - MU,A123,,Royal Road,,,,11324,Port Louis,,1985-07-04,Curepipe,Mauritius - MU,US Dollar - USD,1500.5,12.3
";

const ENTITIES: &str = "\
No.,Account Number,Account Number Type,Undocumented Account,Closed Account,Dormant Account,Entity Name,Country of Residence,Identification Number,IN Issued By,Account Holder Type
1,ENT-001,,false,false,false,Acme Holdings,Seychelles - SC,SC-998,,CRS101 - Passive NFE,,,,,,Victoria,,Euro - EUR,250000,,John,Smith,France - FR,FR-55
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("crs_report=info".parse().unwrap()))
        .init();

    // ── 1. Ingest per-sheet CSV exports ───────────────────────────────
    let workbook = workbook_from_csv([
        (BUSINESS_INFORMATION, BUSINESS.as_bytes()),
        (INDIVIDUAL_ACCOUNTS, INDIVIDUALS.as_bytes()),
        (ENTITY_ACCOUNTS, ENTITIES.as_bytes()),
    ])
    .unwrap();

    // ── 2. Configure the message ──────────────────────────────────────
    let config = ConfigBuilder::new("MU", "GB", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        .contact("compliance@acme.example")
        .build();

    // ── 3. Generate behind the consent gate ───────────────────────────
    match generate_with_consent(false, &workbook, &config) {
        Err(e) => println!("Without consent: {e}"),
        Ok(_) => unreachable!(),
    }

    let doc = generate_with_consent(true, &workbook, &config).unwrap();
    println!(
        "{} individual and {} entity account(s), file {}",
        doc.individual_count,
        doc.entity_count,
        doc.suggested_file_name()
    );
    println!("{}", doc.xml);

    // ── 4. A workbook missing sheets fails up front ───────────────────
    let partial = Workbook::default();
    if let Err(e) = generate(&partial, &config) {
        println!("Partial workbook: {e}");
    }
}

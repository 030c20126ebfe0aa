//! The generation run: workbook + configuration in, CRS document out.

use chrono::{Datelike, NaiveDateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::core::{
    BUSINESS_INFORMATION, Config, CrsError, ENTITY_ACCOUNTS, INDIVIDUAL_ACCOUNTS, RefIdGenerator,
    Workbook,
};
use crate::records::{
    BusinessInfo, ENTITY_SCHEMA, INDIVIDUAL_SCHEMA, ReportingInstitution, entity_accounts,
    individual_accounts,
};
use crate::xml::{
    self, MessageHeader, XmlWriter, write_entity_account, write_individual_account,
    write_message_spec, write_reporting_fi,
};

/// A finished CRS document and its account counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDocument {
    pub xml: String,
    pub message_ref_id: String,
    pub individual_count: usize,
    pub entity_count: usize,
}

impl GeneratedDocument {
    /// Number of `AccountReport` elements in the document.
    pub fn total_reports(&self) -> usize {
        self.individual_count + self.entity_count
    }

    /// Hand the XML to a sink (file, clipboard buffer, HTTP body).
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), CrsError> {
        out.write_all(self.xml.as_bytes())
            .and_then(|()| out.flush())
            .map_err(CrsError::generation)
    }

    /// Download file name derived from the MessageRefId.
    pub fn suggested_file_name(&self) -> String {
        format!("{}.xml", self.message_ref_id)
    }
}

/// Generate a CRS document, stamped with the current UTC time and fresh
/// reference ids.
pub fn generate(workbook: &Workbook, config: &Config) -> Result<GeneratedDocument, CrsError> {
    let mut ids = RefIdGenerator::new();
    generate_with(workbook, config, Utc::now().naive_utc(), &mut ids)
}

/// [`generate`], but only once the user has consented.
pub fn generate_with_consent(
    consent: bool,
    workbook: &Workbook,
    config: &Config,
) -> Result<GeneratedDocument, CrsError> {
    if !consent {
        return Err(CrsError::ConsentRequired);
    }
    generate(workbook, config)
}

/// Generate with an explicit timestamp and id generator. Output is fully
/// determined by the inputs.
///
/// Sheet presence is checked first, so a workbook missing sheets always
/// fails with [`CrsError::MissingSheets`], even under a rejected config.
pub fn generate_with(
    workbook: &Workbook,
    config: &Config,
    timestamp: NaiveDateTime,
    ids: &mut RefIdGenerator,
) -> Result<GeneratedDocument, CrsError> {
    let _span = tracing::info_span!(
        "generate",
        transmitting = %config.transmitting_country,
        receiving = %config.receiving_country
    )
    .entered();

    let (Some(business), Some(individuals), Some(entities)) = (
        workbook.sheet(BUSINESS_INFORMATION),
        workbook.sheet(INDIVIDUAL_ACCOUNTS),
        workbook.sheet(ENTITY_ACCOUNTS),
    ) else {
        return Err(CrsError::MissingSheets(workbook.missing_sheets()));
    };

    config.validate()?;

    if config.strict_columns {
        INDIVIDUAL_SCHEMA.check_header(individuals)?;
        ENTITY_SCHEMA.check_header(entities)?;
    }

    let info = BusinessInfo::from_sheet(business);
    let institution = ReportingInstitution::from_business_info(&info, &config.transmitting_country);
    let individual_records = individual_accounts(individuals);
    let entity_records = entity_accounts(entities);

    let year = config.reporting_period.year();
    let message_prefix = format!("{}{year}-MSG-", config.transmitting_country);
    let doc_prefix = format!("{}{year}-DOC-", config.transmitting_country);
    let message_ref_id = ids.next_id(&message_prefix);

    let mut w = XmlWriter::new()?;
    xml::start_document(&mut w)?;
    write_message_spec(
        &mut w,
        config,
        &MessageHeader {
            sending_company_in: info.tin(),
            message_ref_id: &message_ref_id,
            timestamp,
        },
    )?;

    w.start_element("CrsBody")?;
    write_reporting_fi(&mut w, &institution, &config.doc_type_indic, &ids.next_id(&doc_prefix))?;
    w.start_element("ReportingGroup")?;
    for account in &individual_records {
        write_individual_account(&mut w, account, &config.doc_type_indic, &ids.next_id(&doc_prefix))?;
    }
    for account in &entity_records {
        write_entity_account(&mut w, account, &config.doc_type_indic, &ids.next_id(&doc_prefix))?;
    }
    w.end_element("ReportingGroup")?;
    w.end_element("CrsBody")?;
    xml::end_document(&mut w)?;

    let document = GeneratedDocument {
        xml: w.into_string()?,
        message_ref_id,
        individual_count: individual_records.len(),
        entity_count: entity_records.len(),
    };
    tracing::info!(
        individuals = document.individual_count,
        entities = document.entity_count,
        message_ref_id = %document.message_ref_id,
        "CRS document generated"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, ConfigBuilder, Row, Sheet};
    use chrono::NaiveDate;

    fn config() -> Config {
        ConfigBuilder::new("MU", "GB", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).build()
    }

    fn workbook(individual_rows: Vec<Row>, entity_rows: Vec<Row>) -> Workbook {
        Workbook::default()
            .with_sheet(Sheet::new(
                BUSINESS_INFORMATION,
                vec![
                    Row::new(vec!["TIN".into(), "11223344".into()]),
                    Row::new(vec!["Name".into(), "Acme Ltd".into()]),
                ],
            ))
            .with_sheet(Sheet::new(INDIVIDUAL_ACCOUNTS, individual_rows))
            .with_sheet(Sheet::new(ENTITY_ACCOUNTS, entity_rows))
    }

    #[test]
    fn empty_account_sheets_still_produce_document() {
        let doc = generate(&workbook(vec![], vec![]), &config()).unwrap();
        assert_eq!(doc.total_reports(), 0);
        assert!(doc.xml.contains("<ReportingFI>"));
        assert!(doc.xml.contains("<SendingCompanyIN>11223344</SendingCompanyIN>"));
        assert!(doc.message_ref_id.starts_with("MU2024-MSG-"));
    }

    #[test]
    fn missing_sheets_fail_before_xml() {
        let wb = Workbook::default().with_sheet(Sheet::new(INDIVIDUAL_ACCOUNTS, vec![]));
        match generate(&wb, &config()) {
            Err(CrsError::MissingSheets(names)) => {
                assert_eq!(names, vec![BUSINESS_INFORMATION, ENTITY_ACCOUNTS]);
            }
            other => panic!("expected MissingSheets, got {other:?}"),
        }
    }

    #[test]
    fn missing_sheets_reported_before_config_errors() {
        let mut cfg = config();
        cfg.receiving_country = "Great Britain - GB".into();
        match generate(&Workbook::default(), &cfg) {
            Err(CrsError::MissingSheets(names)) => {
                assert_eq!(names, vec![BUSINESS_INFORMATION, INDIVIDUAL_ACCOUNTS, ENTITY_ACCOUNTS]);
            }
            other => panic!("expected MissingSheets, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_rejected() {
        let mut cfg = config();
        cfg.receiving_country = "Great Britain".into();
        assert!(matches!(
            generate(&workbook(vec![], vec![]), &cfg),
            Err(CrsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn consent_gate() {
        let wb = workbook(vec![], vec![]);
        assert!(matches!(
            generate_with_consent(false, &wb, &config()),
            Err(CrsError::ConsentRequired)
        ));
        assert!(generate_with_consent(true, &wb, &config()).is_ok());
    }

    #[test]
    fn deterministic_with_fixed_inputs() {
        let rows = vec![Row::new(vec![Cell::Number(1.0), "ACC-1".into()])];
        let wb = workbook(rows, vec![]);
        let ts = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let a = generate_with(&wb, &config(), ts, &mut RefIdGenerator::with_seed(9)).unwrap();
        let b = generate_with(&wb, &config(), ts, &mut RefIdGenerator::with_seed(9)).unwrap();
        assert_eq!(a, b);
        assert!(a.xml.contains("<Timestamp>2025-01-02T03:04:05</Timestamp>"));
    }

    #[test]
    fn write_to_sink() {
        let doc = generate(&workbook(vec![], vec![]), &config()).unwrap();
        let mut buf = Vec::new();
        doc.write_to(&mut buf).unwrap();
        assert_eq!(buf, doc.xml.as_bytes());
        assert!(doc.suggested_file_name().ends_with(".xml"));
    }
}

use chrono::NaiveDateTime;

use super::xml_utils::XmlWriter;
use crate::core::{Config, CrsError};

/// Per-run values of the `MessageSpec` block that do not come from [`Config`].
#[derive(Debug, Clone)]
pub struct MessageHeader<'a> {
    /// `SendingCompanyIN`: the reporting institution's TIN.
    pub sending_company_in: &'a str,
    pub message_ref_id: &'a str,
    pub timestamp: NaiveDateTime,
}

/// Write the `MessageSpec` block.
pub fn write_message_spec(
    w: &mut XmlWriter,
    config: &Config,
    header: &MessageHeader<'_>,
) -> Result<(), CrsError> {
    w.start_element("MessageSpec")?;
    w.text_element("SendingCompanyIN", header.sending_company_in)?;
    w.text_element("TransmittingCountry", &config.transmitting_country)?;
    w.text_element("ReceivingCountry", &config.receiving_country)?;
    w.text_element("MessageType", &config.message_type)?;
    w.optional_text_element("Warning", config.warning.as_deref())?;
    w.optional_text_element("Contact", config.contact.as_deref())?;
    w.text_element("MessageRefId", header.message_ref_id)?;
    w.text_element("MessageTypeIndic", &config.message_type_indic)?;
    w.text_element(
        "ReportingPeriod",
        &config.reporting_period.format("%Y-%m-%d").to_string(),
    )?;
    w.text_element(
        "Timestamp",
        &header.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
    )?;
    w.end_element("MessageSpec")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigBuilder;
    use chrono::NaiveDate;

    #[test]
    fn message_spec_order_and_values() {
        let config = ConfigBuilder::new("MU", "GB", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
            .contact("ops@acme.example")
            .build();
        let header = MessageHeader {
            sending_company_in: "11223344",
            message_ref_id: "MU2024-MSG-0001",
            timestamp: NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        };
        let mut w = XmlWriter::new().unwrap();
        write_message_spec(&mut w, &config, &header).unwrap();
        let xml = w.into_string().unwrap();

        let order = [
            "<SendingCompanyIN>11223344</SendingCompanyIN>",
            "<TransmittingCountry>MU</TransmittingCountry>",
            "<ReceivingCountry>GB</ReceivingCountry>",
            "<MessageType>CRS</MessageType>",
            "<Contact>ops@acme.example</Contact>",
            "<MessageRefId>MU2024-MSG-0001</MessageRefId>",
            "<MessageTypeIndic>CRS701</MessageTypeIndic>",
            "<ReportingPeriod>2024-12-31</ReportingPeriod>",
            "<Timestamp>2025-03-01T09:30:00</Timestamp>",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| xml.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
        assert!(!xml.contains("<Warning>"));
    }
}

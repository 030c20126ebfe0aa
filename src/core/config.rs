use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::countries::is_known_country_code;
use super::error::CrsError;

/// Message type codes accepted for `MessageTypeIndic`.
pub const MESSAGE_TYPE_INDICS: [&str; 3] = ["CRS701", "CRS702", "CRS703"];

/// DocSpec type codes accepted for `DocTypeIndic`.
pub const DOC_TYPE_INDICS: [&str; 8] = [
    "OECD0", "OECD1", "OECD2", "OECD3", "OECD10", "OECD11", "OECD12", "OECD13",
];

/// Per-run configuration supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// ISO 3166-1 alpha-2 code of the transmitting jurisdiction.
    pub transmitting_country: String,
    /// ISO 3166-1 alpha-2 code of the receiving jurisdiction.
    pub receiving_country: String,
    /// `MessageType`, always "CRS" for this schema.
    pub message_type: String,
    /// `MessageTypeIndic`: CRS701 new data, CRS702 corrections, CRS703 no data.
    pub message_type_indic: String,
    /// Last day of the reporting period.
    pub reporting_period: NaiveDate,
    /// `DocTypeIndic` stamped on every DocSpec (OECD1 new data, OECD11 test data).
    pub doc_type_indic: String,
    /// Optional `MessageSpec/Warning` free text.
    pub warning: Option<String>,
    /// Optional `MessageSpec/Contact` free text.
    pub contact: Option<String>,
    /// Require account sheet headers to match the column contract.
    pub strict_columns: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transmitting_country: String::new(),
            receiving_country: String::new(),
            message_type: "CRS".into(),
            message_type_indic: "CRS701".into(),
            reporting_period: NaiveDate::MIN,
            doc_type_indic: "OECD1".into(),
            warning: None,
            contact: None,
            strict_columns: false,
        }
    }
}

impl Config {
    /// Check the configuration before a run.
    pub fn validate(&self) -> Result<(), CrsError> {
        for (field, code) in [
            ("transmitting_country", &self.transmitting_country),
            ("receiving_country", &self.receiving_country),
        ] {
            if !is_known_country_code(code) {
                return Err(CrsError::InvalidConfig(format!(
                    "{field} '{code}' is not an ISO 3166-1 alpha-2 code"
                )));
            }
        }
        if self.message_type.trim().is_empty() {
            return Err(CrsError::InvalidConfig("message_type must not be empty".into()));
        }
        if !MESSAGE_TYPE_INDICS.contains(&self.message_type_indic.as_str()) {
            return Err(CrsError::InvalidConfig(format!(
                "message_type_indic '{}' must be one of {}",
                self.message_type_indic,
                MESSAGE_TYPE_INDICS.join(", ")
            )));
        }
        if !DOC_TYPE_INDICS.contains(&self.doc_type_indic.as_str()) {
            return Err(CrsError::InvalidConfig(format!(
                "doc_type_indic '{}' is not a known DocTypeIndic code",
                self.doc_type_indic
            )));
        }
        if self.reporting_period == NaiveDate::MIN {
            return Err(CrsError::InvalidConfig("reporting_period is not set".into()));
        }
        Ok(())
    }
}

/// Builder for [`Config`].
///
/// # Example
///
/// ```
/// use crs_report::ConfigBuilder;
/// use chrono::NaiveDate;
///
/// let config = ConfigBuilder::new("MU", "GB", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
///     .contact("compliance@acme.example")
///     .build();
/// assert!(config.validate().is_ok());
/// ```
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder with the required countries and reporting period.
    pub fn new(
        transmitting_country: impl Into<String>,
        receiving_country: impl Into<String>,
        reporting_period: NaiveDate,
    ) -> Self {
        Self {
            config: Config {
                transmitting_country: transmitting_country.into(),
                receiving_country: receiving_country.into(),
                reporting_period,
                ..Default::default()
            },
        }
    }

    pub fn message_type(mut self, message_type: impl Into<String>) -> Self {
        self.config.message_type = message_type.into();
        self
    }

    pub fn message_type_indic(mut self, indic: impl Into<String>) -> Self {
        self.config.message_type_indic = indic.into();
        self
    }

    pub fn doc_type_indic(mut self, indic: impl Into<String>) -> Self {
        self.config.doc_type_indic = indic.into();
        self
    }

    pub fn warning(mut self, warning: impl Into<String>) -> Self {
        self.config.warning = Some(warning.into());
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.config.contact = Some(contact.into());
        self
    }

    pub fn strict_columns(mut self, strict: bool) -> Self {
        self.config.strict_columns = strict;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

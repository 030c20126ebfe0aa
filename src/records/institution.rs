use serde::Serialize;

use super::accounts::{Address, UNKNOWN_CITY};
use super::filter::BusinessInfo;
use crate::core::Cell;
use crate::mapping::parse_country_code;

/// The reporting financial institution, read from `Business Information`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportingInstitution {
    pub tin: String,
    pub tin_issued_by: String,
    pub name: String,
    pub residence_country: String,
    pub address: Address,
}

impl ReportingInstitution {
    /// Build from business info. An empty residence country falls back to
    /// `transmitting_country`.
    pub fn from_business_info(info: &BusinessInfo, transmitting_country: &str) -> Self {
        let country = |key: &str| parse_country_code(&Cell::from(info.get(key)));
        let optional = |key: &str| Some(info.get(key).to_string()).filter(|v| !v.is_empty());

        let mut residence_country = country(BusinessInfo::RESIDENCE_COUNTRY);
        if residence_country.is_empty() {
            residence_country = transmitting_country.to_string();
        }
        let mut tin_issued_by = country(BusinessInfo::TIN_ISSUED_BY);
        if tin_issued_by.is_empty() {
            tin_issued_by = residence_country.clone();
        }
        let mut address_country = country(BusinessInfo::COUNTRY);
        if address_country.is_empty() {
            address_country = residence_country.clone();
        }
        let city = match info.get(BusinessInfo::CITY) {
            "" => UNKNOWN_CITY.to_string(),
            city => city.to_string(),
        };

        Self {
            tin: info.tin().to_string(),
            tin_issued_by,
            name: info.name().to_string(),
            address: Address {
                country_code: address_country,
                street: optional(BusinessInfo::STREET),
                building_identifier: optional(BusinessInfo::BUILDING_IDENTIFIER),
                floor_identifier: optional(BusinessInfo::FLOOR_IDENTIFIER),
                district_name: optional(BusinessInfo::DISTRICT_NAME),
                post_code: optional(BusinessInfo::POST_CODE),
                city,
            },
            residence_country,
        }
    }
}

//! CRS v2 XML assembly.
//!
//! The document is written top to bottom in one pass:
//!
//! ```text
//! CRS_OECD
//! ├── MessageSpec
//! └── CrsBody
//!     ├── ReportingFI
//!     └── ReportingGroup
//!         └── AccountReport*
//! ```
//!
//! CRS elements sit in the default namespace; address parts use `cfc:`
//! and DocSpec children use `stf:`.

mod account_report;
mod message_spec;
mod reporting_fi;
pub(crate) mod xml_utils;

pub use account_report::{write_entity_account, write_individual_account};
pub use message_spec::{MessageHeader, write_message_spec};
pub use reporting_fi::write_reporting_fi;
pub use xml_utils::{XmlResult, XmlWriter};

use crate::core::CrsError;

/// Root element name.
pub const ROOT_ELEMENT: &str = "CRS_OECD";
/// Value of the root `version` attribute.
pub const CRS_VERSION: &str = "2.0";
/// `Payment/Type` written on every account (CRS504: other).
pub const PAYMENT_TYPE: &str = "CRS504";
/// `nameType` on controlling person names (OECD202: individual).
pub const CP_NAME_TYPE: &str = "OECD202";
/// `legalAddressType` on controlling person addresses (OECD301: residential or business).
pub const CP_LEGAL_ADDRESS_TYPE: &str = "OECD301";

/// Namespace URIs used by the CRS v2 schema.
pub mod crs_ns {
    pub const CRS: &str = "urn:oecd:ties:crs:v2";
    pub const CFC: &str = "urn:oecd:ties:commontypesfatcacrs:v2";
    pub const STF: &str = "urn:oecd:ties:crsstf:v5";
}

/// Open the `CRS_OECD` root with its namespace declarations.
pub fn start_document(w: &mut XmlWriter) -> Result<(), CrsError> {
    w.start_element_with_attrs(
        ROOT_ELEMENT,
        &[
            ("xmlns", crs_ns::CRS),
            ("xmlns:cfc", crs_ns::CFC),
            ("xmlns:stf", crs_ns::STF),
            ("version", CRS_VERSION),
        ],
    )?;
    Ok(())
}

pub fn end_document(w: &mut XmlWriter) -> Result<(), CrsError> {
    w.end_element(ROOT_ELEMENT)?;
    Ok(())
}

/// `DocSpec` block shared by ReportingFI and every AccountReport.
pub(crate) fn write_doc_spec(
    w: &mut XmlWriter,
    doc_type_indic: &str,
    doc_ref_id: &str,
) -> Result<(), CrsError> {
    w.start_element("DocSpec")?;
    w.text_element("stf:DocTypeIndic", doc_type_indic)?;
    w.text_element("stf:DocRefId", doc_ref_id)?;
    w.end_element("DocSpec")?;
    Ok(())
}

/// `Address` with `cfc:CountryCode` and `cfc:AddressFix`. Empty optional
/// parts are left out; `City` is always written.
pub(crate) fn write_address(
    w: &mut XmlWriter,
    address: &crate::records::Address,
    legal_address_type: Option<&str>,
) -> Result<(), CrsError> {
    match legal_address_type {
        Some(t) => w.start_element_with_attrs("Address", &[("legalAddressType", t)])?,
        None => w.start_element("Address")?,
    };
    w.text_element("cfc:CountryCode", &address.country_code)?;
    w.start_element("cfc:AddressFix")?;
    w.optional_text_element("cfc:Street", address.street.as_deref())?;
    w.optional_text_element("cfc:BuildingIdentifier", address.building_identifier.as_deref())?;
    w.optional_text_element("cfc:FloorIdentifier", address.floor_identifier.as_deref())?;
    w.optional_text_element("cfc:DistrictName", address.district_name.as_deref())?;
    w.optional_text_element("cfc:PostCode", address.post_code.as_deref())?;
    w.text_element("cfc:City", &address.city)?;
    w.end_element("cfc:AddressFix")?;
    w.end_element("Address")?;
    Ok(())
}

/// Element with an `issuedBy` attribute, omitted from the attribute list
/// when the issuer is unknown.
pub(crate) fn write_issued_by(
    w: &mut XmlWriter,
    name: &str,
    value: &str,
    issued_by: &str,
) -> Result<(), CrsError> {
    if issued_by.is_empty() {
        w.text_element(name, value)?;
    } else {
        w.text_element_with_attrs(name, value, &[("issuedBy", issued_by)])?;
    }
    Ok(())
}

use super::xml_utils::XmlWriter;
use super::{write_address, write_doc_spec, write_issued_by};
use crate::core::CrsError;
use crate::records::ReportingInstitution;

/// Write the `ReportingFI` block with its own DocSpec.
pub fn write_reporting_fi(
    w: &mut XmlWriter,
    fi: &ReportingInstitution,
    doc_type_indic: &str,
    doc_ref_id: &str,
) -> Result<(), CrsError> {
    w.start_element("ReportingFI")?;
    w.text_element("ResCountryCode", &fi.residence_country)?;
    write_issued_by(w, "IN", &fi.tin, &fi.tin_issued_by)?;
    w.text_element("Name", &fi.name)?;
    write_address(w, &fi.address, None)?;
    write_doc_spec(w, doc_type_indic, doc_ref_id)?;
    w.end_element("ReportingFI")?;
    Ok(())
}

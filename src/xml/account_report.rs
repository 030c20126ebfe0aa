use super::xml_utils::XmlWriter;
use super::{CP_LEGAL_ADDRESS_TYPE, CP_NAME_TYPE, PAYMENT_TYPE};
use super::{write_address, write_doc_spec, write_issued_by};
use crate::core::CrsError;
use crate::records::{
    AccountNumber, Balance, BirthInfo, ControllingPerson, EntityAccount, IndividualAccount,
    Organisation, Person,
};

/// Write one `AccountReport` with an `Individual` holder.
pub fn write_individual_account(
    w: &mut XmlWriter,
    acc: &IndividualAccount,
    doc_type_indic: &str,
    doc_ref_id: &str,
) -> Result<(), CrsError> {
    w.start_element("AccountReport")?;
    write_doc_spec(w, doc_type_indic, doc_ref_id)?;
    write_account_number(w, &acc.account)?;
    w.start_element("AccountHolder")?;
    write_person(w, &acc.holder, None, None)?;
    w.end_element("AccountHolder")?;
    write_balance(w, &acc.balance)?;
    w.end_element("AccountReport")?;
    Ok(())
}

/// Write one `AccountReport` with an `Organisation` holder and, when
/// present, its controlling person.
pub fn write_entity_account(
    w: &mut XmlWriter,
    acc: &EntityAccount,
    doc_type_indic: &str,
    doc_ref_id: &str,
) -> Result<(), CrsError> {
    w.start_element("AccountReport")?;
    write_doc_spec(w, doc_type_indic, doc_ref_id)?;
    write_account_number(w, &acc.account)?;
    w.start_element("AccountHolder")?;
    write_organisation(w, &acc.organisation)?;
    w.text_element("AcctHolderType", &acc.holder_type)?;
    w.end_element("AccountHolder")?;
    if let Some(cp) = &acc.controlling_person {
        write_controlling_person(w, cp)?;
    }
    write_balance(w, &acc.balance)?;
    w.end_element("AccountReport")?;
    Ok(())
}

fn bool_attr(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}

fn write_account_number(w: &mut XmlWriter, account: &AccountNumber) -> Result<(), CrsError> {
    w.text_element_with_attrs(
        "AccountNumber",
        &account.number,
        &[
            ("AcctNumberType", &account.number_type),
            ("UndocumentedAccount", bool_attr(account.undocumented)),
            ("ClosedAccount", bool_attr(account.closed)),
            ("DormantAccount", bool_attr(account.dormant)),
        ],
    )?;
    Ok(())
}

fn write_person(
    w: &mut XmlWriter,
    person: &Person,
    name_type: Option<&str>,
    legal_address_type: Option<&str>,
) -> Result<(), CrsError> {
    w.start_element("Individual")?;
    w.text_element("ResCountryCode", &person.residence_country)?;
    write_issued_by(w, "TIN", &person.tin, &person.tin_issued_by)?;
    match name_type {
        Some(t) => w.start_element_with_attrs("Name", &[("nameType", t)])?,
        None => w.start_element("Name")?,
    };
    w.text_element("FirstName", &person.first_name)?;
    w.text_element("LastName", &person.last_name)?;
    w.end_element("Name")?;
    write_address(w, &person.address, legal_address_type)?;
    write_birth_info(w, &person.birth)?;
    w.end_element("Individual")?;
    Ok(())
}

/// `BirthInfo` is left out entirely when date, city and country are all
/// empty, and `BirthDate` is left out when no date was recognized. The
/// schema has no empty form for either.
fn write_birth_info(w: &mut XmlWriter, birth: &BirthInfo) -> Result<(), CrsError> {
    if birth.date.is_empty() && birth.city.is_none() && birth.country_code.is_none() {
        return Ok(());
    }
    w.start_element("BirthInfo")?;
    w.optional_text_element("BirthDate", Some(birth.date.as_str()))?;
    w.optional_text_element("City", birth.city.as_deref())?;
    if let Some(country) = &birth.country_code {
        w.start_element("CountryInfo")?;
        w.text_element("CountryCode", country)?;
        w.end_element("CountryInfo")?;
    }
    w.end_element("BirthInfo")?;
    Ok(())
}

fn write_organisation(w: &mut XmlWriter, org: &Organisation) -> Result<(), CrsError> {
    w.start_element("Organisation")?;
    w.text_element("ResCountryCode", &org.residence_country)?;
    write_issued_by(w, "IN", &org.identification_number, &org.in_issued_by)?;
    w.text_element("Name", &org.name)?;
    write_address(w, &org.address, None)?;
    w.end_element("Organisation")?;
    Ok(())
}

fn write_controlling_person(w: &mut XmlWriter, cp: &ControllingPerson) -> Result<(), CrsError> {
    w.start_element("ControllingPerson")?;
    write_person(w, &cp.person, Some(CP_NAME_TYPE), Some(CP_LEGAL_ADDRESS_TYPE))?;
    w.text_element("CtrlgPersonType", &cp.person_type)?;
    w.end_element("ControllingPerson")?;
    Ok(())
}

fn write_balance(w: &mut XmlWriter, balance: &Balance) -> Result<(), CrsError> {
    w.amount_element("AccountBalance", &balance.balance, &balance.currency)?;
    w.start_element("Payment")?;
    w.text_element("Type", PAYMENT_TYPE)?;
    w.amount_element("PaymentAmnt", &balance.payment, &balance.currency)?;
    w.end_element("Payment")?;
    Ok(())
}

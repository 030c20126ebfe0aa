use serde::Serialize;

use super::columns::{
    AccountNumberColumns, AddressColumns, BalanceColumns, BirthColumns, ControllingPersonColumns,
    EntityColumns, IndividualColumns, PersonColumns,
};
use crate::core::Row;
use crate::mapping::{
    format_amount, format_date, parse_country_code, parse_currency_code, parse_flag, split_code,
};

/// `AcctNumberType` when the sheet leaves it blank (OECD605: other).
pub const DEFAULT_ACCT_NUMBER_TYPE: &str = "OECD605";
/// `AcctHolderType` when blank (CRS101: passive NFE with controlling persons).
pub const DEFAULT_ACCT_HOLDER_TYPE: &str = "CRS101";
/// `CtrlgPersonType` when blank (CRS801: control by ownership).
pub const DEFAULT_CTRLG_PERSON_TYPE: &str = "CRS801";
/// `AddressFix/City` when the sheet leaves it blank.
pub const UNKNOWN_CITY: &str = "Unknown";

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn or_else(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountNumber {
    pub number: String,
    pub number_type: String,
    pub undocumented: bool,
    pub closed: bool,
    pub dormant: bool,
}

impl AccountNumber {
    pub fn from_row(row: &Row, cols: &AccountNumberColumns) -> Self {
        Self {
            number: row.text(cols.number),
            number_type: split_code(row.cell(cols.number_type), DEFAULT_ACCT_NUMBER_TYPE),
            undocumented: parse_flag(row.cell(cols.undocumented)),
            closed: parse_flag(row.cell(cols.closed)),
            dormant: parse_flag(row.cell(cols.dormant)),
        }
    }
}

/// Postal address. Optional parts are `None` when their cell is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub country_code: String,
    pub street: Option<String>,
    pub building_identifier: Option<String>,
    pub floor_identifier: Option<String>,
    pub district_name: Option<String>,
    pub post_code: Option<String>,
    pub city: String,
}

impl Address {
    /// Read an address; an empty country falls back to `residence_country`.
    pub fn from_row(row: &Row, cols: &AddressColumns, residence_country: &str) -> Self {
        Self {
            country_code: or_else(parse_country_code(row.cell(cols.country)), residence_country),
            street: non_empty(row.text(cols.street)),
            building_identifier: non_empty(row.text(cols.building_identifier)),
            floor_identifier: non_empty(row.text(cols.floor_identifier)),
            district_name: non_empty(row.text(cols.district_name)),
            post_code: non_empty(row.text(cols.post_code)),
            city: or_else(row.text(cols.city), UNKNOWN_CITY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthInfo {
    /// `YYYY-MM-DD`, or `""` when the cell held no recognizable date.
    pub date: String,
    pub city: Option<String>,
    pub country_code: Option<String>,
}

impl BirthInfo {
    pub fn from_row(row: &Row, cols: &BirthColumns) -> Self {
        Self {
            date: format_date(row.cell(cols.date)),
            city: non_empty(row.text(cols.city)),
            country_code: non_empty(parse_country_code(row.cell(cols.country))),
        }
    }
}

/// A natural person: an individual holder or a controlling person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub residence_country: String,
    pub tin: String,
    pub tin_issued_by: String,
    pub address: Address,
    pub birth: BirthInfo,
}

impl Person {
    pub fn from_row(row: &Row, cols: &PersonColumns) -> Self {
        let residence_country = parse_country_code(row.cell(cols.residence_country));
        Self {
            first_name: row.text(cols.first_name),
            last_name: row.text(cols.last_name),
            tin: row.text(cols.tin),
            tin_issued_by: or_else(
                parse_country_code(row.cell(cols.tin_issued_by)),
                &residence_country,
            ),
            address: Address::from_row(row, &cols.address, &residence_country),
            birth: BirthInfo::from_row(row, &cols.birth),
            residence_country,
        }
    }
}

/// Balance and payment, already formatted for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub currency: String,
    pub balance: String,
    pub payment: String,
}

impl Balance {
    pub fn from_row(row: &Row, cols: &BalanceColumns) -> Self {
        Self {
            currency: parse_currency_code(row.cell(cols.currency)),
            balance: format_amount(row.cell(cols.balance)),
            payment: format_amount(row.cell(cols.payment)),
        }
    }
}

/// One data row of the `Individual Accounts` sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualAccount {
    pub account: AccountNumber,
    pub holder: Person,
    pub balance: Balance,
}

impl IndividualAccount {
    pub fn from_row(row: &Row, cols: &IndividualColumns) -> Self {
        Self {
            account: AccountNumber::from_row(row, &cols.account),
            holder: Person::from_row(row, &cols.holder),
            balance: Balance::from_row(row, &cols.balance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organisation {
    pub name: String,
    pub residence_country: String,
    pub identification_number: String,
    pub in_issued_by: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllingPerson {
    pub person: Person,
    pub person_type: String,
}

impl ControllingPerson {
    /// The controlling person nested in an entity row, if both its first
    /// and last name are filled in.
    ///
    /// Names are trimmed before the check, so a whitespace-only name
    /// counts as missing.
    pub fn from_row(row: &Row, cols: &ControllingPersonColumns) -> Option<Self> {
        let person = cols.person;
        if row.cell(person.first_name).is_blank() || row.cell(person.last_name).is_blank() {
            return None;
        }
        Some(Self {
            person: Person::from_row(row, &person),
            person_type: split_code(row.cell(cols.person_type), DEFAULT_CTRLG_PERSON_TYPE),
        })
    }
}

/// One data row of the `Entity Accounts` sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityAccount {
    pub account: AccountNumber,
    pub organisation: Organisation,
    pub holder_type: String,
    pub balance: Balance,
    pub controlling_person: Option<ControllingPerson>,
}

impl EntityAccount {
    pub fn from_row(row: &Row, cols: &EntityColumns) -> Self {
        let residence_country = parse_country_code(row.cell(cols.residence_country));
        let organisation = Organisation {
            name: row.text(cols.name),
            identification_number: row.text(cols.identification_number),
            in_issued_by: or_else(
                parse_country_code(row.cell(cols.in_issued_by)),
                &residence_country,
            ),
            address: Address::from_row(row, &cols.address, &residence_country),
            residence_country,
        };
        Self {
            account: AccountNumber::from_row(row, &cols.account),
            organisation,
            holder_type: split_code(row.cell(cols.holder_type), DEFAULT_ACCT_HOLDER_TYPE),
            balance: Balance::from_row(row, &cols.balance),
            controlling_person: ControllingPerson::from_row(row, &cols.controlling_person),
        }
    }
}

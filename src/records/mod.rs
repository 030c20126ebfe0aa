//! Row classification and typed record extraction.
//!
//! Account sheets are positional: a row is data iff its first cell is
//! numeric, and fields are read through the offset tables in
//! [`columns`]. Everything downstream works on the typed records.

mod accounts;
pub mod columns;
mod filter;
mod institution;

pub use accounts::*;
pub use columns::{ENTITY_COLUMNS, ENTITY_SCHEMA, INDIVIDUAL_COLUMNS, INDIVIDUAL_SCHEMA, SheetSchema};
pub use filter::{BusinessInfo, count_data_rows, data_rows, is_data_row, normalize_key};
pub use institution::ReportingInstitution;

use crate::core::Sheet;

/// Typed records for every data row of an `Individual Accounts` sheet.
pub fn individual_accounts(sheet: &Sheet) -> Vec<IndividualAccount> {
    data_rows(sheet)
        .map(|(_, row)| IndividualAccount::from_row(row, &INDIVIDUAL_COLUMNS))
        .collect()
}

/// Typed records for every data row of an `Entity Accounts` sheet.
pub fn entity_accounts(sheet: &Sheet) -> Vec<EntityAccount> {
    data_rows(sheet)
        .map(|(_, row)| EntityAccount::from_row(row, &ENTITY_COLUMNS))
        .collect()
}

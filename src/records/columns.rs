//! Positional column contract for the account sheets.
//!
//! Rows are untyped, so every field is found by offset. All offsets live
//! in the two constants below; reordering source columns without
//! updating them silently shifts fields, which `strict_columns` mode
//! turns into a [`CrsError::ColumnMismatch`].

use super::filter::normalize_key;
use crate::core::{CrsError, ENTITY_ACCOUNTS, INDIVIDUAL_ACCOUNTS, Sheet};

/// `AccountNumber` text and its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountNumberColumns {
    pub number: usize,
    pub number_type: usize,
    pub undocumented: usize,
    pub closed: usize,
    pub dormant: usize,
}

/// `AddressFix` fields plus the address country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressColumns {
    pub street: usize,
    pub building_identifier: usize,
    pub floor_identifier: usize,
    pub district_name: usize,
    pub post_code: usize,
    pub city: usize,
    pub country: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthColumns {
    pub date: usize,
    pub city: usize,
    pub country: usize,
}

/// Natural person fields shared by individual holders and controlling persons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonColumns {
    pub first_name: usize,
    pub last_name: usize,
    pub residence_country: usize,
    pub tin: usize,
    pub tin_issued_by: usize,
    pub address: AddressColumns,
    pub birth: BirthColumns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceColumns {
    pub currency: usize,
    pub balance: usize,
    pub payment: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndividualColumns {
    pub account: AccountNumberColumns,
    pub holder: PersonColumns,
    pub balance: BalanceColumns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllingPersonColumns {
    pub person: PersonColumns,
    pub person_type: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityColumns {
    pub account: AccountNumberColumns,
    pub name: usize,
    pub residence_country: usize,
    pub identification_number: usize,
    pub in_issued_by: usize,
    pub holder_type: usize,
    pub address: AddressColumns,
    pub balance: BalanceColumns,
    pub controlling_person: ControllingPersonColumns,
}

const ACCOUNT_NUMBER: AccountNumberColumns = AccountNumberColumns {
    number: 1,
    number_type: 2,
    undocumented: 3,
    closed: 4,
    dormant: 5,
};

/// Offsets into an `Individual Accounts` row. Column 0 is the row number.
pub const INDIVIDUAL_COLUMNS: IndividualColumns = IndividualColumns {
    account: ACCOUNT_NUMBER,
    holder: PersonColumns {
        first_name: 6,
        last_name: 7,
        residence_country: 8,
        tin: 9,
        tin_issued_by: 10,
        address: AddressColumns {
            street: 11,
            building_identifier: 12,
            floor_identifier: 13,
            district_name: 14,
            post_code: 15,
            city: 16,
            country: 17,
        },
        birth: BirthColumns {
            date: 18,
            city: 19,
            country: 20,
        },
    },
    balance: BalanceColumns {
        currency: 21,
        balance: 22,
        payment: 23,
    },
};

/// Offsets into an `Entity Accounts` row. Column 0 is the row number.
pub const ENTITY_COLUMNS: EntityColumns = EntityColumns {
    account: ACCOUNT_NUMBER,
    name: 6,
    residence_country: 7,
    identification_number: 8,
    in_issued_by: 9,
    holder_type: 10,
    address: AddressColumns {
        street: 11,
        building_identifier: 12,
        floor_identifier: 13,
        district_name: 14,
        post_code: 15,
        city: 16,
        country: 17,
    },
    balance: BalanceColumns {
        currency: 18,
        balance: 19,
        payment: 20,
    },
    controlling_person: ControllingPersonColumns {
        person: PersonColumns {
            first_name: 21,
            last_name: 22,
            residence_country: 23,
            tin: 24,
            tin_issued_by: 25,
            address: AddressColumns {
                street: 27,
                building_identifier: 28,
                floor_identifier: 29,
                district_name: 30,
                post_code: 31,
                city: 32,
                country: 33,
            },
            birth: BirthColumns {
                date: 34,
                city: 35,
                country: 36,
            },
        },
        person_type: 26,
    },
};

/// Ordered header labels of an account sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSchema {
    pub sheet: &'static str,
    pub headers: &'static [&'static str],
}

pub const INDIVIDUAL_SCHEMA: SheetSchema = SheetSchema {
    sheet: INDIVIDUAL_ACCOUNTS,
    headers: &[
        "No.",
        "Account Number",
        "Account Number Type",
        "Undocumented Account",
        "Closed Account",
        "Dormant Account",
        "First Name",
        "Last Name",
        "Country of Residence",
        "TIN",
        "TIN Issued By",
        "Street",
        "Building Identifier",
        "Floor Identifier",
        "District Name",
        "Post Code",
        "City",
        "Address Country",
        "Birth Date",
        "Birth City",
        "Birth Country",
        "Currency",
        "Account Balance",
        "Payment Amount",
    ],
};

pub const ENTITY_SCHEMA: SheetSchema = SheetSchema {
    sheet: ENTITY_ACCOUNTS,
    headers: &[
        "No.",
        "Account Number",
        "Account Number Type",
        "Undocumented Account",
        "Closed Account",
        "Dormant Account",
        "Entity Name",
        "Country of Residence",
        "Identification Number",
        "IN Issued By",
        "Account Holder Type",
        "Street",
        "Building Identifier",
        "Floor Identifier",
        "District Name",
        "Post Code",
        "City",
        "Address Country",
        "Currency",
        "Account Balance",
        "Payment Amount",
        "CP First Name",
        "CP Last Name",
        "CP Country of Residence",
        "CP TIN",
        "CP TIN Issued By",
        "Controlling Person Type",
        "CP Street",
        "CP Building Identifier",
        "CP Floor Identifier",
        "CP District Name",
        "CP Post Code",
        "CP City",
        "CP Address Country",
        "CP Birth Date",
        "CP Birth City",
        "CP Birth Country",
    ],
};

impl SheetSchema {
    /// Number of columns the contract defines.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Check the sheet's first row against the contract's labels.
    ///
    /// Labels compare after key normalization, so case, spacing and
    /// punctuation differences are tolerated.
    pub fn check_header(&self, sheet: &Sheet) -> Result<(), CrsError> {
        let header = sheet.rows.first();
        for (column, expected) in self.headers.iter().enumerate() {
            let found = header.map(|row| row.text(column)).unwrap_or_default();
            if normalize_key(&found) != normalize_key(expected) {
                return Err(CrsError::ColumnMismatch {
                    sheet: self.sheet.to_string(),
                    column,
                    expected: expected.to_string(),
                    found,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Row;

    #[test]
    fn headers_line_up_with_individual_offsets() {
        let h = INDIVIDUAL_SCHEMA.headers;
        let c = INDIVIDUAL_COLUMNS;
        assert_eq!(h[c.account.number], "Account Number");
        assert_eq!(h[c.account.dormant], "Dormant Account");
        assert_eq!(h[c.holder.tin], "TIN");
        assert_eq!(h[c.holder.address.post_code], "Post Code");
        assert_eq!(h[c.holder.birth.country], "Birth Country");
        assert_eq!(h[c.balance.payment], "Payment Amount");
        assert_eq!(INDIVIDUAL_SCHEMA.width(), c.balance.payment + 1);
    }

    #[test]
    fn headers_line_up_with_entity_offsets() {
        let h = ENTITY_SCHEMA.headers;
        let c = ENTITY_COLUMNS;
        assert_eq!(h[c.name], "Entity Name");
        assert_eq!(h[c.holder_type], "Account Holder Type");
        assert_eq!(h[c.balance.currency], "Currency");
        let cp = c.controlling_person;
        assert_eq!(h[cp.person.first_name], "CP First Name");
        assert_eq!(h[cp.person_type], "Controlling Person Type");
        assert_eq!(h[cp.person.address.city], "CP City");
        assert_eq!(h[cp.person.birth.country], "CP Birth Country");
        assert_eq!(ENTITY_SCHEMA.width(), cp.person.birth.country + 1);
    }

    #[test]
    fn check_header_tolerates_case_and_punctuation() {
        let header: Row = INDIVIDUAL_SCHEMA
            .headers
            .iter()
            .map(|h| h.to_uppercase())
            .collect();
        let sheet = Sheet::new(INDIVIDUAL_ACCOUNTS, vec![header]);
        assert!(INDIVIDUAL_SCHEMA.check_header(&sheet).is_ok());
    }

    #[test]
    fn check_header_reports_first_mismatch() {
        let mut labels: Vec<String> = ENTITY_SCHEMA.headers.iter().map(|h| h.to_string()).collect();
        labels.swap(6, 7);
        let sheet = Sheet::new(ENTITY_ACCOUNTS, vec![labels.into_iter().collect()]);
        match ENTITY_SCHEMA.check_header(&sheet) {
            Err(CrsError::ColumnMismatch { column, expected, found, .. }) => {
                assert_eq!(column, 6);
                assert_eq!(expected, "Entity Name");
                assert_eq!(found, "Country of Residence");
            }
            other => panic!("expected ColumnMismatch, got {other:?}"),
        }
    }

    #[test]
    fn check_header_on_empty_sheet_fails() {
        let sheet = Sheet::new(ENTITY_ACCOUNTS, vec![]);
        assert!(ENTITY_SCHEMA.check_header(&sheet).is_err());
    }
}

//! Stateless field normalization for spreadsheet cells.
//!
//! Every function takes a [`Cell`](crate::core::Cell) and never fails:
//! gaps resolve to documented defaults (`""`, `"0.00"`, `"USD"`).

mod amounts;
mod codes;
mod dates;

pub use amounts::{ZERO_AMOUNT, format_amount, format_two_places, parse_amount};
pub use codes::{
    CodeKind, DEFAULT_CURRENCY, ParsedCode, parse_code, parse_country_code, parse_currency_code,
    parse_flag, split_code,
};
pub use dates::{MIN_TEXT_SERIAL, MS_PER_DAY, SERIAL_EPOCH_OFFSET, format_date, from_serial, parse_date};

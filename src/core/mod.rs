//! Core types: workbook snapshot, run configuration, errors and
//! reference-id generation.

mod config;
pub mod countries;
pub mod currencies;
mod error;
mod numbering;
mod workbook;

pub use config::*;
pub use countries::is_known_country_code;
pub use currencies::is_known_currency_code;
pub use error::*;
pub use numbering::*;
pub use workbook::*;

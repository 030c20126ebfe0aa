//! # crs-report
//!
//! Turns spreadsheet account records into an OECD Common Reporting
//! Standard (CRS v2) XML message.
//!
//! A workbook carries three sheets: `Business Information` (label/value
//! pairs describing the reporting institution), `Individual Accounts` and
//! `Entity Accounts` (a header row followed by positional data rows, each
//! entity row optionally carrying one controlling person). Generation is a
//! single synchronous pass with no I/O.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use crs_report::*;
//!
//! let workbook = Workbook::default()
//!     .with_sheet(Sheet::new(BUSINESS_INFORMATION, vec![
//!         Row::new(vec!["TIN".into(), "11223344".into()]),
//!         Row::new(vec!["Name".into(), "Acme Ltd".into()]),
//!     ]))
//!     .with_sheet(Sheet::new(INDIVIDUAL_ACCOUNTS, vec![
//!         Row::new(vec!["No.".into(), "Account Number".into()]),
//!         Row::new(vec![Cell::Number(1.0), "ACC-001".into()]),
//!     ]))
//!     .with_sheet(Sheet::new(ENTITY_ACCOUNTS, vec![]));
//!
//! let config = ConfigBuilder::new("MU", "GB", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).build();
//! let doc = generate(&workbook, &config).unwrap();
//!
//! assert_eq!(doc.individual_count, 1);
//! assert!(doc.xml.contains("<AccountNumber"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `csv` | Build a [`Workbook`] from per-sheet CSV exports |
//! | `all` | Everything |

pub mod core;
pub mod generate;
pub mod mapping;
pub mod records;
pub mod xml;

#[cfg(feature = "csv")]
pub mod ingest;

// Re-export the run surface at crate root for convenience
pub use crate::core::*;
pub use crate::generate::{GeneratedDocument, generate, generate_with, generate_with_consent};

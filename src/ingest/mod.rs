//! Workbook ingestion from CSV exports, one CSV text per sheet.
//!
//! # Example
//!
//! ```
//! use crs_report::ingest::workbook_from_csv;
//!
//! let business = "TIN,11223344\nName,Acme Ltd\n";
//! let individuals = "No.,Account Number\n1,ACC-001\n";
//! let entities = "No.,Account Number\n";
//! let workbook = workbook_from_csv([
//!     ("Business Information", business.as_bytes()),
//!     ("Individual Accounts", individuals.as_bytes()),
//!     ("Entity Accounts", entities.as_bytes()),
//! ])
//! .unwrap();
//! assert!(workbook.missing_sheets().is_empty());
//! ```

mod csv_import;

pub use csv_import::{infer_cell, sheet_from_csv, workbook_from_csv};

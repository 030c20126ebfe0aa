use thiserror::Error;

/// Errors that can abort a CRS generation run.
///
/// Rows that fail the data-row test are not errors; they are skipped.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CrsError {
    /// One or more required sheets are absent from the workbook.
    #[error("missing required sheet(s): {}", .0.join(", "))]
    MissingSheets(Vec<String>),

    /// A header cell does not match the sheet's column contract (strict mode).
    #[error(
        "sheet '{sheet}' column {column}: expected header '{expected}', found '{found}'"
    )]
    ColumnMismatch {
        sheet: String,
        column: usize,
        expected: String,
        found: String,
    },

    /// The run configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation was requested before the user gave consent.
    #[error("consent is required before generating a report")]
    ConsentRequired,

    /// Source content could not be read into a workbook.
    #[error("ingest error: {0}")]
    Ingest(String),

    /// Unexpected failure while assembling the XML document.
    #[error("XML generation failed: {0}")]
    Generation(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CrsError {
    /// Wrap any underlying failure as a [`CrsError::Generation`].
    pub fn generation(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Generation(err.into())
    }
}

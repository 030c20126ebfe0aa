use chrono::NaiveDate;
use std::io::Read;

use crate::core::{Cell, CrsError, Row, Sheet, Workbook};

/// Read one headerless CSV text into a sheet, inferring cell types.
///
/// Rows may have differing widths; header rows are kept as-is and later
/// rejected by the data-row test.
pub fn sheet_from_csv<R: Read>(name: &str, reader: R) -> Result<Sheet, CrsError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record
            .map_err(|e| CrsError::Ingest(format!("sheet '{name}' record {}: {e}", line + 1)))?;
        rows.push(record.iter().map(infer_cell).collect::<Row>());
    }
    tracing::debug!(sheet = name, rows = rows.len(), "read CSV sheet");
    Ok(Sheet::new(name, rows))
}

/// Build a workbook from `(sheet name, CSV reader)` pairs.
pub fn workbook_from_csv<'a, R, I>(sheets: I) -> Result<Workbook, CrsError>
where
    R: Read,
    I: IntoIterator<Item = (&'a str, R)>,
{
    let mut workbook = Workbook::default();
    for (name, reader) in sheets {
        workbook = workbook.with_sheet(sheet_from_csv(name, reader)?);
    }
    Ok(workbook)
}

/// Type a raw CSV field the way a spreadsheet would.
///
/// Blank is empty, `true`/`false` are booleans, ISO dates are dates,
/// decimal numbers are numbers. Digit strings with a leading zero
/// (post codes, account numbers) stay text.
pub fn infer_cell(field: &str) -> Cell {
    let field = field.trim();
    if field.is_empty() {
        return Cell::Empty;
    }
    if field.eq_ignore_ascii_case("true") {
        return Cell::Bool(true);
    }
    if field.eq_ignore_ascii_case("false") {
        return Cell::Bool(false);
    }
    if looks_numeric(field) {
        if let Ok(n) = field.parse::<f64>() {
            return Cell::Number(n);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(field, "%Y-%m-%d") {
        return Cell::Date(d);
    }
    Cell::Text(field.to_string())
}

fn looks_numeric(field: &str) -> bool {
    let digits = field.strip_prefix('-').unwrap_or(field);
    let mut chars = digits.chars();
    let leading_zero = digits.len() > 1 && digits.starts_with('0') && !digits.starts_with("0.");
    !leading_zero
        && chars.next().is_some_and(|c| c.is_ascii_digit())
        && chars.all(|c| c.is_ascii_digit() || c == '.')
}

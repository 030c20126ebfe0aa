use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sheet holding the reporting institution's label/value pairs.
pub const BUSINESS_INFORMATION: &str = "Business Information";
/// Sheet holding one row per individual account.
pub const INDIVIDUAL_ACCOUNTS: &str = "Individual Accounts";
/// Sheet holding one row per entity account.
pub const ENTITY_ACCOUNTS: &str = "Entity Accounts";

/// Every sheet a workbook must carry, in report order.
pub const REQUIRED_SHEETS: [&str; 3] = [BUSINESS_INFORMATION, INDIVIDUAL_ACCOUNTS, ENTITY_ACCOUNTS];

/// A single spreadsheet cell, keeping the runtime type the source reported.
///
/// Deserializes untagged: `null`, booleans, numbers, ISO dates, then any
/// other string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// True for [`Cell::Number`], regardless of value.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendition of the cell, trimmed. Empty cells yield `""`.
    ///
    /// Whole numbers render without a fractional part (`11223344`, not
    /// `11223344.0`), dates as `YYYY-MM-DD`.
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<NaiveDate> for Cell {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Empty, Into::into)
    }
}

/// One ordered row of cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub Vec<Cell>);

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cell at `index`; short rows read as [`Cell::Empty`] past their end.
    pub fn cell(&self, index: usize) -> &Cell {
        self.0.get(index).unwrap_or(&EMPTY_CELL)
    }

    /// Trimmed text of the cell at `index`.
    pub fn text(&self, index: usize) -> String {
        self.cell(index).text()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }
}

impl<C: Into<Cell>> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A named sheet: ordered rows, header rows included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// An immutable snapshot of the source workbook.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Add a sheet, replacing any existing sheet of the same name.
    pub fn with_sheet(mut self, sheet: Sheet) -> Self {
        self.sheets.retain(|s| s.name != sheet.name);
        self.sheets.push(sheet);
        self
    }

    /// Look up a sheet by exact name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Names of the [`REQUIRED_SHEETS`] this workbook lacks, in order.
    pub fn missing_sheets(&self) -> Vec<String> {
        REQUIRED_SHEETS
            .iter()
            .filter(|name| self.sheet(name).is_none())
            .map(|name| name.to_string())
            .collect()
    }
}

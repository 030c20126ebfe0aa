use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::{Row, Sheet};

/// True iff `row` has more than one cell and its first cell is numeric.
///
/// Header rows, blank rows and rows whose leading cell was typed as text
/// are all rejected.
pub fn is_data_row(row: &Row) -> bool {
    row.len() > 1 && row.cell(0).is_number()
}

/// Data rows of `sheet` as `(row_index, row)`, skipping everything else.
pub fn data_rows(sheet: &Sheet) -> impl Iterator<Item = (usize, &Row)> {
    sheet.rows.iter().enumerate().filter(|(index, row)| {
        let keep = is_data_row(row);
        if !keep {
            tracing::debug!(sheet = %sheet.name, row = index + 1, "skipping non-data row");
        }
        keep
    })
}

/// Number of data rows in `sheet`.
pub fn count_data_rows(sheet: &Sheet) -> usize {
    sheet.rows.iter().filter(|row| is_data_row(row)).count()
}

/// Lower-case a label and drop everything outside `a-z`:
/// `"Post Code:"` becomes `"postcode"`.
pub fn normalize_key(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Reporting institution metadata keyed by normalized label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BusinessInfo {
    entries: BTreeMap<String, String>,
}

impl BusinessInfo {
    pub const TIN: &'static str = "tin";
    pub const TIN_ISSUED_BY: &'static str = "tinissuedby";
    pub const NAME: &'static str = "name";
    pub const RESIDENCE_COUNTRY: &'static str = "countryofresidence";
    pub const STREET: &'static str = "street";
    pub const BUILDING_IDENTIFIER: &'static str = "buildingidentifier";
    pub const FLOOR_IDENTIFIER: &'static str = "flooridentifier";
    pub const DISTRICT_NAME: &'static str = "districtname";
    pub const POST_CODE: &'static str = "postcode";
    pub const CITY: &'static str = "city";
    pub const COUNTRY: &'static str = "country";

    /// Build from label/value rows. Every row is treated as a pair; rows
    /// whose label normalizes to nothing are ignored and later labels
    /// overwrite earlier ones.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut entries = BTreeMap::new();
        for row in rows {
            let key = normalize_key(&row.text(0));
            if key.is_empty() {
                continue;
            }
            entries.insert(key, row.text(1));
        }
        Self { entries }
    }

    pub fn from_sheet(sheet: &Sheet) -> Self {
        Self::from_rows(&sheet.rows)
    }

    /// Value for a normalized key, or `""`.
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn tin(&self) -> &str {
        self.get(Self::TIN)
    }

    pub fn name(&self) -> &str {
        self.get(Self::NAME)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

use serde::{Deserialize, Serialize};

/// Represents a scalar cell value as handed over by the spreadsheet reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    /// Plain text cell.
    String(String),
    /// Numeric cell. Integer cells are widened to `f64`.
    Number(f64),
    /// Boolean cell.
    Bool(bool),
    /// Blank cell.
    Empty,
}

impl CellValue {
    /// Converts the cell into its textual form.
    ///
    /// Numbers use the `f64` `Display` implementation, which never emits an
    /// exponent and drops the fractional part of integral values, so a mobile
    /// number stored as `9876543210.0` becomes `"9876543210"`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::String(value) => value.clone(),
            CellValue::Number(value) => value.to_string(),
            CellValue::Bool(value) => value.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Returns `true` for empty cells and text cells holding only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::String(value) => value.trim().is_empty(),
            CellValue::Empty => true,
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One sheet row keyed by the column headers exactly as they appear in the
/// sheet. Column order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell under the given header.
    pub fn push(&mut self, header: impl Into<String>, value: CellValue) {
        self.cells.push((header.into(), value));
    }

    /// Looks up the cell stored under `header` (exact match).
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(key, _)| key == header)
            .map(|(_, value)| value)
    }

    /// Iterates the headers in column order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// A decoded sheet: its name and its data rows in sheet order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<RawRow>,
}

/// A consolidated contact extracted from a lead export.
///
/// `mobile` always holds exactly ten ASCII digits. `name` and `email` are empty
/// when the source column was missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_without_fraction_or_exponent() {
        assert_eq!(CellValue::Number(9876543210.0).to_text(), "9876543210");
        assert_eq!(CellValue::Number(919876543210.0).to_text(), "919876543210");
        assert_eq!(CellValue::Number(1.5).to_text(), "1.5");
    }

    #[test]
    fn coercion_is_total() {
        assert_eq!(CellValue::Bool(true).to_text(), "true");
        assert_eq!(CellValue::Empty.to_text(), "");
        assert!(CellValue::from("   ").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn raw_row_keeps_column_order() {
        let row: RawRow = [("B", "2"), ("A", "1")].into_iter().collect();
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(row.get("A"), Some(&CellValue::from("1")));
        assert_eq!(row.get("a"), None);
    }
}

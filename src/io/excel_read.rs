use std::collections::HashSet;
use std::io::Cursor;

use calamine::{DataType, Range, Reader, open_workbook_auto_from_rs};

use crate::error::{LeadError, Result};
use crate::model::{CellValue, RawRow, Sheet};

/// Header used for columns whose header cell is blank.
pub const EMPTY_HEADER: &str = "__EMPTY";

/// Decodes an in-memory spreadsheet into its sheets, in workbook order.
///
/// The format (xlsx, xls, xlsb, ods) is detected from the bytes. The first row
/// of every sheet provides the headers and each following non-blank row becomes
/// a [`RawRow`]. Blank cells are left out of the row.
pub fn decode_workbook(file_name: &str, bytes: Vec<u8>) -> Result<Vec<Sheet>> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|error| LeadError::Parse {
            file: file_name.to_string(),
            message: error.to_string(),
        })?;

    let mut sheets = Vec::new();
    for sheet_name in workbook.sheet_names().to_owned() {
        let range = match workbook.worksheet_range(&sheet_name) {
            Some(Ok(range)) => range,
            Some(Err(error)) => {
                return Err(LeadError::Parse {
                    file: file_name.to_string(),
                    message: format!("sheet '{sheet_name}': {error}"),
                });
            }
            None => continue,
        };
        sheets.push(Sheet {
            rows: range_to_rows(&range),
            name: sheet_name,
        });
    }

    Ok(sheets)
}

fn range_to_rows(range: &Range<DataType>) -> Vec<RawRow> {
    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(first_row) => header_names(first_row),
        None => return Vec::new(),
    };

    rows.filter_map(|cells| {
        let row: RawRow = cells
            .iter()
            .zip(&headers)
            .map(|(cell, header)| (header.as_str(), cell_value(cell)))
            .filter(|(_, value)| *value != CellValue::Empty)
            .collect();
        (!row.is_empty()).then_some(row)
    })
    .collect()
}

fn header_names(cells: &[DataType]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    cells
        .iter()
        .map(|cell| {
            let text = cell_value(cell).to_text();
            let base = if text.is_empty() {
                EMPTY_HEADER.to_string()
            } else {
                text
            };
            let mut header = base.clone();
            let mut counter = 1;
            while seen.contains(&header) {
                header = format!("{base}_{counter}");
                counter += 1;
            }
            seen.insert(header.clone());
            header
        })
        .collect()
}

fn cell_value(cell: &DataType) -> CellValue {
    match cell {
        DataType::String(value) => CellValue::String(value.clone()),
        DataType::Float(value) => CellValue::Number(*value),
        DataType::Int(value) => CellValue::Number(*value as f64),
        DataType::Bool(value) => CellValue::Bool(*value),
        DataType::Empty => CellValue::Empty,
        other => CellValue::String(other.to_string()),
    }
}

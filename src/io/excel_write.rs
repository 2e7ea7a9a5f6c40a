use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;

/// A table that will be materialised as a single Excel sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    /// Column widths in character units, one per column.
    pub widths: Vec<f64>,
    pub rows: Vec<Vec<String>>,
}

/// Writes the table as a one-sheet workbook to the given path.
pub fn write_table(path: &Path, table: &SheetTable) -> Result<()> {
    let mut workbook = build_workbook(table)?;
    workbook.save(path)?;
    Ok(())
}

/// Serialises the table as a one-sheet workbook in memory.
pub fn table_to_buffer(table: &SheetTable) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(table)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(table: &SheetTable) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&table.sheet_name)?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col_idx as u16, header, &header_format)?;
    }

    for (col_idx, width) in table.widths.iter().enumerate() {
        worksheet.set_column_width(col_idx as u16, *width)?;
    }

    // Leads are text, so mobiles keep any leading zero.
    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            worksheet.write_string((row_idx + 1) as u32, col_idx as u16, cell)?;
        }
    }

    Ok(workbook)
}

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::Result;
use crate::io::excel_write::{self, SheetTable};
use crate::model::Lead;

/// Name of the single sheet in the consolidated workbook.
pub const LEADS_SHEET: &str = "Consolidated Leads";
/// Base file name the command line front end uses by default.
pub const DEFAULT_BASE_NAME: &str = "consolidated_leads";

/// Display headers paired with their minimum column width.
const COLUMNS: [(&str, usize); 3] = [
    ("Full Name", 15),
    ("Email Address", 20),
    ("Mobile Number", 15),
];

/// Shapes leads into the table written to the consolidated workbook.
pub fn build_lead_table(leads: &[Lead]) -> SheetTable {
    let rows: Vec<Vec<String>> = leads
        .iter()
        .map(|lead| vec![lead.name.clone(), lead.email.clone(), lead.mobile.clone()])
        .collect();

    let widths = COLUMNS
        .iter()
        .enumerate()
        .map(|(col_idx, (_, floor))| {
            rows.iter()
                .map(|row| row[col_idx].chars().count())
                .fold(*floor, usize::max) as f64
        })
        .collect();

    SheetTable {
        sheet_name: LEADS_SHEET.to_string(),
        columns: COLUMNS.iter().map(|(header, _)| header.to_string()).collect(),
        widths,
        rows,
    }
}

/// Writes `{base_file_name}.xlsx` into `output_dir` and returns its path.
#[instrument(level = "info", skip(leads), fields(lead_count = leads.len(), output_dir = %output_dir.display()))]
pub fn export_leads(leads: &[Lead], output_dir: &Path, base_file_name: &str) -> Result<PathBuf> {
    let path = output_dir.join(format!("{base_file_name}.xlsx"));
    let table = build_lead_table(leads);
    excel_write::write_table(&path, &table)?;
    info!(path = %path.display(), "consolidated workbook written");
    Ok(path)
}

/// Produces the consolidated workbook as bytes instead of a file.
pub fn export_leads_to_buffer(leads: &[Lead]) -> Result<Vec<u8>> {
    excel_write::table_to_buffer(&build_lead_table(leads))
}

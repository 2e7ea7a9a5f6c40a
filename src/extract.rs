use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use tracing::{debug, info, instrument};

use crate::alias::{AliasTable, resolve_key};
use crate::error::{LeadError, Result};
use crate::io::excel_read;
use crate::model::{Lead, RawRow, Sheet};

/// Number of digits in a canonical mobile number.
pub const MOBILE_DIGITS: usize = 10;

/// Reads every file concurrently and returns the leads of all of them.
///
/// Leads keep file order, then sheet order, then row order. The first file
/// that fails to read or decode fails the whole batch.
#[instrument(level = "info", skip_all, fields(file_count = files.len()))]
pub async fn extract_leads(files: &[PathBuf], aliases: &AliasTable) -> Result<Vec<Lead>> {
    let per_file = try_join_all(files.iter().map(|path| extract_file(path, aliases))).await?;
    let leads: Vec<Lead> = per_file.into_iter().flatten().collect();
    info!(lead_count = leads.len(), "extracted leads");
    Ok(leads)
}

async fn extract_file(path: &Path, aliases: &AliasTable) -> Result<Vec<Lead>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| LeadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    extract_leads_from_bytes(&file_name, bytes, aliases)
}

/// Decodes one spreadsheet held in memory and extracts its leads.
#[instrument(level = "debug", skip(bytes, aliases), fields(size = bytes.len()))]
pub fn extract_leads_from_bytes(
    file_name: &str,
    bytes: Vec<u8>,
    aliases: &AliasTable,
) -> Result<Vec<Lead>> {
    let sheets = excel_read::decode_workbook(file_name, bytes)?;
    debug!(sheet_count = sheets.len(), "workbook decoded");
    let leads = leads_from_sheets(&sheets, aliases);
    info!(file = file_name, lead_count = leads.len(), "file processed");
    Ok(leads)
}

/// Extracts the leads of every row of every sheet, in order.
pub fn leads_from_sheets(sheets: &[Sheet], aliases: &AliasTable) -> Vec<Lead> {
    sheets
        .iter()
        .flat_map(|sheet| sheet.rows.iter())
        .filter_map(|row| lead_from_row(row, aliases))
        .collect()
}

/// Builds a lead from a row, or `None` when the row has no usable mobile.
pub fn lead_from_row(row: &RawRow, aliases: &AliasTable) -> Option<Lead> {
    let mobile_key = resolve_key(row, &aliases.mobile)?;
    let mobile_cell = row.get(mobile_key)?;
    if mobile_cell.is_blank() {
        return None;
    }
    let mobile = normalize_mobile(&mobile_cell.to_text())?;

    Some(Lead {
        name: text_field(row, &aliases.name),
        email: text_field(row, &aliases.email),
        mobile,
    })
}

/// Reduces a raw phone value to its last ten digits.
///
/// Every non-digit is dropped first. Fewer than ten digits is not a mobile.
pub fn normalize_mobile(raw: &str) -> Option<String> {
    let digits: String = raw.trim().chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MOBILE_DIGITS {
        return None;
    }
    Some(digits[digits.len() - MOBILE_DIGITS..].to_string())
}

fn text_field(row: &RawRow, aliases: &[String]) -> String {
    resolve_key(row, aliases)
        .and_then(|key| row.get(key))
        .map(|cell| cell.to_text().trim().to_string())
        .unwrap_or_default()
}

//! Spreadsheet adapters wrapping `calamine` (decode) and `rust_xlsxwriter`
//! (encode).

pub mod excel_read;
pub mod excel_write;

//! Core library for the lead-consolidator command line application.
//!
//! Lead exports with inconsistent column naming are read through
//! [`io::excel_read`], matched to the canonical name/email/mobile fields by
//! [`alias`], filtered and normalised by [`extract`], and written back as a
//! single workbook by [`export`].

pub mod alias;
pub mod error;
pub mod export;
pub mod extract;
pub mod io;
pub mod logging;
pub mod model;

pub use alias::{AliasTable, resolve_key};
pub use error::{LeadError, Result};
pub use export::{export_leads, export_leads_to_buffer};
pub use extract::{extract_leads, extract_leads_from_bytes};
pub use model::{CellValue, Lead, RawRow, Sheet};

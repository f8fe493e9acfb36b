//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Print rows as a table or as JSON.
///
/// `Pretty` falls back to the table layout; commands with a richer
/// human view handle `Pretty` themselves before calling this.
pub fn print_rows<D: Tabled + Serialize>(rows: &[D], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(rows)?),
        OutputFormat::Table | OutputFormat::Pretty => println!("{}", table::format_table(rows)),
    }
    Ok(())
}

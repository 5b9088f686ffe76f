//! Write projection results as CSV or JSON

use super::cashflows::{MonthlyRow, ProjectionResult};
use crate::error::Result;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the monthly table as CSV, one header row plus one row per month
pub fn write_csv<W: Write>(rows: &[MonthlyRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(rows: &[MonthlyRow], path: P) -> Result<()> {
    let path = path.as_ref();
    write_csv(rows, File::create(path)?)?;
    info!("Wrote {} monthly rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write the full result (baseline, rows, checkpoint, summary) as pretty JSON
pub fn write_json<W: Write>(result: &ProjectionResult, writer: W) -> Result<()> {
    let document = serde_json::json!({
        "baseline": result.baseline,
        "five_year_savings": result.five_year_savings,
        "summary": result.summary(),
        "rows": result.rows,
    });
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}

pub fn write_json_file<P: AsRef<Path>>(result: &ProjectionResult, path: P) -> Result<()> {
    let path = path.as_ref();
    write_json(result, File::create(path)?)?;
    info!("Wrote projection JSON to {}", path.display());
    Ok(())
}

//! CSV emission for the transposed series table.

use std::io::Write;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::models::SeriesTable;

/// Build the header row for a table with `series_count` series columns.
pub fn header_row(series_count: usize) -> Vec<String> {
    let mut header = Vec::with_capacity(2 + series_count);
    header.push("Time (s)".to_string());
    header.push("Temperature (C)".to_string());
    for number in 1..=series_count {
        header.push(format!("Series No. {}", number));
    }
    header
}

/// Write the table as CSV: one header row, then one row per timepoint.
///
/// Numbers are rendered with their default `Display` formatting.
pub fn write_table<W: Write>(table: &SeriesTable, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(header_row(table.series_count()))?;

    for row in 0..table.row_count() {
        let mut fields = Vec::with_capacity(2 + table.series_count());
        fields.push(table.time_series[row].to_string());
        fields.push(table.temperature_series[row].to_string());
        for column in &table.series_columns {
            fields.push(column[row].to_string());
        }
        csv_writer.write_record(&fields)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the table to a file, creating or overwriting the destination.
///
/// On failure the destination may hold a partial table; the returned error
/// names its path.
pub fn write_csv_file(table: &SeriesTable, path: &Path) -> PipelineResult<()> {
    let wrap = |source: csv::Error| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|e| wrap(csv::Error::from(e)))?;
    write_table(table, file).map_err(wrap)
}

//! Transpose decoded records into time-ordered series columns.
//!
//! Each record holds one timepoint's reading for every series; the table
//! wants one time-ordered column per series:
//!
//! ```text
//! Records (block-major)            →  SeriesTable (series-major)
//! ┌──────────────────────────┐       ┌─────────────────────────┐
//! │ t=30   25.1  [a1 b1 c1]  │       │ time:   [30, 60]        │
//! │ t=60   25.2  [a2 b2 c2]  │  →    │ temp:   [25.1, 25.2]    │
//! └──────────────────────────┘       │ series: [a1 a2] [b1 b2] │
//!                                    │         [c1 c2]         │
//!                                    └─────────────────────────┘
//! ```

use crate::error::{TableError, TableResult};
use crate::models::{ParsedRecord, SeriesTable};

/// Transpose a set of records into a [`SeriesTable`].
///
/// The first record fixes the number of series; any record with a different
/// series count fails the whole conversion rather than producing a
/// misaligned table. `block` in the error is the 1-based position of the
/// offending record.
pub fn records_to_table(records: &[ParsedRecord]) -> TableResult<SeriesTable> {
    let first = records.first().ok_or(TableError::Empty)?;
    let series_count = first.series_values.len();

    let mut table = SeriesTable {
        time_series: Vec::with_capacity(records.len()),
        temperature_series: Vec::with_capacity(records.len()),
        series_columns: vec![Vec::with_capacity(records.len()); series_count],
    };

    for (index, record) in records.iter().enumerate() {
        if record.series_values.len() != series_count {
            return Err(TableError::InconsistentSeriesCount {
                block: index + 1,
                expected: series_count,
                found: record.series_values.len(),
            });
        }

        table.time_series.push(record.elapsed_seconds);
        table.temperature_series.push(record.temperature_celsius);
        for (column, value) in table.series_columns.iter_mut().zip(&record.series_values) {
            column.push(*value);
        }
    }

    Ok(table)
}

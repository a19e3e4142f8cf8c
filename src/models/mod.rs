//! Data passed between pipeline stages.
//!
//! Every stage consumes and produces plain immutable values:
//!
//! - [`Block`] - a contiguous run of source lines for one timepoint
//! - [`ParsedRecord`] - one decoded timepoint across all series
//! - [`SeriesTable`] - the transposed dataset, one column per series
//!
//! All three live for a single file conversion and are dropped afterwards.

use serde::Serialize;

// =============================================================================
// Block
// =============================================================================

/// A contiguous run of source lines holding one timepoint's readings.
///
/// Blocks are delimited by the two-tab sentinel line; the sentinel itself
/// belongs to no block. In a well-formed export every block has the same
/// number of lines (one per series, with the first line also carrying the
/// elapsed time and temperature).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The block's lines, line terminators stripped.
    pub lines: Vec<String>,
    /// 1-based line number of the block's first line in the source file,
    /// header lines included.
    pub start_line: usize,
}

impl Block {
    /// Number of lines in the block.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// ParsedRecord
// =============================================================================

/// One decoded timepoint: when it was read, at what temperature, and the
/// reading of every series at that moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedRecord {
    /// Elapsed time of the reading, in seconds.
    pub elapsed_seconds: u64,
    /// Plate temperature at the time of the reading.
    pub temperature_celsius: f64,
    /// One reading per series, in source order.
    pub series_values: Vec<f64>,
}

// =============================================================================
// SeriesTable
// =============================================================================

/// The fully transposed dataset, ready for tabular output.
///
/// Built once by [`crate::transform::aggregate::records_to_table`] and not
/// mutated afterwards. All row-wise vectors have equal length; every series
/// column has one value per timepoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesTable {
    /// Elapsed seconds, one entry per timepoint.
    pub time_series: Vec<u64>,
    /// Temperatures, one entry per timepoint.
    pub temperature_series: Vec<f64>,
    /// One time-ordered column per series.
    pub series_columns: Vec<Vec<f64>>,
}

impl SeriesTable {
    /// Number of timepoints (data rows).
    pub fn row_count(&self) -> usize {
        self.time_series.len()
    }

    /// Number of series columns.
    pub fn series_count(&self) -> usize {
        self.series_columns.len()
    }
}

// =============================================================================
// Tests
// =============================================================================

//! High-level pipeline API for export-to-CSV conversion.
//!
//! Combines all stages: encoding detection, decoding, segmentation, block
//! parsing, transposition and CSV writing. Every stage passes explicit
//! immutable values to the next; nothing is shared across conversions.
//!
//! # Example
//!
//! ```rust,ignore
//! use platecsv::convert_file;
//! use std::path::Path;
//!
//! let report = convert_file(Path::new("run01.txt"), Path::new("run01.csv"))?;
//! println!("{} rows from {} blocks", report.rows_written, report.source.block_count);
//! ```

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{ParseError, PipelineResult};
use crate::logs::{log_detail, log_info};
use crate::models::SeriesTable;
use crate::parser;
use crate::transform::aggregate::records_to_table;
use crate::writer::write_csv_file;

/// Metadata about one decoded source file.
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    /// Detected text encoding of the input.
    pub encoding: String,
    /// Number of data blocks (timepoints) found.
    pub block_count: usize,
    /// Number of series columns.
    pub series_count: usize,
}

/// Result of converting one file.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    /// Data rows written to the destination (header row excluded).
    pub rows_written: usize,
    /// Decode metadata for the source file.
    pub source: SourceInfo,
}

/// Decode raw export bytes into a transposed series table.
///
/// Detects the encoding, decodes, segments into blocks, parses each block
/// and transposes the records.
pub fn decode_table(bytes: &[u8]) -> PipelineResult<(SeriesTable, SourceInfo)> {
    let encoding = parser::detect_encoding(bytes);
    log_detail(format!("Detected encoding: {}", encoding));

    let content = parser::decode_content(bytes, &encoding);
    let blocks = parser::segment(&content);
    log_detail(format!("Found {} data blocks", blocks.len()));

    let records = blocks
        .iter()
        .map(parser::parse_block)
        .collect::<Result<Vec<_>, _>>()?;

    let table = records_to_table(&records)?;
    log_detail(format!(
        "{} series over {} timepoints",
        table.series_count(),
        table.row_count()
    ));

    let source = SourceInfo {
        encoding,
        block_count: blocks.len(),
        series_count: table.series_count(),
    };
    Ok((table, source))
}

/// Convert one export file to CSV.
///
/// Reads the input fully into memory, decodes it and writes the table to
/// `output`, creating or overwriting the destination.
pub fn convert_file(input: &Path, output: &Path) -> PipelineResult<ConvertReport> {
    log_info(format!("Reading {}", input.display()));
    let bytes = fs::read(input).map_err(ParseError::Io)?;

    let (table, source) = decode_table(&bytes)?;
    write_csv_file(&table, output)?;
    log_info(format!("Wrote {}", output.display()));

    Ok(ConvertReport {
        rows_written: table.row_count(),
        source,
    })
}

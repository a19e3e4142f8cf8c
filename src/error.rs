//! Error types for the conversion pipeline.
//!
//! This module defines one error enum per pipeline stage:
//!
//! - [`ParseError`] - decoding the raw export into records
//! - [`TableError`] - reorganizing records into series columns
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across stage boundaries. A missing input file is
//! handled at the CLI level (reported, then skipped) so one bad path never
//! aborts a batch.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Parse Errors
// =============================================================================

/// Errors while decoding a raw plate reader export into records.
///
/// Line numbers are 1-based positions in the source file, header included,
/// so messages point at the location a user sees in a text editor.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Two adjacent sentinel lines left a block with no content.
    #[error("Empty data block at line {line}")]
    EmptyBlock { line: usize },

    /// The first line of a block did not carry time, temperature and a reading.
    #[error("Line {line}: expected time, temperature and a reading, got '{text}'")]
    MalformedRecord { line: usize, text: String },

    /// The elapsed-time field could not be decoded.
    #[error("Line {line}: invalid elapsed time '{token}'")]
    InvalidTime { line: usize, token: String },

    /// A reading or temperature token was not a number.
    #[error("Line {line}: invalid numeric value '{token}'")]
    InvalidNumber { line: usize, token: String },
}

// =============================================================================
// Table Errors
// =============================================================================

/// Errors while transposing records into a series table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The file contained no data blocks.
    #[error("No data blocks found")]
    Empty,

    /// A block carried a different number of series readings than the first.
    #[error("Block {block} has {found} series readings, expected {expected}")]
    InconsistentSeriesCount {
        block: usize,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the main error type returned by
/// [`crate::transform::pipeline::convert_file`]. It wraps the stage errors
/// and adds the write-side variant.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Table error.
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Writing the CSV destination failed. The destination may hold a
    /// partial table; the path in the message identifies it.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: csv::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ParseError -> PipelineError
        let parse_err = ParseError::EmptyBlock { line: 7 };
        let pipeline_err: PipelineError = parse_err.into();
        assert!(pipeline_err.to_string().contains("line 7"));

        // TableError -> PipelineError
        let table_err = TableError::InconsistentSeriesCount {
            block: 3,
            expected: 8,
            found: 7,
        };
        let pipeline_err: PipelineError = table_err.into();
        assert!(pipeline_err.to_string().contains("Block 3"));
    }

    #[test]
    fn test_parse_error_format() {
        let err = ParseError::InvalidNumber {
            line: 12,
            token: "0.1x2".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 12"));
        assert!(msg.contains("'0.1x2'"));
    }

    #[test]
    fn test_invalid_time_format() {
        let err = ParseError::InvalidTime {
            line: 4,
            token: "1:xx:30".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 4"));
        assert!(msg.contains("1:xx:30"));
    }
}

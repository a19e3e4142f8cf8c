//! Plate reader export parsing with encoding auto-detection.
//!
//! Turns the raw bytes of a kinetics export into [`ParsedRecord`]s in four
//! steps: detect and decode the text encoding, skip the fixed header, split
//! the remaining lines into sentinel-delimited blocks, and parse each block
//! into a record. No instrument-specific logic beyond the one fixed layout.

pub mod time;

use crate::error::{ParseError, ParseResult};
use crate::models::{Block, ParsedRecord};

/// Fixed number of header lines discarded at the top of every export.
pub const HEADER_LINES: usize = 3;

/// The block delimiter: a line holding exactly two horizontal tabs.
const BLOCK_SENTINEL: &str = "\t\t";

/// Detect the encoding of raw bytes using chardet.
///
/// Exports come from instrument-control PCs, so the realistic candidates
/// are UTF-8 and the 8-bit Latin encodings.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _confidence, _language) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8; the numeric fields this
/// parser cares about are ASCII in every supported encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()
        }
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Split decoded file content into data blocks.
///
/// The first [`HEADER_LINES`] lines are discarded. A sentinel line closes
/// the current block and is itself excluded from both neighbours. Content
/// after the last sentinel is kept as a final block when non-empty, so an
/// export whose last block is unterminated still parses; a file ending
/// exactly on a sentinel yields no trailing empty block.
pub fn segment(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut start_line = HEADER_LINES + 1;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if line_no <= HEADER_LINES {
            continue;
        }

        if line == BLOCK_SENTINEL {
            blocks.push(Block {
                lines: std::mem::take(&mut current),
                start_line,
            });
            start_line = line_no + 1;
        } else {
            current.push(line.to_string());
        }
    }

    if !current.is_empty() {
        blocks.push(Block {
            lines: current,
            start_line,
        });
    }

    blocks
}

/// Parse one block into a record.
///
/// The block's first line carries the elapsed time, the temperature and the
/// first series reading; each following line carries the next series
/// reading. Extra trailing tokens on any line are ignored.
pub fn parse_block(block: &Block) -> ParseResult<ParsedRecord> {
    if block.is_empty() {
        return Err(ParseError::EmptyBlock {
            line: block.start_line,
        });
    }

    let first = &block.lines[0];
    let tokens: Vec<&str> = first.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::MalformedRecord {
            line: block.start_line,
            text: first.clone(),
        });
    }

    let elapsed_seconds = time::parse_elapsed(tokens[0], block.start_line)?;
    let temperature_celsius = parse_value(tokens[1], block.start_line)?;

    let mut series_values = Vec::with_capacity(block.len());
    series_values.push(parse_value(tokens[2], block.start_line)?);

    for (offset, line) in block.lines[1..].iter().enumerate() {
        let line_no = block.start_line + offset + 1;
        let token = line
            .split_whitespace()
            .next()
            .ok_or_else(|| ParseError::MalformedRecord {
                line: line_no,
                text: line.clone(),
            })?;
        series_values.push(parse_value(token, line_no)?);
    }

    Ok(ParsedRecord {
        elapsed_seconds,
        temperature_celsius,
        series_values,
    })
}

/// Parse every block of decoded content, in order.
pub fn parse_content(content: &str) -> ParseResult<Vec<ParsedRecord>> {
    segment(content).iter().map(parse_block).collect()
}

fn parse_value(token: &str, line: usize) -> ParseResult<f64> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "##BLOCKS= 1\nPlate:\tKinetic\n\n";

    fn block(lines: &[&str], start_line: usize) -> Block {
        Block {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            start_line,
        }
    }

    #[test]
    fn test_segment_basic() {
        let content = format!(
            "{}00:30\t25.1\t0.120\n0.130\n\t\t\n01:00\t25.2\t0.121\n0.131\n\t\t\n",
            HEADER
        );
        let blocks = segment(&content);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["00:30\t25.1\t0.120", "0.130"]);
        assert_eq!(blocks[0].start_line, 4);
        assert_eq!(blocks[1].lines, vec!["01:00\t25.2\t0.121", "0.131"]);
        assert_eq!(blocks[1].start_line, 7);
    }

    #[test]
    fn test_segment_no_trailing_empty_block() {
        let content = format!("{}00:30\t25.1\t0.120\n\t\t\n", HEADER);
        let blocks = segment(&content);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_segment_keeps_unterminated_final_block() {
        let content = format!("{}00:30\t25.1\t0.120\n\t\t\n01:00\t25.2\t0.121\n", HEADER);
        let blocks = segment(&content);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].lines, vec!["01:00\t25.2\t0.121"]);
    }

    #[test]
    fn test_segment_adjacent_sentinels_yield_empty_block() {
        let content = format!("{}00:30\t25.1\t0.120\n\t\t\n\t\t\n", HEADER);
        let blocks = segment(&content);

        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].is_empty());
    }

    #[test]
    fn test_segment_header_only() {
        assert!(segment(HEADER).is_empty());
    }

    #[test]
    fn test_parse_block_scenario() {
        let b = block(&["00:30\t25.1\t0.120", "0.130", "0.140"], 4);
        let record = parse_block(&b).unwrap();

        assert_eq!(record.elapsed_seconds, 30);
        assert_eq!(record.temperature_celsius, 25.1);
        assert_eq!(record.series_values, vec![0.12, 0.13, 0.14]);
    }

    #[test]
    fn test_parse_block_extra_tokens_ignored() {
        let b = block(&["0:30\t25.1\t0.120\tjunk", "0.130\textra"], 4);
        let record = parse_block(&b).unwrap();
        assert_eq!(record.series_values, vec![0.12, 0.13]);
    }

    #[test]
    fn test_parse_block_empty() {
        let err = parse_block(&block(&[], 9)).unwrap_err();
        assert!(matches!(err, ParseError::EmptyBlock { line: 9 }));
    }

    #[test]
    fn test_parse_block_short_first_line() {
        let err = parse_block(&block(&["00:30\t25.1"], 4)).unwrap_err();
        assert!(matches!(err, ParseError::MalformedRecord { line: 4, .. }));
    }

    #[test]
    fn test_parse_block_bad_reading_reports_line() {
        let b = block(&["00:30\t25.1\t0.120", "abc"], 4);
        let err = parse_block(&b).unwrap_err();
        match err {
            ParseError::InvalidNumber { line, token } => {
                assert_eq!(line, 5);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_block_bad_temperature() {
        let b = block(&["00:30\twarm\t0.120"], 4);
        let err = parse_block(&b).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 4, .. }));
    }

    #[test]
    fn test_parse_block_blank_continuation_line() {
        let b = block(&["00:30\t25.1\t0.120", "   "], 4);
        let err = parse_block(&b).unwrap_err();
        assert!(matches!(err, ParseError::MalformedRecord { line: 5, .. }));
    }

    #[test]
    fn test_parse_content_counts() {
        let content = format!(
            "{}00:30\t25.1\t0.120\n0.130\n\t\t\n01:00\t25.2\t0.121\n0.131\n\t\t\n",
            HEADER
        );
        let records = parse_content(&content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].series_values.len(), 2);
        assert_eq!(records[1].elapsed_seconds, 60);
    }

    #[test]
    fn test_decode_utf8() {
        let content = decode_content(b"0:30\t25.1\t0.120\n", "utf-8");
        assert_eq!(content, "0:30\t25.1\t0.120\n");
    }

    #[test]
    fn test_decode_latin1() {
        // "25°C" in ISO-8859-1
        let bytes: &[u8] = &[0x32, 0x35, 0xB0, 0x43];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "25°C");
    }

    #[test]
    fn test_detect_encoding_ascii_is_utf8() {
        assert_eq!(detect_encoding(b"plain ascii text"), "utf-8");
    }
}

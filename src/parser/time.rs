//! Elapsed-time decoding for the leading field of each block.
//!
//! The instrument writes elapsed time as `hh:mm:ss`, `mm:ss`, or a bare
//! seconds count depending on run length.

use crate::error::{ParseError, ParseResult};

/// Decode a colon-separated elapsed-time string into seconds.
///
/// `"5"` → 5, `"1:05"` → 65, `"1:01:01"` → 3661. Anything else, including
/// non-integer fields or more than three fields, is an
/// [`ParseError::InvalidTime`] carrying the raw token and its source line.
pub fn parse_elapsed(text: &str, line: usize) -> ParseResult<u64> {
    let invalid = || ParseError::InvalidTime {
        line,
        token: text.to_string(),
    };

    let mut fields = Vec::with_capacity(3);
    for part in text.split(':') {
        fields.push(part.parse::<u64>().map_err(|_| invalid())?);
    }

    match fields.as_slice() {
        [seconds] => Ok(*seconds),
        [minutes, seconds] => Ok(60 * minutes + seconds),
        [hours, minutes, seconds] => Ok(3600 * hours + 60 * minutes + seconds),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_seconds() {
        assert_eq!(parse_elapsed("5", 1).unwrap(), 5);
    }

    #[test]
    fn test_minutes_seconds() {
        assert_eq!(parse_elapsed("1:05", 1).unwrap(), 65);
        assert_eq!(parse_elapsed("00:30", 1).unwrap(), 30);
    }

    // Guards the hours term: 1:01:01 is 3661, not 61.
    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(parse_elapsed("1:01:01", 1).unwrap(), 3661);
        assert_eq!(parse_elapsed("2:00:00", 1).unwrap(), 7200);
    }

    #[test]
    fn test_non_integer_field() {
        let err = parse_elapsed("1:xx:30", 6).unwrap_err();
        match err {
            ParseError::InvalidTime { line, token } => {
                assert_eq!(line, 6);
                assert_eq!(token, "1:xx:30");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_many_fields() {
        assert!(parse_elapsed("1:2:3:4", 1).is_err());
    }

    #[test]
    fn test_empty_string() {
        assert!(parse_elapsed("", 1).is_err());
    }

    #[test]
    fn test_negative_rejected() {
        assert!(parse_elapsed("-30", 1).is_err());
    }
}

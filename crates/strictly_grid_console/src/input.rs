//! Console input parsing.

use derive_more::Display;
use std::io::BufRead;

/// Why a line of move input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Not exactly two values on the line.
    #[display("invalid number of inputs given: expected 2, got {_0}")]
    WrongCount(usize),

    /// A value that is not a non-negative integer.
    #[display("{_0:?} is not a position number")]
    NotANumber(String),

    /// Positions are 1-based, so zero is never valid.
    #[display("positions start at 1")]
    ZeroCoordinate,
}

impl std::error::Error for InputError {}

/// Parses `"x y"` (1-based row then column) into zero-based `(row, col)`.
///
/// Values past the board edge are accepted here; bounds are the game's
/// concern.
pub fn parse_coordinates(line: &str) -> Result<(usize, usize), InputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = parts.as_slice() else {
        return Err(InputError::WrongCount(parts.len()));
    };

    let parse = |raw: &str| -> Result<usize, InputError> {
        let value: usize = raw
            .parse()
            .map_err(|_| InputError::NotANumber(raw.to_string()))?;
        value.checked_sub(1).ok_or(InputError::ZeroCoordinate)
    };

    Ok((parse(x)?, parse(y)?))
}

/// Reads one line without its trailing newline. `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parses_one_based_pair() {
        assert_eq!(parse_coordinates("1 1"), Ok((0, 0)));
        assert_eq!(parse_coordinates("  3\t2 "), Ok((2, 1)));
        assert_eq!(parse_coordinates("9 9"), Ok((8, 8)));
    }

    #[test]
    fn test_rejects_wrong_count() {
        assert_eq!(parse_coordinates(""), Err(InputError::WrongCount(0)));
        assert_eq!(parse_coordinates("2"), Err(InputError::WrongCount(1)));
        assert_eq!(parse_coordinates("1 2 3"), Err(InputError::WrongCount(3)));
    }

    #[test]
    fn test_rejects_non_numbers_and_zero() {
        assert_eq!(
            parse_coordinates("a 1"),
            Err(InputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_coordinates("1 -2"),
            Err(InputError::NotANumber("-2".to_string()))
        );
        assert_eq!(parse_coordinates("0 1"), Err(InputError::ZeroCoordinate));
    }

    #[test]
    fn test_read_line_strips_newline_and_detects_eof() {
        let mut input = Cursor::new("2 3\r\nlast");
        assert_eq!(read_line(&mut input).unwrap(), Some("2 3".to_string()));
        assert_eq!(read_line(&mut input).unwrap(), Some("last".to_string()));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}

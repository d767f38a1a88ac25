//! Tokenising of single `label x y` lines.

use waypath_core::Point;

use crate::errors::LineError;

/// Decodes one raw line, newline included, as UTF-8.
pub(crate) fn decode_line(bytes: &[u8]) -> Result<&str, LineError> {
    std::str::from_utf8(bytes).map_err(|err| LineError::InvalidEncoding {
        valid_up_to: err.valid_up_to(),
    })
}

/// Parses one non-blank line. The label is required but otherwise ignored.
pub(crate) fn parse_line(line: &str) -> Result<Point, LineError> {
    let mut tokens = line.split_whitespace();
    tokens
        .next()
        .ok_or(LineError::MissingField { field: "label" })?;
    let x = parse_coordinate(tokens.next(), "x")?;
    let y = parse_coordinate(tokens.next(), "y")?;
    if let Some(token) = tokens.next() {
        return Err(LineError::TrailingToken {
            token: token.to_owned(),
        });
    }
    Ok(Point::new(x, y))
}

fn parse_coordinate(token: Option<&str>, field: &'static str) -> Result<u32, LineError> {
    let token = token.ok_or(LineError::MissingField { field })?;
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(LineError::NotAnInteger {
            field,
            value: token.to_owned(),
        });
    }
    token.parse().map_err(|_| LineError::OutOfRange {
        field,
        value: token.to_owned(),
    })
}

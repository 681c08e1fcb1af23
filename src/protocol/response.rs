//! Module `response`
//!
//! Parses raw server reply frames into status code and message. A frame is a
//! single `\r\n`-terminated line starting with a three-digit code. The parser
//! does not interpret codes; classification is up to the caller.

use crate::error::ProtocolError;

/// A decoded server reply: three-digit status code plus message text.
///
/// Immutable once constructed; the terminator is never part of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub code: u16,
    pub message: String,
}

/// Parse one reply frame into a [`Response`].
///
/// The frame must end with `\r\n` and begin with exactly three ASCII digits.
/// An optional single space separates the code from the message text.
pub fn parse_response(frame: &str) -> Result<Response, ProtocolError> {
    let line = frame
        .strip_suffix("\r\n")
        .ok_or_else(|| ProtocolError::MissingTerminator(frame.to_string()))?;

    let bytes = line.as_bytes();
    if bytes.len() < 3 || !bytes[..3].iter().all(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::MissingCode(line.to_string()));
    }

    let code: u16 = line[..3]
        .parse()
        .map_err(|_| ProtocolError::MissingCode(line.to_string()))?;

    let message = line[3..].strip_prefix(' ').unwrap_or(&line[3..]);

    Ok(Response {
        code,
        message: message.to_string(),
    })
}

/// Extract the byte count from a RETR reply message.
///
/// The server announces the size as `File <name> size <N> bytes`. The last
/// three tokens must be `size <N> bytes`; anything else is a parse failure,
/// never a garbage integer.
pub fn parse_retr_size(message: &str) -> Result<u64, ProtocolError> {
    let tokens: Vec<&str> = message.split_whitespace().collect();

    if tokens.len() < 5 || tokens[0] != "File" {
        return Err(ProtocolError::InvalidSizeMessage(message.to_string()));
    }

    let n = tokens.len();
    if tokens[n - 3] != "size" || tokens[n - 1] != "bytes" {
        return Err(ProtocolError::InvalidSizeMessage(message.to_string()));
    }

    tokens[n - 2]
        .parse::<u64>()
        .map_err(|_| ProtocolError::InvalidSizeMessage(message.to_string()))
}

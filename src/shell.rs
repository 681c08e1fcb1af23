//! Interactive shell
//!
//! Maps user-typed operation words onto session operations. This is a thin
//! I/O wrapper around the protocol engine, not part of it.

use std::io::{self, BufRead, Write};

/// An operation typed at the `Operation:` prompt
#[derive(Debug, PartialEq)]
pub enum Operation {
    Get(String),
    Quit,
    Unknown(String),
}

/// Parse one input line into an [`Operation`]. Empty input yields `None`.
pub fn parse_operation(raw: &str) -> Option<Operation> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or_default().to_ascii_lowercase();
    let param = parts.next().unwrap_or("").trim();

    match word.as_str() {
        "get" if !param.is_empty() => Some(Operation::Get(param.to_string())),
        "quit" => Some(Operation::Quit),
        _ => Some(Operation::Unknown(trimmed.to_string())),
    }
}

/// Print a prompt and read one line from stdin, without the newline.
/// Returns `None` on end of input.
pub fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        assert_eq!(
            parse_operation("get report.txt"),
            Some(Operation::Get("report.txt".to_string()))
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_operation("quit"), Some(Operation::Quit));
        assert_eq!(parse_operation("QUIT"), Some(Operation::Quit));
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_operation(""), None);
        assert_eq!(parse_operation("   "), None);
    }

    #[test]
    fn test_parse_unsupported() {
        assert_eq!(
            parse_operation("put upload.txt"),
            Some(Operation::Unknown("put upload.txt".to_string()))
        );
        // get without a filename is not a valid operation
        assert_eq!(
            parse_operation("get"),
            Some(Operation::Unknown("get".to_string()))
        );
    }
}

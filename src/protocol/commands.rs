//! FTP command formatting
//!
//! Builds the `\r\n`-terminated command lines sent on the control connection.

/// Format an FTP command line, with or without a parameter
pub fn format_command(operation: &str, param: Option<&str>) -> String {
    match param {
        Some(param) => format!("{} {}\r\n", operation, param),
        None => format!("{}\r\n", operation),
    }
}

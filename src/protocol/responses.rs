//! FTP reply codes
//!
//! Defines the status codes the client expects from the server.

/// Service ready, sent by the server on connect
pub const SERVICE_READY: u16 = 220;
/// Password required after USER
pub const PASSWORD_REQUIRED: u16 = 331;
/// Login successful after PASS
pub const LOGIN_SUCCESS: u16 = 230;
/// File exists, reply to RETR carrying the file size
pub const FILE_AVAILABLE: u16 = 299;
/// Data transfer finished
pub const TRANSFER_COMPLETE: u16 = 226;
/// Goodbye, reply to QUIT
pub const GOODBYE: u16 = 221;

//! FTP protocol implementation
//!
//! Handles reply parsing, command formatting, and status code definitions
//! for the client side of the control connection.

pub mod commands;
pub mod response;
pub mod responses;

pub use commands::format_command;
pub use response::{Response, parse_response, parse_retr_size};

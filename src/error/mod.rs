//! Error handling
//!
//! Defines error types and severity handling for the FTP client.

pub mod handlers;
pub mod types;

pub use types::*;

//! Transfer module
//!
//! Handles active-mode data channel negotiation and the bounded file
//! receive loop.

pub mod data_channel;
pub mod engine;

pub use data_channel::{DataChannel, encode_port_args};
pub use engine::receive_file;

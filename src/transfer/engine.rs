//! Module `engine`
//!
//! The bounded receive loop for the data channel. File contents arrive as a
//! raw byte stream with no framing; end of file is the peer closing the
//! connection. The expected size only bounds runaway reads.

use log::{info, warn};
use std::io::{Read, Write};

use crate::error::TransferError;

/// Copy the data stream into `sink` in fixed-size chunks, returning the
/// number of bytes received.
///
/// Stops on a zero-byte read (normal end of file) or once the running total
/// already exceeds `expected_size` before the next read. The bound is
/// advisory: a final chunk straddling it is still written in full. A read or
/// write error aborts the copy, leaving the sink with whatever was written.
/// Taking the source by value guarantees the connection is closed on exit.
pub fn receive_file<R: Read, W: Write>(
    mut source: R,
    sink: &mut W,
    expected_size: u64,
    buffer_size: usize,
) -> Result<u64, TransferError> {
    let mut buffer = vec![0u8; buffer_size];
    let mut received: u64 = 0;

    loop {
        if received > expected_size {
            break;
        }

        let n = match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                warn!("Error while retrieving file: {}", e);
                return Err(TransferError::TransferFailed(e));
            }
        };

        sink.write_all(&buffer[..n])
            .map_err(TransferError::TransferFailed)?;
        received += n as u64;
    }

    info!("Received {} of {} expected bytes", received, expected_size);
    Ok(received)
}

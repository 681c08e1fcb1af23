//! Module `control`
//!
//! Owns the persistent TCP control connection to the server. Sends formatted
//! command lines and reads one reply frame per command. The protocol is
//! strictly synchronous: one outstanding request at a time, exactly one reply
//! per request, no pipelining.

use log::{debug, info, warn};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpStream};

use crate::error::ControlError;
use crate::protocol::{format_command, parse_response};

#[derive(Debug)]
pub struct ControlChannel {
    reader: BufReader<TcpStream>,
    max_frame_len: usize,
}

impl ControlChannel {
    pub fn new(stream: TcpStream, max_frame_len: usize) -> Self {
        Self {
            reader: BufReader::new(stream),
            max_frame_len,
        }
    }

    /// Local address of the control connection; the data listener binds
    /// to the same interface.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.reader.get_ref().local_addr()
    }

    /// Send one command line, formatted as `<OP> <PARAM>\r\n` or `<OP>\r\n`.
    ///
    /// A command exceeding the frame limit is an input error, not a
    /// truncation. Write failures are surfaced to the caller and not retried.
    pub fn send(&mut self, operation: &str, param: Option<&str>) -> Result<(), ControlError> {
        let line = format_command(operation, param);
        if line.len() > self.max_frame_len {
            return Err(ControlError::CommandTooLong(line.len()));
        }

        debug!("--> {}", line.trim_end());
        let stream = self.reader.get_mut();
        stream.write_all(line.as_bytes())?;
        stream.flush()?;
        Ok(())
    }

    /// Read and parse one reply frame, reporting whether its code equals
    /// `expected_code` along with the message text.
    ///
    /// At most `max_frame_len` bytes are read; a frame whose terminator has
    /// not arrived within that bound is rejected without buffering the rest.
    /// A zero-byte read means the peer closed the connection, which is fatal
    /// for the session. A read error is surfaced but the caller may choose
    /// to continue.
    pub fn receive(&mut self, expected_code: u16) -> Result<(bool, String), ControlError> {
        let mut raw = Vec::new();
        let n = (&mut self.reader)
            .take(self.max_frame_len as u64)
            .read_until(b'\n', &mut raw)
            .map_err(|e| {
                warn!("Error receiving data on control connection: {}", e);
                ControlError::Io(e)
            })?;

        if n == 0 {
            return Err(ControlError::ConnectionClosed);
        }
        // The limit was hit before a terminator arrived; the rest of the
        // frame is still in flight, so the stream cannot be resynced.
        if !raw.ends_with(b"\n") && n >= self.max_frame_len {
            return Err(ControlError::FrameTooLong(n));
        }

        let line = String::from_utf8_lossy(&raw);
        let response = parse_response(&line)?;
        info!("<-- {} {}", response.code, response.message);

        Ok((response.code == expected_code, response.message))
    }
}

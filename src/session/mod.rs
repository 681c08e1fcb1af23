//! Module `session`
//!
//! Orchestrates the client session over the control connection: greeting,
//! authentication, file retrieval, and clean termination. The session owns
//! the control connection for its whole lifetime; each retrieval negotiates
//! a fresh single-use data channel.

use log::{info, warn};
use std::fs::File;
use std::io;
use std::net::{SocketAddr, TcpStream};

use crate::config::ClientConfig;
use crate::control::ControlChannel;
use crate::error::{SessionError, TransferError};
use crate::protocol::parse_retr_size;
use crate::protocol::responses::{
    FILE_AVAILABLE, GOODBYE, LOGIN_SUCCESS, PASSWORD_REQUIRED, SERVICE_READY, TRANSFER_COMPLETE,
};
use crate::transfer::{DataChannel, receive_file};

/// Session lifecycle states.
///
/// Connecting and greeting happen inside [`Session::connect`]; a constructed
/// session starts in `AwaitingLogin`. `Terminated` is final: no operation
/// touches the socket afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingLogin,
    Ready,
    Terminated,
}

#[derive(Debug)]
pub struct Session {
    control: ControlChannel,
    config: ClientConfig,
    state: SessionState,
}

impl Session {
    /// Connect to the server and consume its greeting.
    ///
    /// A greeting other than "service ready" (220) is fatal.
    pub fn connect(addr: SocketAddr, config: ClientConfig) -> Result<Self, SessionError> {
        let stream = TcpStream::connect(addr).map_err(SessionError::ConnectFailed)?;
        info!("Connected to {}", addr);

        let mut control = ControlChannel::new(stream, config.max_frame_len);
        let (ok, message) = control.receive(SERVICE_READY)?;
        if !ok {
            return Err(SessionError::GreetingRejected(message));
        }

        Ok(Self {
            control,
            config,
            state: SessionState::AwaitingLogin,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Log in with USER then PASS, one attempt each.
    ///
    /// A reply other than "need password" (331) to USER terminates the
    /// session before PASS is ever sent; a reply other than "logged in"
    /// (230) to PASS terminates it as well.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if self.state == SessionState::Terminated {
            return Err(SessionError::SessionTerminated);
        }

        self.control.send("USER", Some(username))?;
        let (ok, message) = self.control.receive(PASSWORD_REQUIRED)?;
        if !ok {
            self.state = SessionState::Terminated;
            return Err(SessionError::AuthRejected(message));
        }

        self.control.send("PASS", Some(password))?;
        let (ok, message) = self.control.receive(LOGIN_SUCCESS)?;
        if !ok {
            self.state = SessionState::Terminated;
            return Err(SessionError::AuthRejected(message));
        }

        info!("Logged in as {}", username);
        self.state = SessionState::Ready;
        Ok(())
    }

    /// Retrieve `file_name` into the configured download directory,
    /// returning the number of bytes received.
    ///
    /// Negotiates the data channel, announces it with PORT, then issues
    /// RETR. A rejected RETR or a missing completion code is recoverable:
    /// the server's message is surfaced and the session stays `Ready`.
    /// Re-retrieving a name truncates and overwrites the previous file.
    pub fn get(&mut self, file_name: &str) -> Result<u64, SessionError> {
        match self.state {
            SessionState::Ready => {}
            SessionState::AwaitingLogin => return Err(SessionError::NotAuthenticated),
            SessionState::Terminated => return Err(SessionError::SessionTerminated),
        }

        let local_ip = self
            .control
            .local_addr()
            .map_err(|e| SessionError::Transfer(TransferError::LocalAddrUnavailable(e)))?
            .ip();
        let data_channel = DataChannel::open(local_ip)?;
        self.control.send("PORT", Some(data_channel.port_args()))?;

        self.control.send("RETR", Some(file_name))?;
        let (ok, message) = self.control.receive(FILE_AVAILABLE)?;
        if !ok {
            // Listener dropped without ever accepting; no local file created.
            return Err(SessionError::RetrRejected(message));
        }

        // From here the server is committed: it connects back, sends the
        // file, and reports completion. A local failure must still follow
        // the exchange to its end, or the completion reply stays queued on
        // the control connection and the next operation reads it as its own.
        let data_stream = data_channel.accept()?;
        let outcome = self.receive_into_file(file_name, data_stream, &message);
        let completion = self.control.receive(TRANSFER_COMPLETE);

        let received = outcome?;
        let (ok, message) = completion?;
        if !ok {
            warn!("Transfer of {} not confirmed by server", file_name);
            return Err(SessionError::TransferIncomplete(message));
        }

        info!("Retrieved {} ({} bytes)", file_name, received);
        Ok(received)
    }

    /// Copy the accepted data stream into the destination file. On a local
    /// failure before the copy starts, the stream is drained instead so the
    /// peer still finishes its side of the exchange.
    fn receive_into_file(
        &self,
        file_name: &str,
        data_stream: TcpStream,
        retr_message: &str,
    ) -> Result<u64, SessionError> {
        let expected_size = match parse_retr_size(retr_message) {
            Ok(size) => size,
            Err(e) => {
                drain(data_stream);
                return Err(e.into());
            }
        };

        let dest_path = self.config.download_dir_path().join(file_name);
        let mut file = match File::create(&dest_path) {
            Ok(file) => file,
            Err(e) => {
                drain(data_stream);
                return Err(SessionError::FileCreateFailed(file_name.to_string(), e));
            }
        };

        let received = receive_file(
            data_stream,
            &mut file,
            expected_size,
            self.config.buffer_size,
        )?;
        Ok(received)
    }

    /// End the session with QUIT.
    ///
    /// The session is terminated once QUIT is on the wire, whatever the
    /// reply; a reply other than "goodbye" (221) is still reported as fatal.
    pub fn quit(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Ready => {}
            SessionState::AwaitingLogin => return Err(SessionError::NotAuthenticated),
            SessionState::Terminated => return Err(SessionError::SessionTerminated),
        }

        self.control.send("QUIT", None)?;
        let result = self.control.receive(GOODBYE);
        self.state = SessionState::Terminated;

        let (ok, message) = result?;
        if !ok {
            return Err(SessionError::GoodbyeRejected(message));
        }

        info!("Session closed: {}", message);
        Ok(())
    }
}

/// Read a data stream to end of file, discarding the bytes, and close it.
fn drain(mut stream: TcpStream) {
    let _ = io::copy(&mut stream, &mut io::sink());
}

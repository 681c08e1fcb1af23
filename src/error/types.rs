//! Error types
//!
//! Defines domain-specific error types for each module of the FTP client.

use std::fmt;
use std::io;
use std::net::IpAddr;

/// Protocol module errors: malformed reply frames and messages
#[derive(Debug)]
pub enum ProtocolError {
    MissingTerminator(String),
    MissingCode(String),
    InvalidSizeMessage(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MissingTerminator(frame) => {
                write!(f, "Reply frame missing CRLF terminator: {:?}", frame)
            }
            ProtocolError::MissingCode(line) => {
                write!(f, "Reply has no leading 3-digit code: {:?}", line)
            }
            ProtocolError::InvalidSizeMessage(msg) => {
                write!(f, "Cannot extract file size from reply: {:?}", msg)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Control channel errors
#[derive(Debug)]
pub enum ControlError {
    ConnectionClosed,
    CommandTooLong(usize),
    FrameTooLong(usize),
    Protocol(ProtocolError),
    Io(io::Error),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::ConnectionClosed => write!(f, "Connection closed by host"),
            ControlError::CommandTooLong(len) => {
                write!(f, "Command of {} bytes exceeds the frame limit", len)
            }
            ControlError::FrameTooLong(len) => {
                write!(f, "Reply frame of {} bytes exceeds the frame limit", len)
            }
            ControlError::Protocol(e) => write!(f, "Protocol error: {}", e),
            ControlError::Io(e) => write!(f, "I/O error on control connection: {}", e),
        }
    }
}

impl std::error::Error for ControlError {}

impl From<ProtocolError> for ControlError {
    fn from(error: ProtocolError) -> Self {
        ControlError::Protocol(error)
    }
}

impl From<io::Error> for ControlError {
    fn from(error: io::Error) -> Self {
        ControlError::Io(error)
    }
}

/// Transfer module errors: data channel setup and the copy loop
#[derive(Debug)]
pub enum TransferError {
    PortBindingFailed(io::Error),
    LocalAddrUnavailable(io::Error),
    UnsupportedAddress(IpAddr),
    AcceptFailed(io::Error),
    TransferFailed(io::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::PortBindingFailed(e) => {
                write!(f, "Failed to bind data listener: {}", e)
            }
            TransferError::LocalAddrUnavailable(e) => {
                write!(f, "Failed to query local data address: {}", e)
            }
            TransferError::UnsupportedAddress(ip) => {
                write!(f, "Cannot encode non-IPv4 address {} for PORT", ip)
            }
            TransferError::AcceptFailed(e) => {
                write!(f, "Failed to accept data connection: {}", e)
            }
            TransferError::TransferFailed(e) => write!(f, "Transfer failed: {}", e),
        }
    }
}

impl std::error::Error for TransferError {}

/// Session errors, spanning the whole lifecycle of a connection
#[derive(Debug)]
pub enum SessionError {
    ConnectFailed(io::Error),
    GreetingRejected(String),
    AuthRejected(String),
    GoodbyeRejected(String),
    RetrRejected(String),
    TransferIncomplete(String),
    FileCreateFailed(String, io::Error),
    NotAuthenticated,
    SessionTerminated,
    Protocol(ProtocolError),
    Control(ControlError),
    Transfer(TransferError),
}

impl SessionError {
    /// Whether this error ends the session.
    ///
    /// Fatal: peer closed the control connection, greeting/auth/goodbye code
    /// mismatch, and bind/listen/connect failures. Operation-level failures
    /// (a rejected RETR, a missing completion code, a broken data copy)
    /// leave the session usable.
    pub fn is_fatal(&self) -> bool {
        match self {
            SessionError::ConnectFailed(_)
            | SessionError::GreetingRejected(_)
            | SessionError::AuthRejected(_)
            | SessionError::GoodbyeRejected(_) => true,
            SessionError::Control(ControlError::ConnectionClosed) => true,
            // An oversize frame leaves its unread remainder on the stream;
            // no later exchange can be trusted.
            SessionError::Control(ControlError::FrameTooLong(_)) => true,
            SessionError::Control(_) => false,
            SessionError::Transfer(TransferError::TransferFailed(_)) => false,
            SessionError::Transfer(_) => true,
            SessionError::RetrRejected(_)
            | SessionError::TransferIncomplete(_)
            | SessionError::FileCreateFailed(..)
            | SessionError::NotAuthenticated
            | SessionError::SessionTerminated
            | SessionError::Protocol(_) => false,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::ConnectFailed(e) => write!(f, "Failed to connect to server: {}", e),
            SessionError::GreetingRejected(msg) => {
                write!(f, "Server greeting not ready: {}", msg)
            }
            SessionError::AuthRejected(msg) => write!(f, "Authentication rejected: {}", msg),
            SessionError::GoodbyeRejected(msg) => write!(f, "QUIT not acknowledged: {}", msg),
            SessionError::RetrRejected(msg) => write!(f, "{}", msg),
            SessionError::TransferIncomplete(msg) => {
                write!(f, "Transfer completion not confirmed: {}", msg)
            }
            SessionError::FileCreateFailed(name, e) => {
                write!(f, "Cannot create local file {}: {}", name, e)
            }
            SessionError::NotAuthenticated => write!(f, "Not logged in"),
            SessionError::SessionTerminated => write!(f, "Session already terminated"),
            SessionError::Protocol(e) => write!(f, "{}", e),
            SessionError::Control(e) => write!(f, "{}", e),
            SessionError::Transfer(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<ProtocolError> for SessionError {
    fn from(error: ProtocolError) -> Self {
        SessionError::Protocol(error)
    }
}

impl From<ControlError> for SessionError {
    fn from(error: ControlError) -> Self {
        SessionError::Control(error)
    }
}

impl From<TransferError> for SessionError {
    fn from(error: TransferError) -> Self {
        SessionError::Transfer(error)
    }
}

//! Module `data_channel`
//!
//! Active-mode data channel negotiation. The client binds a listener on an
//! ephemeral port, advertises its address to the server with a PORT command,
//! and later accepts the server's connect-back. Each channel carries exactly
//! one transfer and is never reused.

use log::{debug, info};
use std::net::{IpAddr, SocketAddr, TcpListener, TcpStream};

use crate::error::TransferError;

/// A data channel in its listening phase: bound to an ephemeral port with
/// its PORT parameter computed, awaiting the server's connect-back.
pub struct DataChannel {
    listener: TcpListener,
    port_args: String,
}

impl DataChannel {
    /// Bind an ephemeral listener on the given interface and encode its
    /// address for the PORT announcement.
    ///
    /// The caller must send `PORT <args>` on the control channel before
    /// issuing RETR; the server only connects back after being told where.
    /// Bind or listen failure is fatal for the session.
    pub fn open(bind_ip: IpAddr) -> Result<Self, TransferError> {
        let listener = TcpListener::bind((bind_ip, 0)).map_err(TransferError::PortBindingFailed)?;
        let local_addr = listener
            .local_addr()
            .map_err(TransferError::LocalAddrUnavailable)?;

        let port_args = encode_port_args(local_addr)?;
        debug!("Data listener bound to {}", local_addr);

        Ok(Self {
            listener,
            port_args,
        })
    }

    /// The PORT command parameter advertising this listener.
    pub fn port_args(&self) -> &str {
        &self.port_args
    }

    /// Block until the server connects back, consuming the listener.
    /// The listening endpoint is single use.
    pub fn accept(self) -> Result<TcpStream, TransferError> {
        let (stream, peer_addr) = self.listener.accept().map_err(TransferError::AcceptFailed)?;
        info!("Data connection accepted from {}", peer_addr);
        Ok(stream)
    }
}

/// Encode a socket address as a PORT parameter: `ip0,ip1,ip2,ip3,hi,lo`
/// where `port = hi * 256 + lo`. Only IPv4 addresses can be encoded.
pub fn encode_port_args(addr: SocketAddr) -> Result<String, TransferError> {
    let ip = match addr.ip() {
        IpAddr::V4(ip) => ip,
        other => return Err(TransferError::UnsupportedAddress(other)),
    };

    let [ip0, ip1, ip2, ip3] = ip.octets();
    let port = addr.port();
    Ok(format!(
        "{},{},{},{},{},{}",
        ip0,
        ip1,
        ip2,
        ip3,
        port / 256,
        port % 256
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_port_args() {
        let addr: SocketAddr = "203.0.113.5:4660".parse().unwrap();
        assert_eq!(encode_port_args(addr).unwrap(), "203,0,113,5,18,52");
    }

    #[test]
    fn test_encode_low_port() {
        let addr: SocketAddr = "127.0.0.1:255".parse().unwrap();
        assert_eq!(encode_port_args(addr).unwrap(), "127,0,0,1,0,255");
    }

    #[test]
    fn test_encode_rejects_ipv6() {
        let addr: SocketAddr = "[::1]:2121".parse().unwrap();
        assert!(matches!(
            encode_port_args(addr),
            Err(TransferError::UnsupportedAddress(_))
        ));
    }

    #[test]
    fn test_open_binds_ephemeral_port() {
        let channel = DataChannel::open("127.0.0.1".parse().unwrap()).unwrap();
        assert!(channel.port_args().starts_with("127,0,0,1,"));
    }
}

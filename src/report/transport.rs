//! Transport abstraction — one short-lived byte channel per exchange.
//!
//! Concrete implementations:
//! - TCP socket over WiFi ([`TcpConnector`], both targets — ESP-IDF ships
//!   std sockets via LWIP)
//! - Scripted mock (integration tests)
//!
//! The report client is generic over [`Connector`], so swapping transports
//! requires zero changes to the request logic. Every exchange opens a fresh
//! connection, performs exactly one bounded receive, and closes on drop.
//! Connections are never pooled, reused, or retried.

use core::fmt;
use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use log::warn;

/// Fixed receive buffer capacity for a single response.
///
/// Also upper-bounds the sample counts a configuration may request
/// (see [`crate::sampling::config::MAX_SAMPLE_COUNT`]).
pub const RECV_BUF_LEN: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// Server name did not resolve to a usable address.
    AddrResolveFailed,
    /// TCP connect failed.
    ConnectFailed,
    /// Send failed mid-request.
    SendFailed,
    /// Receive failed before any bytes arrived.
    RecvFailed,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddrResolveFailed => write!(f, "address resolution failed"),
            Self::ConnectFailed => write!(f, "connect failed"),
            Self::SendFailed => write!(f, "send failed"),
            Self::RecvFailed => write!(f, "receive failed"),
        }
    }
}

/// Opens one connection per call.
pub trait Connector {
    type Conn: Connection;

    fn connect(&self) -> Result<Self::Conn, TransportError>;
}

/// A single open byte channel. Dropping it closes the connection.
pub trait Connection {
    /// Write the whole buffer.
    fn send(&mut self, data: &[u8]) -> Result<(), TransportError>;

    /// One receive of up to `buf.len()` bytes; returns the count read.
    fn recv(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;
}

// ───────────────────────────────────────────────────────────────
// TCP
// ───────────────────────────────────────────────────────────────

/// Per-call TCP connector to a fixed collector endpoint.
pub struct TcpConnector {
    host: String,
    port: u16,
}

impl TcpConnector {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_owned(),
            port,
        }
    }
}

impl Connector for TcpConnector {
    type Conn = TcpConnection;

    fn connect(&self) -> Result<TcpConnection, TransportError> {
        let mut addrs = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|_| TransportError::AddrResolveFailed)?;
        let addr = addrs.next().ok_or(TransportError::AddrResolveFailed)?;
        let stream = TcpStream::connect(addr).map_err(|e| {
            warn!("tcp: connect to {} failed: {}", addr, e);
            TransportError::ConnectFailed
        })?;
        Ok(TcpConnection { stream })
    }
}

pub struct TcpConnection {
    stream: TcpStream,
}

impl Connection for TcpConnection {
    fn send(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.stream
            .write_all(data)
            .map_err(|_| TransportError::SendFailed)
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        self.stream.read(buf).map_err(|_| TransportError::RecvFailed)
    }
}

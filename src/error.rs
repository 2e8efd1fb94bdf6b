//! Unified error types for the FieldProbe firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! boot sequence's error handling uniform. All variants are `Copy` so they
//! can be cheaply passed around without allocation.

use core::fmt;

use crate::adapters::wifi::ConnectivityError;
use crate::report::codec::DecodeError;
use crate::report::transport::TransportError;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A configuration response body could not be decoded.
    Decode(DecodeError),
    /// A report/fetch exchange failed at the transport boundary.
    Transport(TransportError),
    /// WiFi association failed.
    Connectivity(ConnectivityError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Node configuration is invalid or could not be loaded.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "decode: {e}"),
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Connectivity(e) => write!(f, "connectivity: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl From<ConnectivityError> for Error {
    fn from(e: ConnectivityError) -> Self {
        Self::Connectivity(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

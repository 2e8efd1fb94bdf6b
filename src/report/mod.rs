//! Collector-facing reporting: the connection seam, the binary wire codec,
//! and the request/response client.

pub mod client;
pub mod codec;
pub mod transport;

pub use client::ReportClient;

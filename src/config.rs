//! Node configuration parameters
//!
//! Identity and endpoint settings for a FieldProbe node. Values are
//! persisted in NVS and can be replaced at provisioning time; the sampling
//! parameters themselves are NOT stored here — they arrive from the
//! collector at runtime (see [`crate::sampling::SamplingConfig`]).

use serde::{Deserialize, Serialize};

/// Core node configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    // --- Identity ---
    /// Explicit device ID used in report paths. Empty string means
    /// "derive from the factory MAC" (see [`crate::adapters::device_id`]).
    pub device_id: heapless::String<16>,

    // --- WiFi ---
    /// Station SSID (empty until provisioned)
    pub wifi_ssid: heapless::String<32>,
    /// Station password (empty for open networks)
    pub wifi_password: heapless::String<64>,

    // --- Collector endpoint ---
    /// Collector hostname or dotted address
    pub server_host: heapless::String<64>,
    /// Collector TCP port
    pub server_port: u16,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            device_id: heapless::String::new(),

            wifi_ssid: heapless::String::new(),
            wifi_password: heapless::String::new(),

            server_host: heapless::String::try_from("fieldprobe.local").unwrap_or_default(),
            server_port: 8090,
        }
    }
}

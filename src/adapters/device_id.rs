//! Device identity derived from the ESP32 factory MAC address.
//!
//! Produces a stable, human-readable device ID in the form `FP-XXYYZZ`
//! (last 3 bytes of the 6-byte MAC in uppercase hex). Used in the
//! collector report paths when [`NodeConfig`](crate::config::NodeConfig)
//! carries no explicit `device_id`.

/// Fixed-size device ID string: "FP-XXYYZZ" (9 chars + slack).
pub type DeviceIdString = heapless::String<16>;

/// Full 6-byte MAC address.
pub type MacAddress = [u8; 6];

/// Read the factory MAC address from eFuse.
#[cfg(target_os = "espidf")]
pub fn read_mac() -> MacAddress {
    let mut mac: MacAddress = [0u8; 6];
    unsafe {
        esp_idf_svc::sys::esp_efuse_mac_get_default(mac.as_mut_ptr());
    }
    mac
}

/// Simulation: returns a deterministic fake MAC.
#[cfg(not(target_os = "espidf"))]
pub fn read_mac() -> MacAddress {
    [0xFE, 0xED, 0xFA, 0xCE, 0xB0, 0x07]
}

/// Derive the short device ID from the last 3 MAC bytes.
/// Format: `FP-XXYYZZ` (e.g., `FP-CEB007`).
pub fn device_id(mac: &MacAddress) -> DeviceIdString {
    let mut id = DeviceIdString::new();
    use core::fmt::Write;
    let _ = write!(id, "FP-{:02X}{:02X}{:02X}", mac[3], mac[4], mac[5]);
    id
}

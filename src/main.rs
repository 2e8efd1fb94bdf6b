//! FieldProbe Firmware — Main Entry Point
//!
//! Boot sequence for the sampling node:
//!
//! ```text
//! NVS config ──▶ WiFi association ──▶ GET /config/{id}
//!                                          │
//!                                          ▼
//!                      SamplingEngine (point/burst acquisition)
//!                                          │
//!                          POST /point/{id} · POST /burst/{id}
//! ```
//!
//! Everything runs on the single main task, fully blocking. Sampling
//! pacing is busy-waited inside the engine; the only sleeps here are the
//! 1 s waits of the WiFi association loop.
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use fieldprobe::adapters::adc::OnboardAdc;
use fieldprobe::adapters::device_id;
use fieldprobe::adapters::nvs::NvsAdapter;
use fieldprobe::adapters::time::MonotonicClock;
use fieldprobe::adapters::wifi::{ConnectivityPort, WifiAdapter};
use fieldprobe::app::ports::ConfigPort;
use fieldprobe::config::NodeConfig;
use fieldprobe::error::Error;
use fieldprobe::report::transport::TcpConnector;
use fieldprobe::report::ReportClient;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("FieldProbe v{}", env!("CARGO_PKG_VERSION"));

    let peripherals = esp_idf_svc::hal::peripherals::Peripherals::take()?;
    let sysloop = esp_idf_svc::eventloop::EspSystemEventLoop::take()?;

    // ── 2. Load node config from NVS (or defaults) ────────────
    let nvs = match NvsAdapter::new() {
        Ok(n) => n,
        Err(e) => {
            warn!("NVS init failed ({}), running with defaults and no persistence", e);
            NvsAdapter::default()
        }
    };
    let config = match nvs.load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("NVS config load failed ({}), using defaults", e);
            NodeConfig::default()
        }
    };

    // ── 3. Device identity ────────────────────────────────────
    let id = if config.device_id.is_empty() {
        device_id::device_id(&device_id::read_mac())
    } else {
        config.device_id.clone()
    };
    info!("device id: {}", id);

    // ── 4. WiFi association (blocks until up) ─────────────────
    let mut wifi = WifiAdapter::new(peripherals.modem, sysloop).map_err(Error::from)?;
    wifi.set_credentials(config.wifi_ssid.as_str(), config.wifi_password.as_str())
        .map_err(Error::from)?;
    if wifi.connect().is_err() {
        while !wifi.is_connected() {
            std::thread::sleep(std::time::Duration::from_secs(1));
            wifi.poll();
        }
    }
    info!("wifi up (RSSI={:?})", wifi.rssi());

    // ── 5. Fetch sampling config, acquire, report ─────────────
    let connector = TcpConnector::new(config.server_host.as_str(), config.server_port);
    let mut client = ReportClient::new(connector, config.server_host.as_str(), id.as_str());

    let mut adc = OnboardAdc::new(esp_idf_svc::sys::adc_channel_t_ADC_CHANNEL_4)?;
    let mut sampler = client.fetch_sampler(&mut adc, MonotonicClock::new())?;
    info!("sampling config valid for {}s", sampler.config().expiration_s);

    let point = sampler.read_point();
    client.send_point(point).map_err(Error::from)?;
    info!("point reported: {}", point);

    let burst = sampler.read_burst();
    client.send_burst(&burst).map_err(Error::from)?;
    info!("burst reported: {} points", burst.len());

    Ok(())
}

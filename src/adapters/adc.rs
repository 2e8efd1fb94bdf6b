//! Onboard ADC adapter.
//!
//! Implements [`AdcPort`] over an ESP32-S3 ADC1 channel using the oneshot
//! driver. Readings are 12-bit and get scaled onto the full u16 domain so
//! the reported values are resolution-independent on the wire.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: a oneshot unit owned by this adapter, raw sys calls.
//! On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::{AtomicU16, Ordering};

use crate::app::ports::AdcPort;
use crate::error::Error;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

static SIM_ADC_RAW: AtomicU16 = AtomicU16::new(0);

/// Inject the next simulated raw reading (host builds only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc_raw(raw: u16) {
    SIM_ADC_RAW.store(raw, Ordering::Relaxed);
}

pub struct OnboardAdc {
    #[cfg(target_os = "espidf")]
    handle: adc_oneshot_unit_handle_t,
    #[cfg(target_os = "espidf")]
    channel: adc_channel_t,
}

#[cfg(target_os = "espidf")]
impl OnboardAdc {
    /// Stand up ADC1 and configure `channel` for full-range conversion.
    pub fn new(channel: adc_channel_t) -> Result<Self, Error> {
        let init_cfg = adc_oneshot_unit_init_cfg_t {
            unit_id: adc_unit_t_ADC_UNIT_1,
            ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
            ..Default::default()
        };
        let mut handle: adc_oneshot_unit_handle_t = core::ptr::null_mut();
        // SAFETY: handle is written once here, before any read path exists.
        let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &mut handle) };
        if ret != ESP_OK {
            return Err(Error::Init("ADC1 oneshot unit"));
        }

        let chan_cfg = adc_oneshot_chan_cfg_t {
            atten: adc_atten_t_ADC_ATTEN_DB_12,
            bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
        };
        // SAFETY: handle is the unit created above; single-threaded init path.
        let ret = unsafe { adc_oneshot_config_channel(handle, channel, &chan_cfg) };
        if ret != ESP_OK {
            return Err(Error::Init("ADC1 channel config"));
        }

        log::info!("adc: ADC1 channel {} configured", channel);
        Ok(Self { handle, channel })
    }
}

#[cfg(not(target_os = "espidf"))]
impl OnboardAdc {
    pub fn new() -> Result<Self, Error> {
        log::info!("adc(sim): injectable backend");
        Ok(Self {})
    }
}

impl AdcPort for OnboardAdc {
    #[cfg(target_os = "espidf")]
    fn read_raw(&mut self) -> u16 {
        let mut raw: i32 = 0;
        // SAFETY: handle/channel were configured in new(); oneshot reads are
        // re-entrant-safe from the single main task.
        let ret = unsafe { adc_oneshot_read(self.handle, self.channel, &mut raw) };
        if ret != ESP_OK {
            log::warn!("adc: oneshot read failed (rc={}), reporting 0", ret);
            return 0;
        }
        // Scale the 12-bit conversion onto the u16 domain, repeating the
        // top bits in the low nibble so 0xFFF maps to 0xFFFF.
        let r = raw as u16;
        (r << 4) | (r >> 8)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&mut self) -> u16 {
        SIM_ADC_RAW.load(Ordering::Relaxed)
    }
}

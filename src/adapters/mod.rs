//! Driven adapters: hardware and platform backends behind the port traits.
//!
//! Every module is dual-target — real ESP-IDF calls under
//! `target_os = "espidf"`, simulation backends everywhere else so the full
//! stack runs under host `cargo test`.

pub mod adc;
pub mod device_id;
pub mod nvs;
pub mod time;
pub mod wifi;

//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Sampling core / boot sequence
//! ```
//!
//! Driven adapters (ADC, monotonic timer, NVS) implement these traits.
//! The [`SamplingEngine`](crate::sampling::SamplingEngine) consumes them via
//! generics, so the sampling core never touches hardware directly.

use crate::config::NodeConfig;

// ───────────────────────────────────────────────────────────────
// ADC port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one blocking analog conversion per call.
///
/// The read is infallible by contract — a hardware-level conversion error is
/// outside the sampling core's failure surface and is handled (or logged)
/// entirely inside the adapter.
pub trait AdcPort {
    /// Read a single raw sample, scaled to the full u16 domain.
    fn read_raw(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic microsecond clock.
///
/// The sampling core polls this actively to enforce inter-sample pacing
/// floors and to age its configuration, so implementations must be cheap
/// to query and must never go backwards.
pub trait Clock {
    /// Microseconds since an arbitrary fixed origin (boot).
    fn now_us(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists the node configuration.
///
/// Implementations MUST validate before persisting. Invalid values are
/// rejected with [`ConfigError::ValidationFailed`], not silently fixed up.
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    /// Returns [`NodeConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<NodeConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &NodeConfig) -> Result<(), ConfigError>;
}

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Stored config failed integrity / deserialization check.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

//! Sampling configuration decoded from a collector response.
//!
//! Nine 32-bit fields arrive on the wire (see [`crate::report::codec`]);
//! one is reserved, the remaining eight are range-clamped here at
//! construction time. The engine trusts these values unconditionally
//! afterwards and never re-validates mid-run.

use crate::report::transport::RECV_BUF_LEN;

/// Number of u32 fields in the wire configuration record.
pub const WIRE_FIELD_COUNT: usize = 9;

/// Upper bound for sample/point counts.
///
/// Tied to the transport receive buffer: a burst report of `MAX_SAMPLE_COUNT`
/// readings is the most the fixed buffer can carry at 4 bytes per wire field,
/// so any count the collector hands us beyond this could not round-trip.
/// Changing `RECV_BUF_LEN` moves this bound with it.
pub const MAX_SAMPLE_COUNT: u32 = (RECV_BUF_LEN / 4) as u32;

/// Ceiling for intra-point sample spacing (one minute).
pub const MAX_POINT_DELAY_US: u32 = 60_000_000;

/// Ceiling for intra-burst point spacing (six seconds).
pub const MAX_BURST_DELAY_US: u32 = 6_000_000;

/// Ceiling for the reserved pacing intervals (one hour).
pub const MAX_INTERVAL_MS: u32 = 3_600_000;

/// Ceiling for configuration lifetime (one hour).
pub const MAX_EXPIRATION_S: u32 = 3600;

/// Clamped, validated sampling parameters. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Samples averaged into one point.
    pub point_n_avg: u32,
    /// Minimum spacing between samples within a point (µs).
    pub point_delay_us: u32,
    /// Pacing between points (ms). Carried for the collector's benefit;
    /// not enforced by the engine.
    pub point_interval_ms: u32,
    /// Points per burst.
    pub burst_n: u32,
    /// Minimum spacing between points within a burst (µs).
    pub burst_delay_us: u32,
    /// Pacing between bursts (ms). Carried, not enforced.
    pub burst_interval_ms: u32,
    /// Alternate averaging count, reserved for a burst-point averaging
    /// variant. Unused by the engine.
    pub burst_n_avg: u32,
    /// Configuration lifetime (s). Zero means expired on arrival.
    pub expiration_s: u32,
}

impl SamplingConfig {
    /// Build a config from the nine decoded wire fields, clamping every
    /// value into its documented range. `fields[3]` is reserved and
    /// discarded.
    pub fn from_wire(fields: &[u32; WIRE_FIELD_COUNT]) -> Self {
        Self {
            point_n_avg: clamp(fields[0], 1, MAX_SAMPLE_COUNT),
            point_delay_us: clamp(fields[1], 0, MAX_POINT_DELAY_US),
            point_interval_ms: clamp(fields[2], 0, MAX_INTERVAL_MS),
            burst_n: clamp(fields[4], 1, MAX_SAMPLE_COUNT),
            burst_delay_us: clamp(fields[5], 0, MAX_BURST_DELAY_US),
            burst_interval_ms: clamp(fields[6], 0, MAX_INTERVAL_MS),
            burst_n_avg: clamp(fields[7], 1, MAX_SAMPLE_COUNT),
            expiration_s: clamp(fields[8], 0, MAX_EXPIRATION_S),
        }
    }
}

/// Clamp `x` into `[lo, hi]`, boundaries inclusive.
pub fn clamp<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x > hi {
        hi
    } else if x < lo {
        lo
    } else {
        x
    }
}

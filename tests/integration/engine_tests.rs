//! Sampling engine behaviour against mock hardware: averaging, rounding,
//! pacing floors, and configuration expiry.

use fieldprobe::sampling::config::WIRE_FIELD_COUNT;
use fieldprobe::sampling::{SamplingConfig, SamplingEngine};

use crate::mock_hw::{MockAdc, SimClock};

/// Shorthand: build a clamped config through the same path production uses.
fn cfg(
    point_n_avg: u32,
    point_delay_us: u32,
    burst_n: u32,
    burst_delay_us: u32,
    expiration_s: u32,
) -> SamplingConfig {
    let fields: [u32; WIRE_FIELD_COUNT] = [
        point_n_avg,
        point_delay_us,
        0,
        0,
        burst_n,
        burst_delay_us,
        0,
        1,
        expiration_s,
    ];
    SamplingConfig::from_wire(&fields)
}

// ── Averaging & rounding ──────────────────────────────────────

#[test]
fn constant_sequence_averages_exactly() {
    let mut adc = MockAdc::constant(10);
    let mut engine = SamplingEngine::new(cfg(4, 0, 1, 0, 60), &mut adc, SimClock::new(1));
    assert_eq!(engine.read_point(), 10);
}

#[test]
fn point_average_rounds_half_up_not_truncates() {
    // sum = 7 over n = 4: (7 + 2) / 4 = 2, truncation would report 1.
    let mut adc = MockAdc::new(&[1, 2, 2, 2]);
    let mut engine = SamplingEngine::new(cfg(4, 0, 1, 0, 60), &mut adc, SimClock::new(1));
    assert_eq!(engine.read_point(), 2);
}

#[test]
fn point_average_of_mixed_sequence() {
    // sum = 8 over n = 4: (8 + 2) / 4 = 2.
    let mut adc = MockAdc::new(&[1, 2, 2, 3]);
    let mut engine = SamplingEngine::new(cfg(4, 0, 1, 0, 60), &mut adc, SimClock::new(1));
    assert_eq!(engine.read_point(), 2);
}

#[test]
fn full_scale_average_does_not_overflow() {
    let mut adc = MockAdc::constant(u16::MAX);
    let mut engine = SamplingEngine::new(cfg(1024, 0, 1, 0, 60), &mut adc, SimClock::new(1));
    assert_eq!(engine.read_point(), u16::MAX);
}

#[test]
fn read_once_passes_raw_sample_through() {
    let mut adc = MockAdc::constant(0xABCD);
    {
        let mut engine = SamplingEngine::new(cfg(4, 0, 1, 0, 60), &mut adc, SimClock::new(1));
        assert_eq!(engine.read_once(), 0xABCD);
    }
    assert_eq!(adc.reads(), 1);
}

#[test]
fn point_consumes_exactly_n_samples() {
    let mut adc = MockAdc::constant(5);
    {
        let mut engine = SamplingEngine::new(cfg(8, 0, 1, 0, 60), &mut adc, SimClock::new(1));
        let _ = engine.read_point();
    }
    assert_eq!(adc.reads(), 8);
}

// ── Bursts ────────────────────────────────────────────────────

#[test]
fn burst_yields_burst_n_points_each_averaged() {
    // point_n_avg = 2 over a [10, 20] cycle: every point averages to 15.
    let mut adc = MockAdc::new(&[10, 20]);
    let mut engine = SamplingEngine::new(cfg(2, 0, 3, 0, 60), &mut adc, SimClock::new(1));
    assert_eq!(engine.read_burst(), vec![15, 15, 15]);
}

#[test]
fn burst_consumes_burst_n_times_point_n_samples() {
    let mut adc = MockAdc::constant(1);
    {
        let mut engine = SamplingEngine::new(cfg(4, 0, 5, 0, 60), &mut adc, SimClock::new(1));
        let burst = engine.read_burst();
        assert_eq!(burst.len(), 5);
    }
    assert_eq!(adc.reads(), 20);
}

// ── Pacing floors ─────────────────────────────────────────────

#[test]
fn sample_pacing_holds_the_delay_floor() {
    let clock = SimClock::new(20);
    let mut adc = MockAdc::constant(0);
    let start;
    let end;
    {
        let mut engine = SamplingEngine::new(cfg(4, 500, 1, 0, 60), &mut adc, clock.clone());
        start = clock.now();
        let _ = engine.read_point();
        end = clock.now();
    }
    // Four samples, each floored at 500 µs from its start timestamp.
    assert!(end - start >= 4 * 500, "elapsed {}us", end - start);
}

#[test]
fn burst_pacing_floors_successive_point_starts() {
    let clock = SimClock::new(10);
    let mut adc = MockAdc::with_clock(&[0], clock.clone());
    {
        let mut engine = SamplingEngine::new(cfg(1, 0, 4, 1000, 60), &mut adc, clock.clone());
        let burst = engine.read_burst();
        assert_eq!(burst.len(), 4);
    }
    // One read per point: the read stamps are the point start times.
    assert_eq!(adc.stamps.len(), 4);
    for pair in adc.stamps.windows(2) {
        let spacing = pair[1] - pair[0];
        assert!(spacing >= 1000, "inter-point spacing {}us below floor", spacing);
    }
}

#[test]
fn zero_delay_sampling_does_not_wait() {
    let clock = SimClock::new(1);
    let mut adc = MockAdc::constant(0);
    let mut engine = SamplingEngine::new(cfg(16, 0, 1, 0, 60), &mut adc, clock.clone());
    let start = clock.now();
    let _ = engine.read_point();
    // Only the per-iteration bookkeeping queries advance the clock.
    assert!(clock.now() - start < 100);
}

// ── Expiry ────────────────────────────────────────────────────

#[test]
fn fresh_engine_with_positive_expiration_is_active() {
    let clock = SimClock::new(0);
    let mut adc = MockAdc::constant(0);
    let engine = SamplingEngine::new(cfg(1, 0, 1, 0, 5), &mut adc, clock.clone());
    assert!(!engine.is_expired());
}

#[test]
fn engine_expires_strictly_after_expiration_elapses() {
    let clock = SimClock::new(0);
    let mut adc = MockAdc::constant(0);
    let engine = SamplingEngine::new(cfg(1, 0, 1, 0, 5), &mut adc, clock.clone());

    clock.advance(5_000_000);
    assert!(!engine.is_expired(), "exactly expiration_s is still active");

    clock.advance(1);
    assert!(engine.is_expired());
}

#[test]
fn zero_expiration_is_expired_from_birth() {
    let clock = SimClock::new(0);
    let mut adc = MockAdc::constant(0);
    let engine = SamplingEngine::new(cfg(1, 0, 1, 0, 0), &mut adc, clock);
    assert!(engine.is_expired());
}

#[test]
#[should_panic(expected = "expired")]
fn sampling_on_expired_engine_asserts() {
    let clock = SimClock::new(0);
    let mut adc = MockAdc::constant(0);
    let mut engine = SamplingEngine::new(cfg(1, 0, 1, 0, 0), &mut adc, clock);
    let _ = engine.read_point();
}

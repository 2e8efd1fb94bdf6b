//! Point/burst acquisition engine.
//!
//! Owns one [`SamplingConfig`], borrows the ADC port, and ages itself
//! against the monotonic clock. Two logical states: Active while the
//! elapsed time is within `expiration_s`, Expired afterwards. Expiry is
//! evaluated lazily through [`SamplingEngine::is_expired`]; an expired
//! engine is dead weight — the caller fetches a fresh configuration and
//! builds a new engine rather than reusing this one.
//!
//! ## Pacing
//!
//! Inter-sample and inter-point delays are enforced by spinning on the
//! clock port, not by sleeping. The delay is a minimum floor measured from
//! each iteration's start; a slow conversion simply eats into (or overruns)
//! the floor. Required pacing is sub-millisecond, far below the scheduler
//! tick, so this path must never yield.

use crate::app::ports::{AdcPort, Clock};
use crate::sampling::SamplingConfig;

const US_PER_S: u64 = 1_000_000;

pub struct SamplingEngine<'a, A: AdcPort, C: Clock> {
    config: SamplingConfig,
    adc: &'a mut A,
    clock: C,
    born_us: u64,
}

impl<'a, A: AdcPort, C: Clock> SamplingEngine<'a, A, C> {
    pub fn new(config: SamplingConfig, adc: &'a mut A, clock: C) -> Self {
        let born_us = clock.now_us();
        Self {
            config,
            adc,
            clock,
            born_us,
        }
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Whether this engine's configuration has outlived `expiration_s`.
    ///
    /// `expiration_s == 0` is expired from birth; otherwise the engine
    /// expires once strictly more than `expiration_s` whole seconds have
    /// elapsed since construction.
    pub fn is_expired(&self) -> bool {
        if self.config.expiration_s == 0 {
            return true;
        }
        let elapsed_us = self.clock.now_us().saturating_sub(self.born_us);
        elapsed_us > u64::from(self.config.expiration_s) * US_PER_S
    }

    /// One raw conversion, straight through the port. No buffering, no retry.
    pub fn read_once(&mut self) -> u16 {
        self.adc.read_raw()
    }

    /// One averaged point: `point_n_avg` paced samples, rounded mean.
    pub fn read_point(&mut self) -> u16 {
        debug_assert!(!self.is_expired(), "read_point on an expired sampler");
        self.point()
    }

    /// One burst: `burst_n` points, each iteration paced by a busy-wait
    /// floor of `burst_delay_us` from that iteration's start.
    pub fn read_burst(&mut self) -> Vec<u16> {
        debug_assert!(!self.is_expired(), "read_burst on an expired sampler");
        let mut points = Vec::with_capacity(self.config.burst_n as usize);
        for _ in 0..self.config.burst_n {
            let t0 = self.clock.now_us();
            points.push(self.point());
            self.spin_until(t0, u64::from(self.config.burst_delay_us));
        }
        points
    }

    fn point(&mut self) -> u16 {
        let n = self.config.point_n_avg;
        let samples = self.read_samples(n, self.config.point_delay_us);
        let sum: u32 = samples.iter().map(|&s| u32::from(s)).sum();
        // Round to nearest: add half the divisor before truncating.
        // The collector calibrates against this exact rounding.
        ((sum + (n >> 1)) / n) as u16
    }

    fn read_samples(&mut self, n: u32, delay_us: u32) -> Vec<u16> {
        let mut samples = Vec::with_capacity(n as usize);
        for _ in 0..n {
            let t0 = self.clock.now_us();
            samples.push(self.read_once());
            self.spin_until(t0, u64::from(delay_us));
        }
        samples
    }

    /// Active poll until at least `floor_us` has elapsed since `t0`.
    fn spin_until(&self, t0: u64, floor_us: u64) {
        while self.clock.now_us().saturating_sub(t0) < floor_us {
            core::hint::spin_loop();
        }
    }
}

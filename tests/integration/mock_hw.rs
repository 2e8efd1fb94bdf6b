//! Mock hardware and transport adapters for integration tests.
//!
//! `MockAdc` replays a scripted sample sequence and can stamp each read
//! against the simulated clock, so tests can assert on pacing without any
//! real timer. `MockConnector` scripts whole responses and records every
//! request the client sends.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use fieldprobe::app::ports::{AdcPort, Clock};
use fieldprobe::report::transport::{Connection, Connector, TransportError};

// ── Simulated clock ───────────────────────────────────────────

/// Deterministic microsecond clock. Every `now_us` query advances time by
/// `tick_us`, modelling the cost of one poll, so busy-wait loops always
/// terminate. Clones share the same timeline.
#[derive(Clone)]
pub struct SimClock {
    current: Rc<Cell<u64>>,
    tick_us: u64,
}

#[allow(dead_code)]
impl SimClock {
    pub fn new(tick_us: u64) -> Self {
        Self {
            current: Rc::new(Cell::new(0)),
            tick_us,
        }
    }

    /// Jump the timeline forward without a query.
    pub fn advance(&self, dt_us: u64) {
        self.current.set(self.current.get() + dt_us);
    }

    /// Peek at the timeline without advancing it.
    pub fn now(&self) -> u64 {
        self.current.get()
    }
}

impl Clock for SimClock {
    fn now_us(&self) -> u64 {
        let t = self.current.get();
        self.current.set(t + self.tick_us);
        t
    }
}

// ── Mock ADC ──────────────────────────────────────────────────

pub struct MockAdc {
    samples: Vec<u16>,
    cursor: usize,
    clock: Option<SimClock>,
    /// Simulated timestamp of each read, when a clock is attached.
    pub stamps: Vec<u64>,
}

#[allow(dead_code)]
impl MockAdc {
    pub fn new(samples: &[u16]) -> Self {
        assert!(!samples.is_empty(), "mock needs at least one sample");
        Self {
            samples: samples.to_vec(),
            cursor: 0,
            clock: None,
            stamps: Vec::new(),
        }
    }

    pub fn constant(value: u16) -> Self {
        Self::new(&[value])
    }

    /// Stamp every read against `clock` (a shared-timeline clone).
    pub fn with_clock(samples: &[u16], clock: SimClock) -> Self {
        let mut adc = Self::new(samples);
        adc.clock = Some(clock);
        adc
    }

    pub fn reads(&self) -> usize {
        self.cursor
    }
}

impl AdcPort for MockAdc {
    fn read_raw(&mut self) -> u16 {
        if let Some(clock) = &self.clock {
            self.stamps.push(clock.now());
        }
        let v = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        v
    }
}

// ── Mock connector ────────────────────────────────────────────

pub struct MockConnector {
    responses: Rc<RefCell<VecDeque<Vec<u8>>>>,
    requests: Rc<RefCell<Vec<Vec<u8>>>>,
    connects: Rc<Cell<usize>>,
    fail_connect: bool,
}

#[allow(dead_code)]
impl MockConnector {
    pub fn new() -> Self {
        Self {
            responses: Rc::new(RefCell::new(VecDeque::new())),
            requests: Rc::new(RefCell::new(Vec::new())),
            connects: Rc::new(Cell::new(0)),
            fail_connect: false,
        }
    }

    /// A connector whose every connect attempt fails.
    pub fn failing() -> Self {
        let mut c = Self::new();
        c.fail_connect = true;
        c
    }

    /// Script the response served by the next connection.
    pub fn push_response(&self, bytes: Vec<u8>) {
        self.responses.borrow_mut().push_back(bytes);
    }

    /// Shared handle to every request sent so far.
    pub fn requests(&self) -> Rc<RefCell<Vec<Vec<u8>>>> {
        Rc::clone(&self.requests)
    }

    /// Shared handle to the number of connections opened.
    pub fn connects(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.connects)
    }
}

impl Connector for MockConnector {
    type Conn = MockConnection;

    fn connect(&self) -> Result<MockConnection, TransportError> {
        if self.fail_connect {
            return Err(TransportError::ConnectFailed);
        }
        self.connects.set(self.connects.get() + 1);
        Ok(MockConnection {
            response: self.responses.borrow_mut().pop_front().unwrap_or_default(),
            requests: Rc::clone(&self.requests),
        })
    }
}

pub struct MockConnection {
    response: Vec<u8>,
    requests: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl Connection for MockConnection {
    fn send(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.requests.borrow_mut().push(data.to_vec());
        Ok(())
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let n = self.response.len().min(buf.len());
        buf[..n].copy_from_slice(&self.response[..n]);
        Ok(n)
    }
}

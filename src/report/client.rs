//! Request/response client for the collector.
//!
//! Three exchanges, each over a fresh connection: configuration fetch
//! (GET), point report (POST), burst report (POST). Requests are plain
//! HTTP/1.1 with octet-stream bodies; responses are read with a single
//! bounded receive — the collector answers small enough that partial
//! reads do not occur in practice, and this client deliberately does not
//! reassemble chunked responses. Failures surface as
//! [`TransportError`]; nothing here retries.

use log::{debug, info};

use crate::app::ports::{AdcPort, Clock};
use crate::report::codec;
use crate::report::transport::{Connection, Connector, TransportError, RECV_BUF_LEN};
use crate::sampling::SamplingEngine;

pub struct ReportClient<N: Connector> {
    connector: N,
    host: String,
    device_id: String,
}

impl<N: Connector> ReportClient<N> {
    pub fn new(connector: N, host: &str, device_id: &str) -> Self {
        Self {
            connector,
            host: host.to_owned(),
            device_id: device_id.to_owned(),
        }
    }

    /// Fetch the raw configuration response for this node, verbatim.
    pub fn fetch_config(&mut self) -> Result<Vec<u8>, TransportError> {
        let request = format!(
            "GET /config/{} HTTP/1.1\r\nHost: {}\r\n\r\n",
            self.device_id, self.host
        );
        debug!("report: GET /config/{}", self.device_id);
        self.exchange(request.as_bytes())
    }

    /// Report one averaged point.
    pub fn send_point(&mut self, value: u16) -> Result<(), TransportError> {
        debug!("report: point {} -> /point/{}", value, self.device_id);
        self.post("point", &codec::encode_point(value))
    }

    /// Report a burst in sampled order.
    pub fn send_burst(&mut self, values: &[u16]) -> Result<(), TransportError> {
        debug!(
            "report: burst of {} -> /burst/{}",
            values.len(),
            self.device_id
        );
        self.post("burst", &codec::encode_burst(values))
    }

    /// Fetch, decode and clamp a configuration, then stand up an engine
    /// over the given ADC and clock.
    pub fn fetch_sampler<'a, A: AdcPort, C: Clock>(
        &mut self,
        adc: &'a mut A,
        clock: C,
    ) -> crate::error::Result<SamplingEngine<'a, A, C>> {
        let raw = self.fetch_config()?;
        let config = codec::decode_config(&raw)?;
        info!(
            "report: config accepted (point {}x/{}us, burst {}x/{}us, expires {}s)",
            config.point_n_avg,
            config.point_delay_us,
            config.burst_n,
            config.burst_delay_us,
            config.expiration_s
        );
        Ok(SamplingEngine::new(config, adc, clock))
    }

    fn post(&mut self, kind: &str, body: &[u8]) -> Result<(), TransportError> {
        let mut request = format!(
            "POST /{}/{} HTTP/1.1\r\nHost: {}\r\nContent-Type: octet-stream\r\nContent-Length: {}\r\n\r\n",
            kind,
            self.device_id,
            self.host,
            body.len()
        )
        .into_bytes();
        request.extend_from_slice(body);
        // Best-effort acknowledgement read; the body is not inspected.
        self.exchange(&request)?;
        Ok(())
    }

    /// One full exchange: connect, send, single bounded receive, close.
    fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>, TransportError> {
        let mut conn = self.connector.connect()?;
        conn.send(request)?;
        let mut buf = vec![0u8; RECV_BUF_LEN];
        let n = conn.recv(&mut buf)?;
        buf.truncate(n);
        Ok(buf)
        // conn drops here, closing the connection.
    }
}

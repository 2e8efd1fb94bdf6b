//! Measurement/configuration wire codec.
//!
//! Report bodies are fixed-width big-endian:
//! ```text
//! point:  ┌─────────┐          burst:  ┌─────────┬─────────┬ ─ ─
//!         │ BE u16  │                  │ BE u16  │ BE u16  │ ...
//!         └─────────┘                  └─────────┴─────────┴ ─ ─
//! ```
//!
//! A configuration response carries header text, the 4-byte CR LF CR LF
//! delimiter, then exactly nine BE u32 fields. The body is untrusted
//! input: the decoder locates the delimiter itself, bounds-checks the
//! record, and never indexes past what it has verified.

use crate::sampling::config::WIRE_FIELD_COUNT;
use crate::sampling::SamplingConfig;

/// Size of the binary configuration record.
pub const CONFIG_RECORD_LEN: usize = WIRE_FIELD_COUNT * 4;

/// Header/body separator.
const BODY_DELIMITER: &[u8; 4] = b"\r\n\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Delimiter missing, or fewer than 36 bytes follow it. The response
    /// must not be used to build a configuration.
    MalformedResponse,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedResponse => write!(f, "malformed configuration response"),
        }
    }
}

/// Decode a configuration response into a clamped [`SamplingConfig`].
pub fn decode_config(body: &[u8]) -> Result<SamplingConfig, DecodeError> {
    let delim = body
        .windows(BODY_DELIMITER.len())
        .position(|w| w == BODY_DELIMITER)
        .ok_or(DecodeError::MalformedResponse)?;
    let record = body
        .get(delim + BODY_DELIMITER.len()..)
        .filter(|r| r.len() >= CONFIG_RECORD_LEN)
        .ok_or(DecodeError::MalformedResponse)?;

    let mut fields = [0u32; WIRE_FIELD_COUNT];
    for (field, chunk) in fields.iter_mut().zip(record.chunks_exact(4)) {
        let mut word = [0u8; 4];
        word.copy_from_slice(chunk);
        *field = u32::from_be_bytes(word);
    }
    Ok(SamplingConfig::from_wire(&fields))
}

/// Encode one averaged point, big-endian.
pub fn encode_point(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Encode a burst in sampled order, 2 bytes per point.
pub fn encode_burst(values: &[u16]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(values.len() * 2);
    for v in values {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    buf
}

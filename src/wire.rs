//! Byte-level cursors: bounds-checked reader, append-only writer.
//!
//! # Layout rules
//! All fixed-width fields are network order.  Variable-length byte runs
//! (strings, buffers) are padded with zeros to the next four-byte boundary;
//! the padding is consumed and discarded on read and is not part of any
//! length field.
//!
//! The writer is infallible; it appends to a growable buffer.  The reader
//! fails exactly one way: [`WireError::TruncatedInput`] when a read runs
//! past the end of the payload.  It never panics on malformed input.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Result, WireError};

/// Zero bytes needed after a `len`-byte run to reach four-byte alignment.
pub(crate) const fn pad_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

// ── Writer ───────────────────────────────────────────────────────────────────

/// Append-only encode buffer.
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        WireWriter { buf: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        WireWriter { buf: Vec::with_capacity(cap) }
    }

    pub fn write_u32(&mut self, v: u32) {
        let mut b = [0u8; 4];
        BigEndian::write_u32(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_i32(&mut self, v: i32) {
        let mut b = [0u8; 4];
        BigEndian::write_i32(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_u64(&mut self, v: u64) {
        let mut b = [0u8; 8];
        BigEndian::write_u64(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_i64(&mut self, v: i64) {
        let mut b = [0u8; 8];
        BigEndian::write_i64(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_f64(&mut self, v: f64) {
        let mut b = [0u8; 8];
        BigEndian::write_f64(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    /// Raw byte run plus alignment padding.  The length field, if any, is
    /// the caller's business.
    pub fn write_padded(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
        const ZERO: [u8; 4] = [0; 4];
        self.buf.extend_from_slice(&ZERO[..pad_len(bytes.len())]);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for WireWriter {
    fn default() -> Self {
        Self::new()
    }
}

// ── Reader ───────────────────────────────────────────────────────────────────

/// Bounds-checked decode cursor over a borrowed payload.
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        WireReader { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(WireError::TruncatedInput { needed: n, remaining });
        }
        let s = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(s)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(BigEndian::read_u64(self.take(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.take(8)?))
    }

    /// A `len`-byte run; consumes the alignment padding as well and
    /// discards it.  Fails if run plus padding overruns the payload.
    pub fn read_padded(&mut self, len: usize) -> Result<&'a [u8]> {
        let run = self.take(len)?;
        self.take(pad_len(len))?;
        Ok(run)
    }

    /// Everything not yet consumed, consuming it.
    pub fn rest(&mut self) -> &'a [u8] {
        let s = &self.buf[self.pos..];
        self.pos = self.buf.len();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_reaches_the_next_boundary() {
        assert_eq!(pad_len(0), 0);
        assert_eq!(pad_len(1), 3);
        assert_eq!(pad_len(2), 2);
        assert_eq!(pad_len(3), 1);
        assert_eq!(pad_len(4), 0);
        assert_eq!(pad_len(5), 3);
    }

    #[test]
    fn padded_write_is_zero_filled_and_aligned() {
        let mut w = WireWriter::new();
        w.write_padded(b"abcde");
        let bytes = w.into_bytes();
        assert_eq!(bytes, b"abcde\0\0\0");

        let mut r = WireReader::new(&bytes);
        assert_eq!(r.read_padded(5).unwrap(), b"abcde");
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn fields_round_trip_in_network_order() {
        let mut w = WireWriter::new();
        w.write_u32(0xDEAD_BEEF);
        w.write_i64(-7);
        let bytes = w.into_bytes();
        assert_eq!(&bytes[..4], &[0xDE, 0xAD, 0xBE, 0xEF]);

        let mut r = WireReader::new(&bytes);
        assert_eq!(r.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(r.read_i64().unwrap(), -7);
    }

    #[test]
    fn overrun_reports_needed_and_remaining() {
        let mut r = WireReader::new(&[0, 0]);
        let err = r.read_u32().unwrap_err();
        assert!(matches!(
            err,
            WireError::TruncatedInput { needed: 4, remaining: 2 }
        ));
    }

    #[test]
    fn padding_itself_is_bounds_checked() {
        // Five data bytes present but no room for the three pad bytes.
        let mut r = WireReader::new(b"abcde");
        assert!(r.read_padded(5).is_err());
    }
}

//! Length-prefixed byte runs: strings and opaque buffers.
//!
//! Both payloads share one shape: a u32 byte count, the bytes themselves,
//! then zero padding to the next four-byte boundary.  Only the outer type
//! tag tells them apart.  The codec treats string contents as opaque bytes
//! and never validates an encoding, so any byte sequence round-trips
//! unchanged.
//!
//! Untagged occurrences of the same shape appear inside composite payloads
//! (mapping keys, exception fields); those call straight into this module.

use crate::codec::write_count;
use crate::error::Result;
use crate::wire::{WireReader, WireWriter};

pub fn write_string(w: &mut WireWriter, bytes: &[u8]) -> Result<()> {
    write_count(w, bytes.len(), "byte run")?;
    w.write_padded(bytes);
    Ok(())
}

pub fn read_string(r: &mut WireReader) -> Result<Vec<u8>> {
    let len = r.read_u32()? as usize;
    Ok(r.read_padded(len)?.to_vec())
}

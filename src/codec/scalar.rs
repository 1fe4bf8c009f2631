//! Fixed-width scalar payloads.
//!
//! Numbers travel as bare network-order fields with no inner length or tag.
//! Booleans occupy a full 32-bit signed word: any nonzero word reads as
//! `true`, and writes emit exactly 1 or 0.  Doubles are IEEE-754 bit
//! patterns, so every NaN and both infinities survive a round trip.

use crate::error::Result;
use crate::variant::Variant;
use crate::wire::{WireReader, WireWriter};

pub fn write_bool(w: &mut WireWriter, v: bool) {
    w.write_i32(i32::from(v));
}

pub fn read_bool(r: &mut WireReader) -> Result<Variant> {
    Ok(Variant::Bool(r.read_i32()? != 0))
}

pub fn read_int32(r: &mut WireReader) -> Result<Variant> {
    Ok(Variant::Int32(r.read_i32()?))
}

pub fn read_uint32(r: &mut WireReader) -> Result<Variant> {
    Ok(Variant::UInt32(r.read_u32()?))
}

pub fn read_int64(r: &mut WireReader) -> Result<Variant> {
    Ok(Variant::Int64(r.read_i64()?))
}

pub fn read_uint64(r: &mut WireReader) -> Result<Variant> {
    Ok(Variant::UInt64(r.read_u64()?))
}

pub fn read_double(r: &mut WireReader) -> Result<Variant> {
    Ok(Variant::Double(r.read_f64()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_nonzero_word_is_true() {
        for word in [1i32, -1, 2, i32::MIN] {
            let mut w = WireWriter::new();
            w.write_i32(word);
            let bytes = w.into_bytes();
            let got = read_bool(&mut WireReader::new(&bytes)).unwrap();
            assert_eq!(got, Variant::Bool(true));
        }
    }

    #[test]
    fn written_booleans_are_exactly_one_and_zero() {
        let mut w = WireWriter::new();
        write_bool(&mut w, true);
        write_bool(&mut w, false);
        assert_eq!(w.into_bytes(), [0, 0, 0, 1, 0, 0, 0, 0]);
    }
}

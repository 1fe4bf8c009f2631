//! Composite payloads: sequences, mappings, timeseries, numeric arrays.
//!
//! Every composite opens with a u32 entry count.  Entries follow
//! back-to-back with no terminator, so composite decoding is driven purely
//! by the count and recursion into the element codecs.
//!
//! Count fields in foreign input are treated as claims, not facts: element
//! reads stay bounds-checked, and pre-allocation is capped by the bytes
//! actually remaining so a lying count cannot balloon memory before the
//! first short read fails.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::codec::{read_variant, string, temporal, write_count, write_variant};
use crate::error::{Result, WireError};
use crate::registry::{WireType, TAG_DOUBLE};
use crate::variant::Variant;
use crate::wire::{WireReader, WireWriter};

// ── Sequences (list, tuple) ─────────────────────────────────────────────────

/// Shared payload for lists and tuples; only the outer tag differs.
pub fn write_sequence(w: &mut WireWriter, items: &[Variant]) -> Result<()> {
    write_count(w, items.len(), "sequence")?;
    for item in items {
        write_variant(w, item)?;
    }
    Ok(())
}

pub fn read_sequence(r: &mut WireReader) -> Result<Vec<Variant>> {
    let n = r.read_u32()? as usize;
    // Every element carries at least a 4-byte tag.
    let mut items = Vec::with_capacity(n.min(r.remaining() / 4));
    for _ in 0..n {
        items.push(read_variant(r)?);
    }
    Ok(items)
}

// ── Mappings ────────────────────────────────────────────────────────────────

/// Entries are (untagged string key, tagged value) pairs, written in the
/// map's key order.
pub fn write_mapping(w: &mut WireWriter, map: &BTreeMap<Vec<u8>, Variant>) -> Result<()> {
    write_count(w, map.len(), "mapping")?;
    for (key, value) in map {
        string::write_string(w, key)?;
        write_variant(w, value)?;
    }
    Ok(())
}

/// A repeated key in foreign input is not an error; the later entry wins.
pub fn read_mapping(r: &mut WireReader) -> Result<BTreeMap<Vec<u8>, Variant>> {
    let n = r.read_u32()? as usize;
    let mut map = BTreeMap::new();
    for _ in 0..n {
        let key = string::read_string(r)?;
        let value = read_variant(r)?;
        map.insert(key, value);
    }
    Ok(map)
}

// ── Timeseries ──────────────────────────────────────────────────────────────

/// Entries are (untagged datetime, tagged value) pairs in stream order.
/// Order is preserved verbatim; stamps are not required to be monotone.
pub fn write_timeseries(w: &mut WireWriter, points: &[(NaiveDateTime, Variant)]) -> Result<()> {
    write_count(w, points.len(), "timeseries")?;
    for (stamp, value) in points {
        temporal::write_datetime(w, *stamp)?;
        write_variant(w, value)?;
    }
    Ok(())
}

pub fn read_timeseries(r: &mut WireReader) -> Result<Vec<(NaiveDateTime, Variant)>> {
    let n = r.read_u32()? as usize;
    // Stamp plus value tag: at least 12 bytes per point.
    let mut points = Vec::with_capacity(n.min(r.remaining() / 12));
    for _ in 0..n {
        let stamp = temporal::read_datetime(r)?;
        let value = read_variant(r)?;
        points.push((stamp, value));
    }
    Ok(points)
}

// ── Numeric arrays ──────────────────────────────────────────────────────────

/// Count, then the element type tag once, then raw untagged element
/// payloads.  Doubles are the only element type carried.
pub fn write_array(w: &mut WireWriter, elems: &[f64]) -> Result<()> {
    write_count(w, elems.len(), "array")?;
    w.write_u32(TAG_DOUBLE);
    for v in elems {
        w.write_f64(*v);
    }
    Ok(())
}

/// An unregistered element tag fails as unknown; a registered tag other
/// than double fails as a mismatch.  Adding an element type means adding
/// an arm here and in [`write_array`].
pub fn read_array(r: &mut WireReader) -> Result<Vec<f64>> {
    let n = r.read_u32()? as usize;
    let elem = WireType::from_tag(r.read_u32()?)?;
    if elem != WireType::Double {
        return Err(WireError::TypeMismatch(format!(
            "array elements of type '{}' are not supported",
            elem.name()
        )));
    }
    let mut elems = Vec::with_capacity(n.min(r.remaining() / 8));
    for _ in 0..n {
        elems.push(r.read_f64()?);
    }
    Ok(elems)
}

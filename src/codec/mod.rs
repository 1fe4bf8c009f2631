//! Tagged-variant payload codec.
//!
//! # Dispatch
//! Every value on the wire is a u32 type tag followed by that type's
//! payload.  [`write_variant`] resolves the value's kind to its canonical
//! tag through the registry and appends tag then payload; [`read_variant`]
//! reads a tag, resolves it to a decoder, and recurses into composite
//! payloads as needed.
//!
//! Both directions are all-or-nothing.  A failure anywhere in a nested
//! payload abandons the whole call; no partially decoded value escapes.
//!
//! # Layout
//! One submodule per payload family:
//!   - [`scalar`]    — bare fixed-width fields, bool convention
//!   - [`string`]    — length-prefixed padded byte runs
//!   - [`temporal`]  — time-of-day and epoch-offset datetimes
//!   - [`container`] — count-prefixed composites
//!   - [`exception`] — the four-string error capsule

pub mod container;
pub mod exception;
pub mod scalar;
pub mod string;
pub mod temporal;

use crate::error::{Result, WireError};
use crate::registry::WireType;
use crate::variant::Variant;
use crate::wire::{WireReader, WireWriter};

/// Append a u32 count or length field.  The wire caps both at u32::MAX;
/// larger host values cannot be represented and fail before any bytes of
/// the oversized field are written.
pub(crate) fn write_count(w: &mut WireWriter, n: usize, what: &str) -> Result<()> {
    match u32::try_from(n) {
        Ok(v) => {
            w.write_u32(v);
            Ok(())
        }
        Err(_) => Err(WireError::TypeMismatch(format!(
            "{what} of size {n} exceeds the 32-bit wire field"
        ))),
    }
}

/// Append one tagged value: canonical type tag, then payload.
pub fn write_variant(w: &mut WireWriter, value: &Variant) -> Result<()> {
    w.write_u32(WireType::of(value).canonical_tag());
    match value {
        Variant::Null          => Ok(()),
        Variant::Bool(v)       => { scalar::write_bool(w, *v); Ok(()) }
        Variant::Int32(v)      => { w.write_i32(*v); Ok(()) }
        Variant::UInt32(v)     => { w.write_u32(*v); Ok(()) }
        Variant::Int64(v)      => { w.write_i64(*v); Ok(()) }
        Variant::UInt64(v)     => { w.write_u64(*v); Ok(()) }
        Variant::Double(v)     => { w.write_f64(*v); Ok(()) }
        Variant::String(s)     => string::write_string(w, s),
        Variant::Time(t)       => { temporal::write_time(w, *t); Ok(()) }
        Variant::DateTime(dt)  => temporal::write_datetime(w, *dt),
        Variant::List(items)   => container::write_sequence(w, items),
        Variant::Tuple(items)  => container::write_sequence(w, items),
        Variant::Mapping(map)  => container::write_mapping(w, map),
        Variant::TimeSeries(p) => container::write_timeseries(w, p),
        Variant::Buffer(b)     => string::write_string(w, b),
        Variant::Exception(e)  => exception::write_exception(w, e),
        Variant::Array(a)      => container::write_array(w, a),
    }
}

/// Read one tagged value: type tag, registry lookup, payload.
pub fn read_variant(r: &mut WireReader) -> Result<Variant> {
    let ty = WireType::from_tag(r.read_u32()?)?;
    match ty {
        WireType::Null       => Ok(Variant::Null),
        WireType::Bool       => scalar::read_bool(r),
        WireType::Int32      => scalar::read_int32(r),
        WireType::UInt32     => scalar::read_uint32(r),
        WireType::Int64      => scalar::read_int64(r),
        WireType::UInt64     => scalar::read_uint64(r),
        WireType::Double     => scalar::read_double(r),
        WireType::String     => Ok(Variant::String(string::read_string(r)?)),
        WireType::Time       => Ok(Variant::Time(temporal::read_time(r)?)),
        WireType::DateTime   => Ok(Variant::DateTime(temporal::read_datetime(r)?)),
        WireType::List       => Ok(Variant::List(container::read_sequence(r)?)),
        WireType::Tuple      => Ok(Variant::Tuple(container::read_sequence(r)?)),
        WireType::Mapping    => Ok(Variant::Mapping(container::read_mapping(r)?)),
        WireType::TimeSeries => Ok(Variant::TimeSeries(container::read_timeseries(r)?)),
        WireType::Buffer     => Ok(Variant::Buffer(string::read_string(r)?)),
        WireType::Exception  => Ok(Variant::Exception(exception::read_exception(r)?)),
        WireType::Array      => Ok(Variant::Array(container::read_array(r)?)),
    }
}

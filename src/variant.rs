//! The dynamic value exchanged through the codec.
//!
//! [`Variant`] is a closed sum over every kind the wire format can carry.
//! Dispatch is by exhaustive `match`, so any value constructible through
//! this type is encodable; there is no runtime kind lookup to miss.
//!
//! # Strings are bytes
//! `String`, `Buffer`, mapping keys, and the four [`ExceptionData`] fields
//! are opaque byte strings.  The codec copies them byte for byte and never
//! validates an encoding; charset concerns belong to the host application.
//! Convenience constructors accept `&str`, and [`Variant::as_str`] gives a
//! UTF-8 view when one exists.
//!
//! # Temporal values carry no timezone
//! `Time` and `DateTime` use [`NaiveTime`] / [`NaiveDateTime`]: a wall-clock
//! reading with no zone, which is exactly what travels on the wire.  Two
//! hosts in different timezones exchanging a `DateTime` see the same digits,
//! not the same instant.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, NaiveTime};

/// A dynamically typed value in the protean wire model.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Null,
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    /// Opaque byte string.
    String(Vec<u8>),
    /// Time of day, millisecond granularity on the wire.
    Time(NaiveTime),
    /// Local wall-clock date and time, second granularity on the wire.
    DateTime(NaiveDateTime),
    /// Ordered sequence of heterogeneous values.
    List(Vec<Variant>),
    /// Fixed ordered grouping; same wire layout as `List`, distinct tag.
    Tuple(Vec<Variant>),
    /// String-keyed mapping.  Encode order is bytewise key order.
    Mapping(BTreeMap<Vec<u8>, Variant>),
    /// DateTime-keyed entries in stream order.  A sequence, not a map:
    /// duplicate timestamps are preserved, order is significant.
    TimeSeries(Vec<(NaiveDateTime, Variant)>),
    /// Opaque binary blob.  Same wire layout as `String`, distinct tag.
    Buffer(Vec<u8>),
    /// Structured error record.
    Exception(ExceptionData),
    /// Homogeneous array of doubles.
    Array(Vec<f64>),
}

impl Variant {
    /// Human-readable kind name (for diagnostics only, never parsed).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Variant::Null         => "null",
            Variant::Bool(_)      => "bool",
            Variant::Int32(_)     => "int32",
            Variant::UInt32(_)    => "uint32",
            Variant::Int64(_)     => "int64",
            Variant::UInt64(_)    => "uint64",
            Variant::Double(_)    => "double",
            Variant::String(_)    => "string",
            Variant::Time(_)      => "time",
            Variant::DateTime(_)  => "datetime",
            Variant::List(_)      => "list",
            Variant::Tuple(_)     => "tuple",
            Variant::Mapping(_)   => "mapping",
            Variant::TimeSeries(_)=> "timeseries",
            Variant::Buffer(_)    => "buffer",
            Variant::Exception(_) => "exception",
            Variant::Array(_)     => "array",
        }
    }

    /// Build a `String` variant from anything that yields bytes
    /// (`&str`, `String`, `&[u8]`, `Vec<u8>`).
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Variant::String(bytes.into())
    }

    /// Build a `Buffer` variant from anything that yields bytes.
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Variant::Buffer(bytes.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Variant::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Variant::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Variant::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Raw bytes of a `String` or `Buffer` variant.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Variant::String(b) | Variant::Buffer(b) => Some(b),
            _ => None,
        }
    }

    /// UTF-8 view of a `String` variant, when the bytes happen to be valid
    /// UTF-8.  Decoding never requires this.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Variant]> {
        match self {
            Variant::List(items) | Variant::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<Vec<u8>, Variant>> {
        match self {
            Variant::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_exception(&self) -> Option<&ExceptionData> {
        match self {
            Variant::Exception(e) => Some(e),
            _ => None,
        }
    }
}

// ── Conversions in ────────────────────────────────────────────────────────────
//
// `Vec<u8>` deliberately has no `From` impl: bytes are ambiguous between
// `String` and `Buffer`, so construction goes through `Variant::string` /
// `Variant::buffer` instead.

impl From<bool> for Variant {
    fn from(v: bool) -> Self { Variant::Bool(v) }
}
impl From<i32> for Variant {
    fn from(v: i32) -> Self { Variant::Int32(v) }
}
impl From<u32> for Variant {
    fn from(v: u32) -> Self { Variant::UInt32(v) }
}
impl From<i64> for Variant {
    fn from(v: i64) -> Self { Variant::Int64(v) }
}
impl From<u64> for Variant {
    fn from(v: u64) -> Self { Variant::UInt64(v) }
}
impl From<f64> for Variant {
    fn from(v: f64) -> Self { Variant::Double(v) }
}
impl From<&str> for Variant {
    fn from(v: &str) -> Self { Variant::String(v.as_bytes().to_vec()) }
}
impl From<std::string::String> for Variant {
    fn from(v: std::string::String) -> Self { Variant::String(v.into_bytes()) }
}
impl From<NaiveTime> for Variant {
    fn from(v: NaiveTime) -> Self { Variant::Time(v) }
}
impl From<NaiveDateTime> for Variant {
    fn from(v: NaiveDateTime) -> Self { Variant::DateTime(v) }
}
impl From<Vec<Variant>> for Variant {
    fn from(v: Vec<Variant>) -> Self { Variant::List(v) }
}
impl From<BTreeMap<Vec<u8>, Variant>> for Variant {
    fn from(v: BTreeMap<Vec<u8>, Variant>) -> Self { Variant::Mapping(v) }
}
impl From<ExceptionData> for Variant {
    fn from(v: ExceptionData) -> Self { Variant::Exception(v) }
}

// ── ExceptionData ─────────────────────────────────────────────────────────────

/// The four-field error record carried by the `Exception` wire type.
///
/// This is a record, never a live error object: how (and whether) to turn it
/// back into a host exception is the embedder's business.  `source` and
/// `stack` are frequently empty; the wire permits that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExceptionData {
    pub type_name: Vec<u8>,
    pub message:   Vec<u8>,
    pub source:    Vec<u8>,
    pub stack:     Vec<u8>,
}

impl ExceptionData {
    /// Record with a type name and message; source and stack left empty.
    pub fn new(type_name: impl Into<Vec<u8>>, message: impl Into<Vec<u8>>) -> Self {
        Self {
            type_name: type_name.into(),
            message:   message.into(),
            source:    Vec::new(),
            stack:     Vec::new(),
        }
    }
}

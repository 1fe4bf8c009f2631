//! Type-tag registry: frozen wire tags + both resolution directions.
//!
//! # Identity rules
//! Every wire type is identified by a 32-bit tag with a single bit set.
//! Tags are frozen: a value is never reused, even for a retired type.
//! Two alias pairs exist for historical reasons:
//!   - `TAG_ANY` (0x02) and `TAG_STRING` (0x04) both decode as a string.
//!   - `TAG_DICTIONARY` (0x4000) and `TAG_BAG` (0x8000) both decode as a
//!     mapping.
//!
//! Decoding is therefore many-to-one (tag → type); encoding is one-to-one
//! (type → canonical tag).  The canonical tag for a string is `TAG_STRING`
//! and for a mapping is `TAG_DICTIONARY`; both are fixed here, not left to
//! registration order.
//!
//! The registry is a compile-time table: there is no runtime registration
//! and nothing to synchronize.

use crate::error::{Result, WireError};
use crate::variant::Variant;

// ── Frozen wire tags ─────────────────────────────────────────────────────────

pub const TAG_NONE:       u32 = 0x0000_0001;
/// Legacy "any" string form; decode-only alias of [`TAG_STRING`].
pub const TAG_ANY:        u32 = 0x0000_0002;
pub const TAG_STRING:     u32 = 0x0000_0004;
pub const TAG_BOOLEAN:    u32 = 0x0000_0008;
pub const TAG_INT32:      u32 = 0x0000_0010;
pub const TAG_UINT32:     u32 = 0x0000_0020;
pub const TAG_INT64:      u32 = 0x0000_0040;
pub const TAG_UINT64:     u32 = 0x0000_0080;
pub const TAG_DOUBLE:     u32 = 0x0000_0200;
pub const TAG_TIME:       u32 = 0x0000_0800;
pub const TAG_DATETIME:   u32 = 0x0000_1000;
pub const TAG_LIST:       u32 = 0x0000_2000;
pub const TAG_DICTIONARY: u32 = 0x0000_4000;
/// Unordered-bag mapping form; decode-only alias of [`TAG_DICTIONARY`].
pub const TAG_BAG:        u32 = 0x0000_8000;
pub const TAG_BUFFER:     u32 = 0x0001_0000;
pub const TAG_TUPLE:      u32 = 0x0002_0000;
pub const TAG_EXCEPTION:  u32 = 0x0004_0000;
pub const TAG_TIMESERIES: u32 = 0x0008_0000;
pub const TAG_ARRAY:      u32 = 0x0020_0000;

// ── WireType ─────────────────────────────────────────────────────────────────

/// One variant per decoder.  This is the whole registry: `from_tag` is the
/// decode table, `canonical_tag` the encode table, `of` the native-kind
/// mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Null,
    Bool,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Double,
    String,
    Time,
    DateTime,
    List,
    Tuple,
    Mapping,
    TimeSeries,
    Buffer,
    Exception,
    Array,
}

impl WireType {
    /// Resolve a wire tag to its decoder.
    ///
    /// Many-to-one: the two alias tags land on the same type.  An
    /// unregistered tag fails with [`WireError::UnknownTag`]; the caller
    /// propagates, never retries.
    pub fn from_tag(tag: u32) -> Result<Self> {
        match tag {
            TAG_NONE                 => Ok(WireType::Null),
            TAG_ANY | TAG_STRING     => Ok(WireType::String),
            TAG_BOOLEAN              => Ok(WireType::Bool),
            TAG_INT32                => Ok(WireType::Int32),
            TAG_UINT32               => Ok(WireType::UInt32),
            TAG_INT64                => Ok(WireType::Int64),
            TAG_UINT64               => Ok(WireType::UInt64),
            TAG_DOUBLE               => Ok(WireType::Double),
            TAG_TIME                 => Ok(WireType::Time),
            TAG_DATETIME             => Ok(WireType::DateTime),
            TAG_LIST                 => Ok(WireType::List),
            TAG_DICTIONARY | TAG_BAG => Ok(WireType::Mapping),
            TAG_BUFFER               => Ok(WireType::Buffer),
            TAG_TUPLE                => Ok(WireType::Tuple),
            TAG_EXCEPTION            => Ok(WireType::Exception),
            TAG_TIMESERIES           => Ok(WireType::TimeSeries),
            TAG_ARRAY                => Ok(WireType::Array),
            _ => Err(WireError::UnknownTag { tag }),
        }
    }

    /// The single tag written when encoding this type.
    pub fn canonical_tag(self) -> u32 {
        match self {
            WireType::Null       => TAG_NONE,
            WireType::Bool       => TAG_BOOLEAN,
            WireType::Int32      => TAG_INT32,
            WireType::UInt32     => TAG_UINT32,
            WireType::Int64      => TAG_INT64,
            WireType::UInt64     => TAG_UINT64,
            WireType::Double     => TAG_DOUBLE,
            WireType::String     => TAG_STRING,
            WireType::Time       => TAG_TIME,
            WireType::DateTime   => TAG_DATETIME,
            WireType::List       => TAG_LIST,
            WireType::Tuple      => TAG_TUPLE,
            WireType::Mapping    => TAG_DICTIONARY,
            WireType::TimeSeries => TAG_TIMESERIES,
            WireType::Buffer     => TAG_BUFFER,
            WireType::Exception  => TAG_EXCEPTION,
            WireType::Array      => TAG_ARRAY,
        }
    }

    /// The wire type a native value encodes as.  Exhaustive over the closed
    /// [`Variant`] sum, so encoding never fails to find a type.
    pub fn of(value: &Variant) -> Self {
        match value {
            Variant::Null          => WireType::Null,
            Variant::Bool(_)       => WireType::Bool,
            Variant::Int32(_)      => WireType::Int32,
            Variant::UInt32(_)     => WireType::UInt32,
            Variant::Int64(_)      => WireType::Int64,
            Variant::UInt64(_)     => WireType::UInt64,
            Variant::Double(_)     => WireType::Double,
            Variant::String(_)     => WireType::String,
            Variant::Time(_)       => WireType::Time,
            Variant::DateTime(_)   => WireType::DateTime,
            Variant::List(_)       => WireType::List,
            Variant::Tuple(_)      => WireType::Tuple,
            Variant::Mapping(_)    => WireType::Mapping,
            Variant::TimeSeries(_) => WireType::TimeSeries,
            Variant::Buffer(_)     => WireType::Buffer,
            Variant::Exception(_)  => WireType::Exception,
            Variant::Array(_)      => WireType::Array,
        }
    }

    /// Human-readable type name (for diagnostics only, never parsed).
    pub fn name(self) -> &'static str {
        match self {
            WireType::Null       => "null",
            WireType::Bool       => "bool",
            WireType::Int32      => "int32",
            WireType::UInt32     => "uint32",
            WireType::Int64      => "int64",
            WireType::UInt64     => "uint64",
            WireType::Double     => "double",
            WireType::String     => "string",
            WireType::Time       => "time",
            WireType::DateTime   => "datetime",
            WireType::List       => "list",
            WireType::Tuple      => "tuple",
            WireType::Mapping    => "mapping",
            WireType::TimeSeries => "timeseries",
            WireType::Buffer     => "buffer",
            WireType::Exception  => "exception",
            WireType::Array      => "array",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_tag_resolves_to_itself() {
        for ty in [
            WireType::Null, WireType::Bool, WireType::Int32, WireType::UInt32,
            WireType::Int64, WireType::UInt64, WireType::Double, WireType::String,
            WireType::Time, WireType::DateTime, WireType::List, WireType::Tuple,
            WireType::Mapping, WireType::TimeSeries, WireType::Buffer,
            WireType::Exception, WireType::Array,
        ] {
            assert_eq!(WireType::from_tag(ty.canonical_tag()).unwrap(), ty);
        }
    }

    #[test]
    fn alias_tags_share_a_decoder() {
        assert_eq!(WireType::from_tag(TAG_ANY).unwrap(), WireType::String);
        assert_eq!(WireType::from_tag(TAG_BAG).unwrap(), WireType::Mapping);
        // The canonical direction never picks the alias.
        assert_eq!(WireType::String.canonical_tag(), TAG_STRING);
        assert_eq!(WireType::Mapping.canonical_tag(), TAG_DICTIONARY);
    }

    #[test]
    fn unregistered_tag_is_rejected() {
        for tag in [0u32, 0x100, 0x400, 0x0010_0000, 0x0040_0000, 0xFFFF_FFFF] {
            assert!(matches!(
                WireType::from_tag(tag),
                Err(WireError::UnknownTag { tag: t }) if t == tag
            ));
        }
    }
}

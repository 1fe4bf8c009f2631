//! Error taxonomy for the wire codec.
//!
//! Every failure is fatal to the current encode or decode call: the codec
//! either returns a fully materialized value/buffer or surfaces one of these
//! variants to the immediate caller.  There is no local recovery and no
//! partial result anywhere in the crate.

use thiserror::Error;

use crate::frame::{MAGIC, MAJOR_VERSION};

#[derive(Error, Debug)]
pub enum WireError {
    /// The first header word did not match the protean magic number.
    #[error("Bad magic number: expected {:#010x}, found {found:#010x}", MAGIC)]
    BadMagic { found: u32 },

    /// The header's major version differs from this codec's major version.
    /// The minor version is informational and never rejected.
    #[error("Incompatible major version: expected {}, found {found}", MAJOR_VERSION)]
    VersionMismatch { found: u16 },

    /// Decode-time: the type tag read from the stream has no registered
    /// decoder.
    #[error("No decoder registered for type tag {tag:#010x}")]
    UnknownTag { tag: u32 },

    /// Encode-time: the host value's kind has no registered encoder.  Every
    /// [`Variant`](crate::Variant) kind is registered, so this only arises
    /// for foreign values at an embedding boundary.
    #[error("No encoder registered for value kind '{kind}'")]
    UnknownKind { kind: &'static str },

    /// Fewer bytes remain in the buffer than a fixed-width field requires.
    /// Short input is never zero-filled.
    #[error("Truncated input: needed {needed} byte(s), {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    /// A value does not satisfy a codec's structural precondition (length
    /// exceeding the u32 count field, an out-of-range temporal value, an
    /// unsupported array element type).
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// The compression layer failed: the frame advertised compression but
    /// the payload would not inflate, or the body could not be deflated.
    #[error("Malformed compressed payload: {0}")]
    MalformedCompressedPayload(String),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WireError>;

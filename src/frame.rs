//! Framed container: header, mode word, optional compression.
//!
//! # Header layout (12 bytes, three network-order u32 words)
//!
//! ```text
//! offset  size  field
//! ------  ----  -----------------------------------------------
//!      0     4  magic            0x484913FF
//!      4     4  version          major << 16 | minor
//!      8     4  mode             bit flags, see [`mode`]
//!     12     -  body             one tagged value, possibly deflated
//! ```
//!
//! A reader rejects a frame on the first header word that disqualifies it:
//! wrong magic, then wrong major version.  The minor version is
//! informational and never rejected.  Bytes after the root value are
//! ignored, which lets a frame ride inside a larger carrier without a
//! surrounding length field.
//!
//! # Compression
//! A compressed body is a single deflate stream covering the whole encoded
//! value.  The default is a raw stream with no zlib header or checksum;
//! setting [`EncodeOptions::zlib_header`] emits the wrapped form instead,
//! and the [`mode::ZLIB_HEADER`] bit tells the reader which one it is
//! holding.

use std::io::{Read, Write};

use flate2::read::{DeflateDecoder, ZlibDecoder};
use flate2::write::{DeflateEncoder, ZlibEncoder};
use flate2::Compression;

use crate::codec::{read_variant, write_variant};
use crate::error::{Result, WireError};
use crate::variant::Variant;
use crate::wire::{WireReader, WireWriter};

/// First header word of every frame.
pub const MAGIC: u32 = 0x484913FF;

/// Format major version.  A reader refuses any other major.
pub const MAJOR_VERSION: u16 = 1;

/// Format minor version.  Carried in the header, never enforced.
pub const MINOR_VERSION: u16 = 1;

/// Fixed header length in bytes.
pub const HEADER_SIZE: usize = 12;

/// Header mode-word bit flags.
pub mod mode {
    /// Body is a deflate stream rather than plain encoded bytes.
    pub const COMPRESS: u32 = 0x01;
    /// The deflate stream carries the zlib header and checksum trailer.
    /// Meaningful only alongside [`COMPRESS`].
    pub const ZLIB_HEADER: u32 = 0x02;
    /// Producer-side proxy hint.  Carried through verbatim; this codec
    /// never sets or acts on it.
    pub const CREATE_PROXY: u32 = 0x04;
    /// Datetimes travel as millisecond ticks.  Always set by this encoder;
    /// the string-coded legacy form was never produced by any live writer.
    pub const DATETIME_AS_TICKS: u32 = 0x08;
}

// ── Encode ───────────────────────────────────────────────────────────────────

/// Knobs for [`encode_with_options`].
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Deflate the body.  On by default.
    pub compress:    bool,
    /// Wrap the deflate stream in a zlib header and checksum trailer.
    /// Ignored when `compress` is off.
    pub zlib_header: bool,
    /// Deflate effort, 0..=9.  Values above 9 are clamped.
    pub level:       u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions { compress: true, zlib_header: false, level: 6 }
    }
}

/// Frame one value with default options, toggling only compression.
pub fn encode(value: &Variant, compress: bool) -> Result<Vec<u8>> {
    encode_with_options(value, &EncodeOptions { compress, ..EncodeOptions::default() })
}

/// Frame one value: header, mode word, body.
pub fn encode_with_options(value: &Variant, opts: &EncodeOptions) -> Result<Vec<u8>> {
    let mut body = WireWriter::new();
    write_variant(&mut body, value)?;
    let body = body.into_bytes();

    let mut mode = mode::DATETIME_AS_TICKS;
    if opts.compress {
        mode |= mode::COMPRESS;
        if opts.zlib_header {
            mode |= mode::ZLIB_HEADER;
        }
    }

    let mut header = WireWriter::with_capacity(HEADER_SIZE + body.len());
    header.write_u32(MAGIC);
    header.write_u32(u32::from(MAJOR_VERSION) << 16 | u32::from(MINOR_VERSION));
    header.write_u32(mode);
    let out = header.into_bytes();

    if opts.compress {
        deflate_into(out, &body, opts)
    } else {
        let mut out = out;
        out.extend_from_slice(&body);
        Ok(out)
    }
}

fn deflate_into(out: Vec<u8>, body: &[u8], opts: &EncodeOptions) -> Result<Vec<u8>> {
    let level = Compression::new(opts.level.min(9));
    if opts.zlib_header {
        let mut enc = ZlibEncoder::new(out, level);
        enc.write_all(body).map_err(compress_failure)?;
        enc.finish().map_err(compress_failure)
    } else {
        let mut enc = DeflateEncoder::new(out, level);
        enc.write_all(body).map_err(compress_failure)?;
        enc.finish().map_err(compress_failure)
    }
}

fn compress_failure(e: std::io::Error) -> WireError {
    WireError::MalformedCompressedPayload(format!("deflate failed: {e}"))
}

// ── Decode ───────────────────────────────────────────────────────────────────

/// Parse one framed value.  Header checks run in field order, so a frame
/// with both a bad magic and a bad version reports the magic.
pub fn decode(bytes: &[u8]) -> Result<Variant> {
    let mut r = WireReader::new(bytes);

    let magic = r.read_u32()?;
    if magic != MAGIC {
        return Err(WireError::BadMagic { found: magic });
    }

    let version = r.read_u32()?;
    let major = (version >> 16) as u16;
    if major != MAJOR_VERSION {
        return Err(WireError::VersionMismatch { found: major });
    }

    let mode = r.read_u32()?;
    let body = r.rest();

    if mode & mode::COMPRESS != 0 {
        let inflated = inflate(body, mode & mode::ZLIB_HEADER != 0)?;
        read_variant(&mut WireReader::new(&inflated))
    } else {
        read_variant(&mut WireReader::new(body))
    }
}

fn inflate(body: &[u8], zlib_header: bool) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let res = if zlib_header {
        ZlibDecoder::new(body).read_to_end(&mut out)
    } else {
        DeflateDecoder::new(body).read_to_end(&mut out)
    };
    res.map_err(|e| WireError::MalformedCompressedPayload(e.to_string()))?;
    Ok(out)
}

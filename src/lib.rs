//! Codec for the protean tagged-variant binary wire format: a
//! self-describing tree of scalars, strings, containers, temporals, and
//! blobs inside a magic-framed, optionally deflated container.
//!
//! Encode with [`encode`] or [`encode_with_options`], decode with
//! [`decode`]; both move whole [`Variant`] trees and fail atomically with
//! a [`WireError`].

pub mod error;
pub mod variant;
pub mod registry;
pub mod wire;
pub mod codec;
pub mod frame;

pub use error::{Result, WireError};
pub use frame::{decode, encode, encode_with_options, EncodeOptions};
pub use variant::{ExceptionData, Variant};

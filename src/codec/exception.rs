//! Exception payloads.
//!
//! Four untagged strings back-to-back: type name, message, source, stack.
//! Absent fields travel as empty strings, so the shape is fixed at four
//! runs regardless of how much the thrower filled in.

use crate::codec::string;
use crate::error::Result;
use crate::variant::ExceptionData;
use crate::wire::{WireReader, WireWriter};

pub fn write_exception(w: &mut WireWriter, e: &ExceptionData) -> Result<()> {
    string::write_string(w, &e.type_name)?;
    string::write_string(w, &e.message)?;
    string::write_string(w, &e.source)?;
    string::write_string(w, &e.stack)?;
    Ok(())
}

pub fn read_exception(r: &mut WireReader) -> Result<ExceptionData> {
    Ok(ExceptionData {
        type_name: string::read_string(r)?,
        message:   string::read_string(r)?,
        source:    string::read_string(r)?,
        stack:     string::read_string(r)?,
    })
}

//! Parsing and single-line re-serialization of JSON documents.
//!
//! The text form uses `", "` between items and `": "` between a key and its
//! value. Strings are written with non-ASCII characters as-is; only quotes,
//! backslashes and control characters are escaped. Object keys keep document
//! order and numbers keep their literal text.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{Formatter, Serializer};

use crate::error::{Error, Result};

/// Single-line formatter with a space after every `,` and `:`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Parses a complete JSON document. Nesting depth is not limited; the stack
/// grows on demand while deserializing.
pub fn parse(text: &str) -> Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(Error::Parse)?;
    // Trailing non-whitespace after the document is an error.
    deserializer.end().map_err(Error::Parse)?;
    Ok(value)
}

/// UTF-8 bytes of the canonical text form of `value`.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buffer, SpacedFormatter);
    value.serialize(&mut serializer).map_err(Error::Serialize)?;
    log::debug!("[canonical_bytes] {} bytes", buffer.len());
    Ok(buffer)
}

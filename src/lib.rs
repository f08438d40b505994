pub mod canonical;
pub mod error;
pub mod logger;
pub mod source;

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;

pub use error::{Error, Result};

/// Picks the input path out of the process arguments (program name first).
///
/// Anything after the first positional argument is ignored. No file is
/// touched here.
pub fn input_path<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    match args.next() {
        Some(path) => Ok(PathBuf::from(path)),
        None => Err(Error::Usage { program }),
    }
}

/// Base64 (standard alphabet, padded) of the canonical text form of `value`.
pub fn encode_value(value: &Value) -> Result<String> {
    let bytes = canonical::canonical_bytes(value)?;
    let encoded = general_purpose::STANDARD.encode(&bytes);
    log::debug!("[encode_value] {} chars", encoded.len());
    Ok(encoded)
}

pub fn encode_str<T>(text: T) -> Result<String>
where
    T: AsRef<str>,
{
    encode_value(&canonical::parse(text.as_ref())?)
}

/// Reads, parses and encodes the JSON document at `path`.
pub fn encode_file<P>(path: P) -> Result<String>
where
    P: AsRef<Path>,
{
    encode_str(source::read_document(path.as_ref())?)
}

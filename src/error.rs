use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Usage: {program} <filename>")]
    Usage { program: String },
    #[error("cannot read '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON document")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize JSON value")]
    Serialize(#[source] serde_json::Error),
}

use std::{io, path::PathBuf};

/// Every way a reveal can fail. None of them are recoverable.
///
/// Messages name the failing stage only; the underlying cause is exposed
/// through `source()`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open {}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read lines")]
    Read(#[from] io::Error),

    #[error("no Base64-encoded content found")]
    PayloadNotFound,

    #[error("payload is not valid Base64")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error taxonomy shared by the feed decoder, the entities and the session.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure a caller may need to tell apart.
#[derive(Debug, Error)]
pub enum Error {
    /// The response object lacks a truthy `"ok"` marker.
    #[error("There was a problem with GV: {0}")]
    Validation(String),

    /// Credentials were rejected. Raised by session implementations.
    #[error("Login failed: {0}")]
    Login(String),

    /// The envelope could not be retrieved or scanned.
    #[error("Failed to parse feed envelope")]
    Parsing(#[source] ScanError),

    /// The embedded JSON buffer could not be deserialized.
    #[error("Failed to deserialize feed JSON")]
    Json(#[source] serde_json::Error),

    /// The message has no recording to download.
    #[error("Cannot download message {0}")]
    Download(String),

    /// An invalid forwarding number was supplied.
    #[error("Invalid forwarding number: {0}")]
    Forwarding(String),

    #[error(transparent)]
    Timestamp(#[from] chrono::ParseError),

    #[error(transparent)]
    Number(#[from] std::num::ParseIntError),

    #[error("Epoch time {0}ms is out of range")]
    OutOfRange(i64),
}

/// Why an envelope scan stopped.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("retrieval failed: {0}")]
    Retrieve(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("malformed markup: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unclosed element <{0}>")]
    Unclosed(String),

    #[error("undefined entity &{0};")]
    UnknownEntity(String),
}

impl From<ScanError> for Error {
    fn from(err: ScanError) -> Self {
        Error::Parsing(err)
    }
}

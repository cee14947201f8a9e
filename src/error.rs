//! Error types
//!
//! Every fallible operation in the library returns [`Result`]. Collection
//! listing is the one exception: it never fails, see
//! [`crate::resource::Listing`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be sent or the response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream API answered with a status above 299
    #[error("the upstream API returned the following status: {status}")]
    Upstream { status: u16 },

    /// The response body is not valid JSON or does not match the envelope
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The outgoing change-set could not be serialized
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl Error {
    /// HTTP status carried by an upstream error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error response from the gateway.
#[derive(Error, Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[error("{message}: {reason}")]
pub struct ErrorResponse {
    /// The status
    pub status: String,
    /// A message about the error
    #[serde(default)]
    pub message: String,
    /// The reason for the error
    #[serde(default)]
    pub reason: String,
    /// The error code
    pub code: u16,
}

/// Possible errors from this crate and from gateway interaction
#[derive(Error, Debug)]
pub enum Error {
    /// The gateway returned an error response
    #[error("api error: {0}")]
    Api(#[source] ErrorResponse),

    /// An http request could not be constructed
    #[error("failed to build request: {0}")]
    BuildRequest(#[source] http::Error),

    /// A resource body could not be serialized or a response parsed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A secret data payload could not be decoded
    #[error("secret data error: {0}")]
    SecretData(#[from] crate::secret_data::DecodeError),
}

//! Encoding helpers for Secret data payloads.
//!
//! The gateway serves Secret `data` maps with base64-encoded values; the
//! console works with the decoded form everywhere else.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::BTreeMap;
use thiserror::Error;

/// Failure to decode a Secret's data map
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A value was not valid base64
    #[error("secret key {key:?} is not valid base64")]
    Base64 {
        /// The offending data key
        key: String,
        /// The underlying decode error
        #[source]
        source: base64::DecodeError,
    },

    /// A decoded value was not valid UTF-8
    #[error("secret key {key:?} is not valid utf-8")]
    Utf8 {
        /// The offending data key
        key: String,
        /// The underlying conversion error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Encode a single plaintext value the way the gateway stores it
#[must_use]
pub fn encode_value(value: &str) -> String {
    STANDARD.encode(value)
}

/// Base64-encode every value of a plaintext data map
#[must_use]
pub fn encode_data(data: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    data.iter().map(|(k, v)| (k.clone(), encode_value(v))).collect()
}

/// Decode every value of a wire-form data map back to plaintext
///
/// Errors carry the offending key so the console can point at the broken
/// entry instead of discarding the whole secret.
pub fn decode_data(data: &BTreeMap<String, String>) -> Result<BTreeMap<String, String>, DecodeError> {
    data.iter()
        .map(|(k, v)| {
            let bytes = STANDARD.decode(v).map_err(|source| DecodeError::Base64 {
                key: k.clone(),
                source,
            })?;
            let value = String::from_utf8(bytes).map_err(|source| DecodeError::Utf8 {
                key: k.clone(),
                source,
            })?;
            Ok((k.clone(), value))
        })
        .collect()
}

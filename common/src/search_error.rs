//! Failure taxonomy for product search submissions.

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// The outbound search call did not produce a usable response.
///
/// Callers recover by keeping the previous result and logging this value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RequestFailed {
    /// Connection, TLS or body-read failure.
    #[error("search request could not be completed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("search endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a structured document.
    #[error("search response could not be decoded: {0}")]
    Decode(String),
}

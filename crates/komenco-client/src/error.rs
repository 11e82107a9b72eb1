//! Error types for the Komenco client.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur when executing a circuit remotely.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The circuit contains no measurement operations.
    ///
    /// Raised during request construction, before any network activity.
    #[error("there are no measurements done at the end of the circuit")]
    NoMeasurements,

    /// The HTTP request failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request or response body could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with an explicit error message.
    #[error("remote error: {0}")]
    Remote(String),

    /// The response parsed as JSON but lacks the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_measurements_display() {
        let err = ClientError::NoMeasurements;
        assert!(err.to_string().contains("no measurements"));
    }

    #[test]
    fn remote_message_passes_through() {
        let err = ClientError::Remote("boom".into());
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn malformed_response_display() {
        let err = ClientError::MalformedResponse("missing 'measurements'".into());
        assert!(err.to_string().contains("missing 'measurements'"));
    }
}

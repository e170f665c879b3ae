use thiserror::Error;

use crate::mode::Mode;

/// Errors raised while submitting a lookup.
///
/// The `Display` text is what ends up in the error banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The mode's required input field is absent.
    #[error("{}", .0.missing_input_message())]
    MissingInput(Mode),
    /// A request is already in flight for this controller.
    #[error("A request is already in progress")]
    Busy,
    /// The request could not be sent or its body could not be read.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("Service responded with {code} {text}")]
    Status { code: u16, text: String },
    /// The body was not a valid status document.
    #[error("Unable to decode response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_messages() {
        assert_eq!(
            QueryError::MissingInput(Mode::Coordinates).to_string(),
            "Missing coordinates"
        );
        assert_eq!(QueryError::MissingInput(Mode::City).to_string(), "Missing city");
        assert_eq!(
            QueryError::MissingInput(Mode::Station).to_string(),
            "Missing station ID"
        );
    }

    #[test]
    fn test_status_message() {
        let err = QueryError::Status {
            code: 500,
            text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Service responded with 500 Internal Server Error");
    }
}

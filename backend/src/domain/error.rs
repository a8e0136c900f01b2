//! Domain-level error type.
//!
//! The error is transport agnostic. The HTTP adapter decides the status code
//! and envelope; the domain only guarantees a non-empty, human-readable
//! message and a stable [`ErrorCode`] for logs.

use serde::{Serialize, Serializer};

use super::TraceId;

/// Stable machine-readable category describing why an aggregation run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The upstream users API could not be reached, timed out, or refused
    /// the request.
    UpstreamUnavailable,
    /// The upstream answered with a payload that does not decode into user
    /// records.
    UpstreamInvalidResponse,
    /// An unexpected failure inside the service.
    InternalError,
}

impl ErrorCode {
    /// Snake-case label used in structured logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::UpstreamInvalidResponse => "upstream_invalid_response",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
///
/// Serialises as `{"message": "..."}`; the code and trace identifier stay out
/// of the body.
///
/// # Examples
/// ```
/// use department_stats::domain::{Error, ErrorCode};
///
/// let err = Error::upstream_unavailable("connection refused");
/// assert_eq!(err.code(), ErrorCode::UpstreamUnavailable);
/// assert_eq!(err.to_string(), "connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

/// Validation errors emitted by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty or whitespace.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Create a new error, panicking if the message is blank.
    ///
    /// Use [`Error::try_new`] for messages that come from outside the crate.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    ///
    /// The trace identifier of the current request, if any, is captured.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier of the request that produced the error.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach an explicit trace identifier.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::UpstreamUnavailable`].
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamInvalidResponse`].
    pub fn upstream_invalid_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamInvalidResponse, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorBody {
            message: &self.message,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::upstream(Error::upstream_unavailable("down"), ErrorCode::UpstreamUnavailable)]
    #[case::decode(
        Error::upstream_invalid_response("garbled"),
        ErrorCode::UpstreamInvalidResponse
    )]
    #[case::internal(Error::internal("boom"), ErrorCode::InternalError)]
    fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn try_new_rejects_blank_messages(#[case] message: &str) {
        let result = Error::try_new(ErrorCode::InternalError, message);
        assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
    }

    #[test]
    fn serialises_message_only() {
        let error = Error::upstream_unavailable("Test error").with_trace_id("abc");
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(value, json!({ "message": "Test error" }));
    }

    #[test]
    fn display_is_the_message() {
        assert_eq!(Error::internal("boom").to_string(), "boom");
    }

    #[test]
    fn trace_id_is_absent_out_of_scope() {
        assert!(Error::internal("boom").trace_id().is_none());
    }

    #[tokio::test]
    async fn trace_id_is_captured_in_scope() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
            .parse()
            .expect("valid UUID");
        let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
        assert_eq!(error.trace_id(), Some("00000000-0000-0000-0000-000000000001"));
    }
}

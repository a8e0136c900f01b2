//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving handlers a
//! single JSON error envelope. Every aggregation failure is a
//! `500 Internal Server Error` with body `{"message": "..."}`; the request's
//! trace identifier is returned in the `trace-id` header.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned when a failure carries no recognisable error.
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::UpstreamUnavailable
        | ErrorCode::UpstreamInvalidResponse
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        error!(
            code = %self.code(),
            trace_id = self.trace_id().unwrap_or_default(),
            message = self.message(),
            "request failed"
        );
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the uniform
//! `{"success": false, "error": ...}` envelope and matching status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::envelope::Envelope;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Client message for JSON or form bodies that cannot be decoded.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        // Duplicate emails are reported as a plain bad request.
        ErrorCode::InvalidRequest | ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(Envelope::error(self.message()))
    }
}

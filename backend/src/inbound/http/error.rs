//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(error = %error, trace_id = ?error.trace_id(), "internal error redacted from response");
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
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

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    struct Rendered {
        status: StatusCode,
        trace_header: Option<String>,
        body: Value,
    }

    async fn render(error: &Error) -> Rendered {
        let response = ResponseError::error_response(error);
        let status = response.status();
        let trace_header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        Rendered {
            status,
            trace_header,
            body: serde_json::from_slice(&bytes).expect("error body is JSON"),
        }
    }

    #[rstest]
    #[case(Error::validation_failed("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(Error::conflict("taken"), StatusCode::CONFLICT)]
    #[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(ResponseError::status_code(&error), expected);
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted_but_keep_trace_id() {
        let error = Error::internal("database exploded: password=hunter2")
            .with_trace_id(TRACE_ID)
            .with_details(json!({ "secret": "x" }));

        let Rendered {
            status,
            trace_header,
            body,
        } = render(&error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(trace_header.as_deref(), Some(TRACE_ID));
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["code"], "internal_error");
        assert_eq!(body["traceId"], TRACE_ID);
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn validation_errors_keep_their_details() {
        let error = Error::validation_failed("request validation failed")
            .with_details(json!({ "errors": [{ "field": "email" }] }));

        let rendered = render(&error).await;
        let body = rendered.body;

        assert_eq!(rendered.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(rendered.trace_header.is_none());
        assert_eq!(body["code"], "validation_failed");
        assert_eq!(body["details"]["errors"][0]["field"], "email");
    }

    #[rstest]
    fn actix_errors_become_internal_errors() {
        let actix_error = actix_web::error::ErrorBadGateway("upstream");
        let error = Error::from(actix_error);
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert_eq!(error.message(), "Internal server error");
    }
}
